//! Wire DTOs for the remote books collection.
//!
//! DESIGN
//! ======
//! `Book` is what the collaborator returns; `BookDraft` is exactly the JSON
//! body sent on create/update. Decoding is lenient (missing fields default,
//! numeric prices become text) because the collaborator declares no schema.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// A persisted book record as listed by `GET /api/books`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Collaborator-assigned identifier. Absent until persisted.
    #[serde(rename = "_id", alias = "id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    /// Selling price kept as text; the collaborator may send a number.
    #[serde(default, deserialize_with = "deserialize_text_from_scalar")]
    pub price: String,
    /// Publish date as the collaborator stores it, no timezone handling.
    #[serde(default)]
    pub date: String,
}

/// The five writable fields of a book, sent as-is on create and update.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookDraft {
    pub name: String,
    pub title: String,
    pub author: String,
    pub price: String,
    pub date: String,
}

impl BookDraft {
    /// Current value of one field.
    pub fn get(&self, field: BookField) -> &str {
        match field {
            BookField::Name => &self.name,
            BookField::Title => &self.title,
            BookField::Author => &self.author,
            BookField::Price => &self.price,
            BookField::Date => &self.date,
        }
    }

    /// Overwrite one field with user input. No validation.
    pub fn set(&mut self, field: BookField, value: String) {
        match field {
            BookField::Name => self.name = value,
            BookField::Title => self.title = value,
            BookField::Author => self.author = value,
            BookField::Price => self.price = value,
            BookField::Date => self.date = value,
        }
    }
}

impl From<&Book> for BookDraft {
    fn from(book: &Book) -> Self {
        Self {
            name: book.name.clone(),
            title: book.title.clone(),
            author: book.author.clone(),
            price: book.price.clone(),
            date: book.date.clone(),
        }
    }
}

/// Form fields in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BookField {
    Name,
    Title,
    Author,
    Price,
    Date,
}

impl BookField {
    pub const ALL: [Self; 5] = [Self::Name, Self::Title, Self::Author, Self::Price, Self::Date];

    /// JSON key, input id, and placeholder text.
    pub fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Title => "title",
            Self::Author => "author",
            Self::Price => "price",
            Self::Date => "date",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Book Name",
            Self::Title => "Book Title",
            Self::Author => "Book Author",
            Self::Price => "Selling Price",
            Self::Date => "Publish Date",
        }
    }

    /// HTML input type; only the publish date gets a date picker.
    pub fn input_type(self) -> &'static str {
        match self {
            Self::Date => "date",
            _ => "text",
        }
    }
}

fn deserialize_text_from_scalar<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(text) => Ok(text),
        serde_json::Value::Number(number) => Ok(number.to_string()),
        serde_json::Value::Null => Ok(String::new()),
        _ => Err(D::Error::custom("expected string or number")),
    }
}
