//! Book list table with per-row edit and delete actions.
//!
//! DESIGN
//! ======
//! Row layout is computed by `table_rows` as plain data and rendered
//! afterwards, so the empty-placeholder and striping rules are testable
//! without a DOM.

#[cfg(test)]
#[path = "book_table_test.rs"]
mod book_table_test;

use leptos::prelude::*;

use crate::net::types::Book;
use crate::state::books::BooksState;

/// Column headers, left to right.
pub const COLUMNS: [&str; 6] = ["Book Name", "Book Title", "Author", "Selling Price", "Publish Date", "Actions"];

/// Text of the single row shown when the list is empty.
pub const EMPTY_MESSAGE: &str = "No books found.";

/// One rendered `<tr>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TableRow {
    Placeholder,
    Book { key: String, index: usize, book: Book },
}

/// Rows for a list snapshot: one per book in order, or a lone placeholder.
pub fn table_rows(books: &[Book]) -> Vec<TableRow> {
    if books.is_empty() {
        return vec![TableRow::Placeholder];
    }
    books
        .iter()
        .enumerate()
        .map(|(index, book)| TableRow::Book { key: row_key(book, index), index, book: book.clone() })
        .collect()
}

/// Record id, or the row position for records the collaborator sent without one.
pub fn row_key(book: &Book, index: usize) -> String {
    book.id.clone().unwrap_or_else(|| index.to_string())
}

/// Only persisted records can be deleted; rows without an id get a disabled button.
pub fn can_delete(book: &Book) -> bool {
    book.id.is_some()
}

/// Odd rows are striped.
pub fn row_class(index: usize) -> &'static str {
    if index % 2 == 1 { "book-table__row book-table__row--striped" } else { "book-table__row" }
}

pub fn format_price(price: &str) -> String {
    format!("₹{price}")
}

/// Table over the shared `BooksState`.
#[component]
pub fn BookTable(on_edit: Callback<Book>, on_delete: Callback<String>) -> impl IntoView {
    let books = expect_context::<RwSignal<BooksState>>();

    view! {
        <div class="book-table">
            <table class="book-table__table">
                <thead>
                    <tr class="book-table__head">
                        {COLUMNS.into_iter().map(|title| view! { <th>{title}</th> }).collect::<Vec<_>>()}
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        books
                            .with(|s| table_rows(&s.items))
                            .into_iter()
                            .map(|row| render_row(row, on_edit, on_delete))
                            .collect::<Vec<_>>()
                    }}
                </tbody>
            </table>
        </div>
    }
}

fn render_row(row: TableRow, on_edit: Callback<Book>, on_delete: Callback<String>) -> AnyView {
    match row {
        TableRow::Placeholder => view! {
            <tr>
                <td class="book-table__empty" colspan=COLUMNS.len().to_string()>
                    {EMPTY_MESSAGE}
                </td>
            </tr>
        }
        .into_any(),
        TableRow::Book { key, index, book } => {
            let deletable = can_delete(&book);
            let id = book.id.clone();
            let price = format_price(&book.price);
            let Book { name, title, author, date, .. } = book.clone();
            view! {
                <tr class=row_class(index) data-key=key>
                    <td>{name}</td>
                    <td>{title}</td>
                    <td>{author}</td>
                    <td>{price}</td>
                    <td>{date}</td>
                    <td class="book-table__actions">
                        <button class="btn btn--primary" on:click=move |_| on_edit.run(book.clone())>
                            "Edit"
                        </button>
                        <button
                            class="btn btn--danger"
                            title="Delete"
                            disabled=!deletable
                            on:click=move |_| {
                                if let Some(id) = id.clone() {
                                    on_delete.run(id);
                                }
                            }
                        >
                            "Delete"
                        </button>
                    </td>
                </tr>
            }
            .into_any()
        }
    }
}
