//! Book form state: the draft and whether it creates or updates.
//!
//! DESIGN
//! ======
//! Edit mode is a sum type, so "editing" without an identifier cannot be
//! represented. The form only leaves `Edit` through a successful submit or
//! through deletion of the record being edited.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::net::types::{Book, BookDraft, BookField};

/// Whether submitting the form inserts a new record or replaces one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Create,
    /// Updating the record with this collaborator id.
    Edit(String),
}

impl FormMode {
    pub fn editing_id(&self) -> Option<&str> {
        match self {
            Self::Create => None,
            Self::Edit(id) => Some(id.as_str()),
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            Self::Create => "Add Book Details",
            Self::Edit(_) => "Update Book Details",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            Self::Create => "Add Book",
            Self::Edit(_) => "Update Book",
        }
    }
}

/// The call a submit turns into.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitRequest {
    Create(BookDraft),
    Update { id: String, draft: BookDraft },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    pub draft: BookDraft,
    pub mode: FormMode,
}

impl FormState {
    pub fn set_field(&mut self, field: BookField, value: String) {
        self.draft.set(field, value);
    }

    /// Load a listed record into the draft.
    ///
    /// A record without an id cannot be updated, so only its fields are
    /// copied and the form stays in `Create`.
    pub fn begin_edit(&mut self, book: &Book) {
        self.draft = BookDraft::from(book);
        self.mode = book.id.clone().map_or(FormMode::Create, FormMode::Edit);
    }

    /// Snapshot of what submitting right now would send.
    pub fn submit_request(&self) -> SubmitRequest {
        match &self.mode {
            FormMode::Create => SubmitRequest::Create(self.draft.clone()),
            FormMode::Edit(id) => SubmitRequest::Update { id: id.clone(), draft: self.draft.clone() },
        }
    }

    /// Empty every field and return to `Create`.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// The record `id` no longer exists; drop it if it is being edited.
    pub fn forget(&mut self, id: &str) {
        if self.mode.editing_id() == Some(id) {
            self.reset();
        }
    }
}
