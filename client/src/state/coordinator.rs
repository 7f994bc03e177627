//! Synchronization between the local view state and the remote collection.
//!
//! SYSTEM CONTEXT
//! ==============
//! The home page owns one `BookCoordinator` wired to the `BooksState` and
//! `FormState` signals. Components call into it; it performs the HTTP call,
//! then reloads the whole list rather than patching it.
//!
//! ERROR HANDLING
//! ==============
//! Every `ApiError` is logged with `log::error!` and swallowed. A failed call
//! never touches view state: the list stays stale and the draft stays filled.

#[cfg(test)]
#[path = "coordinator_test.rs"]
mod coordinator_test;

use super::books::BooksState;
use super::form::{FormState, SubmitRequest};
use super::Store;
use crate::net::api::BooksApi;
use crate::net::types::{Book, BookField};

/// Drives list and form state against a [`BooksApi`].
#[derive(Clone, Debug)]
pub struct BookCoordinator<A, B, F> {
    api: A,
    books: B,
    form: F,
}

impl<A, B, F> BookCoordinator<A, B, F>
where
    A: BooksApi,
    B: Store<BooksState>,
    F: Store<FormState>,
{
    pub fn new(api: A, books: B, form: F) -> Self {
        Self { api, books, form }
    }

    /// Fetch the full collection and replace the local list with it.
    ///
    /// Returns `false` (after logging) when the fetch fails; the list is then
    /// left exactly as it was.
    pub async fn load(&self) -> bool {
        match self.api.list().await {
            Ok(items) => {
                log::debug!("loaded {} books", items.len());
                self.books.modify(|s| s.replace(items));
                true
            }
            Err(e) => {
                log::error!("Error fetching books: {e}");
                false
            }
        }
    }

    /// Send the current draft as an insert (`Create`) or update (`Edit`).
    ///
    /// On success the form resets to an empty `Create` and the list reloads.
    /// On failure nothing changes, so the user can submit again.
    pub async fn submit(&self) -> bool {
        let request = self.form.peek(FormState::submit_request);
        let result = match &request {
            SubmitRequest::Create(draft) => self.api.create(draft).await,
            SubmitRequest::Update { id, draft } => self.api.update(id, draft).await,
        };
        if let Err(e) = result {
            log::error!("Error submitting book: {e}");
            return false;
        }
        self.form.modify(FormState::reset);
        self.load().await;
        true
    }

    /// Remove a record remotely, then reload whatever the outcome.
    ///
    /// A successful delete of the record currently open in the form also
    /// resets the form, since that id can no longer be updated.
    pub async fn delete(&self, id: &str) {
        match self.api.delete(id).await {
            Ok(()) => self.form.modify(|f| f.forget(id)),
            Err(e) => log::error!("Error deleting book: {e}"),
        }
        self.load().await;
    }

    /// Copy a listed record into the form for editing.
    pub fn edit(&self, book: &Book) {
        self.form.modify(|f| f.begin_edit(book));
    }

    pub fn set_field(&self, field: BookField, value: String) {
        self.form.modify(|f| f.set_field(field, value));
    }
}
