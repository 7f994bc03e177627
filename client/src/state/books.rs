//! Book-list state mirrored from the remote collection.
//!
//! The list is a cache of the collaborator as of the last fetch. It is never
//! patched locally; every mutation is followed by a full reload.

#[cfg(test)]
#[path = "books_test.rs"]
mod books_test;

use crate::net::types::Book;

/// Listed books in collaborator order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BooksState {
    pub items: Vec<Book>,
}

impl BooksState {
    /// Replace the list wholesale with a fresh fetch, keeping its order.
    pub fn replace(&mut self, items: Vec<Book>) {
        self.items = items;
    }
}
