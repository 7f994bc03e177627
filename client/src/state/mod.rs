//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`books` for the listed collection, `form` for
//! the draft) so components depend on small focused models. `coordinator`
//! drives both against the remote collection through the [`Store`] seam,
//! which is a reactive signal in the browser and a plain cell in tests.

pub mod books;
pub mod coordinator;
pub mod form;

use leptos::prelude::*;

/// Read/write access to one piece of view state.
pub trait Store<T> {
    /// Read without subscribing to changes.
    fn peek<R>(&self, f: impl FnOnce(&T) -> R) -> R;

    /// Mutate in place and notify subscribers.
    fn modify(&self, f: impl FnOnce(&mut T));
}

impl<T: Send + Sync + 'static> Store<T> for RwSignal<T> {
    fn peek<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        self.with_untracked(f)
    }

    fn modify(&self, f: impl FnOnce(&mut T)) {
        self.update(f);
    }
}
