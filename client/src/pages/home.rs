//! Home page: the book form above the book table.
//!
//! SYSTEM CONTEXT
//! ==============
//! This page is the parent coordinator. It wires the shared `BooksState` and
//! `FormState` signals to a `BookCoordinator` over the HTTP client, fetches
//! the list once on mount, and turns component callbacks into coordinator
//! calls. Network work is spawned on the local executor and never awaited by
//! the UI.

use leptos::prelude::*;

use crate::components::book_form::BookForm;
use crate::components::book_table::BookTable;
use crate::net::api::HttpBooksApi;
use crate::net::types::{Book, BookField};
use crate::state::books::BooksState;
use crate::state::coordinator::BookCoordinator;
use crate::state::form::FormState;

type PageCoordinator = BookCoordinator<HttpBooksApi, RwSignal<BooksState>, RwSignal<FormState>>;

#[component]
pub fn HomePage() -> impl IntoView {
    let books = expect_context::<RwSignal<BooksState>>();
    let form = expect_context::<RwSignal<FormState>>();
    let coordinator: PageCoordinator = BookCoordinator::new(HttpBooksApi::from_config(), books, form);

    // Initial fetch. Effects only run in the browser.
    let on_mount = coordinator.clone();
    Effect::new(move || spawn_load(on_mount.clone()));

    let on_field = {
        let coordinator = coordinator.clone();
        Callback::new(move |(field, value): (BookField, String)| coordinator.set_field(field, value))
    };

    let on_submit = {
        let coordinator = coordinator.clone();
        Callback::new(move |()| spawn_submit(coordinator.clone()))
    };

    let on_edit = {
        let coordinator = coordinator.clone();
        Callback::new(move |book: Book| coordinator.edit(&book))
    };

    let on_delete = Callback::new(move |id: String| spawn_delete(coordinator.clone(), id));

    view! {
        <div class="home-page">
            <BookForm on_field=on_field on_submit=on_submit/>
            <BookTable on_edit=on_edit on_delete=on_delete/>
        </div>
    }
}

fn spawn_load(coordinator: PageCoordinator) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        coordinator.load().await;
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = coordinator;
}

fn spawn_submit(coordinator: PageCoordinator) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        coordinator.submit().await;
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = coordinator;
}

fn spawn_delete(coordinator: PageCoordinator, id: String) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        coordinator.delete(&id).await;
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (coordinator, id);
}
