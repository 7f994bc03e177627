//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::pages::home::HomePage;
use crate::state::{books::BooksState, form::FormState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the book list and the form draft so every route sees the same
/// view state. A full page reload starts both from scratch.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let books = RwSignal::new(BooksState::default());
    let form = RwSignal::new(FormState::default());

    provide_context(books);
    provide_context(form);

    view! {
        <Stylesheet id="leptos" href="/pkg/bookshelf.css"/>
        <Title text="BookManager"/>

        <Router>
            <Navbar/>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("view") view=HomePage/>
                    <Route path=StaticSegment("add") view=HomePage/>
                </Routes>
            </main>
        </Router>
    }
}
