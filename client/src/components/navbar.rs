//! Top navigation bar.

use leptos::prelude::*;

/// Brand plus links to the list and form views.
#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <div class="navbar__brand">"📚 BookManager"</div>
            <ul class="navbar__links">
                <li>
                    <a class="navbar__link" href="/view">"View Books"</a>
                </li>
                <li>
                    <a class="navbar__link" href="/add">"Add Book"</a>
                </li>
            </ul>
        </nav>
    }
}
