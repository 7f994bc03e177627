//! Create/update form for a single book.
//!
//! The heading and submit label follow `FormMode`; inputs are rendered from
//! `BookField::ALL` so field order, labels and input types live in one place.

use leptos::prelude::*;

use crate::net::types::BookField;
use crate::state::form::FormState;

/// Five-field book form bound to the shared `FormState`.
///
/// Keystrokes go out through `on_field`; pressing the submit button (or
/// Enter in any input) fires `on_submit` without any validation.
#[component]
pub fn BookForm(on_field: Callback<(BookField, String)>, on_submit: Callback<()>) -> impl IntoView {
    let form = expect_context::<RwSignal<FormState>>();

    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(());
    };

    view! {
        <form class="book-form" on:submit=handle_submit>
            <h2 class="book-form__heading">{move || form.with(|f| f.mode.heading())}</h2>
            <div class="book-form__grid">
                {BookField::ALL
                    .into_iter()
                    .map(move |field| {
                        view! {
                            <div class="book-form__field">
                                <label class="book-form__label" for=field.key()>
                                    {field.label()}
                                </label>
                                <input
                                    class="book-form__input"
                                    type=field.input_type()
                                    id=field.key()
                                    placeholder=field.key()
                                    prop:value=move || form.with(|f| f.draft.get(field).to_owned())
                                    on:input=move |ev| on_field.run((field, event_target_value(&ev)))
                                />
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
                <button class="btn btn--primary book-form__submit" type="submit">
                    {move || form.with(|f| f.mode.submit_label())}
                </button>
            </div>
        </form>
    }
}
