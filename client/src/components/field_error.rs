//! Inline validation message under a form input.

use leptos::prelude::*;

/// Renders `message` as an alert when present.
#[component]
pub fn FieldError(#[prop(into)] message: Signal<Option<&'static str>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <p role="alert" class="form-error">{move || message.get().unwrap_or_default()}</p>
        </Show>
    }
}
