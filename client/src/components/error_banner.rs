//! Inline error display for normalized backend messages.

use leptos::prelude::*;

use crate::net::error::ErrorMessage;

/// Shows nothing when `error` is `None`; validation lists render as bullets.
#[component]
pub fn ErrorBanner(#[prop(into)] error: Signal<Option<ErrorMessage>>) -> impl IntoView {
    move || {
        error.get().map(|message| match message {
            ErrorMessage::Text(text) => view! { <div class="error-banner" role="alert">{text}</div> }.into_any(),
            ErrorMessage::List(lines) => view! {
                <div class="error-banner" role="alert">
                    <ul class="error-banner__list">
                        {lines.into_iter().map(|line| view! { <li>{line}</li> }).collect_view()}
                    </ul>
                </div>
            }
            .into_any(),
        })
    }
}
