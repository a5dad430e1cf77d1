//! Owner-only delete control shared by the record cards.

use leptos::prelude::*;

/// Disabled and relabelled while the delete for `id` is in flight.
#[component]
pub fn DeleteButton(
    id: i64,
    title: &'static str,
    #[prop(into)] pending: Signal<bool>,
    on_delete: Callback<i64>,
) -> impl IntoView {
    view! {
        <button
            class="card__delete"
            type="button"
            title=title
            aria-label=title
            disabled=move || pending.get()
            on:click=move |_| on_delete.run(id)
        >
            {move || if pending.get() { "Deleting..." } else { "Delete" }}
        </button>
    }
}
