//! Single headline figure on the dashboard.

use leptos::prelude::*;

/// A titled value, optionally linking to the matching list page.
#[component]
pub fn StatsCard(
    title: &'static str,
    #[prop(into)] value: String,
    icon: &'static str,
    #[prop(optional)] href: Option<&'static str>,
) -> impl IntoView {
    let body = view! {
        <div class="stats-card__icon" aria-hidden="true">{icon}</div>
        <div class="stats-card__content">
            <h3>{title}</h3>
            <p class="stats-card__value">{value}</p>
        </div>
    };
    match href {
        Some(href) => view! { <a class="stats-card stats-card--link" href=href>{body}</a> }.into_any(),
        None => view! { <div class="stats-card">{body}</div> }.into_any(),
    }
}
