//! Title bar shared by list and form pages.

use leptos::prelude::*;

#[component]
pub fn PageHeader(
    title: &'static str,
    #[prop(optional)] subtitle: &'static str,
    back_href: &'static str,
    #[prop(default = "Back")] back_label: &'static str,
    #[prop(optional)] action: Option<(&'static str, &'static str)>,
) -> impl IntoView {
    view! {
        <header class="page-header">
            <div class="page-header__titles">
                <h1>{title}</h1>
                {(!subtitle.is_empty()).then(|| view! { <p class="page-header__subtitle">{subtitle}</p> })}
            </div>
            <nav class="page-header__actions">
                <a class="btn btn--ghost" href=back_href>{back_label}</a>
                {action.map(|(href, label)| view! { <a class="btn btn--primary" href=href>{label}</a> })}
            </nav>
        </header>
    }
}
