//! Category filter chips for list pages.

use leptos::prelude::*;

use crate::state::records::Filter;

/// "All (n)" followed by one chip per facet. `label` maps a raw category to
/// its display text.
#[component]
pub fn FilterBar(
    #[prop(into)] facets: Signal<Vec<(String, usize)>>,
    #[prop(into)] total: Signal<usize>,
    #[prop(into)] active: Signal<Filter>,
    on_select: Callback<Filter>,
    #[prop(default = str::to_owned)] label: fn(&str) -> String,
) -> impl IntoView {
    view! {
        <div class="filter-bar" role="group" aria-label="Filter">
            <button
                type="button"
                class="chip"
                class:chip--active=move || active.get() == Filter::All
                on:click=move |_| on_select.run(Filter::All)
            >
                {move || format!("All ({})", total.get())}
            </button>
            <For
                each=move || facets.get()
                key=|(category, count)| (category.clone(), *count)
                children=move |(category, count)| {
                    let filter = Filter::Only(category.clone());
                    let chosen = filter.clone();
                    view! {
                        <button
                            type="button"
                            class="chip"
                            class:chip--active=move || active.get() == filter
                            on:click=move |_| on_select.run(chosen.clone())
                        >
                            {format!("{} ({count})", label(&category))}
                        </button>
                    }
                }
            />
        </div>
    }
}
