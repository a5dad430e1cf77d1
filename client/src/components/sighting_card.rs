//! Card for one marine-life sighting.

use leptos::prelude::*;

use super::delete_button::DeleteButton;
use crate::net::types::Sighting;
use crate::util::format::{date_part, format_coordinates};

#[component]
pub fn SightingCard(
    sighting: Sighting,
    can_delete: bool,
    #[prop(into)] pending: Signal<bool>,
    on_delete: Callback<i64>,
) -> impl IntoView {
    let Sighting {
        id,
        species_name,
        species_type,
        location_name,
        latitude,
        longitude,
        date_spotted,
        time_spotted,
        group_size,
        behavior,
        notes,
        user_name,
        ..
    } = sighting;

    view! {
        <article class="card card--sighting" class:card--pending=move || pending.get()>
            <header class="card__header">
                <div>
                    <h3 class="card__title">{species_name}</h3>
                    <span class="badge">{species_type}</span>
                </div>
                {can_delete.then(|| view! { <DeleteButton id=id title="Delete sighting" pending=pending on_delete=on_delete/> })}
            </header>
            {location_name.map(|name| view! { <p class="card__row">{name}</p> })}
            {format_coordinates(latitude, longitude).map(|c| view! { <p class="card__row card__row--mono">{c}</p> })}
            <dl class="card__facts">
                <div>
                    <dt>"Date"</dt>
                    <dd>{date_part(&date_spotted).to_owned()}</dd>
                </div>
                {time_spotted.map(|t| view! { <div><dt>"Time"</dt><dd>{t}</dd></div> })}
            </dl>
            {(group_size > 1).then(|| view! { <p class="card__row">{format!("Group of {group_size}")}</p> })}
            {behavior.map(|b| view! { <blockquote class="card__note"><strong>"Behavior Observed"</strong><p>{b}</p></blockquote> })}
            {notes.map(|n| view! { <blockquote class="card__note card__note--muted"><p>{n}</p></blockquote> })}
            <footer class="card__footer">{format!("Reported by {}", user_name.unwrap_or_default())}</footer>
        </article>
    }
}
