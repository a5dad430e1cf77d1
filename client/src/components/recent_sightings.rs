//! Latest community sightings shown on the dashboard.

use leptos::prelude::*;

use crate::net::types::Sighting;
use crate::util::format::date_part;

#[component]
pub fn RecentSightings(sightings: Vec<Sighting>) -> impl IntoView {
    if sightings.is_empty() {
        return view! {
            <section class="recent-sightings">
                <h2>"Recent Community Sightings"</h2>
                <p class="empty-state">"No sightings yet. Make one!"</p>
            </section>
        }
        .into_any();
    }

    view! {
        <section class="recent-sightings">
            <div class="section-header">
                <h2>"Recent Community Sightings"</h2>
                <a class="btn btn--text" href="/sightings">"View All →"</a>
            </div>
            <ul class="recent-sightings__list">
                {sightings.into_iter().map(recent_item).collect_view()}
            </ul>
        </section>
    }
    .into_any()
}

fn recent_item(sighting: Sighting) -> impl IntoView {
    let location = sighting.location_name.unwrap_or_else(|| "Unknown location".to_owned());
    let author = sighting.user_name.unwrap_or_default();
    let date = date_part(&sighting.date_spotted).to_owned();
    view! {
        <li class="recent-sightings__item">
            <div class="recent-sightings__head">
                <h4>{sighting.species_name}</h4>
                <span class="badge">{sighting.species_type}</span>
            </div>
            <p class="recent-sightings__meta">{format!("{location} • {author} • {date}")}</p>
            {(sighting.group_size > 1).then(|| view! { <p>{format!("Group of {}", sighting.group_size)}</p> })}
            {sighting.behavior.map(|b| view! { <p>{format!("Behavior: {b}")}</p> })}
        </li>
    }
}
