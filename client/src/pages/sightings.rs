//! Community sightings list with species-type filter.

use leptos::prelude::*;

use super::record_list::{delete_handler, mount_list, viewer_name};
use crate::components::error_banner::ErrorBanner;
use crate::components::filter_bar::FilterBar;
use crate::components::page_header::PageHeader;
use crate::components::sighting_card::SightingCard;
use crate::net::types::Sighting;
use crate::state::records::{Filter, is_owner};

#[component]
pub fn SightingsPage() -> impl IntoView {
    let list = mount_list::<Sighting>();
    let on_delete = delete_handler(list, "Are you sure you want to delete this sighting?");
    let viewer = viewer_name();

    view! {
        <div class="list-page list-page--sightings">
            <PageHeader
                title="Marine Sightings"
                subtitle="Community marine life observations"
                back_href="/dashboard"
                action=("/sightings/new", "New Sighting")
            />
            <main class="list-page__body">
                <ErrorBanner error=Signal::derive(move || list.with(|l| l.error.clone()))/>
                <Show
                    when=move || !list.with(|l| l.loading)
                    fallback=|| view! { <div class="loading-screen">"Loading marine sightings..."</div> }
                >
                    <p class="list-page__total">{move || format!("Total Sightings: {}", list.with(|l| l.items.len()))}</p>
                    <FilterBar
                        facets=Signal::derive(move || list.with(|l| l.facets()))
                        total=Signal::derive(move || list.with(|l| l.items.len()))
                        active=Signal::derive(move || list.with(|l| l.filter.clone()))
                        on_select=Callback::new(move |filter: Filter| list.update(|l| l.set_filter(filter)))
                    />
                    <Show
                        when=move || list.with(|l| !l.visible().is_empty())
                        fallback=|| {
                            view! {
                                <div class="empty-state">
                                    <h3>"No Sightings Yet"</h3>
                                    <p>"Be the first to log a marine life encounter!"</p>
                                    <a class="btn btn--primary" href="/sightings/new">"Log First Sighting"</a>
                                </div>
                            }
                        }
                    >
                        <div class="card-grid">
                            <For
                                each=move || list.with(|l| l.visible())
                                key=|sighting| sighting.id
                                children=move |sighting| {
                                    let id = sighting.id;
                                    let can_delete = viewer.with_untracked(|v| is_owner(v.as_deref(), sighting.user_name.as_deref()));
                                    view! {
                                        <SightingCard
                                            sighting=sighting
                                            can_delete=can_delete
                                            pending=Signal::derive(move || list.with(|l| l.is_pending(id)))
                                            on_delete=on_delete
                                        />
                                    }
                                }
                            />
                        </div>
                    </Show>
                </Show>
            </main>
        </div>
    }
}
