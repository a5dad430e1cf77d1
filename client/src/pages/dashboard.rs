//! Authenticated landing page: contributions, community impact, and the
//! latest community sightings.
//!
//! SYSTEM CONTEXT
//! ==============
//! All five dashboard requests are joined in `state::dashboard`. A failure is
//! logged and leaves every section empty rather than rendering a partial view.

use leptos::prelude::*;

use crate::components::recent_sightings::RecentSightings;
use crate::components::stats_card::StatsCard;
use crate::state::dashboard::DashboardData;
use crate::state::session::SessionContext;
use crate::util::format::{format_area, format_kg};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let state = session.state;
    let data = RwSignal::new(None::<DashboardData>);
    let loading = RwSignal::new(true);

    #[cfg(feature = "hydrate")]
    {
        if let Some(user) = session.user() {
            let api = session.api().clone();
            leptos::task::spawn_local(async move {
                match crate::state::dashboard::load_dashboard(&api, user.id).await {
                    Ok(loaded) => data.set(Some(loaded)),
                    Err(e) => leptos::logging::warn!("dashboard load failed: {e}"),
                }
                loading.set(false);
            });
        }
    }

    let greeting = move || state.with(|s| s.user.as_ref().map(|u| format!("Welcome, {}!", u.name)));
    let on_logout = {
        let session = session.clone();
        move |_| session.logout()
    };

    view! {
        <div class="dashboard">
            <header class="dashboard__header">
                <h1>"🌊 WaveMinder"</h1>
                <div class="dashboard__account">
                    <span class="dashboard__greeting">{greeting}</span>
                    <button class="btn btn--ghost" type="button" on:click=on_logout>
                        "Logout"
                    </button>
                </div>
            </header>
            <Show when=move || !loading.get() fallback=|| view! { <div class="loading-screen">"Loading..."</div> }>
                <main class="dashboard__content">
                    <nav class="quick-actions">
                        <a class="btn btn--primary" href="/sightings/new">"+ Log Sighting"</a>
                        <a class="btn btn--primary" href="/reports/new">"+ Beach Report"</a>
                        <a class="btn btn--primary" href="/actions/new">"+ Conservation Action"</a>
                    </nav>
                    {move || data.get().map(dashboard_sections)}
                </main>
            </Show>
        </div>
    }
}

fn dashboard_sections(data: DashboardData) -> impl IntoView {
    let DashboardData { community, mine, recent } = data;
    view! {
        <section class="stats-section">
            <h2>"Your Contributions"</h2>
            <div class="stats-grid">
                <StatsCard title="Marine Sightings" value=mine.sightings.to_string() icon="🐋" href="/sightings"/>
                <StatsCard title="Beach Reports" value=mine.reports.to_string() icon="🏖️" href="/reports"/>
                <StatsCard title="Conservation Actions" value=mine.actions.to_string() icon="♻️" href="/actions"/>
            </div>
        </section>
        <section class="stats-section">
            <h2>"Community Impact"</h2>
            <div class="stats-grid">
                <StatsCard title="Total Actions" value=community.total_actions.to_string() icon="🌟"/>
                <StatsCard title="Participants" value=community.total_participants.to_string() icon="👥"/>
                <StatsCard title="Waste Collected" value=format_kg(community.total_waste_kg) icon="🗑️"/>
                <StatsCard title="Area Covered" value=format_area(community.total_area_sqm) icon="📏"/>
            </div>
        </section>
        <RecentSightings sightings=recent/>
    }
}
