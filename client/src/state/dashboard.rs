//! Dashboard aggregates: the user's contributions and community totals.
//!
//! Five requests go out concurrently and are joined. Any single failure
//! aborts the whole load; the dashboard does not render partial sections.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::net::storage::TokenStore;
use crate::net::transport::Transport;
use crate::net::types::{BeachReport, CommunityStats, ConservationAction, ListQuery, Sighting};

/// Number of community sightings shown under "Recent".
pub const RECENT_SIGHTINGS: u32 = 5;

/// Per-user record counts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Contributions {
    pub sightings: usize,
    pub reports: usize,
    pub actions: usize,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DashboardData {
    pub community: CommunityStats,
    pub mine: Contributions,
    pub recent: Vec<Sighting>,
}

/// Fetch everything the dashboard shows for `user_id`.
///
/// # Errors
///
/// Returns the first failing request's error; nothing partial is returned.
pub async fn load_dashboard<T: Transport, S: TokenStore>(
    api: &ApiClient<T, S>,
    user_id: i64,
) -> Result<DashboardData, ApiError> {
    let mine = ListQuery::by_user(user_id);
    let latest = ListQuery::latest(RECENT_SIGHTINGS);
    let (community, sightings, reports, actions, recent) = futures::try_join!(
        api.community_stats(),
        api.list::<Sighting>(&mine),
        api.list::<BeachReport>(&mine),
        api.list::<ConservationAction>(&mine),
        api.list::<Sighting>(&latest),
    )?;

    Ok(DashboardData {
        community,
        mine: Contributions { sightings: sightings.len(), reports: reports.len(), actions: actions.len() },
        recent,
    })
}
