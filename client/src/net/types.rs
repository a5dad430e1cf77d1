//! Wire DTOs for the WaveMinder REST backend.
//!
//! DESIGN
//! ======
//! Response types mirror the backend's JSON so serde decoding stays lossless.
//! Creation payloads (`New*`) are separate types: they carry only the fields
//! a form may submit, with optional fields serialized as `null` when absent.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// The signed-in user as returned by `GET /me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Registration fields for `POST /signup`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignupRequest {
    pub email: String,
    pub name: String,
    pub password: String,
    pub location: Option<String>,
}

/// Bearer token issued by `POST /login`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// A marine-life sighting.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sighting {
    pub id: i64,
    pub species_name: String,
    pub species_type: String,
    #[serde(default)]
    pub location_name: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    pub date_spotted: String,
    #[serde(default)]
    pub time_spotted: Option<String>,
    #[serde(default = "default_group_size")]
    pub group_size: u32,
    #[serde(default)]
    pub behavior: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub user_name: Option<String>,
}

fn default_group_size() -> u32 {
    1
}

/// Payload for `POST /sightings`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewSighting {
    pub species_name: String,
    pub species_type: String,
    pub location_name: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub date_spotted: String,
    pub time_spotted: Option<String>,
    pub group_size: u32,
    pub behavior: Option<String>,
    pub notes: Option<String>,
}

/// A beach condition report.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BeachReport {
    pub id: i64,
    pub beach_name: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    pub water_quality: u8,
    pub pollution_level: u8,
    #[serde(default)]
    pub water_temp: Option<f64>,
    #[serde(default)]
    pub wildlife_activity: Option<String>,
    #[serde(default)]
    pub weather_conditions: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    pub report_date: String,
    /// Backend-computed overall score, when the backend provides one.
    #[serde(default)]
    pub quality_score: Option<f64>,
    #[serde(default)]
    pub user_name: Option<String>,
}

/// Payload for `POST /beach-reports`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewBeachReport {
    pub beach_name: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub water_quality: u8,
    pub pollution_level: u8,
    pub water_temp: Option<f64>,
    pub wildlife_activity: Option<String>,
    pub weather_conditions: Option<String>,
    pub notes: Option<String>,
    pub report_date: String,
}

/// A logged conservation activity.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConservationAction {
    pub id: i64,
    pub action_type: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location_name: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    pub participants: u32,
    #[serde(default)]
    pub waste_collected: f64,
    #[serde(default)]
    pub area_covered: f64,
    pub date_completed: String,
    #[serde(default)]
    pub impact_score: Option<f64>,
    #[serde(default)]
    pub user_name: Option<String>,
}

/// Payload for `POST /conservation-actions`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewConservationAction {
    pub action_type: String,
    pub title: String,
    pub description: Option<String>,
    pub location_name: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub participants: u32,
    pub waste_collected: f64,
    pub area_covered: f64,
    pub date_completed: String,
}

/// Community-wide totals from `GET /stats/community`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CommunityStats {
    #[serde(default)]
    pub total_actions: u64,
    #[serde(default)]
    pub total_participants: u64,
    #[serde(default)]
    pub total_waste_kg: f64,
    #[serde(default)]
    pub total_area_sqm: f64,
    #[serde(default)]
    pub total_impact_score: Option<f64>,
    #[serde(default)]
    pub average_impact_score: Option<f64>,
}

/// Optional filters accepted by every collection endpoint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub user_id: Option<i64>,
    pub limit: Option<u32>,
}

impl ListQuery {
    /// Records owned by one user.
    pub fn by_user(user_id: i64) -> Self {
        Self { user_id: Some(user_id), limit: None }
    }

    /// The newest `limit` records across the community.
    pub fn latest(limit: u32) -> Self {
        Self { user_id: None, limit: Some(limit) }
    }

    pub(crate) fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(user_id) = self.user_id {
            pairs.push(("user_id", user_id.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        pairs
    }
}

/// A backend collection the client can list, create, and delete.
pub trait Record: DeserializeOwned + Clone {
    /// Creation payload posted to the collection.
    type Draft: Serialize;

    /// Collection path, e.g. `/sightings`.
    const PATH: &'static str;

    fn id(&self) -> i64;

    /// Display name of the user who submitted the record.
    fn submitted_by(&self) -> Option<&str>;

    /// Value the list view filters on, if the collection is filterable.
    fn category(&self) -> Option<&str> {
        None
    }
}

impl Record for Sighting {
    type Draft = NewSighting;
    const PATH: &'static str = "/sightings";

    fn id(&self) -> i64 {
        self.id
    }

    fn submitted_by(&self) -> Option<&str> {
        self.user_name.as_deref()
    }

    fn category(&self) -> Option<&str> {
        Some(&self.species_type)
    }
}

impl Record for BeachReport {
    type Draft = NewBeachReport;
    const PATH: &'static str = "/beach-reports";

    fn id(&self) -> i64 {
        self.id
    }

    fn submitted_by(&self) -> Option<&str> {
        self.user_name.as_deref()
    }
}

impl Record for ConservationAction {
    type Draft = NewConservationAction;
    const PATH: &'static str = "/conservation-actions";

    fn id(&self) -> i64 {
        self.id
    }

    fn submitted_by(&self) -> Option<&str> {
        self.user_name.as_deref()
    }

    fn category(&self) -> Option<&str> {
        Some(&self.action_type)
    }
}
