//! Form drafts and submit-time coercion.
//!
//! Every form keeps its fields as raw strings while the user types. Coercion
//! happens once, when the draft is turned into a request:
//!
//! - blank or unparsable optional numbers become absent, never `0`;
//! - counts default to `1` when blank, unparsable, or zero;
//! - measures default to `0`;
//! - 1-5 ratings are clamped and default to `1`;
//! - blank optional text becomes absent.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use crate::net::types::{NewBeachReport, NewConservationAction, NewSighting, SignupRequest};

pub const MIN_PASSWORD_LEN: usize = 6;

/// Optional decimal: `None` for blank or unparsable input.
pub fn optional_f64(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Required count with a floor of one. Only the leading digits count, so
/// `"2.5"` is `2`.
pub fn count_or_one(raw: &str) -> u32 {
    let trimmed = raw.trim();
    let digits = trimmed.find(|c: char| !c.is_ascii_digit()).map_or(trimmed, |end| &trimmed[..end]);
    match digits.parse::<u32>() {
        Ok(0) | Err(_) => 1,
        Ok(n) => n,
    }
}

/// Required non-negative measure, `0.0` when blank or unparsable.
pub fn measure_or_zero(raw: &str) -> f64 {
    optional_f64(raw).filter(|v| *v >= 0.0).unwrap_or(0.0)
}

/// 1-5 rating, clamped; `1` when unparsable.
pub fn rating(raw: &str) -> u8 {
    raw.trim()
        .parse::<i64>()
        .map_or(1, |v| u8::try_from(v.clamp(1, 5)).unwrap_or(1))
}

/// Trimmed text, `None` when blank.
pub fn optional_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_owned()) }
}

fn required(raw: &str, message: &'static str) -> Result<String, &'static str> {
    optional_text(raw).ok_or(message)
}

// =============================================================================
// AUTH
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginDraft {
    pub email: String,
    pub password: String,
}

impl LoginDraft {
    /// Trimmed email and untouched password.
    ///
    /// # Errors
    ///
    /// Returns a display message when either field is blank.
    pub fn credentials(&self) -> Result<(String, String), &'static str> {
        let email = required(&self.email, "Enter your email and password.")?;
        if self.password.is_empty() {
            return Err("Enter your email and password.");
        }
        Ok((email, self.password.clone()))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupDraft {
    pub name: String,
    pub email: String,
    pub location: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupDraft {
    /// # Errors
    ///
    /// Rejects mismatched confirmation, short passwords, and blank name or
    /// email before anything is sent.
    pub fn request(&self) -> Result<SignupRequest, &'static str> {
        if self.password != self.confirm_password {
            return Err("Passwords do not match");
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err("Password must be at least 6 characters");
        }
        Ok(SignupRequest {
            name: required(&self.name, "Name is required")?,
            email: required(&self.email, "Email is required")?,
            password: self.password.clone(),
            location: optional_text(&self.location),
        })
    }
}

// =============================================================================
// RECORDS
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SightingDraft {
    pub species_name: String,
    pub species_type: String,
    pub location_name: String,
    pub latitude: String,
    pub longitude: String,
    pub date_spotted: String,
    pub time_spotted: String,
    pub group_size: String,
    pub behavior: String,
    pub notes: String,
}

impl SightingDraft {
    pub fn new(today: &str) -> Self {
        Self {
            species_name: String::new(),
            species_type: String::new(),
            location_name: String::new(),
            latitude: String::new(),
            longitude: String::new(),
            date_spotted: today.to_owned(),
            time_spotted: String::new(),
            group_size: "1".to_owned(),
            behavior: String::new(),
            notes: String::new(),
        }
    }

    /// # Errors
    ///
    /// Returns a display message when a required field is blank.
    pub fn submission(&self) -> Result<NewSighting, &'static str> {
        Ok(NewSighting {
            species_name: required(&self.species_name, "Species name is required")?,
            species_type: required(&self.species_type, "Select a species type")?,
            location_name: optional_text(&self.location_name),
            latitude: optional_f64(&self.latitude),
            longitude: optional_f64(&self.longitude),
            date_spotted: required(&self.date_spotted, "Date spotted is required")?,
            time_spotted: optional_text(&self.time_spotted),
            group_size: count_or_one(&self.group_size),
            behavior: optional_text(&self.behavior),
            notes: optional_text(&self.notes),
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BeachReportDraft {
    pub beach_name: String,
    pub latitude: String,
    pub longitude: String,
    pub water_quality: String,
    pub pollution_level: String,
    pub water_temp: String,
    pub wildlife_activity: String,
    pub weather_conditions: String,
    pub notes: String,
    pub report_date: String,
}

impl BeachReportDraft {
    pub fn new(today: &str) -> Self {
        Self {
            beach_name: String::new(),
            latitude: String::new(),
            longitude: String::new(),
            water_quality: "3".to_owned(),
            pollution_level: "3".to_owned(),
            water_temp: String::new(),
            wildlife_activity: String::new(),
            weather_conditions: String::new(),
            notes: String::new(),
            report_date: today.to_owned(),
        }
    }

    /// # Errors
    ///
    /// Returns a display message when a required field is blank.
    pub fn submission(&self) -> Result<NewBeachReport, &'static str> {
        Ok(NewBeachReport {
            beach_name: required(&self.beach_name, "Beach name is required")?,
            latitude: optional_f64(&self.latitude),
            longitude: optional_f64(&self.longitude),
            water_quality: rating(&self.water_quality),
            pollution_level: rating(&self.pollution_level),
            water_temp: optional_f64(&self.water_temp),
            wildlife_activity: optional_text(&self.wildlife_activity),
            weather_conditions: optional_text(&self.weather_conditions),
            notes: optional_text(&self.notes),
            report_date: required(&self.report_date, "Report date is required")?,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionDraft {
    pub action_type: String,
    pub title: String,
    pub description: String,
    pub location_name: String,
    pub latitude: String,
    pub longitude: String,
    pub participants: String,
    pub waste_collected: String,
    pub area_covered: String,
    pub date_completed: String,
}

impl ActionDraft {
    pub fn new(today: &str) -> Self {
        Self {
            action_type: String::new(),
            title: String::new(),
            description: String::new(),
            location_name: String::new(),
            latitude: String::new(),
            longitude: String::new(),
            participants: "1".to_owned(),
            waste_collected: "0".to_owned(),
            area_covered: "0".to_owned(),
            date_completed: today.to_owned(),
        }
    }

    /// # Errors
    ///
    /// Returns a display message when a required field is blank.
    pub fn submission(&self) -> Result<NewConservationAction, &'static str> {
        Ok(NewConservationAction {
            action_type: required(&self.action_type, "Select an action type")?,
            title: required(&self.title, "Title is required")?,
            description: optional_text(&self.description),
            location_name: optional_text(&self.location_name),
            latitude: optional_f64(&self.latitude),
            longitude: optional_f64(&self.longitude),
            participants: count_or_one(&self.participants),
            waste_collected: measure_or_zero(&self.waste_collected),
            area_covered: measure_or_zero(&self.area_covered),
            date_completed: required(&self.date_completed, "Date completed is required")?,
        })
    }
}
