//! Display formatting for totals, coordinates, and dates.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Waste total in kilograms, one decimal.
pub fn format_kg(kg: f64) -> String {
    format!("{kg:.1} kg")
}

/// Area total in square metres, no decimals.
pub fn format_area(sqm: f64) -> String {
    format!("{sqm:.0} m²")
}

/// `lat, lon` to four decimals, or `None` unless both are present.
pub fn format_coordinates(latitude: Option<f64>, longitude: Option<f64>) -> Option<String> {
    match (latitude, longitude) {
        (Some(lat), Some(lon)) => Some(format!("{lat:.4}, {lon:.4}")),
        _ => None,
    }
}

/// Optional score rendered to one decimal, `"-"` when absent.
pub fn format_score(score: Option<f64>) -> String {
    score.map_or_else(|| "-".to_owned(), |s| format!("{s:.1}"))
}

/// Date part of an ISO-8601 timestamp (`2024-05-01T10:00:00` -> `2024-05-01`).
pub fn date_part(raw: &str) -> &str {
    raw.split_once('T').map_or(raw, |(date, _)| date)
}

/// Today's local date as `YYYY-MM-DD` for date inputs.
///
/// Empty off-browser; forms then require the user to pick a date.
pub fn today_iso() -> String {
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::new_0();
        iso_date(now.get_full_year(), now.get_month() + 1, now.get_date())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

pub(crate) fn iso_date(year: u32, month: u32, day: u32) -> String {
    format!("{year:04}-{month:02}-{day:02}")
}
