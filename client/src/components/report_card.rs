//! Card for one beach condition report.

use leptos::prelude::*;

use super::delete_button::DeleteButton;
use crate::net::types::BeachReport;
use crate::util::catalog::quality_label;
use crate::util::format::{date_part, format_coordinates, format_score};

#[component]
pub fn ReportCard(
    report: BeachReport,
    can_delete: bool,
    #[prop(into)] pending: Signal<bool>,
    on_delete: Callback<i64>,
) -> impl IntoView {
    let BeachReport {
        id,
        beach_name,
        latitude,
        longitude,
        water_quality,
        pollution_level,
        water_temp,
        wildlife_activity,
        weather_conditions,
        notes,
        report_date,
        quality_score,
        user_name,
    } = report;

    view! {
        <article class="card card--report" class:card--pending=move || pending.get()>
            <header class="card__header">
                <div>
                    <h3 class="card__title">{beach_name}</h3>
                    {quality_score.map(|s| view! { <span class="badge">{format!("Overall: {}/5", format_score(Some(s)))}</span> })}
                </div>
                {can_delete.then(|| view! { <DeleteButton id=id title="Delete report" pending=pending on_delete=on_delete/> })}
            </header>
            {format_coordinates(latitude, longitude).map(|c| view! { <p class="card__row card__row--mono">{c}</p> })}
            <dl class="card__facts">
                <div>
                    <dt>"Water Quality"</dt>
                    <dd>{quality_label(water_quality)}</dd>
                </div>
                <div>
                    <dt>"Pollution"</dt>
                    <dd>{quality_label(pollution_level)}</dd>
                </div>
            </dl>
            {water_temp.map(|t| view! { <p class="card__row">{format!("Water Temp: {t}°C")}</p> })}
            {wildlife_activity.map(|w| view! { <p class="card__row">{format!("Wildlife: {w}")}</p> })}
            {weather_conditions.map(|w| view! { <p class="card__row">{w}</p> })}
            {notes.map(|n| view! { <blockquote class="card__note card__note--muted"><p>{n}</p></blockquote> })}
            <footer class="card__footer">
                <span>{format!("By {}", user_name.unwrap_or_default())}</span>
                <span>{date_part(&report_date).to_owned()}</span>
            </footer>
        </article>
    }
}
