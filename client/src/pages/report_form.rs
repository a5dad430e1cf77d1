//! New beach report form.

use leptos::prelude::*;

use super::record_list::submit_handler;
use crate::components::error_banner::ErrorBanner;
use crate::components::field::{SelectField, TextAreaField, TextField, bind};
use crate::components::page_header::PageHeader;
use crate::net::error::ErrorMessage;
use crate::net::types::BeachReport;
use crate::util::catalog::{QUALITY_SCALE, WILDLIFE_ACTIVITY_LEVELS};
use crate::util::format::today_iso;
use crate::util::forms::BeachReportDraft;

#[component]
pub fn ReportFormPage() -> impl IntoView {
    let draft = RwSignal::new(BeachReportDraft::new(&today_iso()));
    let error = RwSignal::new(None::<ErrorMessage>);
    let busy = RwSignal::new(false);
    let on_submit = submit_handler::<BeachReport, _>(draft, BeachReportDraft::submission, error, busy, "/reports");

    view! {
        <div class="form-page form-page--reports">
            <PageHeader title="Create Beach Report" back_href="/reports" back_label="Cancel"/>
            <main class="form-page__body">
                <ErrorBanner error=error/>
                <form class="record-form" on:submit=on_submit>
                    <TextField
                        label="Beach Name"
                        placeholder="e.g., La Jolla Shores"
                        required=true
                        binding=bind!(draft, beach_name)
                    />
                    <div class="record-form__row">
                        <TextField
                            label="Latitude"
                            kind="number"
                            step="0.000001"
                            placeholder="32.8509"
                            binding=bind!(draft, latitude)
                        />
                        <TextField
                            label="Longitude"
                            kind="number"
                            step="0.000001"
                            placeholder="-117.2713"
                            binding=bind!(draft, longitude)
                        />
                    </div>
                    <div class="record-form__row">
                        <SelectField
                            label="Water Quality (1-5)"
                            options=QUALITY_SCALE
                            required=true
                            binding=bind!(draft, water_quality)
                        />
                        <SelectField
                            label="Pollution Level (1-5)"
                            options=QUALITY_SCALE
                            required=true
                            binding=bind!(draft, pollution_level)
                        />
                    </div>
                    <div class="record-form__row">
                        <TextField
                            label="Water Temp (°C)"
                            kind="number"
                            step="0.1"
                            placeholder="e.g., 18.5"
                            binding=bind!(draft, water_temp)
                        />
                        <SelectField
                            label="Wildlife Activity"
                            options=WILDLIFE_ACTIVITY_LEVELS
                            prompt="Select level"
                            binding=bind!(draft, wildlife_activity)
                        />
                    </div>
                    <TextField
                        label="Weather Conditions"
                        placeholder="e.g., Sunny, light breeze"
                        binding=bind!(draft, weather_conditions)
                    />
                    <TextField label="Report Date" kind="date" required=true binding=bind!(draft, report_date)/>
                    <TextAreaField label="Notes" binding=bind!(draft, notes)/>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Saving..." } else { "Submit Report" }}
                    </button>
                </form>
            </main>
        </div>
    }
}
