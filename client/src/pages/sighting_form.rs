//! New sighting form.

use leptos::prelude::*;

use super::record_list::submit_handler;
use crate::components::error_banner::ErrorBanner;
use crate::components::field::{SelectField, TextAreaField, TextField, bind};
use crate::components::page_header::PageHeader;
use crate::net::error::ErrorMessage;
use crate::net::types::Sighting;
use crate::util::catalog::SPECIES_TYPES;
use crate::util::format::today_iso;
use crate::util::forms::SightingDraft;

#[component]
pub fn SightingFormPage() -> impl IntoView {
    let draft = RwSignal::new(SightingDraft::new(&today_iso()));
    let error = RwSignal::new(None::<ErrorMessage>);
    let busy = RwSignal::new(false);
    let on_submit = submit_handler::<Sighting, _>(draft, SightingDraft::submission, error, busy, "/sightings");

    view! {
        <div class="form-page form-page--sightings">
            <PageHeader title="Log Marine Sighting" back_href="/sightings" back_label="Cancel"/>
            <main class="form-page__body">
                <ErrorBanner error=error/>
                <form class="record-form" on:submit=on_submit>
                    <TextField
                        label="Species Name"
                        placeholder="e.g., Gray Whale"
                        required=true
                        binding=bind!(draft, species_name)
                    />
                    <SelectField
                        label="Species Type"
                        options=SPECIES_TYPES
                        prompt="Select type"
                        required=true
                        binding=bind!(draft, species_type)
                    />
                    <TextField label="Location" placeholder="e.g., La Jolla Cove" binding=bind!(draft, location_name)/>
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
                        <TextField label="Date Spotted" kind="date" required=true binding=bind!(draft, date_spotted)/>
                        <TextField label="Time Spotted" kind="time" binding=bind!(draft, time_spotted)/>
                        <TextField label="Group Size" kind="number" min="1" binding=bind!(draft, group_size)/>
                    </div>
                    <TextAreaField
                        label="Behavior"
                        placeholder="Feeding, breaching, traveling..."
                        binding=bind!(draft, behavior)
                    />
                    <TextAreaField label="Notes" binding=bind!(draft, notes)/>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Saving..." } else { "Log Sighting" }}
                    </button>
                </form>
            </main>
        </div>
    }
}
