//! New conservation action form.

use leptos::prelude::*;

use super::record_list::submit_handler;
use crate::components::error_banner::ErrorBanner;
use crate::components::field::{SelectField, TextAreaField, TextField, bind};
use crate::components::page_header::PageHeader;
use crate::net::error::ErrorMessage;
use crate::net::types::ConservationAction;
use crate::util::catalog::ACTION_TYPES;
use crate::util::format::today_iso;
use crate::util::forms::ActionDraft;

#[component]
pub fn ActionFormPage() -> impl IntoView {
    let draft = RwSignal::new(ActionDraft::new(&today_iso()));
    let error = RwSignal::new(None::<ErrorMessage>);
    let busy = RwSignal::new(false);
    let on_submit = submit_handler::<ConservationAction, _>(draft, ActionDraft::submission, error, busy, "/actions");

    view! {
        <div class="form-page form-page--actions">
            <PageHeader title="Log Conservation Action" back_href="/actions" back_label="Cancel"/>
            <main class="form-page__body">
                <ErrorBanner error=error/>
                <form class="record-form" on:submit=on_submit>
                    <SelectField
                        label="Action Type"
                        options=ACTION_TYPES
                        prompt="Select type"
                        required=true
                        binding=bind!(draft, action_type)
                    />
                    <TextField
                        label="Title"
                        placeholder="e.g., Sunday beach cleanup"
                        required=true
                        binding=bind!(draft, title)
                    />
                    <TextAreaField label="Description" binding=bind!(draft, description)/>
                    <TextField label="Location" placeholder="e.g., Ocean Beach" binding=bind!(draft, location_name)/>
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
                        <TextField label="Participants" kind="number" min="1" binding=bind!(draft, participants)/>
                        <TextField
                            label="Waste Collected (kg)"
                            kind="number"
                            step="0.1"
                            min="0"
                            binding=bind!(draft, waste_collected)
                        />
                        <TextField
                            label="Area Covered (m²)"
                            kind="number"
                            step="1"
                            min="0"
                            binding=bind!(draft, area_covered)
                        />
                    </div>
                    <TextField label="Date Completed" kind="date" required=true binding=bind!(draft, date_completed)/>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Saving..." } else { "Log Action" }}
                    </button>
                </form>
            </main>
        </div>
    }
}
