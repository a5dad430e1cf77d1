//! Beach condition reports list. Reports have no category filter.

use leptos::prelude::*;

use super::record_list::{delete_handler, mount_list, viewer_name};
use crate::components::error_banner::ErrorBanner;
use crate::components::page_header::PageHeader;
use crate::components::report_card::ReportCard;
use crate::net::types::BeachReport;
use crate::state::records::is_owner;

#[component]
pub fn ReportsPage() -> impl IntoView {
    let list = mount_list::<BeachReport>();
    let on_delete = delete_handler(list, "Are you sure you want to delete this report?");
    let viewer = viewer_name();

    view! {
        <div class="list-page list-page--reports">
            <PageHeader
                title="Beach Reports"
                subtitle="Water quality and conditions from the community"
                back_href="/dashboard"
                action=("/reports/new", "New Report")
            />
            <main class="list-page__body">
                <ErrorBanner error=Signal::derive(move || list.with(|l| l.error.clone()))/>
                <Show
                    when=move || !list.with(|l| l.loading)
                    fallback=|| view! { <div class="loading-screen">"Loading beach reports..."</div> }
                >
                    <Show
                        when=move || list.with(|l| !l.items.is_empty())
                        fallback=|| {
                            view! {
                                <div class="empty-state">
                                    <h3>"No Reports Yet"</h3>
                                    <p>"Share how your local beach is doing."</p>
                                    <a class="btn btn--primary" href="/reports/new">"Create First Report"</a>
                                </div>
                            }
                        }
                    >
                        <div class="card-grid">
                            <For
                                each=move || list.with(|l| l.items.clone())
                                key=|report| report.id
                                children=move |report| {
                                    let id = report.id;
                                    let can_delete = viewer.with_untracked(|v| is_owner(v.as_deref(), report.user_name.as_deref()));
                                    view! {
                                        <ReportCard
                                            report=report
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
