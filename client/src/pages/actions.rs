//! Conservation actions list with action-type filter.

use leptos::prelude::*;

use super::record_list::{delete_handler, mount_list, viewer_name};
use crate::components::action_card::ActionCard;
use crate::components::error_banner::ErrorBanner;
use crate::components::filter_bar::FilterBar;
use crate::components::page_header::PageHeader;
use crate::net::types::ConservationAction;
use crate::state::records::{Filter, is_owner};
use crate::util::catalog::action_type_label;

#[component]
pub fn ActionsPage() -> impl IntoView {
    let list = mount_list::<ConservationAction>();
    let on_delete = delete_handler(list, "Are you sure you want to delete this action?");
    let viewer = viewer_name();

    view! {
        <div class="list-page list-page--actions">
            <PageHeader
                title="Conservation Actions"
                subtitle="Cleanups, restoration, and outreach by the community"
                back_href="/dashboard"
                action=("/actions/new", "Log Action")
            />
            <main class="list-page__body">
                <ErrorBanner error=Signal::derive(move || list.with(|l| l.error.clone()))/>
                <Show
                    when=move || !list.with(|l| l.loading)
                    fallback=|| view! { <div class="loading-screen">"Loading conservation actions..."</div> }
                >
                    <FilterBar
                        facets=Signal::derive(move || list.with(|l| l.facets()))
                        total=Signal::derive(move || list.with(|l| l.items.len()))
                        active=Signal::derive(move || list.with(|l| l.filter.clone()))
                        on_select=Callback::new(move |filter: Filter| list.update(|l| l.set_filter(filter)))
                        label=action_type_label
                    />
                    <Show
                        when=move || list.with(|l| !l.visible().is_empty())
                        fallback=|| {
                            view! {
                                <div class="empty-state">
                                    <h3>"No Actions Yet"</h3>
                                    <p>"Log a cleanup or survey to get the tally started."</p>
                                    <a class="btn btn--primary" href="/actions/new">"Log First Action"</a>
                                </div>
                            }
                        }
                    >
                        <div class="card-grid">
                            <For
                                each=move || list.with(|l| l.visible())
                                key=|action| action.id
                                children=move |action| {
                                    let id = action.id;
                                    let can_delete = viewer.with_untracked(|v| is_owner(v.as_deref(), action.user_name.as_deref()));
                                    view! {
                                        <ActionCard
                                            action=action
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
