//! Shared wiring for the three record list pages and their forms.
//!
//! SYSTEM CONTEXT
//! ==============
//! Lists fetch once on mount and delete through the two-phase transitions
//! on `RecordList`. Forms coerce their draft, post it, and navigate back to
//! the list. Network work only runs in the browser; during SSR the list
//! stays in its loading state until hydration.

use leptos::prelude::*;

use crate::net::error::ErrorMessage;
use crate::net::types::Record;
use crate::state::records::RecordList;
use crate::state::session::SessionContext;

/// Records fetched per list page.
pub(crate) const LIST_LIMIT: u32 = 100;

/// Create list state and start the initial fetch.
pub(crate) fn mount_list<R>() -> RwSignal<RecordList<R>>
where
    R: Record + Send + Sync + 'static,
{
    let list = RwSignal::new(RecordList::<R>::default());

    #[cfg(feature = "hydrate")]
    {
        let api = expect_context::<SessionContext>().api().clone();
        leptos::task::spawn_local(async move {
            let result = api.list::<R>(&crate::net::types::ListQuery::latest(LIST_LIMIT)).await.map_err(|e| {
                leptos::logging::warn!("fetching {} failed: {e}", R::PATH);
                e.message()
            });
            list.update(|l| l.loaded(result));
        });
    }

    list
}

/// Delete handler: confirm, mark pending, call the backend, then commit or
/// roll back.
pub(crate) fn delete_handler<R>(list: RwSignal<RecordList<R>>, prompt: &'static str) -> Callback<i64>
where
    R: Record + Send + Sync + 'static,
{
    let session = expect_context::<SessionContext>();
    Callback::new(move |id: i64| {
        if !confirm(prompt) {
            return;
        }
        let mut started = false;
        list.update(|l| started = l.begin_delete(id));
        if !started {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let api = session.api().clone();
            leptos::task::spawn_local(async move {
                match api.delete::<R>(id).await {
                    Ok(()) => list.update(|l| l.confirm_delete(id)),
                    Err(e) => {
                        leptos::logging::warn!("deleting {}/{id} failed: {e}", R::PATH);
                        list.update(|l| l.fail_delete(id, e.message()));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = &session;
    })
}

/// Name of the signed-in user, for card ownership checks.
pub(crate) fn viewer_name() -> Signal<Option<String>> {
    let state = expect_context::<SessionContext>().state;
    Signal::derive(move || state.with(|s| s.user.as_ref().map(|u| u.name.clone())))
}

/// Submit handler for a record form: coerce the draft, post it, and go back
/// to `list_path` on success.
pub(crate) fn submit_handler<R, D>(
    draft: RwSignal<D>,
    build: fn(&D) -> Result<R::Draft, &'static str>,
    error: RwSignal<Option<ErrorMessage>>,
    busy: RwSignal<bool>,
    list_path: &'static str,
) -> impl Fn(leptos::ev::SubmitEvent) + 'static
where
    R: Record + 'static,
    R::Draft: 'static,
    D: Send + Sync + 'static,
{
    let session = expect_context::<SessionContext>();
    let navigate = leptos_router::hooks::use_navigate();

    move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let payload = match draft.with_untracked(build) {
            Ok(payload) => payload,
            Err(message) => {
                error.set(Some(ErrorMessage::text(message)));
                return;
            }
        };
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let api = session.api().clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match api.create::<R>(&payload).await {
                    Ok(_) => navigate(list_path, leptos_router::NavigateOptions::default()),
                    Err(e) => {
                        error.set(Some(e.message()));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&session, &navigate, payload, list_path);
    }
}

#[cfg(feature = "hydrate")]
fn confirm(prompt: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(prompt).ok())
        .unwrap_or(false)
}

#[cfg(not(feature = "hydrate"))]
fn confirm(_prompt: &str) -> bool {
    false
}
