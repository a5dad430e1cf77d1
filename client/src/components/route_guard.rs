//! Route wrappers that gate pages on session state.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` wraps every routed page in one of these. Decisions come from
//! `util::auth::guard_decision`; this module only renders them.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::state::session::SessionContext;
use crate::util::auth::{Access, GuardDecision, guard_decision};

/// Renders children for signed-in users; redirects others to `/login`.
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    guarded(Access::Authenticated, children)
}

/// Renders children for signed-out users; redirects others to `/dashboard`.
#[component]
pub fn PublicRoute(children: ChildrenFn) -> impl IntoView {
    guarded(Access::Anonymous, children)
}

fn guarded(access: Access, children: ChildrenFn) -> impl IntoView {
    let state = expect_context::<SessionContext>().state;
    let decision = Memo::new(move |_| state.with(|s| guard_decision(access, s)));

    move || match decision.get() {
        GuardDecision::Pending => view! { <div class="loading-screen">"Loading..."</div> }.into_any(),
        GuardDecision::Render => children().into_any(),
        GuardDecision::Redirect(path) => view! { <Redirect path=path/> }.into_any(),
    }
}
