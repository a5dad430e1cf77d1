//! Route-guard decisions shared by `ProtectedRoute` and `PublicRoute`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both guards must behave identically while the startup session check is in
//! flight: render a neutral loading state, never redirect.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::state::session::SessionState;

pub const LOGIN_PATH: &str = "/login";
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Session state a route requires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    /// Signed-in users only; others go to `/login`.
    Authenticated,
    /// Signed-out users only; others go to `/dashboard`.
    Anonymous,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Startup check still running.
    Pending,
    Render,
    Redirect(&'static str),
}

pub fn guard_decision(access: Access, state: &SessionState) -> GuardDecision {
    if state.loading {
        return GuardDecision::Pending;
    }
    match (access, state.is_authenticated()) {
        (Access::Authenticated, true) | (Access::Anonymous, false) => GuardDecision::Render,
        (Access::Authenticated, false) => GuardDecision::Redirect(LOGIN_PATH),
        (Access::Anonymous, true) => GuardDecision::Redirect(DASHBOARD_PATH),
    }
}
