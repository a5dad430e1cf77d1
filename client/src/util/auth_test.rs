use super::*;
use crate::net::types::User;

fn user() -> User {
    User {
        id: 1,
        name: "Ana".to_owned(),
        email: "ana@example.com".to_owned(),
        location: None,
        created_at: None,
    }
}

fn state(user: Option<User>, loading: bool) -> SessionState {
    SessionState { user, loading, error: None }
}

#[test]
fn neither_guard_redirects_while_loading() {
    for user in [None, Some(user())] {
        let s = state(user, true);
        assert_eq!(guard_decision(Access::Authenticated, &s), GuardDecision::Pending);
        assert_eq!(guard_decision(Access::Anonymous, &s), GuardDecision::Pending);
    }
}

#[test]
fn protected_redirects_to_login_when_signed_out() {
    assert_eq!(guard_decision(Access::Authenticated, &state(None, false)), GuardDecision::Redirect("/login"));
}

#[test]
fn protected_renders_when_signed_in() {
    assert_eq!(guard_decision(Access::Authenticated, &state(Some(user()), false)), GuardDecision::Render);
}

#[test]
fn public_redirects_to_dashboard_when_signed_in() {
    assert_eq!(guard_decision(Access::Anonymous, &state(Some(user()), false)), GuardDecision::Redirect("/dashboard"));
}

#[test]
fn public_renders_when_signed_out() {
    assert_eq!(guard_decision(Access::Anonymous, &state(None, false)), GuardDecision::Render);
}

#[test]
fn fresh_session_is_pending() {
    assert_eq!(guard_decision(Access::Authenticated, &SessionState::default()), GuardDecision::Pending);
}
