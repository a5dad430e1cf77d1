use super::*;
use futures::executor::block_on;

use crate::net::storage::MemoryTokens;
use crate::net::testing::{self, USER_JSON};
use crate::net::transport::Method;

fn ana() -> User {
    serde_json::from_str(USER_JSON).unwrap()
}

// =============================================================
// SessionState transitions
// =============================================================

#[test]
fn session_state_default_is_loading_and_signed_out() {
    let state = SessionState::default();
    assert!(state.loading);
    assert!(!state.is_authenticated());
    assert!(state.error.is_none());
}

#[test]
fn restored_ends_loading() {
    let mut state = SessionState::default();
    state.restored(None);
    assert!(!state.loading);
    assert!(!state.is_authenticated());

    let mut state = SessionState::default();
    state.restored(Some(ana()));
    assert!(state.is_authenticated());
}

#[test]
fn apply_success_sets_user_and_clears_error() {
    let mut state = SessionState { user: None, loading: false, error: Some(ErrorMessage::generic()) };
    state.apply(&Ok(ana()));
    assert_eq!(state.user, Some(ana()));
    assert!(state.error.is_none());
}

#[test]
fn apply_failure_keeps_signed_out_and_records_error() {
    let mut state = SessionState { user: None, loading: false, error: None };
    let message = ErrorMessage::Text("Incorrect email or password".to_owned());
    state.apply(&Err(message.clone()));
    assert!(!state.is_authenticated());
    assert_eq!(state.error, Some(message));
}

#[test]
fn begin_attempt_clears_previous_error() {
    let mut state = SessionState { user: None, loading: false, error: Some(ErrorMessage::generic()) };
    state.begin_attempt();
    assert!(state.error.is_none());
}

#[test]
fn signed_out_is_idempotent() {
    let mut state = SessionState { user: Some(ana()), loading: false, error: None };
    state.signed_out();
    let once = state.clone();
    state.signed_out();
    assert_eq!(state, once);
    assert!(!state.is_authenticated());
}

// =============================================================
// Service + state, end to end
// =============================================================

#[test]
fn stale_token_startup_ends_unauthenticated_without_token() {
    let tokens = MemoryTokens::with_token("stale");
    let (api, transport) = testing::client(&tokens);
    transport.on(Method::Get, "/me", 401, r#"{"detail":"Could not validate credentials"}"#);
    let auth = AuthService::new(api);

    let mut state = SessionState::default();
    let user = block_on(auth.restore());
    state.restored(user);

    assert!(!state.loading);
    assert!(!state.is_authenticated());
    assert!(state.error.is_none());
    assert_eq!(tokens.load(), None);
}

#[test]
fn login_then_logout_clears_token_and_user() {
    let tokens = MemoryTokens::default();
    let (api, transport) = testing::client(&tokens);
    transport.on(Method::Post, "/login", 200, r#"{"access_token":"good"}"#);
    transport.on(Method::Get, "/me", 200, USER_JSON);
    let auth = AuthService::new(api);

    let mut state = SessionState::default();
    state.restored(None);
    let outcome = block_on(auth.login("ana@example.com", "secret1"));
    state.apply(&outcome);
    assert_eq!(state.user, Some(ana()));
    assert_eq!(tokens.load().as_deref(), Some("good"));

    for _ in 0..2 {
        auth.logout();
        state.signed_out();
        assert_eq!(tokens.load(), None);
        assert!(state.user.is_none());
    }
}

#[test]
fn apply_failure_drops_previous_user() {
    let mut state = SessionState { user: Some(ana()), loading: false, error: None };
    state.apply(&Err(ErrorMessage::Text("boom".to_owned())));
    assert!(!state.is_authenticated());
    assert_eq!(state.error, Some(ErrorMessage::Text("boom".to_owned())));
}

#[test]
fn relogin_with_failing_profile_leaves_no_user() {
    Owner::new().with(|| {
        let tokens = MemoryTokens::default();
        let (api, transport) = testing::client(&tokens);
        transport.on(Method::Post, "/login", 200, r#"{"access_token":"good"}"#);
        transport.on(Method::Get, "/me", 200, USER_JSON);
        let ctx = SessionContext::new(api);

        block_on(ctx.login("ana@example.com", "secret1")).unwrap();
        assert_eq!(ctx.user(), Some(ana()));

        transport.on(Method::Get, "/me", 500, r#"{"detail":"boom"}"#);
        let result = block_on(ctx.login("ana@example.com", "secret1"));

        assert_eq!(result, Err(ErrorMessage::Text("boom".to_owned())));
        assert!(ctx.user().is_none());
        assert_eq!(tokens.load(), None);
    });
}
