//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionContext` is constructed once in `App` and provided via context.
//! Route guards and user-aware components read `state`; only the context's
//! own operations write it.
//!
//! LIFECYCLE
//! =========
//! `loading` starts `true` and flips to `false` when `init` finishes
//! validating any persisted token. Guards must not redirect before then.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::api::ApiClient;
use crate::net::auth::AuthService;
use crate::net::error::ErrorMessage;
use crate::net::storage::{BrowserTokens, TokenStore};
use crate::net::transport::{BrowserTransport, Transport};
use crate::net::types::{SignupRequest, User};

/// Snapshot of the session: who is signed in and whether that is known yet.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    pub user: Option<User>,
    pub loading: bool,
    pub error: Option<ErrorMessage>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self { user: None, loading: true, error: None }
    }
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Startup validation finished.
    pub fn restored(&mut self, user: Option<User>) {
        self.user = user;
        self.loading = false;
    }

    /// Clear the last error before a new login or signup attempt.
    pub fn begin_attempt(&mut self) {
        self.error = None;
    }

    /// Fold a login or signup outcome into the session. A failed attempt
    /// leaves no user behind, since its token was discarded.
    pub fn apply(&mut self, outcome: &Result<User, ErrorMessage>) {
        match outcome {
            Ok(user) => {
                self.user = Some(user.clone());
                self.error = None;
            }
            Err(message) => {
                self.user = None;
                self.error = Some(message.clone());
            }
        }
        self.loading = false;
    }

    pub fn signed_out(&mut self) {
        self.user = None;
        self.error = None;
        self.loading = false;
    }
}

/// Root-provided session store: reactive state plus the auth operations
/// that mutate it.
#[derive(Clone, Debug)]
pub struct SessionContext<T = BrowserTransport, S = BrowserTokens> {
    pub state: RwSignal<SessionState>,
    auth: AuthService<T, S>,
}

impl SessionContext {
    /// Session backed by `localStorage` and the browser `fetch` API.
    pub fn browser() -> Self {
        Self::new(ApiClient::browser())
    }
}

impl<T, S> SessionContext<T, S>
where
    T: Transport + Clone + Send + Sync + 'static,
    S: TokenStore + Clone + Send + Sync + 'static,
{
    pub fn new(api: ApiClient<T, S>) -> Self {
        Self { state: RwSignal::new(SessionState::default()), auth: AuthService::new(api) }
    }

    pub fn api(&self) -> &ApiClient<T, S> {
        self.auth.api()
    }

    /// Current user, if signed in.
    pub fn user(&self) -> Option<User> {
        self.state.with(|s| s.user.clone())
    }

    /// Restore a persisted session. Failures degrade silently to signed out.
    pub async fn init(&self) {
        let user = self.auth.restore().await;
        if let Some(user) = &user {
            leptos::logging::log!("session restored for user {}", user.id);
        }
        self.state.update(|s| s.restored(user));
    }

    /// # Errors
    ///
    /// Returns the normalized backend message; it is also kept in `state.error`.
    pub async fn login(&self, email: &str, password: &str) -> Result<(), ErrorMessage> {
        self.state.update(SessionState::begin_attempt);
        let outcome = self.auth.login(email, password).await;
        self.state.update(|s| s.apply(&outcome));
        outcome.map(|_| ())
    }

    /// # Errors
    ///
    /// Returns the normalized signup error, or the auto-login error.
    pub async fn signup(&self, request: &SignupRequest) -> Result<(), ErrorMessage> {
        self.state.update(SessionState::begin_attempt);
        let outcome = self.auth.signup(request).await;
        self.state.update(|s| s.apply(&outcome));
        outcome.map(|_| ())
    }

    /// Drop the token and the cached user. Safe to call repeatedly.
    pub fn logout(&self) {
        self.auth.logout();
        self.state.update(SessionState::signed_out);
    }
}
