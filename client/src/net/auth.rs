//! Token lifecycle: acquire, persist, validate, invalidate.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthService` performs the backend calls behind the session context and
//! owns every write to the token store. It returns plain outcomes; the
//! session context folds them into reactive state.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::api::ApiClient;
use super::error::ErrorMessage;
use super::storage::TokenStore;
use super::transport::Transport;
use super::types::{SignupRequest, User};

#[derive(Clone, Debug)]
pub struct AuthService<T, S> {
    api: ApiClient<T, S>,
}

impl<T: Transport, S: TokenStore> AuthService<T, S> {
    pub fn new(api: ApiClient<T, S>) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &ApiClient<T, S> {
        &self.api
    }

    /// Validate a persisted token by fetching the profile it belongs to.
    ///
    /// Returns `None` without a backend call when no token is stored. A
    /// rejected or unreachable validation discards the token.
    pub async fn restore(&self) -> Option<User> {
        self.api.tokens().load()?;
        match self.api.current_user().await {
            Ok(user) => Some(user),
            Err(e) => {
                leptos::logging::warn!("stored session rejected: {e}");
                self.api.tokens().clear();
                None
            }
        }
    }

    /// Exchange credentials for a token, persist it, and load the profile.
    ///
    /// # Errors
    ///
    /// Returns the normalized backend message. Nothing stays persisted on
    /// failure: a token whose profile fetch fails is discarded again.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, ErrorMessage> {
        let token = self.api.login(email, password).await.map_err(|e| e.message())?;
        if token.access_token.trim().is_empty() {
            return Err(ErrorMessage::generic());
        }
        self.api.tokens().store(&token.access_token);
        match self.api.current_user().await {
            Ok(user) => Ok(user),
            Err(e) => {
                self.api.tokens().clear();
                Err(e.message())
            }
        }
    }

    /// Register, then log in with the same credentials.
    ///
    /// # Errors
    ///
    /// Returns the normalized signup rejection, or the login error verbatim
    /// when registration succeeded but the automatic login did not.
    pub async fn signup(&self, request: &SignupRequest) -> Result<User, ErrorMessage> {
        self.api.signup(request).await.map_err(|e| e.message())?;
        self.login(&request.email, &request.password).await
    }

    /// Forget the persisted token. No backend call.
    pub fn logout(&self) {
        self.api.tokens().clear();
    }
}
