//! REST client for the WaveMinder backend.
//!
//! Resource methods are thin parameter-to-endpoint mappings over a
//! `Transport`. The bearer token is read from the `TokenStore` as each
//! request is built, never cached on the client.
//!
//! ERROR HANDLING
//! ==============
//! Every method returns `Result<_, ApiError>`. Non-2xx responses carry the
//! decoded `detail` payload so callers can normalize it for display. There
//! are no retries.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::{ApiError, ErrorDetail};
use super::storage::{BrowserTokens, TokenStore};
use super::transport::{ApiRequest, ApiResponse, Body, BrowserTransport, Method, Transport};
use super::types::{CommunityStats, ListQuery, Record, SignupRequest, TokenResponse, User};

/// Backend used when `WAVEMINDER_API_URL` is not set at build time.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Backend base URL baked in at compile time, without a trailing slash.
pub fn api_base_url() -> String {
    option_env!("WAVEMINDER_API_URL")
        .unwrap_or(DEFAULT_API_URL)
        .trim_end_matches('/')
        .to_owned()
}

fn build_url(base: &str, path: &str, query: &[(&'static str, String)]) -> String {
    let mut url = format!("{base}{path}");
    if !query.is_empty() {
        let encoded: Vec<String> = query
            .iter()
            .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
            .collect();
        url.push('?');
        url.push_str(&encoded.join("&"));
    }
    url
}

fn login_form(email: &str, password: &str) -> String {
    format!("email={}&password={}", urlencoding::encode(email), urlencoding::encode(password))
}

/// Client for the backend REST API.
#[derive(Clone, Debug)]
pub struct ApiClient<T = BrowserTransport, S = BrowserTokens> {
    base_url: Arc<str>,
    transport: T,
    tokens: S,
}

impl ApiClient {
    /// Browser client pointed at the compile-time backend URL.
    pub fn browser() -> Self {
        Self::new(&api_base_url(), BrowserTransport, BrowserTokens)
    }
}

impl<T: Transport, S: TokenStore> ApiClient<T, S> {
    pub fn new(base_url: &str, transport: T, tokens: S) -> Self {
        Self { base_url: Arc::from(base_url.trim_end_matches('/')), transport, tokens }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn tokens(&self) -> &S {
        &self.tokens
    }

    fn request(&self, method: Method, path: &str, query: &[(&'static str, String)], body: Body) -> ApiRequest {
        ApiRequest {
            method,
            url: build_url(&self.base_url, path, query),
            bearer: self.tokens.load(),
            body,
        }
    }

    async fn dispatch(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let resp = self.transport.send(request).await?;
        if !resp.ok() {
            return Err(ApiError::Status { status: resp.status, detail: ErrorDetail::from_body(&resp.body) });
        }
        Ok(resp)
    }

    async fn fetch_json<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R, ApiError> {
        let resp = self.dispatch(request).await?;
        serde_json::from_str(&resp.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    fn json_body<B: Serialize>(payload: &B) -> Result<Body, ApiError> {
        serde_json::to_string(payload)
            .map(Body::Json)
            .map_err(|e| ApiError::Encode(e.to_string()))
    }

    // =========================================================================
    // AUTH
    // =========================================================================

    /// `POST /signup`. The response body is not needed; callers log in next.
    ///
    /// # Errors
    ///
    /// Returns the backend rejection (e.g. email already registered).
    pub async fn signup(&self, request: &SignupRequest) -> Result<(), ApiError> {
        let body = Self::json_body(request)?;
        self.dispatch(self.request(Method::Post, "/signup", &[], body)).await?;
        Ok(())
    }

    /// `POST /login` with form-encoded credentials.
    ///
    /// # Errors
    ///
    /// Returns the backend rejection for bad credentials.
    pub async fn login(&self, email: &str, password: &str) -> Result<TokenResponse, ApiError> {
        let body = Body::Form(login_form(email, password));
        self.fetch_json(self.request(Method::Post, "/login", &[], body)).await
    }

    /// `GET /me` for the bearer of the stored token.
    ///
    /// # Errors
    ///
    /// Returns an error when no valid token is stored.
    pub async fn current_user(&self) -> Result<User, ApiError> {
        self.fetch_json(self.request(Method::Get, "/me", &[], Body::Empty)).await
    }

    // =========================================================================
    // RECORDS (sightings, beach reports, conservation actions)
    // =========================================================================

    /// `GET /{collection}` with optional `user_id` / `limit`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    pub async fn list<R: Record>(&self, query: &ListQuery) -> Result<Vec<R>, ApiError> {
        self.fetch_json(self.request(Method::Get, R::PATH, &query.pairs(), Body::Empty)).await
    }

    /// `GET /{collection}/{id}`.
    ///
    /// # Errors
    ///
    /// Returns an error if the record does not exist or the request fails.
    pub async fn get<R: Record>(&self, id: i64) -> Result<R, ApiError> {
        let path = format!("{}/{id}", R::PATH);
        self.fetch_json(self.request(Method::Get, &path, &[], Body::Empty)).await
    }

    /// `POST /{collection}`.
    ///
    /// # Errors
    ///
    /// Returns the backend's validation failure, if any.
    pub async fn create<R: Record>(&self, draft: &R::Draft) -> Result<R, ApiError> {
        let body = Self::json_body(draft)?;
        self.fetch_json(self.request(Method::Post, R::PATH, &[], body)).await
    }

    /// `DELETE /{collection}/{id}`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend refuses (not found, not the owner).
    pub async fn delete<R: Record>(&self, id: i64) -> Result<(), ApiError> {
        let path = format!("{}/{id}", R::PATH);
        self.dispatch(self.request(Method::Delete, &path, &[], Body::Empty)).await?;
        Ok(())
    }

    // =========================================================================
    // STATS + OCEAN DATA
    // =========================================================================

    /// `GET /stats/community`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body does not decode.
    pub async fn community_stats(&self) -> Result<CommunityStats, ApiError> {
        self.fetch_json(self.request(Method::Get, "/stats/community", &[], Body::Empty)).await
    }

    /// `GET /ocean-data/tides/{station_id}?days=`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn tides(&self, station_id: &str, days: u32) -> Result<Value, ApiError> {
        let path = format!("/ocean-data/tides/{}", urlencoding::encode(station_id));
        let query = [("days", days.to_string())];
        self.fetch_json(self.request(Method::Get, &path, &query, Body::Empty)).await
    }

    /// `GET /ocean-data/weather?latitude=&longitude=&days=`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn weather(&self, latitude: f64, longitude: f64, days: u32) -> Result<Value, ApiError> {
        let query = coordinate_query(latitude, longitude, days);
        self.fetch_json(self.request(Method::Get, "/ocean-data/weather", &query, Body::Empty)).await
    }

    /// `GET /ocean-data/temperature?latitude=&longitude=&days=`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn temperature(&self, latitude: f64, longitude: f64, days: u32) -> Result<Value, ApiError> {
        let query = coordinate_query(latitude, longitude, days);
        self.fetch_json(self.request(Method::Get, "/ocean-data/temperature", &query, Body::Empty)).await
    }

    /// `GET /ocean-data/conditions?location_name=&latitude=&longitude=&days=`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn conditions(
        &self,
        location_name: &str,
        latitude: f64,
        longitude: f64,
        days: u32,
    ) -> Result<Value, ApiError> {
        let mut query = vec![("location_name", location_name.to_owned())];
        query.extend(coordinate_query(latitude, longitude, days));
        self.fetch_json(self.request(Method::Get, "/ocean-data/conditions", &query, Body::Empty)).await
    }
}

fn coordinate_query(latitude: f64, longitude: f64, days: u32) -> Vec<(&'static str, String)> {
    vec![
        ("latitude", latitude.to_string()),
        ("longitude", longitude.to_string()),
        ("days", days.to_string()),
    ]
}
