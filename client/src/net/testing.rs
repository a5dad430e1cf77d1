//! Scripted in-memory transport for unit tests.

use std::sync::{Arc, Mutex};

use super::api::ApiClient;
use super::error::ApiError;
use super::storage::MemoryTokens;
use super::transport::{ApiRequest, ApiResponse, Method, Transport};

pub(crate) const BASE: &str = "http://backend.test";

type Responder = Arc<dyn Fn(&ApiRequest) -> Result<ApiResponse, ApiError> + Send + Sync>;

/// Routes `(method, path)` to canned responses and records every request.
#[derive(Clone, Default)]
pub(crate) struct MockTransport {
    routes: Arc<Mutex<Vec<(Method, String, Responder)>>>,
    sent: Arc<Mutex<Vec<ApiRequest>>>,
}

impl MockTransport {
    pub(crate) fn on(&self, method: Method, path: &str, status: u16, body: &str) -> &Self {
        let body = body.to_owned();
        self.on_with(method, path, move |_| Ok(ApiResponse { status, body: body.clone() }))
    }

    pub(crate) fn on_with<F>(&self, method: Method, path: &str, responder: F) -> &Self
    where
        F: Fn(&ApiRequest) -> Result<ApiResponse, ApiError> + Send + Sync + 'static,
    {
        self.routes.lock().unwrap().push((method, path.to_owned(), Arc::new(responder)));
        self
    }

    pub(crate) fn sent(&self) -> Vec<ApiRequest> {
        self.sent.lock().unwrap().clone()
    }

    pub(crate) fn sent_paths(&self) -> Vec<String> {
        self.sent().iter().map(|r| path_of(&r.url).to_owned()).collect()
    }
}

fn path_of(url: &str) -> &str {
    let without_base = url.strip_prefix(BASE).unwrap_or(url);
    without_base.split('?').next().unwrap_or(without_base)
}

impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.sent.lock().unwrap().push(request.clone());
        let path = path_of(&request.url).to_owned();
        let responder = self
            .routes
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|(method, route, _)| *method == request.method && *route == path)
            .map(|(_, _, responder)| Arc::clone(responder));
        match responder {
            Some(responder) => responder(&request),
            None => Ok(ApiResponse { status: 404, body: r#"{"detail":"Not Found"}"#.to_owned() }),
        }
    }
}

pub(crate) fn client(tokens: &MemoryTokens) -> (ApiClient<MockTransport, MemoryTokens>, MockTransport) {
    let transport = MockTransport::default();
    (ApiClient::new(BASE, transport.clone(), tokens.clone()), transport)
}

pub(crate) const USER_JSON: &str = r#"{"id":1,"name":"Ana","email":"ana@example.com","location":"San Diego, CA"}"#;
