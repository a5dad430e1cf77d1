//! Backend error decoding and display normalization.
//!
//! The backend reports failures as a JSON body whose `detail` field may be a
//! plain string, a list of field-level validation errors, or an arbitrary
//! object. `ErrorDetail` captures that shape; `normalize` turns it into an
//! `ErrorMessage` the UI can render. Normalization is total: every input
//! yields a non-empty message.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use std::fmt;

use serde_json::{Map, Value};

/// Fallback text when a payload carries nothing displayable.
pub const GENERIC_ERROR: &str = "An error occurred";

/// Shape of a backend `detail` payload.
#[derive(Clone, Debug, PartialEq)]
pub enum ErrorDetail {
    /// `"detail": "Incorrect email or password"`
    Message(String),
    /// `"detail": [{"loc": [...], "msg": "...", "type": "..."}]`
    Validation(Vec<Value>),
    /// `"detail": {"msg": "..."}` or any other object.
    Object(Map<String, Value>),
    /// Missing, null, numeric, or a body that is not JSON at all.
    Unknown,
}

impl ErrorDetail {
    /// Classify a decoded `detail` value.
    pub fn from_value(value: Option<&Value>) -> Self {
        match value {
            Some(Value::String(text)) => Self::Message(text.clone()),
            Some(Value::Array(items)) => Self::Validation(items.clone()),
            Some(Value::Object(map)) => Self::Object(map.clone()),
            Some(Value::Null | Value::Bool(_) | Value::Number(_)) | None => Self::Unknown,
        }
    }

    /// Extract the `detail` field from a raw response body.
    pub fn from_body(body: &str) -> Self {
        match serde_json::from_str::<Value>(body) {
            Ok(value) => Self::from_value(value.get("detail")),
            Err(_) => Self::Unknown,
        }
    }
}

/// Display-ready error: a single line, or one line per validation failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorMessage {
    Text(String),
    List(Vec<String>),
}

impl ErrorMessage {
    pub fn generic() -> Self {
        Self::Text(GENERIC_ERROR.to_owned())
    }

    /// Wrap free text, falling back to the generic message when blank.
    pub fn text(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() { Self::generic() } else { Self::Text(message) }
    }

    /// Lines to render, one per entry.
    pub fn lines(&self) -> Vec<String> {
        match self {
            Self::Text(text) => vec![text.clone()],
            Self::List(items) => items.clone(),
        }
    }
}

impl fmt::Display for ErrorMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::List(items) => f.write_str(&items.join(", ")),
        }
    }
}

/// Turn a backend `detail` payload into a displayable message.
pub fn normalize(detail: &ErrorDetail) -> ErrorMessage {
    match detail {
        ErrorDetail::Message(text) => ErrorMessage::text(text.as_str()),
        ErrorDetail::Validation(items) => {
            let lines: Vec<String> = items
                .iter()
                .map(validation_line)
                .filter(|line| !line.trim().is_empty())
                .collect();
            if lines.is_empty() { ErrorMessage::generic() } else { ErrorMessage::List(lines) }
        }
        ErrorDetail::Object(map) => object_message(map),
        ErrorDetail::Unknown => ErrorMessage::generic(),
    }
}

fn validation_line(item: &Value) -> String {
    match item {
        Value::String(text) => text.clone(),
        Value::Object(map) => match map.get("msg").and_then(Value::as_str) {
            Some(msg) => msg.to_owned(),
            None => item.to_string(),
        },
        other => other.to_string(),
    }
}

fn object_message(map: &Map<String, Value>) -> ErrorMessage {
    let preferred = ["msg", "message"]
        .iter()
        .find_map(|key| map.get(*key).and_then(Value::as_str))
        .filter(|text| !text.trim().is_empty());
    match preferred {
        Some(text) => ErrorMessage::Text(text.to_owned()),
        None => ErrorMessage::Text(Value::Object(map.clone()).to_string()),
    }
}

/// Failure of a single backend call.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, DNS).
    #[error("{0}")]
    Transport(String),
    /// The backend answered with a non-2xx status.
    #[error("Request failed with status code {status}")]
    Status { status: u16, detail: ErrorDetail },
    /// A 2xx response whose body did not match the expected schema.
    #[error("unexpected response: {0}")]
    Decode(String),
    /// The request payload could not be serialized.
    #[error("could not encode request: {0}")]
    Encode(String),
}

impl ApiError {
    /// Normalized message for display.
    ///
    /// A status error without a usable `detail` reports the status line
    /// rather than the generic fallback.
    pub fn message(&self) -> ErrorMessage {
        match self {
            Self::Status { detail: ErrorDetail::Unknown, .. } => ErrorMessage::text(self.to_string()),
            Self::Status { detail, .. } => normalize(detail),
            Self::Transport(message) => ErrorMessage::text(message.as_str()),
            Self::Decode(_) | Self::Encode(_) => ErrorMessage::text(self.to_string()),
        }
    }

    /// HTTP status, when the backend responded.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(_) | Self::Decode(_) | Self::Encode(_) => None,
        }
    }
}
