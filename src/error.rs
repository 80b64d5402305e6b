//! Custom error types and handling
//!
//! This module defines the client's error type and the normalization rules
//! applied to backend failure responses. Every view relies on errors carrying
//! a displayable string, so the rules here are load-bearing:
//!
//! - a failure body whose `message` field is a string is used verbatim
//! - a `message` that is an object or array (the backend's validation-error
//!   shape) is re-serialized to a JSON string
//! - unparseable bodies fall back to a generic message
//!
//! Views recover field errors from the stringified shape through
//! [`ApiError::display_message`], which re-parses the string and joins the
//! inner `{message}` records with `", "`.

use serde_json::Value;

use crate::constants::GENERIC_ERROR_MESSAGE;

/// Client-side error type for all backend interaction
#[derive(Debug, Clone, thiserror::Error)]
pub enum ApiError {
    /// The backend replied outside the success range; `message` has already
    /// been normalized into a displayable string
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The request never produced a response
    #[error("Network error: {0}")]
    Transport(String),

    /// A success response did not deserialize into the expected shape
    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Normalize a non-success response body into an [`ApiError::Api`]
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|parsed| normalize_message(parsed.get("message")))
            .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string());

        Self::Api { status, message }
    }

    /// HTTP status of the failure, when the backend produced one
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Human-readable message for direct display in a view.
    ///
    /// When the normalized message is a stringified array of `{message}`
    /// records, the inner messages are joined with `", "`; anything else is
    /// returned unchanged.
    pub fn display_message(&self) -> String {
        match self {
            Self::Api { message, .. } => {
                if let Ok(Value::Array(items)) = serde_json::from_str::<Value>(message) {
                    let parts: Vec<&str> = items
                        .iter()
                        .filter_map(|item| item.get("message").and_then(Value::as_str))
                        .collect();
                    if !parts.is_empty() {
                        return parts.join(", ");
                    }
                }
                message.clone()
            }
            other => other.to_string(),
        }
    }

    /// Whether this failure means the caller lacks access to a protected
    /// resource. Detection is by status and message content, matching how
    /// the submissions view decides to leave the page instead of rendering
    /// an inline error.
    pub fn is_access_denied(&self) -> bool {
        match self {
            Self::Api { status, message } => {
                *status == 403 || message.contains("Access denied") || message.contains("403")
            }
            _ => false,
        }
    }
}

/// Apply the message normalization rule to an optional `message` field
fn normalize_message(message: Option<&Value>) -> Option<String> {
    match message? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::String(_) => None,
        value @ (Value::Array(_) | Value::Object(_)) => serde_json::to_string(value).ok(),
        Value::Null => None,
        other => Some(other.to_string()),
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

/// Result type alias using ApiError
pub type ApiResult<T> = Result<T, ApiError>;
