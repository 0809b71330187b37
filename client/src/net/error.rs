//! Error taxonomy for calls against the backend REST API.
//!
//! ERROR HANDLING
//! ==============
//! `Unauthorized`/`InvalidSession` mean the presented token is dead and the
//! caller should sign out. `Validation` carries the backend's `detail` text so
//! forms can show it verbatim. Nothing here is retried.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("not authenticated")]
    Unauthorized,
    #[error("invalid session: {0}")]
    InvalidSession(String),
    #[error("{0}")]
    Validation(String),
    #[error("request failed: {status}")]
    Status { status: u16, detail: Option<String> },
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Map a non-OK HTTP status and optional backend `detail` to an error.
    #[must_use]
    pub fn from_status(status: u16, detail: Option<String>) -> Self {
        match status {
            401 => match detail {
                Some(d) if names_dead_session(&d) => Self::InvalidSession(d),
                _ => Self::Unauthorized,
            },
            400 | 422 => Self::Validation(detail.unwrap_or_else(|| "request rejected".to_owned())),
            _ => Self::Status { status, detail },
        }
    }

    /// True when the backend rejected the token itself.
    #[must_use]
    pub fn is_session_rejection(&self) -> bool {
        matches!(self, Self::Unauthorized | Self::InvalidSession(_))
    }

    /// Text suitable for a form-level error message.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(detail) => detail.clone(),
            Self::Status { detail: Some(detail), .. } => detail.clone(),
            Self::Unauthorized => "Invalid email or password".to_owned(),
            Self::InvalidSession(_) => "Your session has expired. Please sign in again.".to_owned(),
            Self::Network(_) | Self::Unavailable => "Unable to reach the server. Please try again.".to_owned(),
            Self::Status { .. } | Self::Decode(_) => "Something went wrong. Please try again.".to_owned(),
        }
    }
}

fn names_dead_session(detail: &str) -> bool {
    let lower = detail.to_ascii_lowercase();
    lower.contains("invalid session") || lower.contains("session expired")
}

/// Extract the FastAPI `detail` field from an error body.
///
/// Validation errors carry a list of issues rather than a string; those are
/// reduced to the first issue's `msg`.
#[must_use]
pub fn parse_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Array(items) => items
            .first()
            .and_then(|item| item.get("msg"))
            .and_then(serde_json::Value::as_str)
            .map(str::to_owned),
        other => Some(other.to_string()),
    }
}
