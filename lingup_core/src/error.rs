//! Error types shared by the HTTP client and the components.

use thiserror::Error;

/// Failure of a single backend call.
///
/// Components render [`ApiError::user_message`]; the `Display` form is for logs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, DNS).
    #[error("network error: {0}")]
    Network(String),
    /// No response within the configured budget.
    #[error("request timed out after {0} ms")]
    Timeout(u32),
    /// Non-2xx response. `detail` is the backend's `{"detail": "..."}` message.
    #[error("request failed with status {status}")]
    Status { status: u16, detail: Option<String> },
    /// The body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Build a status error, pulling `detail` out of a JSON error body.
    pub fn from_status(status: u16, body: &str) -> Self {
        ApiError::Status {
            status,
            detail: extract_detail(body),
        }
    }

    /// Message suitable for showing to a visitor.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Status {
                detail: Some(detail),
                ..
            } => detail.clone(),
            other => other.to_string(),
        }
    }
}

/// Extract a string `detail` field from a JSON error body.
///
/// Non-string details (validation maps, lists) are ignored.
pub fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("detail")?
        .as_str()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}

/// Site configuration could not be parsed.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid site config: {0}")]
    Parse(#[from] toml::de::Error),
}
