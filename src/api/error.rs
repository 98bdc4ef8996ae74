//! API Errors
//!
//! Failures seen while talking to the recipe API. Never leave the `api` module.

/// Reasons a request produced no usable data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Network unreachable, CORS rejection, request build failure
    Transport(String),
    /// Non-2xx response
    Status(u16),
    /// Body was not the expected JSON
    Decode(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Transport(msg) => write!(f, "Transport error: {}", msg),
            ApiError::Status(code) => write!(f, "Unexpected HTTP status: {}", code),
            ApiError::Decode(msg) => write!(f, "Decode error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Transport(e.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
