//! Shared error type across hitbadge crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Malformed query input supplied by the caller.
    BadRequest,
    /// Backing store read or write failed.
    StoreUnavailable,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in logs and metrics labels.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::StoreUnavailable => "STORE_UNAVAILABLE",
            ClientCode::Internal => "INTERNAL",
        }
    }

    /// HTTP status code for responses carrying this code.
    pub fn http_status(self) -> u16 {
        match self {
            ClientCode::BadRequest => 400,
            ClientCode::StoreUnavailable | ClientCode::Internal => 500,
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, HitBadgeError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Error)]
pub enum HitBadgeError {
    #[error("invalid start value: {0:?} is not a non-negative integer")]
    InvalidStartValue(String),
    #[error("invalid links: {0}")]
    MalformedLinks(String),
    #[error("store: {0}")]
    Store(String),
    #[error("config: {0}")]
    Config(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl HitBadgeError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            HitBadgeError::InvalidStartValue(_) | HitBadgeError::MalformedLinks(_) => {
                ClientCode::BadRequest
            }
            HitBadgeError::Store(_) => ClientCode::StoreUnavailable,
            HitBadgeError::Config(_) | HitBadgeError::Internal(_) => ClientCode::Internal,
        }
    }

    /// Message placed in the JSON error body.
    ///
    /// Internal failures never leak their detail to the caller.
    pub fn public_message(&self) -> String {
        match self {
            HitBadgeError::Config(_) | HitBadgeError::Internal(_) => {
                "Unknown error occurred".to_string()
            }
            other => other.to_string(),
        }
    }
}
