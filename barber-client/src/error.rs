//! Client error types

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Server demands re-authentication. Never surfaced as an error:
    /// callers hand it to the login gate and suppress everything else.
    #[error("authentication required")]
    AuthRequired,

    /// Server answered with a non-success status
    #[error("request failed with status {status}")]
    RequestFailed { status: u16 },

    /// Transport-level failure, no response arrived
    #[error("connection error: {0}")]
    Connection(#[from] reqwest::Error),

    /// Response arrived but its body did not match the expected shape
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// A status value must be selected before the update can be sent
    #[error("no status selected")]
    NoSelection,

    /// A required field is missing or out of bounds; no request was made
    #[error("validation failed for field `{field}`")]
    Validation { field: &'static str },

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// True when this failure must be routed to the login gate instead of
    /// the notification surface.
    pub fn is_auth(&self) -> bool {
        matches!(self, ClientError::AuthRequired)
    }

    /// True for the local guards that block a call before any network I/O.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            ClientError::NoSelection | ClientError::Validation { .. }
        )
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
