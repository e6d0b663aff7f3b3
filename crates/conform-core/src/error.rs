//! Unified error type exposed by **`conform-core`**.
//!
//! Provider crates should convert their internal errors into one of these
//! variants before bubbling them up to the [`crate::client::Client`]. This
//! keeps the public API small while still conveying rich diagnostic
//! information. The library itself performs no recovery: every failure from a
//! collaborator propagates to the immediate caller.

use thiserror::Error;

/// Convenient alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, ConformError>;

#[derive(Debug, Error)]
pub enum ConformError {
    /// Failure while serialising or deserialising JSON payloads sent to /
    /// received from the LLM provider. This is also what a response that does
    /// not parse as the expected output type surfaces as.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic forwarding of any backend-specific error that doesn’t fit
    /// another category.
    #[error("backend returned an error: {0}")]
    Backend(Box<dyn std::error::Error + Send + Sync + 'static>),

    /// The request could not be handed to the backend as-is, e.g. because the
    /// backend does not recognise the selected model.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Invalid client-side configuration (missing API key, …).
    #[error("invalid: {0}")]
    Invalid(String),
}
