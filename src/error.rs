//! Error taxonomy for corpus queries.
//!
//! Validation-shaped failures carry a user-facing message and are raised
//! where they are detected. Store failures travel as [`CorpusError::Internal`]
//! and are never retried or masked inside the core.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CorpusError>;

#[derive(Debug, Error)]
pub enum CorpusError {
    /// A lookup that must produce a row produced none.
    #[error("{0}")]
    NotFound(String),

    /// The request is well-formed but the data does not support it,
    /// e.g. a concept view for a lemma without a kernel word.
    #[error("{0}")]
    InvalidState(String),

    /// A query-string parameter is missing or out of range.
    #[error("invalid parameter `{param}`: {reason}")]
    InvalidParameter { param: &'static str, reason: String },

    #[error("internal: {0}")]
    Internal(#[from] anyhow::Error),
}

impl CorpusError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::InvalidState(message.into())
    }

    pub fn invalid_parameter(param: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            param,
            reason: reason.into(),
        }
    }

    pub fn http_status(&self) -> u16 {
        match self {
            Self::NotFound(_) => 404,
            Self::InvalidState(_) => 400,
            Self::InvalidParameter { .. } => 422,
            Self::Internal(_) => 500,
        }
    }

    /// Message safe to show to API clients. Internal failures are reduced to
    /// a generic string; the full chain is logged by the caller.
    pub fn client_message(&self) -> String {
        match self {
            Self::Internal(_) => "internal server error".to_string(),
            other => other.to_string(),
        }
    }
}
