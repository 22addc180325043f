//! Context errors.

use crate::codec::Encoding;
use thiserror::Error;
use xcd_core::StoreError;

/// Errors surfaced by context writes and event emission.
#[derive(Error, Debug)]
pub enum ContextError {
    #[error("Encode error: {0}")]
    Encode(serde_json::Error),

    #[error("Decode error: {0}")]
    Decode(serde_json::Error),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("{0} encoding is not implemented")]
    UnsupportedEncoding(Encoding),
}

/// Result type for context operations.
pub type Result<T> = std::result::Result<T, ContextError>;
