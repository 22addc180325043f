//! Errors reported by host stores.

use thiserror::Error;

/// Errors a host store can report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Backend error: {0}")]
    Backend(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Result type for host store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
