//! Event log codec.
//!
//! The log is persisted as one blob. JSON is the working encoding; RLP is
//! reserved. Under RLP, encoding fails with
//! [`ContextError::UnsupportedEncoding`] while decoding yields an empty
//! log, so every emit fails but readers see nothing.

use crate::error::{ContextError, Result};
use crate::event::{EventLog, EventRecord};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Encoding of the persisted event log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    /// JSON array of `{"event", "value"}` objects.
    #[default]
    Json,
    /// Reserved, not implemented.
    Rlp,
}

impl Encoding {
    /// Encode the full log.
    pub fn encode(self, logs: &[EventRecord]) -> Result<Vec<u8>> {
        match self {
            Encoding::Json => serde_json::to_vec(logs).map_err(ContextError::Encode),
            Encoding::Rlp => Err(ContextError::UnsupportedEncoding(self)),
        }
    }

    /// Decode a log blob. An empty blob is an empty log.
    pub fn decode(self, bytes: &[u8]) -> Result<EventLog> {
        if bytes.is_empty() {
            return Ok(EventLog::new());
        }
        match self {
            Encoding::Json => serde_json::from_slice(bytes).map_err(ContextError::Decode),
            Encoding::Rlp => Ok(EventLog::new()),
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Encoding::Json => f.write_str("JSON"),
            Encoding::Rlp => f.write_str("RLP"),
        }
    }
}
