//! Context configuration.

use crate::codec::Encoding;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Storage key under which a context persists its event log.
///
/// The slot shares the flat key namespace of the typed accessors. A state
/// key equal to the active slot key overwrites the log.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlotKey(String);

impl SlotKey {
    /// Reserved slot used when none is configured.
    pub const DEFAULT: &'static str = "com.github.blocktree.xcd.event";

    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl Default for SlotKey {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SlotKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for SlotKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

/// Configuration for a context.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextOptions {
    /// Slot holding the serialized event log.
    pub slot_key: SlotKey,
    /// Encoding of the event log.
    pub encoding: Encoding,
}

impl ContextOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_slot_key(mut self, slot_key: impl Into<SlotKey>) -> Self {
        self.slot_key = slot_key.into();
        self
    }

    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Load options from a JSON document. Missing fields keep their defaults.
    pub fn from_json(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }
}
