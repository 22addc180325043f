//! Typed accessors over the host store.
//!
//! Setters write through and return the store's error unchanged. Getters
//! take a default and return it whenever the value cannot be produced: the
//! key is absent, the store fails, or the bytes are not valid UTF-8 for a
//! string read. A present but empty value is not absent.

use crate::context::Context;
use crate::error::Result;
use crate::json::JsonQuery;
use crate::value;
use num_bigint::BigInt;
use tracing::warn;
use xcd_core::Host;

impl<H: Host> Context<H> {
    /// Store an integer's magnitude. The sign is not kept.
    pub fn set_int(&mut self, key: &str, value: impl Into<BigInt>) -> Result<()> {
        self.put(key, &value::encode_int(&value.into()))
    }

    pub fn set_bool(&mut self, key: &str, value: bool) -> Result<()> {
        self.put(key, &value::encode_bool(value))
    }

    pub fn set_string(&mut self, key: &str, value: &str) -> Result<()> {
        self.put(key, value.as_bytes())
    }

    /// Store a string list joined with `*;*`.
    ///
    /// Elements containing the delimiter do not survive a round trip.
    pub fn set_strings<S: AsRef<str>>(&mut self, key: &str, values: &[S]) -> Result<()> {
        self.put(key, &value::encode_strings(values))
    }

    pub fn set_bytes(&mut self, key: &str, value: &[u8]) -> Result<()> {
        self.put(key, value)
    }

    /// Read a non-negative integer.
    pub fn get_int(&self, key: &str, default: impl Into<BigInt>) -> BigInt {
        match self.fetch(key) {
            Some(bytes) => value::decode_int(&bytes),
            None => default.into(),
        }
    }

    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        self.fetch(key)
            .map_or(default, |bytes| value::decode_bool(&bytes))
    }

    pub fn get_string(&self, key: &str, default: &str) -> String {
        self.fetch(key)
            .and_then(|bytes| String::from_utf8(bytes).ok())
            .unwrap_or_else(|| default.to_string())
    }

    pub fn get_strings(&self, key: &str, default: Vec<String>) -> Vec<String> {
        self.fetch(key)
            .and_then(|bytes| String::from_utf8(bytes).ok())
            .map_or(default, |text| value::decode_strings(&text))
    }

    pub fn get_bytes(&self, key: &str, default: Vec<u8>) -> Vec<u8> {
        self.fetch(key).unwrap_or(default)
    }

    /// Parse a stored value for path queries. `None` when the key is absent.
    pub fn get_json(&self, key: &str) -> Option<JsonQuery> {
        self.fetch(key).map(|bytes| JsonQuery::parse(&bytes))
    }

    fn put(&mut self, key: &str, bytes: &[u8]) -> Result<()> {
        self.host_mut().put_object(key.as_bytes(), bytes)?;
        Ok(())
    }

    fn fetch(&self, key: &str) -> Option<Vec<u8>> {
        match self.host().get_object(key.as_bytes()) {
            Ok(value) => value,
            Err(err) => {
                warn!(key, error = %err, "state read failed, using default");
                None
            }
        }
    }
}
