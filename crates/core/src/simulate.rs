//! In-memory host for tests and local contract simulation.

use crate::error::{Result, StoreError};
use crate::host::{Args, CallInfo, ObjectStore};
use crate::invocation::Invocation;
use num_bigint::BigUint;
use std::collections::HashMap;

/// A host backed by a `HashMap`.
///
/// Faults can be switched on per operation kind so callers can observe
/// how a context behaves when its store fails.
#[derive(Debug, Default)]
pub struct SimulateHost {
    store: HashMap<Vec<u8>, Vec<u8>>,
    invocation: Invocation,
    fail_reads: bool,
    fail_writes: bool,
    fail_deletes: bool,
}

impl SimulateHost {
    /// Create an empty host with default invocation metadata.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty host running the given invocation.
    pub fn with_invocation(invocation: Invocation) -> Self {
        Self {
            invocation,
            ..Self::default()
        }
    }

    /// Make every `get_object` fail.
    pub fn fail_reads(&mut self, fail: bool) {
        self.fail_reads = fail;
    }

    /// Make every `put_object` fail.
    pub fn fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Make every `delete_object` fail.
    pub fn fail_deletes(&mut self, fail: bool) {
        self.fail_deletes = fail;
    }

    /// Raw stored value, bypassing fault injection.
    pub fn raw(&self, key: &[u8]) -> Option<&[u8]> {
        self.store.get(key).map(Vec::as_slice)
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

impl ObjectStore for SimulateHost {
    fn put_object(&mut self, key: &[u8], value: &[u8]) -> Result<()> {
        if self.fail_writes {
            return Err(StoreError::Unavailable("simulated write failure".into()));
        }
        self.store.insert(key.to_vec(), value.to_vec());
        Ok(())
    }

    fn get_object(&self, key: &[u8]) -> Result<Option<Vec<u8>>> {
        if self.fail_reads {
            return Err(StoreError::Unavailable("simulated read failure".into()));
        }
        Ok(self.store.get(key).cloned())
    }

    fn delete_object(&mut self, key: &[u8]) -> Result<()> {
        if self.fail_deletes {
            return Err(StoreError::Unavailable("simulated delete failure".into()));
        }
        self.store.remove(key);
        Ok(())
    }
}

impl CallInfo for SimulateHost {
    fn args(&self) -> &Args {
        self.invocation.args()
    }

    fn caller(&self) -> &str {
        self.invocation.caller()
    }

    fn initiator(&self) -> &str {
        self.invocation.initiator()
    }

    fn auth_require(&self) -> &[String] {
        self.invocation.auth_require()
    }

    fn transfer_amount(&self) -> BigUint {
        self.invocation.transfer_amount()
    }
}
