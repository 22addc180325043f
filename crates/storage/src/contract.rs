//! Per-contract store view over a shared sled database.

use crate::db::Storage;
use tracing::trace;
use xcd_core::{Args, BigUint, CallInfo, Invocation, ObjectStore, StoreError};

/// A contract's view of the database for one invocation.
///
/// Every key is scoped under the contract's prefix, so two contracts
/// writing the same key never collide. Within one contract the key space
/// is flat.
pub struct ContractStore<'a> {
    storage: &'a Storage,
    contract: String,
    prefix: Vec<u8>,
    invocation: Invocation,
}

impl<'a> ContractStore<'a> {
    /// Create a view of `contract`'s objects for the given invocation.
    pub fn new(storage: &'a Storage, contract: impl Into<String>, invocation: Invocation) -> Self {
        let contract = contract.into();
        let prefix = Storage::contract_prefix(&contract);
        Self {
            storage,
            contract,
            prefix,
            invocation,
        }
    }

    /// Name of the contract this view belongs to.
    pub fn contract(&self) -> &str {
        &self.contract
    }

    /// Metadata of the invocation running against this view.
    pub fn invocation(&self) -> &Invocation {
        &self.invocation
    }

    /// Number of objects the contract currently holds.
    pub fn object_count(&self) -> Result<usize, StoreError> {
        Ok(self.storage.count_prefix(&self.prefix)?)
    }

    fn scoped(&self, key: &[u8]) -> Vec<u8> {
        let mut full = self.prefix.clone();
        full.extend_from_slice(key);
        full
    }
}

impl ObjectStore for ContractStore<'_> {
    fn put_object(&mut self, key: &[u8], value: &[u8]) -> xcd_core::Result<()> {
        trace!(contract = %self.contract, len = value.len(), "put object");
        Ok(self.storage.put(self.scoped(key), value)?)
    }

    fn get_object(&self, key: &[u8]) -> xcd_core::Result<Option<Vec<u8>>> {
        Ok(self.storage.get(self.scoped(key))?)
    }

    fn delete_object(&mut self, key: &[u8]) -> xcd_core::Result<()> {
        trace!(contract = %self.contract, "delete object");
        Ok(self.storage.delete(self.scoped(key))?)
    }
}

impl CallInfo for ContractStore<'_> {
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
