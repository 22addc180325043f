//! sled database wrapper with key helpers.

use sled::Db;
use std::path::Path;
use thiserror::Error;
use xcd_core::StoreError;

/// Storage errors.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sled::Error),
}

impl From<StorageError> for StoreError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Database(err) => StoreError::Backend(err.to_string()),
        }
    }
}

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Wrapper around a sled database holding raw contract objects.
pub struct Storage {
    db: Db,
}

impl Storage {
    /// Open a database at the given path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let db = sled::open(path)?;
        Ok(Self { db })
    }

    /// Open an in-memory database (for testing).
    pub fn open_temporary() -> Result<Self> {
        let db = sled::Config::new().temporary(true).open()?;
        Ok(Self { db })
    }

    /// Store raw bytes under a key.
    pub fn put<K, V>(&self, key: K, value: V) -> Result<()>
    where
        K: AsRef<[u8]>,
        V: AsRef<[u8]>,
    {
        self.db.insert(key.as_ref(), value.as_ref())?;
        Ok(())
    }

    /// Retrieve raw bytes, `None` if the key is absent.
    pub fn get<K: AsRef<[u8]>>(&self, key: K) -> Result<Option<Vec<u8>>> {
        Ok(self.db.get(key)?.map(|bytes| bytes.to_vec()))
    }

    /// Delete a key.
    pub fn delete<K: AsRef<[u8]>>(&self, key: K) -> Result<()> {
        self.db.remove(key)?;
        Ok(())
    }

    /// Number of keys starting with `prefix`.
    pub fn count_prefix<P: AsRef<[u8]>>(&self, prefix: P) -> Result<usize> {
        let mut count = 0;
        for entry in self.db.scan_prefix(prefix) {
            entry?;
            count += 1;
        }
        Ok(count)
    }

    /// Flush all pending writes to disk.
    pub fn flush(&self) -> Result<()> {
        self.db.flush()?;
        Ok(())
    }

    // =========================================================================
    // Key Construction Helpers
    // =========================================================================

    /// Prefix shared by every object of one contract.
    /// Format: "storage:" + contract + ":"
    pub fn contract_prefix(contract: &str) -> Vec<u8> {
        let mut key = b"storage:".to_vec();
        key.extend_from_slice(contract.as_bytes());
        key.push(b':');
        key
    }

    /// Create a prefixed key for contract storage.
    /// Format: "storage:" + contract + ":" + key
    pub fn contract_storage_key(contract: &str, key: &[u8]) -> Vec<u8> {
        let mut full = Self::contract_prefix(contract);
        full.extend_from_slice(key);
        full
    }
}
