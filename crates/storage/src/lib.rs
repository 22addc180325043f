//! sled-backed host storage for xcd contract contexts.
//!
//! This crate gives a contract host a persistent object store:
//! - [`Storage`]: raw-byte sled wrapper with key helpers
//! - [`ContractStore`]: one contract's view of the database for one invocation,
//!   implementing [`xcd_core::Host`]
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │              Contract code (xcd_context::Context)        │
//! └────────────────────────┬────────────────────────────────┘
//!                          │ ObjectStore + CallInfo
//! ┌────────────────────────▼────────────────────────────────┐
//! │  ContractStore  - "storage:<contract>:" key scoping      │
//! │                 - invocation metadata                    │
//! └────────────────────────┬────────────────────────────────┘
//!                          │
//! ┌────────────────────────▼────────────────────────────────┐
//! │  Storage        - sled wrapper, prefix scan, flush      │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use xcd_core::{Invocation, ObjectStore};
//! use xcd_storage::{ContractStore, Storage};
//!
//! let storage = Storage::open("./contract_data").unwrap();
//! let mut store = ContractStore::new(&storage, "token", Invocation::new());
//! store.put_object(b"supply", b"1000").unwrap();
//! storage.flush().unwrap();
//! ```

pub mod contract;
pub mod db;

// Re-export commonly used types
pub use contract::ContractStore;
pub use db::{Result, Storage, StorageError};
