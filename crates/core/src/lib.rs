//! Host capabilities for xcd contract contexts.
//!
//! This crate defines what a contract host must provide to an invocation:
//! - Raw object storage (get/put/delete by byte key)
//! - Invocation metadata (arguments, caller, initiator, transferred amount)
//! - An in-memory host for tests and local simulation
//!
//! # Example
//!
//! ```rust
//! use xcd_core::{CallInfo, Invocation, ObjectStore, SimulateHost};
//!
//! let mut host = SimulateHost::with_invocation(
//!     Invocation::new().with_arg("to", "bob").with_caller("alice"),
//! );
//!
//! host.put_object(b"greeting", b"hello").unwrap();
//! assert_eq!(host.get_object(b"greeting").unwrap(), Some(b"hello".to_vec()));
//! assert_eq!(host.caller(), "alice");
//! ```

pub mod error;
pub mod host;
pub mod invocation;
pub mod simulate;

// Re-export commonly used types at the crate root
pub use error::{Result, StoreError};
pub use host::{Args, CallInfo, Host, ObjectStore};
pub use invocation::Invocation;
pub use simulate::SimulateHost;

pub use num_bigint::BigUint;
