//! Typed state and event-log context for xcd contracts.
//!
//! A contract invocation wraps its raw host in exactly one [`Context`]. All
//! state reads and writes and all event emissions go through it:
//! - **Event log**: [`Context::emit`] appends to a single persisted slot
//! - **State accessors**: integers, booleans, strings, string lists and bytes
//!   mapped to and from raw store bytes
//! - **Argument accessors**: the same decodings over the call arguments
//! - **JSON inspection**: path queries over stored values and arguments
//!
//! # Persisted layout
//!
//! ```text
//! com.github.blocktree.xcd.event -> [{"event": "Transfer", "value": {...}}, ...]
//! <caller key>                   -> typed accessor bytes
//! ```
//!
//! The event slot and accessor keys share one flat namespace.
//!
//! # Example
//!
//! ```rust
//! use serde::Serialize;
//! use xcd_context::{impl_event, BigInt, Context};
//! use xcd_core::SimulateHost;
//!
//! #[derive(Serialize)]
//! struct Transfer {
//!     from: String,
//!     to: String,
//!     amount: u64,
//! }
//!
//! impl_event!(Transfer);
//!
//! let mut host = SimulateHost::new();
//! let mut ctx = Context::new(&mut host).unwrap();
//!
//! ctx.set_int("supply", 1_000u32).unwrap();
//! ctx.emit(&Transfer { from: "gogogo".into(), to: "heihei".into(), amount: 1234456 })
//!     .unwrap();
//!
//! assert_eq!(ctx.get_int("supply", 0), BigInt::from(1_000u32));
//! assert_eq!(ctx.event_logs().unwrap()[0].name, "Transfer");
//! ```

pub mod args;
pub mod codec;
pub mod context;
pub mod error;
pub mod event;
pub mod json;
pub mod options;
pub mod state;
pub mod value;

// Re-export commonly used types
pub use codec::Encoding;
pub use context::{read_event_logs, Context, Handle};
pub use error::{ContextError, Result};
pub use event::{Event, EventLog, EventRecord};
pub use json::JsonQuery;
pub use options::{ContextOptions, SlotKey};
pub use value::LIST_DELIMITER;

pub use num_bigint::BigInt;
