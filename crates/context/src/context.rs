//! The contract context: one per invocation.

use crate::codec::Encoding;
use crate::error::Result;
use crate::event::{Event, EventLog, EventRecord};
use crate::options::{ContextOptions, SlotKey};
use tracing::{debug, trace};
use xcd_core::{Args, BigUint, Host, ObjectStore};

/// Typed decorator over a raw contract host.
///
/// A context owns one invocation's event-emission session. Fresh
/// construction clears the event log slot, so every session starts with an
/// empty log. `H` may be an owned host or `&mut` to one.
#[derive(Debug)]
pub struct Context<H> {
    host: H,
    slot_key: SlotKey,
    encoding: Encoding,
}

/// What a context is built from: a raw host or an existing context.
#[derive(Debug)]
pub enum Handle<H> {
    Fresh(H),
    Wrapped(Context<H>),
}

impl<H> From<Context<H>> for Handle<H> {
    fn from(context: Context<H>) -> Self {
        Handle::Wrapped(context)
    }
}

impl<H: Host> Context<H> {
    /// Wrap a raw host with the default slot key and JSON encoding.
    pub fn new(host: H) -> Result<Self> {
        Self::with_options(host, ContextOptions::default())
    }

    /// Wrap a raw host, clearing any event log left at the configured slot.
    pub fn with_options(mut host: H, options: ContextOptions) -> Result<Self> {
        let ContextOptions { slot_key, encoding } = options;
        host.delete_object(slot_key.as_bytes())?;
        debug!(slot = %slot_key, %encoding, "context created");
        Ok(Self {
            host,
            slot_key,
            encoding,
        })
    }

    /// Resolve a handle into a context, applying the wrap-once rule.
    ///
    /// An already wrapped context comes back unchanged: its log is kept and
    /// `options` are ignored. A fresh host is wrapped as by
    /// [`Context::with_options`].
    pub fn wrap(handle: Handle<H>, options: ContextOptions) -> Result<Self> {
        match handle {
            Handle::Wrapped(context) => {
                trace!(slot = %context.slot_key, "already wrapped, options ignored");
                Ok(context)
            }
            Handle::Fresh(host) => Self::with_options(host, options),
        }
    }

    // =========================================================================
    // Event Log
    // =========================================================================

    /// Append an event to the log.
    ///
    /// The whole log is read, extended and written back. Encoding happens
    /// before the write, so a failed emit leaves the stored log untouched.
    pub fn emit<E: Event + ?Sized>(&mut self, event: &E) -> Result<()> {
        let record = EventRecord::new(event)?;
        let mut logs = self.event_logs()?;
        logs.push(record);
        self.set_event_logs(&logs)?;
        debug!(event = event.event_name(), count = logs.len(), "event emitted");
        Ok(())
    }

    /// Events emitted so far, in order.
    ///
    /// A missing or unreadable slot is an empty log. Under RLP the log
    /// always reads empty.
    pub fn event_logs(&self) -> Result<EventLog> {
        read_event_logs(&self.host, &self.slot_key, self.encoding)
    }

    fn set_event_logs(&mut self, logs: &[EventRecord]) -> Result<()> {
        let bytes = self.encoding.encode(logs)?;
        self.host.put_object(self.slot_key.as_bytes(), &bytes)?;
        Ok(())
    }

    // =========================================================================
    // Invocation Metadata
    // =========================================================================

    pub fn args(&self) -> &Args {
        self.host.args()
    }

    pub fn caller(&self) -> &str {
        self.host.caller()
    }

    pub fn initiator(&self) -> &str {
        self.host.initiator()
    }

    pub fn auth_require(&self) -> &[String] {
        self.host.auth_require()
    }

    pub fn transfer_amount(&self) -> BigUint {
        self.host.transfer_amount()
    }
}

impl<H> Context<H> {
    pub fn slot_key(&self) -> &SlotKey {
        &self.slot_key
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// The wrapped host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// The wrapped host, mutably. Writes to the slot key through this
    /// handle replace the event log.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Unwrap, returning the host. The event log stays in the store.
    pub fn into_inner(self) -> H {
        self.host
    }
}

/// Read the event log persisted at `slot_key` without building a context.
///
/// Unlike construction this never clears the slot, so a host can inspect
/// what a finished invocation emitted.
pub fn read_event_logs<S: ObjectStore + ?Sized>(
    store: &S,
    slot_key: &SlotKey,
    encoding: Encoding,
) -> Result<EventLog> {
    match store.get_object(slot_key.as_bytes()) {
        Ok(Some(bytes)) => encoding.decode(&bytes),
        Ok(None) => Ok(EventLog::new()),
        Err(err) => {
            trace!(slot = %slot_key, error = %err, "event log unreadable, treated as empty");
            Ok(EventLog::new())
        }
    }
}
