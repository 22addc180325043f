//! Contract events and their persisted records.

use crate::error::{ContextError, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A domain event a contract can emit.
///
/// Each event declares its own log name. Structs usually get it from
/// [`impl_event!`](crate::impl_event); enums match on their variants:
///
/// ```rust
/// use serde::Serialize;
/// use xcd_context::Event;
///
/// #[derive(Serialize)]
/// #[serde(untagged)]
/// enum Supply {
///     Mint { amount: u64 },
///     Burn { amount: u64 },
/// }
///
/// impl Event for Supply {
///     fn event_name(&self) -> &str {
///         match self {
///             Supply::Mint { .. } => "Mint",
///             Supply::Burn { .. } => "Burn",
///         }
///     }
/// }
/// ```
pub trait Event: Serialize {
    /// Canonical name recorded in the event log.
    fn event_name(&self) -> &str;
}

impl<E: Event + ?Sized> Event for &E {
    fn event_name(&self) -> &str {
        (**self).event_name()
    }
}

/// Implement [`Event`] for struct types, naming each event after its type.
///
/// ```rust
/// use serde::Serialize;
/// use xcd_context::{impl_event, Event};
///
/// #[derive(Serialize)]
/// struct Issue {
///     to: String,
///     amount: u64,
/// }
///
/// impl_event!(Issue);
///
/// let issue = Issue { to: "qwer".into(), amount: 100 };
/// assert_eq!(issue.event_name(), "Issue");
/// ```
#[macro_export]
macro_rules! impl_event {
    ($($ty:ident),+ $(,)?) => {
        $(
            impl $crate::Event for $ty {
                fn event_name(&self) -> &str {
                    stringify!($ty)
                }
            }
        )+
    };
}

/// One entry of the event log: `{"event": name, "value": payload}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Event name.
    #[serde(rename = "event")]
    pub name: String,
    /// The event's own fields.
    #[serde(rename = "value")]
    pub payload: serde_json::Value,
}

impl EventRecord {
    /// Capture an event's name and fields.
    pub fn new<E: Event + ?Sized>(event: &E) -> Result<Self> {
        let payload = serde_json::to_value(event).map_err(ContextError::Encode)?;
        Ok(Self {
            name: event.event_name().to_string(),
            payload,
        })
    }

    /// Decode the payload back into a typed event.
    pub fn payload_as<T: DeserializeOwned>(&self) -> Result<T> {
        T::deserialize(&self.payload).map_err(ContextError::Decode)
    }
}

/// Ordered event records, in emission order.
pub type EventLog = Vec<EventRecord>;
