//! Host-facing contracts.
//!
//! The host owns the event bus and decides when events fire. Higher layers
//! describe what they want as `(EventKind, priority, HandlerId)` subscriptions on
//! a single listener and receive `HostEvent`s back; no callbacks are stored on the host
//! side, so tearing a listener down cannot leave dangling handlers behind.

mod bus;
mod event;

pub use bus::{Delivery, EventBus, HandlerId, ListenerId, LocalEventBus, Subscription};
pub use event::{EventKind, HostEvent, Resolution};
