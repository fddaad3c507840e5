use anyhow::{bail, Result};

use super::event::EventKind;

/// Opaque handle to a listener created on an [`EventBus`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct ListenerId(pub u32);

/// Tags which handler of a listener a subscription belongs to.
///
/// Several subscriptions of the same kind on one listener stay distinguishable,
/// so the host can hand each delivery back to exactly one handler.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct HandlerId(pub u32);

impl HandlerId {
    /// The listener owner's own handler.
    pub const PRIMARY: HandlerId = HandlerId(0);
}

/// One `(kind, priority, handler)` registration.
///
/// Higher priority is notified first; equal priorities keep registration order.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Subscription {
    pub kind: EventKind,
    pub priority: i32,
    pub handler: HandlerId,
}

impl Subscription {
    /// Subscription for the listener's primary handler.
    #[inline]
    pub const fn new(kind: EventKind, priority: i32) -> Self {
        Self { kind, priority, handler: HandlerId::PRIMARY }
    }

    #[inline]
    pub const fn for_handler(kind: EventKind, priority: i32, handler: HandlerId) -> Self {
        Self { kind, priority, handler }
    }
}

/// Who receives one notification: a listener and the tagged handler.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Delivery {
    pub listener: ListenerId,
    pub handler: HandlerId,
}

/// Host event bus contract.
pub trait EventBus {
    /// Creates a fresh listener that subscriptions are grouped under.
    fn create_listener(&mut self) -> ListenerId;

    /// Registers `subscription` for `listener`.
    fn register(&mut self, listener: ListenerId, subscription: Subscription) -> Result<()>;

    /// Removes every subscription of `listener` and forgets the listener.
    fn unregister_all(&mut self, listener: ListenerId);
}

#[derive(Debug, Clone)]
struct Entry {
    listener: ListenerId,
    subscription: Subscription,
    seq: u64,
}

/// In-memory [`EventBus`].
///
/// For hosts without a bus of their own: register through it, then ask
/// [`deliveries`](Self::deliveries) who should receive an event and forward it.
#[derive(Debug, Default)]
pub struct LocalEventBus {
    next_listener: u32,
    next_seq: u64,
    live: Vec<ListenerId>,
    entries: Vec<Entry>,
}

impl LocalEventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliveries for an event of `kind`, in notification order.
    ///
    /// One entry per matching subscription.
    pub fn deliveries(&self, kind: EventKind) -> Vec<Delivery> {
        let mut matching: Vec<&Entry> = self
            .entries
            .iter()
            .filter(|e| e.subscription.kind == kind)
            .collect();

        matching.sort_by(|a, b| {
            b.subscription
                .priority
                .cmp(&a.subscription.priority)
                .then(a.seq.cmp(&b.seq))
        });

        matching
            .into_iter()
            .map(|e| Delivery { listener: e.listener, handler: e.subscription.handler })
            .collect()
    }

    /// Listeners subscribed to `kind`, in notification order.
    ///
    /// A listener appears once per matching subscription.
    pub fn subscribers(&self, kind: EventKind) -> Vec<ListenerId> {
        self.deliveries(kind).into_iter().map(|d| d.listener).collect()
    }

    /// All subscriptions currently held by `listener`, in registration order.
    pub fn subscriptions_of(&self, listener: ListenerId) -> Vec<Subscription> {
        self.entries
            .iter()
            .filter(|e| e.listener == listener)
            .map(|e| e.subscription)
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl EventBus for LocalEventBus {
    fn create_listener(&mut self) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener = self.next_listener.wrapping_add(1);
        self.live.push(id);
        id
    }

    fn register(&mut self, listener: ListenerId, subscription: Subscription) -> Result<()> {
        if !self.live.contains(&listener) {
            bail!("listener {:?} is not registered on this bus", listener);
        }

        self.entries.push(Entry {
            listener,
            subscription,
            seq: self.next_seq,
        });
        self.next_seq += 1;
        Ok(())
    }

    fn unregister_all(&mut self, listener: ListenerId) {
        self.entries.retain(|e| e.listener != listener);
        self.live.retain(|l| *l != listener);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subscribers_are_ordered_by_priority_then_registration() {
        let mut bus = LocalEventBus::new();
        let a = bus.create_listener();
        let b = bus.create_listener();
        let c = bus.create_listener();

        bus.register(a, Subscription::new(EventKind::Tick, 1)).unwrap();
        bus.register(b, Subscription::new(EventKind::Tick, 5)).unwrap();
        bus.register(c, Subscription::new(EventKind::Tick, 1)).unwrap();
        bus.register(c, Subscription::new(EventKind::Resize, 9)).unwrap();

        assert_eq!(bus.subscribers(EventKind::Tick), vec![b, a, c]);
        assert_eq!(bus.subscribers(EventKind::Resize), vec![c]);
        assert!(bus.subscribers(EventKind::RenderPass).is_empty());
    }

    #[test]
    fn unregister_all_removes_only_that_listener() {
        let mut bus = LocalEventBus::new();
        let a = bus.create_listener();
        let b = bus.create_listener();
        bus.register(a, Subscription::new(EventKind::Tick, 1)).unwrap();
        bus.register(a, Subscription::new(EventKind::OverlayRender, 1)).unwrap();
        bus.register(b, Subscription::new(EventKind::Tick, 1)).unwrap();

        bus.unregister_all(a);

        assert_eq!(bus.len(), 1);
        assert!(bus.subscriptions_of(a).is_empty());
        assert_eq!(bus.subscribers(EventKind::Tick), vec![b]);
    }

    #[test]
    fn register_on_unknown_listener_fails() {
        let mut bus = LocalEventBus::new();
        let a = bus.create_listener();
        bus.unregister_all(a);

        let err = bus.register(a, Subscription::new(EventKind::Tick, 1)).unwrap_err();
        assert!(err.to_string().contains("not registered"));
    }

    #[test]
    fn deliveries_keep_handler_tags_apart() {
        let mut bus = LocalEventBus::new();
        let a = bus.create_listener();
        let app = HandlerId(7);
        bus.register(a, Subscription::new(EventKind::Tick, 1)).unwrap();
        bus.register(a, Subscription::for_handler(EventKind::Tick, 3, app)).unwrap();

        assert_eq!(
            bus.deliveries(EventKind::Tick),
            vec![
                Delivery { listener: a, handler: app },
                Delivery { listener: a, handler: HandlerId::PRIMARY },
            ]
        );
    }

    #[test]
    fn listener_ids_are_distinct() {
        let mut bus = LocalEventBus::new();
        assert_ne!(bus.create_listener(), bus.create_listener());
    }
}
