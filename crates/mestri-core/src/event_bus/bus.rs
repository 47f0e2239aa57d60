//! Event Bus implementation.
//!
//! Synchronous publish/subscribe used by the room store to push change
//! notifications to views, stats readouts and the host. Handlers run in
//! subscription order on the publishing call.

use parking_lot::RwLock;
use uuid::Uuid;

use super::events::{EventCategory, LayoutEvent};

/// Handle returned by [`EventBus::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(Uuid);

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let simple = self.0.simple().to_string();
        write!(f, "sub-{}", &simple[..8])
    }
}

/// Which events a subscriber wants
#[derive(Debug, Clone, Default)]
pub enum EventFilter {
    #[default]
    All,
    /// Any event whose category is listed.
    Categories(Vec<EventCategory>),
}

impl EventFilter {
    pub fn matches(&self, event: &LayoutEvent) -> bool {
        match self {
            EventFilter::All => true,
            EventFilter::Categories(categories) => categories.contains(&event.category()),
        }
    }
}

type Handler = Box<dyn Fn(&LayoutEvent) + Send + Sync>;

struct Subscriber {
    id: SubscriptionId,
    filter: EventFilter,
    handler: Handler,
}

/// Change notification hub shared by the store and its observers
#[derive(Default)]
pub struct EventBus {
    subscribers: RwLock<Vec<Subscriber>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delivers `event` to every matching subscriber.
    ///
    /// Returns how many handlers ran.
    pub fn publish(&self, event: LayoutEvent) -> usize {
        tracing::trace!("Publishing {}", event.description());

        let mut delivered = 0;
        for sub in self.subscribers.read().iter() {
            if sub.filter.matches(&event) {
                (sub.handler)(&event);
                delivered += 1;
            }
        }
        delivered
    }

    /// Registers `handler` for events passing `filter`.
    ///
    /// Handlers must not subscribe or unsubscribe from inside the callback.
    pub fn subscribe<F>(&self, filter: EventFilter, handler: F) -> SubscriptionId
    where
        F: Fn(&LayoutEvent) + Send + Sync + 'static,
    {
        let id = SubscriptionId(Uuid::new_v4());
        self.subscribers.write().push(Subscriber {
            id,
            filter,
            handler: Box::new(handler),
        });
        tracing::debug!("Subscription {} added", id);
        id
    }

    /// Drops a subscription. Returns false if it was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.subscribers.write();
        let before = subscribers.len();
        subscribers.retain(|sub| sub.id != id);
        let removed = subscribers.len() != before;
        if removed {
            tracing::debug!("Subscription {} removed", id);
        }
        removed
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.read().len()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_subscribe_and_unsubscribe() {
        let bus = EventBus::new();
        assert_eq!(bus.subscriber_count(), 0);

        let id = bus.subscribe(EventFilter::All, |_| {});
        assert_eq!(bus.subscriber_count(), 1);

        assert!(bus.unsubscribe(id));
        assert_eq!(bus.subscriber_count(), 0);
        assert!(!bus.unsubscribe(id));
    }

    #[test]
    fn test_publish_counts_deliveries() {
        let bus = EventBus::new();
        assert_eq!(bus.publish(LayoutEvent::DesignerOpened), 0);

        let seen = Arc::new(AtomicUsize::new(0));
        let counter = seen.clone();
        bus.subscribe(EventFilter::All, move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        assert_eq!(bus.publish(LayoutEvent::RoomRemoved { id: 1 }), 1);
        assert_eq!(seen.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_category_filter() {
        let bus = EventBus::new();
        let rooms = Arc::new(AtomicUsize::new(0));
        let designer = Arc::new(AtomicUsize::new(0));

        let r = rooms.clone();
        bus.subscribe(
            EventFilter::Categories(vec![EventCategory::Rooms]),
            move |_| {
                r.fetch_add(1, Ordering::SeqCst);
            },
        );
        let d = designer.clone();
        bus.subscribe(
            EventFilter::Categories(vec![EventCategory::Designer]),
            move |_| {
                d.fetch_add(1, Ordering::SeqCst);
            },
        );

        bus.publish(LayoutEvent::RoomAdded {
            id: 1,
            name: "bedroom".to_string(),
        });
        bus.publish(LayoutEvent::DesignerClosed);
        bus.publish(LayoutEvent::DesignerOpened);

        assert_eq!(rooms.load(Ordering::SeqCst), 1);
        assert_eq!(designer.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_handlers_run_in_subscription_order() {
        let bus = EventBus::new();
        let order = Arc::new(Mutex::new(Vec::new()));
        for tag in ["list", "canvas", "stats"] {
            let order = order.clone();
            bus.subscribe(EventFilter::All, move |_| order.lock().unwrap().push(tag));
        }

        bus.publish(LayoutEvent::RoomRemoved { id: 3 });

        assert_eq!(*order.lock().unwrap(), vec!["list", "canvas", "stats"]);
    }

    #[test]
    fn test_subscription_id_display() {
        let bus = EventBus::new();
        let id = bus.subscribe(EventFilter::All, |_| {});
        let text = id.to_string();
        assert!(text.starts_with("sub-"));
        assert_eq!(text.len(), 12);
    }
}
