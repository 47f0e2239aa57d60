//! # Event Bus Module
//!
//! Decoupled change notification between the room store and whoever renders
//! or reacts to it.
//!
//! ## Usage
//!
//! ```rust
//! use mestri_core::event_bus::{EventBus, EventCategory, EventFilter, LayoutEvent};
//!
//! let bus = EventBus::new();
//! let subscription = bus.subscribe(
//!     EventFilter::Categories(vec![EventCategory::Rooms]),
//!     |event| println!("{}", event.description()),
//! );
//!
//! bus.publish(LayoutEvent::RoomRemoved { id: 1 });
//! bus.unsubscribe(subscription);
//! ```

mod bus;
mod events;

pub use bus::*;
pub use events::*;
