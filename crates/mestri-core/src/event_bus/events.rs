//! Event type definitions for the event bus.
//!
//! Events are cloneable and serializable so hosts can log or replay them.

use serde::{Deserialize, Serialize};

/// Events raised by the room-layout designer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LayoutEvent {
    /// A room was appended to the store
    RoomAdded {
        /// Id of the new room.
        id: u64,
        /// Category label.
        name: String,
    },
    /// A room's length or width changed through a field edit
    RoomResized {
        /// Id of the room.
        id: u64,
        /// New length in feet.
        length: f64,
        /// New width in feet.
        width: f64,
    },
    /// A room was repositioned by a drag gesture
    RoomMoved {
        /// Id of the room.
        id: u64,
        /// New top-left x in canvas pixels.
        x: f64,
        /// New top-left y in canvas pixels.
        y: f64,
    },
    /// A room was removed from the store
    RoomRemoved {
        /// Id of the removed room.
        id: u64,
    },
    /// The layout was applied to the hosting form
    LayoutSaved {
        /// Rounded total area written to the form.
        total_area: i64,
        /// Number of rooms exported.
        room_count: usize,
    },
    /// The designer surface was revealed
    DesignerOpened,
    /// The designer surface was hidden
    DesignerClosed,
}

impl LayoutEvent {
    /// Get the category of this event
    pub fn category(&self) -> EventCategory {
        match self {
            LayoutEvent::RoomAdded { .. }
            | LayoutEvent::RoomResized { .. }
            | LayoutEvent::RoomMoved { .. }
            | LayoutEvent::RoomRemoved { .. } => EventCategory::Rooms,
            LayoutEvent::LayoutSaved { .. }
            | LayoutEvent::DesignerOpened
            | LayoutEvent::DesignerClosed => EventCategory::Designer,
        }
    }

    /// Get a short description of this event for logging
    pub fn description(&self) -> String {
        match self {
            LayoutEvent::RoomAdded { id, name } => format!("Added {} {}", name, id),
            LayoutEvent::RoomResized { id, length, width } => {
                format!("Resized room {} to {}x{}", id, length, width)
            }
            LayoutEvent::RoomMoved { id, x, y } => format!("Moved room {} to ({}, {})", id, x, y),
            LayoutEvent::RoomRemoved { id } => format!("Removed room {}", id),
            LayoutEvent::LayoutSaved {
                total_area,
                room_count,
            } => format!("Saved {} rooms, {} sqft", room_count, total_area),
            LayoutEvent::DesignerOpened => "Designer opened".to_string(),
            LayoutEvent::DesignerClosed => "Designer closed".to_string(),
        }
    }

    /// Whether the event changes the room collection and requires the
    /// list and canvas views to re-render.
    pub fn invalidates_views(&self) -> bool {
        matches!(
            self,
            LayoutEvent::RoomAdded { .. }
                | LayoutEvent::RoomResized { .. }
                | LayoutEvent::RoomRemoved { .. }
        )
    }
}

/// Event category for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    /// Room store mutations.
    Rooms,
    /// Designer surface lifecycle and save/apply.
    Designer,
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventCategory::Rooms => write!(f, "Rooms"),
            EventCategory::Designer => write!(f, "Designer"),
        }
    }
}
