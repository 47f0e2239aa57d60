//! Room store: the authoritative room collection and id allocation.
//!
//! Every successful mutation is published on the store's [`EventBus`] so
//! views and readouts can refresh. Operations on ids that no longer exist
//! are silently ignored; they are the normal result of a room being removed
//! while an edit for it was still in flight.

use std::sync::Arc;

use mestri_core::{EventBus, LayoutEntry, LayoutEvent};
use mestri_settings::{DesignerSettings, StaggerSettings};

use crate::geometry::{self, CanvasSpace, Point};
use crate::room::{parse_dimension, Room, RoomField, RoomId};

/// Dimensions and placement given to newly added rooms.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomDefaults {
    pub length: f64,
    pub width: f64,
    pub stagger: StaggerSettings,
}

impl Default for RoomDefaults {
    fn default() -> Self {
        Self {
            length: 12.0,
            width: 10.0,
            stagger: StaggerSettings::default(),
        }
    }
}

impl RoomDefaults {
    /// Staggered top-left for the room that will become the `index`-th.
    pub fn stagger_position(&self, index: usize) -> Point {
        let s = &self.stagger;
        let offset = s.origin + (index as f64 * s.step).rem_euclid(s.span);
        Point::new(offset, offset)
    }
}

/// Ordered collection of rooms with a monotonically increasing id allocator.
#[derive(Debug, Clone)]
pub struct RoomStore {
    rooms: Vec<Room>,
    next_id: RoomId,
    defaults: RoomDefaults,
    canvas: CanvasSpace,
    events: Arc<EventBus>,
}

impl RoomStore {
    /// Creates an empty store with its own event bus.
    pub fn new(settings: &DesignerSettings) -> Self {
        Self::with_event_bus(settings, Arc::new(EventBus::new()))
    }

    /// Creates an empty store publishing on a shared event bus.
    pub fn with_event_bus(settings: &DesignerSettings, events: Arc<EventBus>) -> Self {
        Self {
            rooms: Vec::new(),
            next_id: 1,
            defaults: RoomDefaults {
                length: settings.default_length,
                width: settings.default_width,
                stagger: settings.stagger.clone(),
            },
            canvas: CanvasSpace::new(
                settings.canvas_width,
                settings.canvas_height,
                settings.pixels_per_foot,
            ),
            events,
        }
    }

    /// Appends a room of `category` with default dimensions at the next
    /// stagger position, clamped into the canvas.
    pub fn add_room(&mut self, category: &str) -> Room {
        let id = self.next_id;
        self.next_id += 1;

        let mut room = Room {
            id,
            name: category.to_string(),
            length: self.defaults.length,
            width: self.defaults.width,
            position: Point::default(),
        };
        let staggered = self.defaults.stagger_position(self.rooms.len());
        room.position = self.canvas.clamp(&room, staggered);

        tracing::debug!(
            "Added room {} '{}' at ({}, {})",
            id,
            room.name,
            room.position.x,
            room.position.y
        );
        self.rooms.push(room.clone());
        self.events.publish(LayoutEvent::RoomAdded {
            id,
            name: room.name.clone(),
        });
        room
    }

    /// Sets `field` of room `id` from raw input text.
    ///
    /// Unparsable input becomes 0 (see [`parse_dimension`]). Unknown ids are
    /// a no-op.
    pub fn update_room(&mut self, id: RoomId, field: RoomField, raw_value: &str) {
        let Some(room) = self.rooms.iter_mut().find(|r| r.id == id) else {
            tracing::debug!("Ignoring {} edit for missing room {}", field, id);
            return;
        };

        let value = parse_dimension(raw_value);
        match field {
            RoomField::Length => room.length = value,
            RoomField::Width => room.width = value,
        }

        tracing::debug!("Room {} {} = {}", id, field, value);
        let event = LayoutEvent::RoomResized {
            id,
            length: room.length,
            width: room.width,
        };
        self.events.publish(event);
    }

    /// Removes room `id` if present. Returns whether a room was removed.
    pub fn remove_room(&mut self, id: RoomId) -> bool {
        let before = self.rooms.len();
        self.rooms.retain(|r| r.id != id);
        let removed = self.rooms.len() != before;

        if removed {
            tracing::debug!("Removed room {}", id);
            self.events.publish(LayoutEvent::RoomRemoved { id });
        } else {
            tracing::debug!("Ignoring removal of missing room {}", id);
        }
        removed
    }

    /// Writes a drag-driven position for room `id`.
    ///
    /// Callers pass an already clamped position. Returns the updated room,
    /// or `None` for an unknown id.
    pub fn set_position(&mut self, id: RoomId, position: Point) -> Option<&Room> {
        let room = self.rooms.iter_mut().find(|r| r.id == id)?;
        room.position = position;
        tracing::trace!("Room {} moved to ({}, {})", id, position.x, position.y);
        self.events.publish(LayoutEvent::RoomMoved {
            id,
            x: position.x,
            y: position.y,
        });
        Some(&*room)
    }

    /// Rooms in insertion order.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Looks up a room by id.
    pub fn get(&self, id: RoomId) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Total floor area in square feet, recomputed on every call.
    pub fn total_area(&self) -> f64 {
        geometry::total_area(&self.rooms)
    }

    /// Flattened `{name, length, width, area}` records in insertion order.
    pub fn export_layout(&self) -> Vec<LayoutEntry> {
        self.rooms.iter().map(Room::to_layout_entry).collect()
    }

    /// The canvas rooms are positioned on.
    pub fn canvas(&self) -> &CanvasSpace {
        &self.canvas
    }

    pub fn defaults(&self) -> &RoomDefaults {
        &self.defaults
    }

    /// The bus mutations are published on.
    pub fn events(&self) -> &Arc<EventBus> {
        &self.events
    }
}
