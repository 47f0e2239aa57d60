//! Canvas view adapter: rooms as positioned rectangles, plus the
//! single-pointer drag protocol.
//!
//! ```text
//! Idle --PointerDown on room--> Dragging --PointerUp (anywhere)--> Idle
//!                                  |  ^
//!                                  +--+ PointerMove: reposition one room
//! ```

use std::fmt::Write as _;

use crate::geometry::{self, Point, Size};
use crate::room::{Room, RoomId};
use crate::room_store::RoomStore;
use crate::viewport::Viewport;

/// Render model for one room rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomRect {
    pub id: RoomId,
    /// Top-left in canvas pixels
    pub position: Point,
    /// Footprint in canvas pixels
    pub size: Size,
    /// Category and dimensions, e.g. `"bedroom\n12'×10'"`
    pub label: String,
}

impl RoomRect {
    fn from_room(room: &Room, size: Size) -> Self {
        Self {
            id: room.id,
            position: room.position,
            size,
            label: format!("{}\n{}'×{}'", room.name, room.length, room.width),
        }
    }

    /// Whether a canvas-space point falls on this rectangle.
    pub fn contains(&self, point: Point) -> bool {
        geometry::contains(self.position, self.size, point)
    }
}

/// Drag state machine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        room_id: RoomId,
        /// Pointer position at PointerDown, canvas space
        pointer_start: Point,
        /// Pointer minus room top-left at PointerDown
        grab_offset: Point,
    },
}

/// Spatial view of the room store.
#[derive(Debug, Clone, Default)]
pub struct CanvasView {
    rects: Vec<RoomRect>,
    drag: DragState,
    viewport: Viewport,
}

impl CanvasView {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            ..Self::default()
        }
    }

    /// Rebuilds every rectangle from the store.
    pub fn render(&mut self, store: &RoomStore) {
        let canvas = store.canvas();
        self.rects = store
            .rooms()
            .iter()
            .map(|room| RoomRect::from_room(room, canvas.footprint(room)))
            .collect();
    }

    /// Starts a drag if the pointer lands on a room.
    ///
    /// The top-most (last rendered) room wins when rooms overlap. Returns
    /// the grabbed room id.
    pub fn pointer_down(&mut self, page: Point, store: &RoomStore) -> Option<RoomId> {
        let pointer = self.viewport.page_to_canvas(page);
        let rect = self.rects.iter().rev().find(|r| r.contains(pointer))?;
        let room = store.get(rect.id)?;

        let grab_offset = pointer - room.position;
        self.drag = DragState::Dragging {
            room_id: room.id,
            pointer_start: pointer,
            grab_offset,
        };
        tracing::debug!(
            "Drag start on room {} (grab offset {}, {})",
            room.id,
            grab_offset.x,
            grab_offset.y
        );
        Some(room.id)
    }

    /// Moves the dragged room to follow the pointer, clamped to the canvas.
    ///
    /// Only the dragged rectangle is refreshed; the returned rect is the
    /// updated one. Returns `None` when idle or when the dragged room no
    /// longer exists.
    pub fn pointer_move(&mut self, page: Point, store: &mut RoomStore) -> Option<&RoomRect> {
        let DragState::Dragging {
            room_id,
            pointer_start,
            grab_offset,
        } = self.drag
        else {
            return None;
        };

        let pointer = self.viewport.page_to_canvas(page);
        let proposed = geometry::drag_delta(pointer_start, pointer, grab_offset);

        let canvas = *store.canvas();
        let room = store.get(room_id)?;
        let size = canvas.footprint(room);
        let clamped = geometry::clamp_position(proposed, size, canvas.size);
        let room = store.set_position(room_id, clamped)?;

        let updated = RoomRect::from_room(room, size);
        let index = match self.rects.iter().position(|r| r.id == room_id) {
            Some(index) => {
                self.rects[index] = updated;
                index
            }
            None => {
                self.rects.push(updated);
                self.rects.len() - 1
            }
        };
        self.rects.get(index)
    }

    /// Ends any drag. Safe to call when idle.
    pub fn pointer_up(&mut self) {
        if let DragState::Dragging { room_id, .. } = self.drag {
            tracing::debug!("Drag end on room {}", room_id);
        }
        self.drag = DragState::Idle;
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }

    /// Rectangles from the last render, in paint order.
    pub fn rects(&self) -> &[RoomRect] {
        &self.rects
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    /// Plain-text rendering, one line per rectangle.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for rect in &self.rects {
            let _ = writeln!(
                out,
                "#{:<3} {:<24} at ({}, {}) size {}x{} px",
                rect.id,
                rect.label.replace('\n', " "),
                rect.position.x,
                rect.position.y,
                rect.size.width,
                rect.size.height
            );
        }
        out
    }
}
