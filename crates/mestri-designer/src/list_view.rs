//! List view adapter: one editable row per room.
//!
//! Rows are rebuilt from the store on every render; the view keeps no room
//! state of its own beyond the last rendered snapshot.

use std::fmt::Write as _;

use mestri_core::AreaUnit;

use crate::room::{RoomField, RoomId};
use crate::room_store::RoomStore;

/// Render model for one list row.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomRow {
    pub id: RoomId,
    /// `"{name} {id}"`
    pub label: String,
    /// Current value of the length input
    pub length: String,
    /// Current value of the width input
    pub width: String,
    /// Computed area readout in square feet
    pub area: String,
}

/// User interaction on a list row.
#[derive(Debug, Clone, PartialEq)]
pub enum ListEvent {
    /// A length or width input changed.
    Edit {
        id: RoomId,
        field: RoomField,
        raw: String,
    },
    /// The row's remove control was activated.
    Remove { id: RoomId },
}

/// Tabular view of the room store.
#[derive(Debug, Clone, Default)]
pub struct ListView {
    rows: Vec<RoomRow>,
}

impl ListView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds every row from the store.
    pub fn render(&mut self, store: &RoomStore) {
        self.rows = store
            .rooms()
            .iter()
            .map(|room| RoomRow {
                id: room.id,
                label: room.label(),
                length: room.length.to_string(),
                width: room.width.to_string(),
                area: room.area().to_string(),
            })
            .collect();
    }

    /// Forwards a row interaction to the store.
    pub fn dispatch(&self, event: ListEvent, store: &mut RoomStore) {
        match event {
            ListEvent::Edit { id, field, raw } => store.update_room(id, field, &raw),
            ListEvent::Remove { id } => {
                store.remove_room(id);
            }
        }
    }

    /// Rows from the last render.
    pub fn rows(&self) -> &[RoomRow] {
        &self.rows
    }

    /// Plain-text rendering, one line per row.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for row in &self.rows {
            let _ = writeln!(
                out,
                "{:<16} {:>6} L x {:>6} W  {:>8} {}",
                row.label,
                row.length,
                row.width,
                row.area,
                AreaUnit::SqFeet
            );
        }
        out
    }
}
