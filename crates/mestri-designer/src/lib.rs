//! # Modern Mestri Designer
//!
//! Interactive room-layout designer: rectangular rooms that can be added,
//! resized, removed and dragged on a 2D canvas, shown through two views
//! kept in sync with a single store. The total floor area is fed back into
//! the hosting project form.
//!
//! ## Architecture
//!
//! ```text
//! DesignerController (open/close, add, save/apply)
//!   ├── RoomStore (rooms, id allocation, change events)
//!   ├── ListView  (editable rows)   ── edits ──> RoomStore
//!   └── CanvasView (rectangles, drag) ─ moves ─> RoomStore
//!
//! geometry (scaling, clamping, drag arithmetic, area)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use mestri_core::ProjectForm;
//! use mestri_designer::{DesignerController, RoomField};
//! use mestri_settings::DesignerSettings;
//!
//! let mut designer = DesignerController::new(&DesignerSettings::default());
//! designer.open();
//! let bedroom = designer.add_room("bedroom");
//! designer.edit_room(bedroom.id, RoomField::Length, "15");
//!
//! let mut form = ProjectForm::new();
//! let outcome = designer.save(&mut form);
//! assert_eq!(outcome.total_area, 150);
//! assert_eq!(form.area, "150");
//! ```

pub mod canvas_view;
pub mod controller;
pub mod geometry;
pub mod host;
pub mod list_view;
pub mod room;
pub mod room_store;
pub mod viewport;

pub use canvas_view::{CanvasView, DragState, RoomRect};
pub use controller::{DesignerController, SaveOutcome};
pub use geometry::{clamp_position, drag_delta, to_pixel_size, total_area, CanvasSpace, Point, Size};
pub use host::HostForm;
pub use list_view::{ListEvent, ListView, RoomRow};
pub use room::{parse_dimension, Room, RoomField, RoomId};
pub use room_store::{RoomDefaults, RoomStore};
pub use viewport::Viewport;
