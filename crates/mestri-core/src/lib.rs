//! # Modern Mestri Core
//!
//! Core types, errors, and events for Modern Mestri.
//! Provides the data exchanged between the room-layout designer, the hosting
//! project form and the plan-generation backend.

pub mod data;
pub mod error;
pub mod event_bus;
pub mod units;

pub use data::{
    layout_total_area, Complexity, Facing, LayoutEntry, ProjectForm, ProjectPlanRequest,
};

pub use error::{Error, LayoutError, PlanError, Result};

pub use event_bus::{EventBus, EventCategory, EventFilter, LayoutEvent, SubscriptionId};

pub use units::{convert_area, format_area, AreaUnit};
