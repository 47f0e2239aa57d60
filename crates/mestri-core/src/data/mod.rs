//! Data models shared between the designer and the hosting form
//!
//! This module provides:
//! - The exported room layout handed to plan generation
//! - The project form and the plan request built from it

pub mod layout;
pub mod plan;

pub use layout::{layout_total_area, LayoutEntry};
pub use plan::{Complexity, Facing, ProjectForm, ProjectPlanRequest, MAX_AREA, MIN_AREA};
