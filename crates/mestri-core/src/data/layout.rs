//! Exported room layout.

use serde::{Deserialize, Serialize};

/// One room in an exported layout
///
/// This is the flat record attached to the plan request as `custom_layout`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutEntry {
    /// Category label, e.g. `"bedroom"`
    pub name: String,
    /// Length in feet
    pub length: f64,
    /// Width in feet
    pub width: f64,
    /// `length * width` in square feet
    pub area: f64,
}

impl LayoutEntry {
    /// Creates an entry, deriving the area from the dimensions.
    pub fn new(name: impl Into<String>, length: f64, width: f64) -> Self {
        Self {
            name: name.into(),
            length,
            width,
            area: length * width,
        }
    }
}

/// Sum of the entry areas in square feet.
pub fn layout_total_area(entries: &[LayoutEntry]) -> f64 {
    entries.iter().map(|e| e.area).sum()
}
