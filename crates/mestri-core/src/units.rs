//! Unit conversion utilities
//!
//! Rooms are measured in feet. The project form and the plan backend speak
//! square yards.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Square feet in one square yard.
pub const SQ_FT_PER_SQ_YARD: f64 = 9.0;

/// Area unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AreaUnit {
    /// Square feet (designer readouts)
    #[default]
    SqFeet,
    /// Square yards (project form)
    SqYards,
}

impl AreaUnit {
    /// Short suffix used in readouts
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::SqFeet => "sqft",
            Self::SqYards => "sq yards",
        }
    }
}

impl fmt::Display for AreaUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.suffix())
    }
}

impl FromStr for AreaUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sqft" | "sq_feet" | "ft2" => Ok(Self::SqFeet),
            "sqyd" | "sq_yards" | "yd2" => Ok(Self::SqYards),
            _ => Err(format!("Unknown area unit: {}", s)),
        }
    }
}

/// Convert an area between units
pub fn convert_area(value: f64, from: AreaUnit, to: AreaUnit) -> f64 {
    match (from, to) {
        (AreaUnit::SqFeet, AreaUnit::SqYards) => value / SQ_FT_PER_SQ_YARD,
        (AreaUnit::SqYards, AreaUnit::SqFeet) => value * SQ_FT_PER_SQ_YARD,
        _ => value,
    }
}

/// Format an area rounded to the nearest whole unit, e.g. `"270 sqft"`
pub fn format_area(value: f64, unit: AreaUnit) -> String {
    format!("{} {}", value.round() as i64, unit.suffix())
}
