//! Error handling for Modern Mestri
//!
//! Provides error types for the layers that can actually fail:
//! - Layout errors (malformed designer commands)
//! - Plan errors (project form validation)
//!
//! The room designer itself never fails: invalid numeric input is coerced
//! and stale ids are ignored. All error types use `thiserror`.

use thiserror::Error;

/// Layout error type
///
/// Raised when a textual designer command names something the layout
/// does not know about.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// Field name is neither `length` nor `width`
    #[error("Unknown room field '{field}' (expected 'length' or 'width')")]
    UnknownField {
        /// The field name that was supplied.
        field: String,
    },

    /// A room id could not be parsed
    #[error("Invalid room id '{value}'")]
    InvalidRoomId {
        /// The raw id text.
        value: String,
    },

    /// A pointer coordinate could not be parsed
    #[error("Invalid coordinate '{value}'")]
    InvalidCoordinate {
        /// The raw coordinate text.
        value: String,
    },
}

/// Plan error type
///
/// Represents validation failures when turning the project form into a
/// plan request.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlanError {
    /// Area is missing or not a number
    #[error("Area must be a number, got '{value}'")]
    InvalidArea {
        /// The raw area text.
        value: String,
    },

    /// Area outside the realistic range
    #[error("Please enter a realistic area ({min} - {max} sq yards), got {area}")]
    AreaOutOfRange {
        /// The parsed area.
        area: f64,
        /// Lower bound (inclusive).
        min: f64,
        /// Upper bound (inclusive).
        max: f64,
    },

    /// Floors is missing, not an integer, or zero
    #[error("Floors must be a positive integer, got '{value}'")]
    InvalidFloors {
        /// The raw floors text.
        value: String,
    },

    /// Complexity is not one of the known levels
    #[error("Unknown complexity '{value}'")]
    UnknownComplexity {
        /// The raw complexity text.
        value: String,
    },

    /// Facing is not a compass direction
    #[error("Unknown facing '{value}'")]
    UnknownFacing {
        /// The raw facing text.
        value: String,
    },

    /// Form field name is not recognised
    #[error("Unknown form field '{field}'")]
    UnknownFormField {
        /// The field name.
        field: String,
    },
}

/// Main error type for Modern Mestri
///
/// Umbrella over the domain errors plus I/O and serialization.
#[derive(Error, Debug)]
pub enum Error {
    /// Layout error
    #[error(transparent)]
    Layout(#[from] LayoutError),

    /// Plan error
    #[error(transparent)]
    Plan(#[from] PlanError),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a layout error
    pub fn is_layout_error(&self) -> bool {
        matches!(self, Error::Layout(_))
    }

    /// Check if this is a plan validation error
    pub fn is_plan_error(&self) -> bool {
        matches!(self, Error::Plan(_))
    }
}

/// Result type alias for Modern Mestri operations
pub type Result<T> = std::result::Result<T, Error>;
