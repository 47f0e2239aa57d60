//! Room entity and the numeric-input policy for its dimensions.

use std::fmt;
use std::str::FromStr;

use mestri_core::{LayoutEntry, LayoutError};

use crate::geometry::Point;

/// Identifier assigned by the room store. Never reused within a session.
pub type RoomId = u64;

/// A rectangular room on the layout canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    pub id: RoomId,
    /// Category label, e.g. `"bedroom"`
    pub name: String,
    /// Extent along x, in feet
    pub length: f64,
    /// Extent along y, in feet
    pub width: f64,
    /// Top-left corner in canvas pixels
    pub position: Point,
}

impl Room {
    /// Floor area in square feet.
    pub fn area(&self) -> f64 {
        self.length * self.width
    }

    /// Label shown in the list view, e.g. `"bedroom 1"`.
    pub fn label(&self) -> String {
        format!("{} {}", self.name, self.id)
    }

    /// Flat record for the exported layout.
    pub fn to_layout_entry(&self) -> LayoutEntry {
        LayoutEntry::new(self.name.clone(), self.length, self.width)
    }
}

/// The room dimensions editable from the list view.
///
/// Position is deliberately absent: it only changes through drag gestures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoomField {
    Length,
    Width,
}

impl fmt::Display for RoomField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Length => write!(f, "length"),
            Self::Width => write!(f, "width"),
        }
    }
}

impl FromStr for RoomField {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "length" | "l" => Ok(Self::Length),
            "width" | "w" => Ok(Self::Width),
            _ => Err(LayoutError::UnknownField {
                field: s.to_string(),
            }),
        }
    }
}

/// Parses a dimension typed into a numeric input.
///
/// Leading whitespace is skipped and the longest numeric prefix is used, so
/// `"15ft"` reads as 15. Anything without a numeric prefix, and any
/// negative or non-finite result, becomes 0. Zero-extent rooms are allowed.
pub fn parse_dimension(raw: &str) -> f64 {
    let trimmed = raw.trim_start();
    let prefix = numeric_prefix(trimmed);
    match prefix.parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => value,
        _ => 0.0,
    }
}

fn numeric_prefix(s: &str) -> &str {
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return "";
    }

    // Exponent only counts when followed by at least one digit.
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    &s[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_numbers() {
        assert_eq!(parse_dimension("15"), 15.0);
        assert_eq!(parse_dimension(" 12.5"), 12.5);
        assert_eq!(parse_dimension(".5"), 0.5);
        assert_eq!(parse_dimension("1e1"), 10.0);
    }

    #[test]
    fn test_parse_numeric_prefix() {
        assert_eq!(parse_dimension("15ft"), 15.0);
        assert_eq!(parse_dimension("3.5.2"), 3.5);
        assert_eq!(parse_dimension("2e"), 2.0);
        assert_eq!(parse_dimension("7."), 7.0);
    }

    #[test]
    fn test_parse_invalid_coerces_to_zero() {
        assert_eq!(parse_dimension("abc"), 0.0);
        assert_eq!(parse_dimension(""), 0.0);
        assert_eq!(parse_dimension("."), 0.0);
        assert_eq!(parse_dimension("-4"), 0.0);
        assert_eq!(parse_dimension("1e999"), 0.0);
    }

    #[test]
    fn test_room_field_parse() {
        assert_eq!("Length".parse::<RoomField>(), Ok(RoomField::Length));
        assert_eq!("w".parse::<RoomField>(), Ok(RoomField::Width));
        assert!(matches!(
            "x".parse::<RoomField>(),
            Err(LayoutError::UnknownField { .. })
        ));
    }

    #[test]
    fn test_label_and_entry() {
        let room = Room {
            id: 3,
            name: "study".to_string(),
            length: 9.0,
            width: 8.0,
            position: Point::default(),
        };
        assert_eq!(room.label(), "study 3");
        assert_eq!(room.to_layout_entry(), LayoutEntry::new("study", 9.0, 8.0));
    }
}
