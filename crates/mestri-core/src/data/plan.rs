//! Project form and plan request.
//!
//! The form holds raw field text exactly as the user typed it. Converting it
//! into a [`ProjectPlanRequest`] is where validation happens.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::layout::LayoutEntry;
use crate::error::{PlanError, Result};

/// Smallest realistic plot, in square yards.
pub const MIN_AREA: f64 = 25.0;

/// Largest realistic plot, in square yards.
pub const MAX_AREA: f64 = 2500.0;

/// Construction complexity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    /// Basic finishes
    Low,
    /// Standard finishes
    #[default]
    Medium,
    /// Premium finishes
    High,
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

impl FromStr for Complexity {
    type Err = PlanError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(PlanError::UnknownComplexity {
                value: s.to_string(),
            }),
        }
    }
}

/// Direction the plot faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Facing {
    #[default]
    North,
    South,
    East,
    West,
}

impl fmt::Display for Facing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::North => write!(f, "north"),
            Self::South => write!(f, "south"),
            Self::East => write!(f, "east"),
            Self::West => write!(f, "west"),
        }
    }
}

impl FromStr for Facing {
    type Err = PlanError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "north" => Ok(Self::North),
            "south" => Ok(Self::South),
            "east" => Ok(Self::East),
            "west" => Ok(Self::West),
            _ => Err(PlanError::UnknownFacing {
                value: s.to_string(),
            }),
        }
    }
}

/// Body of the plan-generation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectPlanRequest {
    /// Plot area in square yards
    pub area: f64,
    /// Number of floors
    pub floors: u32,
    /// Budget, 0 when not given
    pub budget: f64,
    /// Target timeline in weeks, 0 when not given
    pub timeline: u32,
    pub complexity: Complexity,
    pub facing: Facing,
    /// Rooms from the layout designer, omitted until a layout is saved
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_layout: Option<Vec<LayoutEntry>>,
}

impl ProjectPlanRequest {
    /// Serialize to the JSON body posted to the plan endpoint.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// The hosting project form
///
/// Numeric fields are kept as the raw text of their inputs. The designer
/// writes into `area` and `custom_layout` on save.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectForm {
    pub area: String,
    pub floors: String,
    pub budget: String,
    pub timeline: String,
    pub complexity: Complexity,
    pub facing: Facing,
    pub custom_layout: Option<Vec<LayoutEntry>>,
}

impl Default for ProjectForm {
    fn default() -> Self {
        Self {
            area: String::new(),
            floors: "1".to_string(),
            budget: String::new(),
            timeline: String::new(),
            complexity: Complexity::default(),
            facing: Facing::default(),
            custom_layout: None,
        }
    }
}

impl ProjectForm {
    /// Creates an empty form with default selections.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a field by its input name.
    pub fn set_field(&mut self, field: &str, value: &str) -> Result<()> {
        match field {
            "area" => self.area = value.to_string(),
            "floors" => self.floors = value.to_string(),
            "budget" => self.budget = value.to_string(),
            "timeline" => self.timeline = value.to_string(),
            "complexity" => self.complexity = value.parse()?,
            "facing" => self.facing = value.parse()?,
            _ => {
                return Err(PlanError::UnknownFormField {
                    field: field.to_string(),
                }
                .into())
            }
        }
        Ok(())
    }

    /// Validates the form and builds the plan request.
    pub fn to_request(&self) -> Result<ProjectPlanRequest> {
        let area: f64 = self
            .area
            .trim()
            .parse()
            .ok()
            .filter(|v: &f64| v.is_finite())
            .ok_or_else(|| PlanError::InvalidArea {
                value: self.area.clone(),
            })?;

        if !(MIN_AREA..=MAX_AREA).contains(&area) {
            return Err(PlanError::AreaOutOfRange {
                area,
                min: MIN_AREA,
                max: MAX_AREA,
            }
            .into());
        }

        let floors = self
            .floors
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|f| *f > 0)
            .ok_or_else(|| PlanError::InvalidFloors {
                value: self.floors.clone(),
            })?;

        // Optional fields fall back to 0 like blank inputs do.
        let budget = self
            .budget
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .unwrap_or(0.0);
        let timeline = self.timeline.trim().parse::<u32>().unwrap_or(0);

        Ok(ProjectPlanRequest {
            area,
            floors,
            budget,
            timeline,
            complexity: self.complexity,
            facing: self.facing,
            custom_layout: self.custom_layout.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn filled_form() -> ProjectForm {
        ProjectForm {
            area: "200".to_string(),
            floors: "2".to_string(),
            ..ProjectForm::default()
        }
    }

    #[test]
    fn test_valid_request() {
        let request = filled_form().to_request().unwrap();
        assert_eq!(request.area, 200.0);
        assert_eq!(request.floors, 2);
        assert_eq!(request.budget, 0.0);
        assert_eq!(request.timeline, 0);
        assert_eq!(request.complexity, Complexity::Medium);
        assert!(request.custom_layout.is_none());
    }

    #[test]
    fn test_area_bounds_are_inclusive() {
        let mut form = filled_form();
        form.area = "25".to_string();
        assert!(form.to_request().is_ok());
        form.area = "2500".to_string();
        assert!(form.to_request().is_ok());
        form.area = "24.9".to_string();
        assert!(matches!(
            form.to_request(),
            Err(Error::Plan(PlanError::AreaOutOfRange { .. }))
        ));
    }

    #[test]
    fn test_non_numeric_area() {
        let mut form = filled_form();
        form.area = "big".to_string();
        assert!(matches!(
            form.to_request(),
            Err(Error::Plan(PlanError::InvalidArea { .. }))
        ));
    }

    #[test]
    fn test_zero_floors_rejected() {
        let mut form = filled_form();
        form.floors = "0".to_string();
        assert!(matches!(
            form.to_request(),
            Err(Error::Plan(PlanError::InvalidFloors { .. }))
        ));
    }

    #[test]
    fn test_custom_layout_omitted_when_absent() {
        let json = filled_form().to_request().unwrap().to_json().unwrap();
        assert!(!json.contains("custom_layout"));
        assert!(json.contains("\"complexity\": \"medium\""));
    }

    #[test]
    fn test_custom_layout_included_when_saved() {
        let mut form = filled_form();
        form.custom_layout = Some(vec![LayoutEntry::new("bedroom", 15.0, 10.0)]);
        let json = form.to_request().unwrap().to_json().unwrap();
        assert!(json.contains("custom_layout"));
        assert!(json.contains("bedroom"));
    }

    #[test]
    fn test_set_field() {
        let mut form = ProjectForm::new();
        form.set_field("facing", "East").unwrap();
        form.set_field("budget", "50000").unwrap();
        assert_eq!(form.facing, Facing::East);
        assert_eq!(form.budget, "50000");
        assert!(form.set_field("color", "red").is_err());
        assert!(form.set_field("complexity", "extreme").is_err());
    }
}
