//! Modern Mestri Settings Crate
//!
//! Handles application configuration and settings persistence.

pub mod config;
pub mod error;
pub mod persistence;

pub use config::{Config, DesignerSettings, LoggingSettings, StaggerSettings};
pub use error::{SettingsError, SettingsResult};
pub use persistence::SettingsPersistence;
