//! # Modern Mestri
//!
//! Room-layout designer for the Modern Mestri project planner, hosted in a
//! small line-oriented shell.
//!
//! ## Architecture
//!
//! Modern Mestri is organized as a workspace with multiple crates:
//!
//! 1. **mestri-core** - Layout and plan-request types, errors, events
//! 2. **mestri-settings** - Configuration loading and persistence
//! 3. **mestri-designer** - Room store, geometry, list and canvas views, controller
//! 4. **mestri** - Main binary that hosts the designer next to the project form

pub mod shell;

pub use mestri_core::{
    Complexity, Error, EventBus, Facing, LayoutEntry, LayoutEvent, ProjectForm,
    ProjectPlanRequest, Result,
};
pub use mestri_designer::{DesignerController, HostForm, Point, RoomField, RoomId};
pub use mestri_settings::{Config, DesignerSettings, SettingsPersistence};
pub use shell::{Reply, Shell};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging
///
/// Sets up structured logging with:
/// - Output on stderr so shell replies on stdout stay clean
/// - RUST_LOG environment variable support
/// - `default_level` applied when RUST_LOG does not name a level
pub fn init_logging(default_level: &str) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .map_err(|e| anyhow::anyhow!("invalid log level '{}': {}", default_level, e))?;

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install logger: {}", e))?;

    Ok(())
}
