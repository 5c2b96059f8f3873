//! # Vaultarc
//!
//! Models a vaulted ceiling as an elliptical arc inside a room's wall outline.
//!
//! A run:
//! - builds the reference ellipses from the room measurements
//! - samples the chosen arc
//! - prints ceiling heights at regular horizontal intervals
//! - plots the wall outline, the arc and the ellipse's foci to SVG
//!
//! ## Architecture
//!
//! Vaultarc is organized as a workspace with multiple crates:
//!
//! 1. **vaultarc-core** - Errors, constants, unit helpers
//! 2. **vaultarc-designer** - Ellipse model, wall outline, measurements, SVG plotting
//! 3. **vaultarc-settings** - Run configuration with JSON/TOML persistence
//! 4. **vaultarc** - Driver, report formatting and the main binary

pub mod driver;
pub mod report;

pub use driver::{build_ellipse, ceiling_plot, compute, load_config, run, CeilingProfile};
pub use vaultarc_core::{Error, GeometryError, Result};
pub use vaultarc_designer::{
    Ellipse, EllipseCenter, EllipseSpec, Half, HeightFunction, MeasurementRow, MeasurementTable,
    PathParams, Plot, Point, WallOutline,
};
pub use vaultarc_settings::{ArcVariant, Config};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Environment variable naming an optional JSON/TOML config file
pub const CONFIG_ENV_VAR: &str = "VAULTARC_CONFIG";

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Output on stderr, keeping stdout for the measurement table
/// - RUST_LOG environment variable support (defaults to `info`)
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
