//! Vaultarc Settings Crate
//!
//! Holds the room fixtures, arc parameters and plot options that drive a
//! run, with JSON/TOML persistence and validation.

pub mod config;
pub mod error;

pub use config::{
    ArcSettings, ArcVariant, Config, MeasurementSettings, PlotSettings, RoomSettings,
};
pub use error::{ConfigError, SettingsError, SettingsResult};
