//! Run configuration for Vaultarc
//!
//! Configuration is organized into logical sections:
//! - Room fixture (wall outline measurements)
//! - Arc parameters (which ellipse, which angular range, how many samples)
//! - Measurement table interval
//! - Plot output
//!
//! The defaults reproduce the measured reference room. They are fixtures for
//! that room, not general-purpose defaults.

use std::f64::consts::PI;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use vaultarc_core::constants::{
    ARC_RISE_IN, DEFAULT_MEASUREMENT_INTERVAL_IN, DEFAULT_PLOT_SIZE_PX, MAX_MEASUREMENT_ROWS,
    ROOM_CEILING_RUN_IN, ROOM_LOW_WALL_HEIGHT_IN, ROOM_PEAK_HEIGHT_IN, ROOM_WIDTH_IN,
    VIEW_PADDING,
};

use crate::error::{ConfigError, SettingsResult};

/// Room cross-section measurements, in inches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoomSettings {
    /// Floor width
    pub width_in: f64,
    /// Height of the horizontal ceiling segment
    pub low_wall_height_in: f64,
    /// Length of the horizontal ceiling segment
    pub ceiling_run_in: f64,
    /// Ceiling height at x = 0
    pub peak_height_in: f64,
}

impl Default for RoomSettings {
    fn default() -> Self {
        Self {
            width_in: ROOM_WIDTH_IN,
            low_wall_height_in: ROOM_LOW_WALL_HEIGHT_IN,
            ceiling_run_in: ROOM_CEILING_RUN_IN,
            peak_height_in: ROOM_PEAK_HEIGHT_IN,
        }
    }
}

impl RoomSettings {
    /// Horizontal middle of the flat ceiling segment.
    pub fn ceiling_midpoint_x(&self) -> f64 {
        self.width_in - self.ceiling_run_in / 2.0
    }
}

/// Which of the two reference arcs to trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArcVariant {
    /// Ellipse centered on the left wall; the arc ends on the walls.
    Walls,
    /// Ellipse shifted right so one vertex lands on the flat ceiling segment.
    #[default]
    CeilingVertex,
}

impl fmt::Display for ArcVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Walls => write!(f, "walls"),
            Self::CeilingVertex => write!(f, "ceiling vertex"),
        }
    }
}

/// Arc parameters. Angles are stored as multiples of π.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArcSettings {
    pub variant: ArcVariant,
    /// Ellipse center x for [`ArcVariant::Walls`]
    pub walls_center_x_in: f64,
    /// Ellipse center x for [`ArcVariant::CeilingVertex`]
    pub vertex_center_x_in: f64,
    /// Semi-axis along y
    pub rise_in: f64,
    pub walls_t0_pi: f64,
    pub vertex_t0_pi: f64,
    pub t1_pi: f64,
    pub samples: usize,
}

impl Default for ArcSettings {
    fn default() -> Self {
        Self {
            variant: ArcVariant::CeilingVertex,
            walls_center_x_in: 0.0,
            vertex_center_x_in: 24.0,
            rise_in: ARC_RISE_IN,
            walls_t0_pi: 1.5,
            vertex_t0_pi: 1.43,
            t1_pi: 2.0,
            samples: 32,
        }
    }
}

impl ArcSettings {
    pub fn center_x(&self, variant: ArcVariant) -> f64 {
        match variant {
            ArcVariant::Walls => self.walls_center_x_in,
            ArcVariant::CeilingVertex => self.vertex_center_x_in,
        }
    }

    /// Start angle in radians.
    pub fn t0(&self, variant: ArcVariant) -> f64 {
        match variant {
            ArcVariant::Walls => self.walls_t0_pi * PI,
            ArcVariant::CeilingVertex => self.vertex_t0_pi * PI,
        }
    }

    /// End angle in radians.
    pub fn t1(&self) -> f64 {
        self.t1_pi * PI
    }
}

/// Measurement table settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeasurementSettings {
    /// Horizontal spacing between readings
    pub interval_in: f64,
}

impl Default for MeasurementSettings {
    fn default() -> Self {
        Self {
            interval_in: DEFAULT_MEASUREMENT_INTERVAL_IN,
        }
    }
}

/// Plot output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotSettings {
    pub width_px: u32,
    pub height_px: u32,
    /// Fraction of the canvas kept free on each side
    pub padding: f64,
    pub output_path: PathBuf,
}

impl Default for PlotSettings {
    fn default() -> Self {
        Self {
            width_px: DEFAULT_PLOT_SIZE_PX,
            height_px: DEFAULT_PLOT_SIZE_PX,
            padding: VIEW_PADDING,
            output_path: PathBuf::from("vaultarc.svg"),
        }
    }
}

/// Complete run configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub room: RoomSettings,
    pub arc: ArcSettings,
    pub measurement: MeasurementSettings,
    pub plot: PlotSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Center of the ellipse for `variant`, on the flat ceiling's height.
    pub fn ellipse_center(&self, variant: ArcVariant) -> (f64, f64) {
        (self.arc.center_x(variant), self.room.low_wall_height_in)
    }

    /// Semi-axis along x for `variant`: from the center to the flat ceiling's midpoint.
    pub fn semi_axis_a(&self, variant: ArcVariant) -> f64 {
        self.room.ceiling_midpoint_x() - self.arc.center_x(variant)
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)?;

        let config: Self = match Format::of(path)? {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match Format::of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("room.width_in", self.room.width_in),
            ("room.low_wall_height_in", self.room.low_wall_height_in),
            ("room.ceiling_run_in", self.room.ceiling_run_in),
            ("room.peak_height_in", self.room.peak_height_in),
            ("arc.rise_in", self.arc.rise_in),
            ("measurement.interval_in", self.measurement.interval_in),
        ];
        for (key, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::out_of_range(key, value));
            }
        }

        if self.room.ceiling_run_in >= self.room.width_in {
            return Err(ConfigError::out_of_range(
                "room.ceiling_run_in",
                self.room.ceiling_run_in,
            ));
        }

        // Every arc ends at the ceiling midpoint; the table runs from 0 to there.
        let rows = (self.room.ceiling_midpoint_x() / self.measurement.interval_in).ceil();
        if rows > MAX_MEASUREMENT_ROWS as f64 {
            return Err(ConfigError::out_of_range(
                "measurement.interval_in",
                self.measurement.interval_in,
            ));
        }

        if self.arc.samples < 2 {
            return Err(ConfigError::out_of_range("arc.samples", self.arc.samples));
        }

        for variant in [ArcVariant::Walls, ArcVariant::CeilingVertex] {
            let a = self.semi_axis_a(variant);
            if !(a > 0.0) {
                let key = match variant {
                    ArcVariant::Walls => "arc.walls_center_x_in",
                    ArcVariant::CeilingVertex => "arc.vertex_center_x_in",
                };
                return Err(ConfigError::out_of_range(key, self.arc.center_x(variant)));
            }
            if !(self.arc.t0(variant) < self.arc.t1()) {
                return Err(ConfigError::out_of_range("arc.t1_pi", self.arc.t1_pi));
            }
        }

        if self.plot.width_px == 0 || self.plot.height_px == 0 {
            return Err(ConfigError::out_of_range(
                "plot.size",
                format!("{}x{}", self.plot.width_px, self.plot.height_px),
            ));
        }

        if !(0.0..0.5).contains(&self.plot.padding) {
            return Err(ConfigError::out_of_range("plot.padding", self.plot.padding));
        }

        if self.plot.output_path.as_os_str().is_empty() {
            return Err(ConfigError::out_of_range("plot.output_path", "\"\""));
        }

        Ok(())
    }
}

enum Format {
    Json,
    Toml,
}

impl Format {
    fn of(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}
