//! Shared constants
//!
//! The room fixture below is the measured reference room; everything is in
//! decimal inches.

use crate::units::feet_inches;

/// Default number of samples along a parametric path
pub const DEFAULT_PATH_SAMPLES: usize = 128;

/// Default horizontal spacing between height measurements
pub const DEFAULT_MEASUREMENT_INTERVAL_IN: f64 = 6.0;

/// Reference room: floor width (12' 3")
pub const ROOM_WIDTH_IN: f64 = feet_inches(12, 3.0);

/// Reference room: height of the horizontal ceiling segment (9')
pub const ROOM_LOW_WALL_HEIGHT_IN: f64 = feet_inches(9, 0.0);

/// Reference room: run of the horizontal ceiling segment (2' 1")
pub const ROOM_CEILING_RUN_IN: f64 = feet_inches(2, 1.0);

/// Reference room: height of the sloped ceiling at x = 0 (13' 1")
pub const ROOM_PEAK_HEIGHT_IN: f64 = feet_inches(13, 1.0);

/// Reference arc: vertical rise of the ellipse (5')
pub const ARC_RISE_IN: f64 = feet_inches(5, 0.0);

/// Upper bound on rows in one measurement table
pub const MAX_MEASUREMENT_ROWS: usize = 100_000;

/// Default plot canvas size in pixels
pub const DEFAULT_PLOT_SIZE_PX: u32 = 800;

/// Fraction of the canvas reserved as padding on each side
pub const VIEW_PADDING: f64 = 0.05;
