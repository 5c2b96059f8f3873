//! Error handling for Vaultarc
//!
//! Provides error types for the geometry layer and an aggregate error
//! used by the crates built on top of it:
//! - Geometry errors (domain violations, degenerate axes, sampling)
//! - I/O errors (writing plots)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Geometry error type
///
/// Raised when an ellipse query is evaluated outside the real domain of its
/// closed-form expression. These replace the NaN results a bare `sqrt` of a
/// negative number would produce.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// Height function evaluated outside `[cx - a, cx + a]`
    #[error("x = {x} lies outside the ellipse domain [{min}, {max}]")]
    OutOfDomain {
        /// The requested abscissa.
        x: f64,
        /// Left edge of the domain.
        min: f64,
        /// Right edge of the domain.
        max: f64,
    },

    /// Foci and eccentricity need `a >= b`
    #[error("semi-axis b = {b} exceeds semi-axis a = {a}; foci lie off the x-axis")]
    MinorAxisExceedsMajor {
        /// Semi-axis along x.
        a: f64,
        /// Semi-axis along y.
        b: f64,
    },

    /// Semi-axis is zero, negative, or not finite
    #[error("semi-axis '{name}' must be positive and finite, got {value}")]
    InvalidAxis {
        /// Which axis (`a` or `b`).
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A center-only ellipse was asked for axis-dependent data
    #[error("ellipse has a center but no semi-axes")]
    MissingAxes,

    /// Sampling parameters cannot produce a path or table
    #[error("invalid sampling: {0}")]
    InvalidSampling(String),
}

/// Main error type for Vaultarc
#[derive(Error, Debug)]
pub enum Error {
    /// Geometry error
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for Vaultarc operations
pub type Result<T> = std::result::Result<T, Error>;
