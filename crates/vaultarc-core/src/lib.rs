//! # Vaultarc Core
//!
//! Core types and utilities shared by the Vaultarc crates.
//! Provides the geometry error taxonomy, the room fixture constants,
//! and inch/feet unit helpers used to describe architectural measurements.

pub mod constants;
pub mod error;
pub mod units;

pub use error::{Error, GeometryError, Result};
pub use units::{feet_inches, format_inches};
