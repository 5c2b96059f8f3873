//! Height measurements at fixed horizontal intervals.
//!
//! Samples a [`HeightFunction`] at `x = 0, step, 2·step, …` strictly below the
//! ellipse's right edge, then adds a closing row exactly at the edge when the
//! step does not land on it. Formatting is left to the caller.

use serde::{Deserialize, Serialize};
use tracing::debug;
use vaultarc_core::constants::MAX_MEASUREMENT_ROWS;
use vaultarc_core::GeometryError;

use crate::model::{Ellipse, Half, HeightFunction};

/// One `(x, height)` reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeasurementRow {
    pub x: f64,
    pub y: f64,
}

/// Ordered height readings across the ceiling.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeasurementTable {
    rows: Vec<MeasurementRow>,
}

impl MeasurementTable {
    /// Samples `f` from `start` up to (not including) `x_max`, then at `x_max`.
    ///
    /// Any sample outside the function's domain aborts with `OutOfDomain`.
    /// A step so small that the range would need more than
    /// [`MAX_MEASUREMENT_ROWS`] rows is rejected with `InvalidSampling`.
    pub fn sample(
        f: &HeightFunction,
        start: f64,
        x_max: f64,
        step: f64,
    ) -> Result<Self, GeometryError> {
        if !(step > 0.0) || !step.is_finite() {
            return Err(GeometryError::InvalidSampling(format!(
                "measurement interval must be positive, got {}",
                step
            )));
        }
        if !start.is_finite() || !x_max.is_finite() {
            return Err(GeometryError::InvalidSampling(format!(
                "measurement range [{}, {}] is not finite",
                start, x_max
            )));
        }

        let count = if x_max > start {
            ((x_max - start) / step).ceil()
        } else {
            0.0
        };
        if count > MAX_MEASUREMENT_ROWS as f64 {
            return Err(GeometryError::InvalidSampling(format!(
                "interval {} over [{}, {}] needs {} rows, limit is {}",
                step, start, x_max, count, MAX_MEASUREMENT_ROWS
            )));
        }

        let mut rows = Vec::with_capacity(count as usize + 1);
        let mut k = 0usize;
        loop {
            // Multiply instead of accumulating so long runs do not drift.
            let x = start + step * k as f64;
            if x >= x_max {
                break;
            }
            rows.push(MeasurementRow { x, y: f.eval(x)? });
            k += 1;
        }

        if rows.last().map_or(true, |r| r.x != x_max) {
            rows.push(MeasurementRow {
                x: x_max,
                y: f.eval(x_max)?,
            });
        }

        debug!(rows = rows.len(), step, x_max, "measurement table sampled");
        Ok(Self { rows })
    }

    /// Lower-half readings from `x = 0` to the ellipse's right edge.
    pub fn for_ceiling(ellipse: &Ellipse, step: f64) -> Result<Self, GeometryError> {
        let f = ellipse.function(Half::Lower);
        Self::sample(&f, 0.0, ellipse.x_max(), step)
    }

    pub fn rows(&self) -> &[MeasurementRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<'a> IntoIterator for &'a MeasurementTable {
    type Item = &'a MeasurementRow;
    type IntoIter = std::slice::Iter<'a, MeasurementRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
