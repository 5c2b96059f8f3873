//! Room wall outline.
//!
//! The outline is a closed polygon in the room's cross-section plane, x along
//! the floor and y up. It is fixture data and never derived from an ellipse.

use serde::{Deserialize, Serialize};

use crate::model::Point;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WallOutline {
    vertices: Vec<Point>,
}

impl WallOutline {
    /// Creates an outline, appending the first vertex if the ring is not closed.
    pub fn new(mut vertices: Vec<Point>) -> Self {
        if let (Some(first), Some(last)) = (vertices.first().copied(), vertices.last().copied()) {
            if first != last {
                vertices.push(first);
            }
        }
        Self { vertices }
    }

    /// Cross-section of a room with one vertical wall, a sloped ceiling that
    /// drops from `peak_height` at x = 0 to `low_wall_height`, then a flat
    /// ceiling run of `ceiling_run` ending at the second vertical wall.
    pub fn sloped_room(width: f64, low_wall_height: f64, ceiling_run: f64, peak_height: f64) -> Self {
        Self::new(vec![
            Point::new(0.0, 0.0),
            Point::new(width, 0.0),
            Point::new(width, low_wall_height),
            Point::new(width - ceiling_run, low_wall_height),
            Point::new(0.0, peak_height),
            Point::new(0.0, 0.0),
        ])
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn is_closed(&self) -> bool {
        self.vertices.len() > 1 && self.vertices.first() == self.vertices.last()
    }
}
