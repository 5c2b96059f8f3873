//! Viewport and coordinate transformation for plot rendering.
//!
//! Maps world coordinates (inches, y up) onto pixel coordinates (y down)
//! with a single zoom factor shared by both axes, so plots keep an equal
//! aspect ratio.

use std::fmt;

use crate::model::Point;

/// Represents the viewport transformation state (zoom and pan).
#[derive(Debug, Clone)]
pub struct Viewport {
    zoom: f64,
    pan_x: f64,
    pan_y: f64,
    canvas_width: f64,
    canvas_height: f64,
}

impl Viewport {
    /// Creates a new viewport with (0,0) at the bottom-left and a small margin.
    pub fn new(canvas_width: f64, canvas_height: f64) -> Self {
        const MARGIN: f64 = 5.0; // pixels from edge
        Self {
            zoom: 1.0,
            pan_x: MARGIN,
            pan_y: MARGIN,
            canvas_width,
            canvas_height,
        }
    }

    pub fn canvas_width(&self) -> f64 {
        self.canvas_width
    }

    pub fn canvas_height(&self) -> f64 {
        self.canvas_height
    }

    /// Gets the current zoom level in pixels per world unit.
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn pan_x(&self) -> f64 {
        self.pan_x
    }

    pub fn pan_y(&self) -> f64 {
        self.pan_y
    }

    /// Converts pixel coordinates to world coordinates.
    ///
    /// Formula:
    /// ```text
    /// world_x = (pixel_x - pan_x) / zoom
    /// world_y = (canvas_height - pixel_y - pan_y) / zoom  // Flip Y-axis
    /// ```
    pub fn pixel_to_world(&self, pixel_x: f64, pixel_y: f64) -> Point {
        let world_x = (pixel_x - self.pan_x) / self.zoom;
        let world_y = (self.canvas_height - pixel_y - self.pan_y) / self.zoom;
        Point::new(world_x, world_y)
    }

    /// Converts world coordinates to pixel coordinates.
    ///
    /// Formula:
    /// ```text
    /// pixel_x = world_x * zoom + pan_x
    /// pixel_y = canvas_height - (world_y * zoom + pan_y)  // Flip Y-axis
    /// ```
    pub fn world_to_pixel(&self, world_x: f64, world_y: f64) -> (f64, f64) {
        let pixel_x = world_x * self.zoom + self.pan_x;
        let pixel_y = self.canvas_height - (world_y * self.zoom + self.pan_y);
        (pixel_x, pixel_y)
    }

    pub fn world_point_to_pixel(&self, point: &Point) -> (f64, f64) {
        self.world_to_pixel(point.x, point.y)
    }

    /// Fits the given bounding box into the viewport with padding.
    ///
    /// # Arguments
    /// * `min_x`, `min_y` - Bottom-left corner of bounding box (world coordinates)
    /// * `max_x`, `max_y` - Top-right corner of bounding box (world coordinates)
    /// * `padding` - Fraction of the canvas reserved on each side (0.0 - 0.5)
    ///
    /// Uses the smaller of the two axis zooms so the whole box fits, then
    /// centers the content. A degenerate extent on one axis is fitted on the
    /// other axis alone; a box that is a single point only recenters.
    pub fn fit_to_bounds(&mut self, min_x: f64, min_y: f64, max_x: f64, max_y: f64, padding: f64) {
        let width = max_x - min_x;
        let height = max_y - min_y;
        let padding_factor = 1.0 - (padding * 2.0);

        let zoom_x = (width > 0.0).then(|| (self.canvas_width * padding_factor) / width);
        let zoom_y = (height > 0.0).then(|| (self.canvas_height * padding_factor) / height);

        self.zoom = match (zoom_x, zoom_y) {
            (Some(zx), Some(zy)) => zx.min(zy),
            (Some(z), None) | (None, Some(z)) => z,
            (None, None) => self.zoom,
        };

        self.center_on((min_x + max_x) / 2.0, (min_y + max_y) / 2.0);
    }

    /// Centers the viewport on a world coordinate.
    pub fn center_on(&mut self, world_x: f64, world_y: f64) {
        self.pan_x = self.canvas_width / 2.0 - world_x * self.zoom;
        self.pan_y = self.canvas_height / 2.0 - world_y * self.zoom;
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Zoom: {:.2}x | Pan: ({:.1}, {:.1})",
            self.zoom, self.pan_x, self.pan_y
        )
    }
}
