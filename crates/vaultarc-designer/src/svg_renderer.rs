//! SVG plot renderer
//!
//! Draws point series as an SVG document:
//! - Polylines (open arcs or closed outlines) as stroked `<path>` elements
//! - Markers as filled `<circle>` elements
//! - World coordinates mapped through a [`Viewport`] fitted to the data, so
//!   both axes share one scale

use std::fmt::Write as _;
use std::path::Path as FsPath;

use lyon::path::Path;
use tracing::{debug, info};
use vaultarc_core::constants::{DEFAULT_PLOT_SIZE_PX, VIEW_PADDING};
use vaultarc_core::Result;

use crate::model::{bounds_of, polyline_path, Point};
use crate::viewport::Viewport;

const STROKE_WIDTH: f64 = 1.5;
const MARKER_RADIUS: f64 = 3.0;

/// How a series is drawn.
#[derive(Debug, Clone, PartialEq)]
pub enum SeriesStyle {
    /// Solid line through the points; `closed` joins the last point to the first.
    Line { color: String, closed: bool },
    /// One dot per point.
    Markers { color: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlotSeries {
    pub label: String,
    pub points: Vec<Point>,
    pub style: SeriesStyle,
}

/// A set of series drawn on one equal-aspect canvas.
#[derive(Debug, Clone)]
pub struct Plot {
    width: u32,
    height: u32,
    padding: f64,
    series: Vec<PlotSeries>,
}

impl Default for Plot {
    fn default() -> Self {
        Self::new(DEFAULT_PLOT_SIZE_PX, DEFAULT_PLOT_SIZE_PX)
    }
}

impl Plot {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            padding: VIEW_PADDING,
            series: Vec::new(),
        }
    }

    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    pub fn add_line(&mut self, label: &str, points: Vec<Point>, color: &str, closed: bool) {
        self.series.push(PlotSeries {
            label: label.to_string(),
            points,
            style: SeriesStyle::Line {
                color: color.to_string(),
                closed,
            },
        });
    }

    pub fn add_markers(&mut self, label: &str, points: Vec<Point>, color: &str) {
        self.series.push(PlotSeries {
            label: label.to_string(),
            points,
            style: SeriesStyle::Markers {
                color: color.to_string(),
            },
        });
    }

    pub fn series(&self) -> &[PlotSeries] {
        &self.series
    }

    /// Bounds over every series, or `None` when nothing has been added.
    pub fn bounds(&self) -> Option<(f64, f64, f64, f64)> {
        bounds_of(self.series.iter().flat_map(|s| s.points.iter()))
    }

    /// Viewport fitted to the plot's data.
    pub fn viewport(&self) -> Viewport {
        let mut viewport = Viewport::new(self.width as f64, self.height as f64);
        if let Some((min_x, min_y, max_x, max_y)) = self.bounds() {
            viewport.fit_to_bounds(min_x, min_y, max_x, max_y, self.padding);
        }
        viewport
    }

    /// Renders the whole plot as an SVG document.
    pub fn to_svg(&self) -> String {
        let viewport = self.viewport();
        debug!(%viewport, series = self.series.len(), "rendering plot");

        let mut svg = String::new();
        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = self.width,
            h = self.height
        );
        let _ = writeln!(svg, r#"  <rect width="100%" height="100%" fill="white"/>"#);

        for series in &self.series {
            match &series.style {
                SeriesStyle::Line { color, closed } => {
                    let path = polyline_path(&series.points, *closed);
                    let _ = writeln!(
                        svg,
                        r#"  <path id="{}" d="{}" fill="none" stroke="{}" stroke-width="{}"/>"#,
                        series.label,
                        path_to_svg(&path, &viewport).trim_end(),
                        color,
                        STROKE_WIDTH
                    );
                }
                SeriesStyle::Markers { color } => {
                    for (i, p) in series.points.iter().enumerate() {
                        let (sx, sy) = viewport.world_point_to_pixel(p);
                        let _ = writeln!(
                            svg,
                            r#"  <circle id="{}-{}" cx="{:.3}" cy="{:.3}" r="{}" fill="{}"/>"#,
                            series.label, i, sx, sy, MARKER_RADIUS, color
                        );
                    }
                }
            }
        }

        svg.push_str("</svg>\n");
        svg
    }

    /// Writes the SVG document to `path`.
    pub fn save(&self, path: &FsPath) -> Result<()> {
        std::fs::write(path, self.to_svg())?;
        info!(path = %path.display(), "plot written");
        Ok(())
    }
}

/// Converts a lyon path to SVG path commands in pixel space.
pub fn path_to_svg(path: &Path, viewport: &Viewport) -> String {
    let mut path_str = String::new();
    for event in path.iter() {
        match event {
            lyon::path::Event::Begin { at } => {
                let (sx, sy) = viewport.world_to_pixel(at.x as f64, at.y as f64);
                let _ = write!(path_str, "M {:.3} {:.3} ", sx, sy);
            }
            lyon::path::Event::Line { to, .. } => {
                let (sx, sy) = viewport.world_to_pixel(to.x as f64, to.y as f64);
                let _ = write!(path_str, "L {:.3} {:.3} ", sx, sy);
            }
            lyon::path::Event::End { close, .. } => {
                if close {
                    path_str.push_str("Z ");
                }
            }
            _ => {}
        }
    }
    path_str
}
