use lyon::math::point;
use lyon::path::Path;
use serde::{Deserialize, Serialize};

mod ellipse;

pub use ellipse::{Ellipse, EllipseCenter, EllipseSpec, Half, HeightFunction, PathParams};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Axis-aligned bounds `(min_x, min_y, max_x, max_y)` of a point set.
///
/// Returns `None` for an empty set.
pub fn bounds_of<'a, I>(points: I) -> Option<(f64, f64, f64, f64)>
where
    I: IntoIterator<Item = &'a Point>,
{
    let mut iter = points.into_iter();
    let first = iter.next()?;
    Some(iter.fold(
        (first.x, first.y, first.x, first.y),
        |(min_x, min_y, max_x, max_y), p| {
            (min_x.min(p.x), min_y.min(p.y), max_x.max(p.x), max_y.max(p.y))
        },
    ))
}

/// Builds a lyon path through `points`.
///
/// With `close`, a trailing vertex equal to the first is dropped and the
/// ring is closed by the path itself.
pub fn polyline_path(points: &[Point], close: bool) -> Path {
    let mut points = points;
    if close && points.len() > 1 && points.first() == points.last() {
        points = &points[..points.len() - 1];
    }

    let mut builder = Path::builder();
    if let Some((start, rest)) = points.split_first() {
        builder.begin(point(start.x as f32, start.y as f32));
        for p in rest {
            builder.line_to(point(p.x as f32, p.y as f32));
        }
        builder.end(close);
    }
    builder.build()
}
