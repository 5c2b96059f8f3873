use std::f64::consts::PI;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;
use vaultarc_core::constants::DEFAULT_PATH_SAMPLES;
use vaultarc_core::GeometryError;

use super::Point;

/// Axis-aligned ellipse `((x-cx)/a)^2 + ((y-cy)/b)^2 = 1`.
///
/// `a` runs along x and `b` along y. Either may be the major axis, but foci and
/// eccentricity are only defined here for `a >= b`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ellipse {
    center: Point,
    a: f64,
    b: f64,
}

impl Ellipse {
    /// Creates an ellipse without checking the axes.
    pub fn new(center: Point, a: f64, b: f64) -> Self {
        debug!(cx = center.x, cy = center.y, a, b, "ellipse created");
        Self { center, a, b }
    }

    /// Creates an ellipse, rejecting non-positive or non-finite semi-axes.
    pub fn try_new(center: Point, a: f64, b: f64) -> Result<Self, GeometryError> {
        for (name, value) in [("a", a), ("b", b)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(GeometryError::InvalidAxis { name, value });
            }
        }
        Ok(Self::new(center, a, b))
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    /// Leftmost abscissa, `cx - a`.
    pub fn x_min(&self) -> f64 {
        self.center.x - self.a
    }

    /// Rightmost abscissa, `cx + a`.
    pub fn x_max(&self) -> f64 {
        self.center.x + self.a
    }

    /// Point on the boundary at parameter angle `t`.
    pub fn point_at(&self, t: f64) -> Point {
        Point::new(
            self.a * t.cos() + self.center.x,
            self.b * t.sin() + self.center.y,
        )
    }

    /// Samples the arc between two parameter angles.
    ///
    /// Unset parameters fall back to 128 samples over `[0, 2π]`. The samples
    /// are evenly spaced and include both end angles.
    pub fn parametric_path(&self, params: PathParams) -> Vec<Point> {
        let n = params.samples.unwrap_or(DEFAULT_PATH_SAMPLES);
        let t0 = params.t0.unwrap_or(0.0);
        let t1 = params.t1.unwrap_or(2.0 * PI);

        let path: Vec<Point> = linspace(t0, t1, n).map(|t| self.point_at(t)).collect();
        debug!(samples = path.len(), t0, t1, "parametric path sampled");
        path
    }

    /// Shorthand for [`Ellipse::parametric_path`] with every parameter set.
    pub fn parametric_arc(&self, samples: usize, t0: f64, t1: f64) -> Vec<Point> {
        self.parametric_path(PathParams::new().samples(samples).t0(t0).t1(t1))
    }

    /// Returns `y = f(x)` for the upper or lower half of the ellipse.
    pub fn function(&self, half: Half) -> HeightFunction {
        HeightFunction {
            center: self.center,
            a: self.a,
            b: self.b,
            sign: half.sign(),
        }
    }

    /// Returns the two foci `(cx + c, cy)` and `(cx - c, cy)`, `c = sqrt(a² - b²)`.
    pub fn foci(&self) -> Result<(Point, Point), GeometryError> {
        self.require_a_major()?;
        let c = (self.a * self.a - self.b * self.b).sqrt();
        Ok((
            Point::new(self.center.x + c, self.center.y),
            Point::new(self.center.x - c, self.center.y),
        ))
    }

    /// Returns `sqrt(1 - b²/a²)`.
    pub fn eccentricity(&self) -> Result<f64, GeometryError> {
        self.require_a_major()?;
        Ok((1.0 - (self.b * self.b) / (self.a * self.a)).sqrt())
    }

    fn require_a_major(&self) -> Result<(), GeometryError> {
        // Written as a negated `>=` so NaN axes are rejected too.
        if !(self.a >= self.b) {
            return Err(GeometryError::MinorAxisExceedsMajor {
                a: self.a,
                b: self.b,
            });
        }
        Ok(())
    }
}

impl fmt::Display for Ellipse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `0.0 - c` keeps a zero center from printing as "-0".
        write!(
            f,
            "<Ellipse (x {})/({}) ^2 + (y {})/({}) ^2 = 1>",
            0.0 - self.center.x,
            self.a,
            0.0 - self.center.y,
            self.b
        )
    }
}

/// An ellipse whose center is known but whose axes are not yet.
///
/// Has no axis accessors; call [`EllipseCenter::with_axes`] to get a full
/// [`Ellipse`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EllipseCenter {
    center: Point,
}

impl EllipseCenter {
    pub fn new(center: Point) -> Self {
        Self { center }
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn with_axes(self, a: f64, b: f64) -> Ellipse {
        Ellipse::new(self.center, a, b)
    }
}

/// Either a center-only or a fully specified ellipse.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum EllipseSpec {
    CenterOnly(EllipseCenter),
    Full(Ellipse),
}

impl EllipseSpec {
    /// Builds a full ellipse when both axes are given, otherwise a center-only spec.
    pub fn from_parts(center: Point, a: Option<f64>, b: Option<f64>) -> Self {
        match (a, b) {
            (Some(a), Some(b)) => Self::Full(Ellipse::new(center, a, b)),
            _ => Self::CenterOnly(EllipseCenter::new(center)),
        }
    }

    pub fn center(&self) -> Point {
        match self {
            Self::CenterOnly(c) => c.center(),
            Self::Full(e) => e.center(),
        }
    }

    pub fn ellipse(&self) -> Result<&Ellipse, GeometryError> {
        match self {
            Self::CenterOnly(_) => Err(GeometryError::MissingAxes),
            Self::Full(e) => Ok(e),
        }
    }
}

impl From<Ellipse> for EllipseSpec {
    fn from(e: Ellipse) -> Self {
        Self::Full(e)
    }
}

impl From<EllipseCenter> for EllipseSpec {
    fn from(c: EllipseCenter) -> Self {
        Self::CenterOnly(c)
    }
}

/// Sampling parameters for [`Ellipse::parametric_path`].
///
/// `None` means "use the default"; `Some(0.0)` is an explicit zero angle.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PathParams {
    pub samples: Option<usize>,
    pub t0: Option<f64>,
    pub t1: Option<f64>,
}

impl PathParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn samples(mut self, n: usize) -> Self {
        self.samples = Some(n);
        self
    }

    pub fn t0(mut self, t0: f64) -> Self {
        self.t0 = Some(t0);
        self
    }

    pub fn t1(mut self, t1: f64) -> Self {
        self.t1 = Some(t1);
        self
    }
}

/// Which half of the ellipse a [`HeightFunction`] traces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Half {
    #[default]
    Upper,
    Lower,
}

impl Half {
    pub fn sign(self) -> f64 {
        match self {
            Half::Upper => 1.0,
            Half::Lower => -1.0,
        }
    }
}

/// `f(x) = sign·b·sqrt(1 - ((x-cx)/a)²) + cy`, defined on `[cx - a, cx + a]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeightFunction {
    center: Point,
    a: f64,
    b: f64,
    sign: f64,
}

impl HeightFunction {
    /// Closed domain `[cx - a, cx + a]`.
    pub fn domain(&self) -> (f64, f64) {
        (self.center.x - self.a, self.center.x + self.a)
    }

    pub fn eval(&self, x: f64) -> Result<f64, GeometryError> {
        let (min, max) = self.domain();
        if !(min..=max).contains(&x) {
            return Err(GeometryError::OutOfDomain { x, min, max });
        }
        let u = (x - self.center.x) / self.a;
        // Rounding at the domain edge can push the radicand a hair below zero.
        let radicand = (1.0 - u * u).max(0.0);
        Ok(self.sign * self.b * radicand.sqrt() + self.center.y)
    }
}

/// `n` evenly spaced values over `[start, stop]`, endpoint included.
fn linspace(start: f64, stop: f64, n: usize) -> impl Iterator<Item = f64> {
    let step = if n > 1 {
        (stop - start) / (n - 1) as f64
    } else {
        0.0
    };
    (0..n).map(move |i| {
        if n > 1 && i == n - 1 {
            stop
        } else {
            start + step * i as f64
        }
    })
}
