//! # Vaultarc Designer
//!
//! Geometry and plotting for elliptical vaulted-ceiling profiles.
//!
//! ## Core Components
//!
//! - **Model**: [`Point`], the axis-aligned [`Ellipse`] with its arc sampling,
//!   height functions, foci and eccentricity, plus the center-only
//!   [`EllipseCenter`] used before the axes are known
//! - **Wall outline**: the room cross-section polygon
//! - **Measurement**: height readings at fixed horizontal intervals
//! - **Viewport / SVG renderer**: equal-aspect plotting of point series
//!
//! ## Usage
//!
//! ```rust
//! use vaultarc_designer::{Ellipse, Half, Point};
//!
//! let ellipse = Ellipse::new(Point::new(0.0, 108.0), 105.0, 60.0);
//! let f = ellipse.function(Half::Lower);
//! assert_eq!(f.eval(0.0).unwrap(), 48.0);
//! ```

pub mod measurement;
pub mod model;
pub mod svg_renderer;
pub mod viewport;
pub mod wall;

pub use measurement::{MeasurementRow, MeasurementTable};
pub use model::{
    Ellipse, EllipseCenter, EllipseSpec, Half, HeightFunction, PathParams, Point,
};
pub use svg_renderer::{Plot, PlotSeries, SeriesStyle};
pub use viewport::Viewport;
pub use wall::WallOutline;
