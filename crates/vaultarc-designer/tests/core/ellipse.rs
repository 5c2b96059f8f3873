use std::f64::consts::PI;

use vaultarc_core::GeometryError;
use vaultarc_designer::model::{Ellipse, EllipseCenter, EllipseSpec, Half, PathParams, Point};

fn assert_point_near(p: Point, x: f64, y: f64, tol: f64) {
    assert!(
        (p.x - x).abs() < tol && (p.y - y).abs() < tol,
        "({}, {}) expected ({}, {})",
        p.x,
        p.y,
        x,
        y
    );
}

#[test]
fn test_quarter_arc_samples() {
    let e = Ellipse::new(Point::new(0.0, 0.0), 10.0, 5.0);
    let path = e.parametric_arc(5, 0.0, PI / 2.0);

    assert_eq!(path.len(), 5);
    assert_point_near(path[0], 10.0, 0.0, 0.01);
    assert_point_near(path[1], 9.24, 1.91, 0.01);
    assert_point_near(path[2], 7.07, 3.54, 0.01);
    assert_point_near(path[3], 3.83, 4.62, 0.01);
    assert_point_near(path[4], 0.0, 5.0, 0.01);
}

#[test]
fn test_path_endpoints_follow_parametrization() {
    let e = Ellipse::new(Point::new(24.0, 108.0), 110.5, 60.0);
    let t0 = 1.43 * PI;
    let t1 = 2.0 * PI;
    let path = e.parametric_arc(32, t0, t1);

    assert_eq!(path.len(), 32);
    assert_eq!(path[0], e.point_at(t0));
    assert_eq!(path[31], e.point_at(t1));
    assert_point_near(path[31], 134.5, 108.0, 1e-9);
}

#[test]
fn test_path_params_partial_defaults() {
    let e = Ellipse::new(Point::new(0.0, 0.0), 2.0, 1.0);
    // Only t1 set: t0 falls back to 0, samples to 128.
    let path = e.parametric_path(PathParams::new().t1(PI));
    assert_eq!(path.len(), 128);
    assert_point_near(path[0], 2.0, 0.0, 1e-12);
    assert_point_near(path[127], -2.0, 0.0, 1e-12);
}

#[test]
fn test_empty_and_single_sample_paths() {
    let e = Ellipse::new(Point::new(0.0, 0.0), 2.0, 1.0);
    assert!(e.parametric_arc(0, 0.0, PI).is_empty());
    let one = e.parametric_arc(1, PI / 2.0, PI);
    assert_eq!(one.len(), 1);
    assert_point_near(one[0], 0.0, 1.0, 1e-12);
}

#[test]
fn test_lower_half_reference_values() {
    let e = Ellipse::new(Point::new(0.0, 108.0), 105.0, 60.0);
    let f = e.function(Half::Lower);
    assert_eq!(f.eval(0.0).unwrap(), 48.0);
    assert_eq!(f.eval(105.0).unwrap(), 108.0);
    assert_eq!(f.eval(-105.0).unwrap(), 108.0);
}

#[test]
fn test_default_half_is_upper() {
    let e = Ellipse::new(Point::new(0.0, 108.0), 105.0, 60.0);
    let f = e.function(Half::default());
    assert_eq!(f.eval(0.0).unwrap(), 168.0);
}

#[test]
fn test_function_outside_domain_fails() {
    let e = Ellipse::new(Point::new(0.0, 108.0), 105.0, 60.0);
    let f = e.function(Half::Lower);

    let err = f.eval(105.5).unwrap_err();
    assert_eq!(
        err,
        GeometryError::OutOfDomain {
            x: 105.5,
            min: -105.0,
            max: 105.0
        }
    );
    assert!(f.eval(-200.0).is_err());
    assert_eq!(f.domain(), (-105.0, 105.0));
}

#[test]
fn test_foci_on_major_axis() {
    let e = Ellipse::new(Point::new(3.0, -2.0), 5.0, 3.0);
    let (f1, f2) = e.foci().unwrap();
    assert_eq!(f1, Point::new(7.0, -2.0));
    assert_eq!(f2, Point::new(-1.0, -2.0));
    assert_eq!(f1.distance_to(&f2), 8.0);
}

#[test]
fn test_circle_foci_and_eccentricity() {
    let e = Ellipse::new(Point::new(1.0, 1.0), 4.0, 4.0);
    let (f1, f2) = e.foci().unwrap();
    assert_eq!(f1, e.center());
    assert_eq!(f2, e.center());
    assert_eq!(e.eccentricity().unwrap(), 0.0);
}

#[test]
fn test_tall_ellipse_rejects_foci() {
    let e = Ellipse::new(Point::new(0.0, 0.0), 3.0, 5.0);
    assert_eq!(
        e.foci().unwrap_err(),
        GeometryError::MinorAxisExceedsMajor { a: 3.0, b: 5.0 }
    );
    assert!(e.eccentricity().is_err());
}

#[test]
fn test_eccentricity_approaches_one() {
    let e = Ellipse::new(Point::new(0.0, 0.0), 1.0, 1e-6);
    let ecc = e.eccentricity().unwrap();
    assert!(ecc < 1.0);
    assert!(ecc > 0.999_999);
}

#[test]
fn test_try_new_validates_axes() {
    assert!(Ellipse::try_new(Point::new(0.0, 0.0), 1.0, 2.0).is_ok());
    assert_eq!(
        Ellipse::try_new(Point::new(0.0, 0.0), 0.0, 2.0).unwrap_err(),
        GeometryError::InvalidAxis {
            name: "a",
            value: 0.0
        }
    );
    assert!(matches!(
        Ellipse::try_new(Point::new(0.0, 0.0), 1.0, f64::INFINITY),
        Err(GeometryError::InvalidAxis { name: "b", .. })
    ));
}

#[test]
fn test_center_only_promotion() {
    let center = EllipseCenter::new(Point::new(24.0, 108.0));
    let e = center.with_axes(110.5, 60.0);
    assert_eq!(e.center(), center.center());
    assert_eq!(e.a(), 110.5);
    assert_eq!(e.b(), 60.0);
}

#[test]
fn test_spec_variants() {
    let c = Point::new(2.0, 3.0);

    let partial = EllipseSpec::from_parts(c, Some(4.0), None);
    assert!(matches!(partial, EllipseSpec::CenterOnly(_)));
    assert_eq!(partial.center(), c);
    assert_eq!(partial.ellipse().unwrap_err(), GeometryError::MissingAxes);

    let full = EllipseSpec::from_parts(c, Some(4.0), Some(1.0));
    assert_eq!(full.ellipse().unwrap().a(), 4.0);
    assert_eq!(EllipseSpec::from(Ellipse::new(c, 4.0, 1.0)), full);
}

#[test]
fn test_horizontal_extent() {
    let e = Ellipse::new(Point::new(10.0, 10.0), 5.0, 3.0);
    assert_eq!(e.x_min(), 5.0);
    assert_eq!(e.x_max(), 15.0);
    assert_eq!(e.function(Half::Upper).domain(), (5.0, 15.0));
}
