use proptest::prelude::*;
use vaultarc_designer::model::{Ellipse, Half, Point};

fn valid_ellipse() -> impl Strategy<Value = Ellipse> {
    (-500.0..500.0f64, -500.0..500.0f64, 0.5..300.0f64, 0.01..1.0f64).prop_map(
        |(cx, cy, a, ratio)| Ellipse::new(Point::new(cx, cy), a, a * ratio),
    )
}

proptest! {
    #[test]
    fn path_has_n_points_on_the_curve(
        e in valid_ellipse(),
        n in 2usize..200,
        t0 in -7.0..7.0f64,
        span in 0.0..7.0f64,
    ) {
        let t1 = t0 + span;
        let path = e.parametric_arc(n, t0, t1);
        prop_assert_eq!(path.len(), n);
        prop_assert_eq!(path[0], e.point_at(t0));
        prop_assert_eq!(path[n - 1], e.point_at(t1));

        let c = e.center();
        for p in &path {
            let u = (p.x - c.x) / e.a();
            let v = (p.y - c.y) / e.b();
            prop_assert!((u * u + v * v - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn halves_reflect_across_center_line(e in valid_ellipse(), s in -1.0..=1.0f64) {
        let x = e.center().x + s * e.a();
        let upper = e.function(Half::Upper).eval(x).unwrap();
        let lower = e.function(Half::Lower).eval(x).unwrap();
        let cy = e.center().y;
        prop_assert!(((upper - cy) + (lower - cy)).abs() < 1e-9);
    }

    #[test]
    fn foci_straddle_center_on_x_axis(e in valid_ellipse()) {
        let (f1, f2) = e.foci().unwrap();
        let c = e.center();
        prop_assert_eq!(f1.y, c.y);
        prop_assert_eq!(f2.y, c.y);
        let expected = 2.0 * (e.a() * e.a() - e.b() * e.b()).sqrt();
        prop_assert!((f1.distance_to(&f2) - expected).abs() < 1e-9 * e.a().max(1.0));
    }

    #[test]
    fn eccentricity_in_unit_interval(e in valid_ellipse()) {
        let ecc = e.eccentricity().unwrap();
        prop_assert!((0.0..1.0).contains(&ecc));
    }

    #[test]
    fn height_outside_domain_is_error(e in valid_ellipse(), d in 1e-6..100.0f64) {
        let f = e.function(Half::Lower);
        prop_assert!(f.eval(e.x_max() + d).is_err());
        prop_assert!(f.eval(e.x_min() - d).is_err());
    }
}
