use vaultarc_designer::viewport::Viewport;

#[test]
fn test_viewport_creation() {
    let vp = Viewport::new(1200.0, 800.0);
    assert_eq!(vp.zoom(), 1.0);
    assert_eq!(vp.pan_x(), 5.0);
    assert_eq!(vp.pan_y(), 5.0);
}

#[test]
fn test_world_to_pixel_origin_at_bottom_left() {
    let vp = Viewport::new(1200.0, 600.0);
    let (pixel_x, pixel_y) = vp.world_to_pixel(0.0, 0.0);
    assert!((pixel_x - 5.0).abs() < 0.01);
    assert!((pixel_y - 595.0).abs() < 0.01);
}

#[test]
fn test_world_to_pixel_positive_y_goes_up() {
    let vp = Viewport::new(1200.0, 800.0);
    let (_, py0) = vp.world_to_pixel(0.0, 0.0);
    let (_, py100) = vp.world_to_pixel(0.0, 100.0);
    assert!(py100 < py0);
}

#[test]
fn test_pixel_world_round_trip() {
    let mut vp = Viewport::new(800.0, 600.0);
    vp.fit_to_bounds(0.0, 0.0, 147.0, 157.0, 0.05);
    let (px, py) = vp.world_to_pixel(42.0, 99.0);
    let back = vp.pixel_to_world(px, py);
    assert!((back.x - 42.0).abs() < 1e-9);
    assert!((back.y - 99.0).abs() < 1e-9);
}

#[test]
fn test_fit_uses_one_scale_for_both_axes() {
    let mut vp = Viewport::new(1000.0, 500.0);
    vp.fit_to_bounds(0.0, 0.0, 100.0, 100.0, 0.0);
    // Height is the limiting axis: 500px / 100 units.
    assert!((vp.zoom() - 5.0).abs() < 1e-12);

    let (x0, y0) = vp.world_to_pixel(0.0, 0.0);
    let (x1, y1) = vp.world_to_pixel(10.0, 10.0);
    assert!(((x1 - x0) - (y0 - y1)).abs() < 1e-9);
}

#[test]
fn test_fit_centers_content() {
    let mut vp = Viewport::new(800.0, 800.0);
    vp.fit_to_bounds(10.0, 20.0, 110.0, 70.0, 0.1);
    let (cx, cy) = vp.world_to_pixel(60.0, 45.0);
    assert!((cx - 400.0).abs() < 1e-9);
    assert!((cy - 400.0).abs() < 1e-9);
}

#[test]
fn test_fit_degenerate_height_uses_width() {
    let mut vp = Viewport::new(400.0, 400.0);
    vp.fit_to_bounds(0.0, 5.0, 100.0, 5.0, 0.0);
    assert!((vp.zoom() - 4.0).abs() < 1e-12);
}

#[test]
fn test_display() {
    let vp = Viewport::new(100.0, 100.0);
    assert_eq!(vp.to_string(), "Zoom: 1.00x | Pan: (5.0, 5.0)");
}
