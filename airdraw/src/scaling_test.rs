#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn point_approx_eq(a: Point, b: Point) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

// --- Point ---

#[test]
fn point_distance_is_euclidean() {
    let a = Point::new(0.0, 0.0);
    let b = Point::new(3.0, 4.0);
    assert!(approx_eq(a.distance(b), 5.0));
    assert!(approx_eq(b.distance(a), 5.0));
}

#[test]
fn point_midpoint() {
    let mid = Point::new(0.2, 0.4).midpoint(Point::new(0.4, 0.8));
    assert!(point_approx_eq(mid, Point::new(0.3, 0.6)));
}

// --- Size ---

#[test]
fn size_zero_is_not_usable() {
    assert!(!Size::new(0.0, 480.0).is_usable());
    assert!(!Size::new(640.0, 0.0).is_usable());
    assert!(!Size::new(f64::NAN, 480.0).is_usable());
    assert!(Size::new(640.0, 480.0).is_usable());
}

// --- ScalingTransform ---

#[test]
fn cover_wider_viewport_crops_vertically() {
    let t = ScalingTransform::cover(Size::new(640.0, 480.0), Size::new(1280.0, 480.0)).unwrap();
    assert_eq!(t.scale_x, 2.0);
    assert_eq!(t.scale_y, 2.0);
    assert_eq!(t.offset_x, 0.0);
    assert_eq!(t.offset_y, 240.0);
}

#[test]
fn cover_wider_viewport_maps_center() {
    let t = ScalingTransform::cover(Size::new(640.0, 480.0), Size::new(1280.0, 480.0)).unwrap();
    let client = t.to_client(Point::new(0.5, 0.5));
    assert!(point_approx_eq(client, Point::new(640.0, 240.0)));
}

#[test]
fn cover_taller_viewport_crops_horizontally() {
    let t = ScalingTransform::cover(Size::new(640.0, 480.0), Size::new(480.0, 480.0)).unwrap();
    assert_eq!(t.scale_x, 1.0);
    assert_eq!(t.offset_x, 80.0);
    assert_eq!(t.offset_y, 0.0);

    // Left edge of the frame falls outside the cropped viewport, mirrored to the right.
    assert!(point_approx_eq(t.to_client(Point::new(0.0, 0.0)), Point::new(560.0, 0.0)));
    assert!(point_approx_eq(t.to_client(Point::new(0.25, 0.5)), Point::new(400.0, 240.0)));
}

#[test]
fn cover_equal_aspect_has_no_offsets() {
    let t = ScalingTransform::cover(Size::new(640.0, 480.0), Size::new(1600.0, 1200.0)).unwrap();
    assert_eq!(t.offset_x, 0.0);
    assert_eq!(t.offset_y, 0.0);
    assert!(approx_eq(t.scale_x, 2.5));
    assert!(point_approx_eq(t.to_client(Point::new(0.1, 0.9)), Point::new(1440.0, 1080.0)));
}

#[test]
fn cover_scale_is_always_uniform() {
    let cases = [
        (Size::new(640.0, 480.0), Size::new(1920.0, 1080.0)),
        (Size::new(1280.0, 720.0), Size::new(390.0, 844.0)),
        (Size::new(480.0, 640.0), Size::new(800.0, 800.0)),
    ];
    for (frame, viewport) in cases {
        let t = ScalingTransform::cover(frame, viewport).unwrap();
        assert_eq!(t.scale_x, t.scale_y);
    }
}

#[test]
fn cover_covers_the_whole_viewport() {
    let frame = Size::new(640.0, 480.0);
    let viewport = Size::new(390.0, 844.0);
    let t = ScalingTransform::cover(frame, viewport).unwrap();
    assert!(frame.width * t.scale_x >= viewport.width - EPSILON);
    assert!(frame.height * t.scale_y >= viewport.height - EPSILON);
}

#[test]
fn cover_is_pure() {
    let frame = Size::new(1280.0, 720.0);
    let viewport = Size::new(1024.0, 768.0);
    let a = ScalingTransform::cover(frame, viewport).unwrap();
    let _ = ScalingTransform::cover(Size::new(10.0, 10.0), Size::new(30.0, 5.0));
    let b = ScalingTransform::cover(frame, viewport).unwrap();
    assert_eq!(a, b);
    let p = Point::new(0.37, 0.61);
    assert_eq!(a.to_client(p), b.to_client(p));
}

#[test]
fn cover_rejects_unsized_inputs() {
    assert!(ScalingTransform::cover(Size::new(0.0, 0.0), Size::new(800.0, 600.0)).is_none());
    assert!(ScalingTransform::cover(Size::new(640.0, 480.0), Size::new(0.0, 600.0)).is_none());
}

// --- FrameGeometry / ClientMapping ---

#[test]
fn geometry_with_both_sizes_uses_cover() {
    let geometry = FrameGeometry::covering(Size::new(640.0, 480.0), Size::new(1280.0, 480.0));
    let mapping = geometry.mapping();
    assert!(!mapping.is_degraded());
    assert!(point_approx_eq(mapping.to_client(Point::new(0.5, 0.5)), Point::new(640.0, 240.0)));
}

#[test]
fn geometry_without_frame_falls_back_to_unscaled() {
    let geometry = FrameGeometry::new(None, Some(Size::new(1280.0, 480.0)), Size::new(1000.0, 500.0));
    let mapping = geometry.mapping();
    assert!(mapping.is_degraded());
    assert!(point_approx_eq(mapping.to_client(Point::new(0.2, 0.4)), Point::new(800.0, 200.0)));
}

#[test]
fn geometry_with_zero_viewport_falls_back_to_unscaled() {
    let geometry = FrameGeometry::new(Some(Size::new(640.0, 480.0)), Some(Size::new(0.0, 0.0)), Size::new(100.0, 100.0));
    let mapping = geometry.mapping();
    assert!(mapping.is_degraded());
    assert!(point_approx_eq(mapping.to_client(Point::new(0.0, 1.0)), Point::new(100.0, 100.0)));
}

#[test]
fn unscaled_mapping_mirrors_horizontally() {
    let mapping = ClientMapping::Unscaled(Size::new(200.0, 100.0));
    assert!(point_approx_eq(mapping.to_client(Point::new(0.0, 0.0)), Point::new(200.0, 0.0)));
    assert!(point_approx_eq(mapping.to_client(Point::new(1.0, 0.5)), Point::new(0.0, 50.0)));
}
