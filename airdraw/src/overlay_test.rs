use super::*;
use crate::hand::LANDMARK_COUNT;
use crate::scaling::{FrameGeometry, Size};

fn hand(handedness: Handedness, at: Point) -> HandObservation {
    HandObservation::new(handedness, [at; LANDMARK_COUNT])
}

#[test]
fn no_hands_no_markers() {
    let mapping = FrameGeometry::covering(Size::new(640.0, 480.0), Size::new(1280.0, 480.0)).mapping();
    assert!(markers(&[], &mapping).is_empty());
}

#[test]
fn every_landmark_is_mapped() {
    let mapping = FrameGeometry::covering(Size::new(640.0, 480.0), Size::new(1280.0, 480.0)).mapping();
    let out = markers(&[hand(Handedness::Left, Point::new(0.5, 0.5))], &mapping);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].points.len(), LANDMARK_COUNT);
    assert!(out[0].points.iter().all(|&p| p == Point::new(640.0, 240.0)));
}

#[test]
fn markers_match_pointer_mapping() {
    let mapping = FrameGeometry::covering(Size::new(1280.0, 720.0), Size::new(800.0, 800.0)).mapping();
    let at = Point::new(0.3, 0.7);
    let out = markers(&[hand(Handedness::Right, at)], &mapping);
    assert_eq!(out[0].points[0], mapping.to_client(at));
}

#[test]
fn hands_keep_order_and_handedness() {
    let mapping = ClientMapping::Unscaled(Size::new(100.0, 100.0));
    let out = markers(
        &[hand(Handedness::Right, Point::new(0.1, 0.1)), hand(Handedness::Left, Point::new(0.9, 0.9))],
        &mapping,
    );
    assert_eq!(out[0].handedness, Handedness::Right);
    assert_eq!(out[1].handedness, Handedness::Left);
    assert_eq!(out[0].color(), "blue");
    assert_eq!(out[1].color(), "black");
}
