//! Hub node placement.

use std::f64::consts::TAU;

use perspective_types::{ExperienceKind, Size, hub_position, hub_positions};

#[test]
fn nodes_are_equidistant_from_center() {
    let size = Size::new(400.0, 400.0);
    let center = size.center();
    for (_, point) in hub_positions(size) {
        assert!((point.distance_to(center) - 120.0).abs() < 1e-9);
    }
}

#[test]
fn neighbours_are_one_eighth_turn_apart() {
    let size = Size::new(400.0, 400.0);
    let center = size.center();
    let angle_of = |kind| {
        let point = hub_position(kind, size);
        (point.y - center.y).atan2(point.x - center.x).rem_euclid(TAU)
    };

    for kind in ExperienceKind::ALL {
        let step = (angle_of(kind.next()) - angle_of(kind)).rem_euclid(TAU);
        assert!((step - TAU / 8.0).abs() < 1e-9, "{kind}: {step}");
    }
}

#[test]
fn radius_follows_shorter_side() {
    let size = Size::new(1000.0, 200.0);
    let first = hub_position(ExperienceKind::VisualStrain, size);
    assert!((first.x - 560.0).abs() < 1e-9);
    assert!((first.y - 100.0).abs() < 1e-9);
}
