//! Hub layout: experiences arranged on a circle around the viewport center.

use std::f64::consts::TAU;

use crate::ExperienceKind;

/// Viewport dimensions in whatever unit the renderer works in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn center(self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn distance_to(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

const RADIUS_FACTOR: f64 = 0.3;

/// Position of `kind`'s node: angle `index/8 · 2π` on a circle of radius
/// `0.3 · min(width, height)` centered in the viewport.
#[must_use]
pub fn hub_position(kind: ExperienceKind, size: Size) -> Point {
    let angle = (kind.index() as f64 / ExperienceKind::COUNT as f64) * TAU;
    let radius = size.width.min(size.height) * RADIUS_FACTOR;
    let center = size.center();
    Point::new(
        center.x + angle.cos() * radius,
        center.y + angle.sin() * radius,
    )
}

/// All eight node positions in hub order.
#[must_use]
pub fn hub_positions(size: Size) -> [(ExperienceKind, Point); ExperienceKind::COUNT] {
    ExperienceKind::ALL.map(|kind| (kind, hub_position(kind, size)))
}
