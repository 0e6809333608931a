//! Screen-space geometry and movement constants.
//!
//! Positions are measured in pixels; radii handed to leaves are measured in
//! meters and converted with [`PIXEL_PER_METER`].

use serde::{Deserialize, Serialize};

/// 10 pixels per 30 cm.
pub const PIXEL_PER_METER: f32 = 10.0 / 0.3;

/// Zombie run speed.
pub const RUN_SPEED_KMPH: f32 = 10.0;
pub const RUN_SPEED_MPM: f32 = RUN_SPEED_KMPH * 1000.0 / 60.0;
pub const RUN_SPEED_MPS: f32 = RUN_SPEED_MPM / 60.0;
pub const RUN_SPEED_PPS: f32 = RUN_SPEED_MPS * PIXEL_PER_METER;

/// A point in screen space (pixels).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance_squared(self, other: Point) -> f32 {
        (self.x - other.x).powi(2) + (self.y - other.y).powi(2)
    }

    pub fn distance(self, other: Point) -> f32 {
        self.distance_squared(other).sqrt()
    }

    /// Heading in radians from `self` toward `other`.
    pub fn heading_to(self, other: Point) -> f32 {
        (other.y - self.y).atan2(other.x - self.x)
    }

    /// Moves `distance` pixels along `heading`.
    pub fn advanced(self, heading: f32, distance: f32) -> Point {
        Point {
            x: self.x + distance * heading.cos(),
            y: self.y + distance * heading.sin(),
        }
    }
}

/// Returns `true` if `a` and `b` are closer than `meters`.
pub fn distance_less_than(a: Point, b: Point, meters: f32) -> bool {
    a.distance_squared(b) < (PIXEL_PER_METER * meters).powi(2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_speed_is_about_ninety_pixels_per_second() {
        assert!((RUN_SPEED_PPS - 92.59).abs() < 0.01);
    }

    #[test]
    fn distance_threshold_is_strict_and_in_meters() {
        let origin = Point::new(0.0, 0.0);
        // 0.3 m == 10 px
        assert!(distance_less_than(origin, Point::new(9.9, 0.0), 0.3));
        assert!(!distance_less_than(origin, Point::new(10.1, 0.0), 0.3));
    }

    #[test]
    fn advanced_follows_heading() {
        let start = Point::new(10.0, 10.0);
        let heading = start.heading_to(Point::new(10.0, 20.0));
        let moved = start.advanced(heading, 5.0);
        assert!((moved.x - 10.0).abs() < 1e-4);
        assert!((moved.y - 15.0).abs() < 1e-4);
    }
}
