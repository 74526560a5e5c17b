//! Planar geometry shared by the body and the robot.

use glam::DVec2;

/// A location on the floor plane, in metres.
pub type Point = DVec2;

/// Straight-line distance between two points.
pub fn distance_between(a: Point, b: Point) -> f64 {
    a.distance(b)
}

/// Bearing (radians) from `from` towards `to`, measured from the +X axis.
pub fn bearing(from: Point, to: Point) -> f64 {
    let delta = to - from;
    delta.y.atan2(delta.x)
}
