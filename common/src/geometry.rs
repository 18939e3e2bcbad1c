//! Stateless 2D geometry helpers shared by the obstacle graph and the path planner.
//!
//! Polygon rings are wound clockwise as seen on screen, i.e. with the y axis
//! pointing down. Under that convention the interior of a ring is always on the
//! right-hand side of each directed edge.

use nalgebra::{Point2, Vector2};
use parry2d::query::PointQuery;
use parry2d::shape::Segment;

const PARALLEL_EPSILON: f32 = 0.00001;

/// Returns true if segment `a1`-`a2` crosses segment `b1`-`b2`.
///
/// Parallel and collinear segments never intersect. Touching at an endpoint
/// counts as an intersection.
pub fn segments_intersect(
    a1: Point2<f32>,
    a2: Point2<f32>,
    b1: Point2<f32>,
    b2: Point2<f32>,
) -> bool {
    if a1.x.min(a2.x) > b1.x.max(b2.x) || a1.x.max(a2.x) < b1.x.min(b2.x) {
        return false;
    }
    if a1.y.min(a2.y) > b1.y.max(b2.y) || a1.y.max(a2.y) < b1.y.min(b2.y) {
        return false;
    }

    let d = (b2.y - b1.y) * (a2.x - a1.x) - (b2.x - b1.x) * (a2.y - a1.y);
    if d.abs() < PARALLEL_EPSILON {
        return false;
    }

    let along_a = ((b2.x - b1.x) * (a1.y - b1.y) - (b2.y - b1.y) * (a1.x - b1.x)) / d;
    if !(0.0..=1.0).contains(&along_a) {
        return false;
    }

    let along_b = ((a2.x - a1.x) * (a1.y - b1.y) - (a2.y - a1.y) * (a1.x - b1.x)) / d;
    (0.0..=1.0).contains(&along_b)
}

/// Returns true if the turn `a` -> `b` -> `c` is convex for a clockwise ring.
///
/// Two reference points are placed on either side of the line `a`-`b`, at `b`,
/// and `c` is classified by whichever it is closer to.
pub fn is_angle_convex(a: Point2<f32>, b: Point2<f32>, c: Point2<f32>) -> bool {
    let d = b - a;
    let left = b + Vector2::new(d.y, -d.x);
    let right = b + Vector2::new(-d.y, d.x);

    (c - right).norm_squared() < (c - left).norm_squared()
}

/// Returns true if `p` lies inside the wedge swept by the edges `prev`-`v` and `v`-`next`.
pub fn convex_angle_contains(
    prev: Point2<f32>,
    v: Point2<f32>,
    next: Point2<f32>,
    p: Point2<f32>,
) -> bool {
    is_angle_convex(prev, v, p) && is_angle_convex(v, next, p)
}

/// Shortest distance between `p` and the segment `a`-`b`.
pub fn point_segment_distance(a: Point2<f32>, b: Point2<f32>, p: Point2<f32>) -> f32 {
    Segment::new(a, b).distance_to_local_point(&p, true)
}

/// Unit vector from `from` towards `to`, or `None` when the points coincide.
pub fn unit_vector(from: Point2<f32>, to: Point2<f32>) -> Option<Vector2<f32>> {
    let delta = to - from;
    let length = delta.norm();
    if length > 0.0 {
        Some(delta / length)
    } else {
        None
    }
}
