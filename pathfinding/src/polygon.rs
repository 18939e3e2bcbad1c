use crate::error::{PathfindingError, PathfindingResult};
use common::geometry::{is_angle_convex, segments_intersect};
use common::shapes::Rectangle;
use log::debug;
use nalgebra::Point2;

const COLLINEAR_EPSILON: f32 = 0.00001;

/// Static impassable terrain: a closed ring wound clockwise on screen.
#[derive(Debug, Clone)]
pub struct ObstaclePolygon {
    // Distinct vertices in ring order; the closing edge is implied.
    vertices: Vec<Point2<f32>>,
    bounds: Rectangle,
}

impl ObstaclePolygon {
    /// Builds the polygon at position `index` of a map.
    ///
    /// The ring may be given open or closed and in either winding; it is stored
    /// clockwise on screen. Repeated points and vertices lying on the line
    /// between their neighbours are dropped, and fewer than three remaining
    /// vertices is an error.
    pub fn new(index: usize, points: Vec<Point2<f32>>) -> PathfindingResult<Self> {
        if points.iter().any(|p| !p.x.is_finite() || !p.y.is_finite()) {
            return Err(PathfindingError::NonFiniteVertex { polygon: index });
        }

        let mut vertices: Vec<Point2<f32>> = Vec::with_capacity(points.len());
        for point in points {
            if vertices.last() != Some(&point) {
                vertices.push(point);
            }
        }
        while vertices.len() > 1 && vertices.first() == vertices.last() {
            vertices.pop();
        }
        drop_collinear(&mut vertices);

        let area = twice_signed_area(&vertices);
        if vertices.len() < 3 || area == 0.0 {
            return Err(PathfindingError::DegeneratePolygon {
                polygon: index,
                vertices: vertices.len(),
            });
        }
        if area < 0.0 {
            debug!("polygon {} is wound counter-clockwise, reversing", index);
            vertices.reverse();
        }

        let mut min = vertices[0];
        let mut max = vertices[0];
        for v in &vertices[1..] {
            min.x = min.x.min(v.x);
            min.y = min.y.min(v.y);
            max.x = max.x.max(v.x);
            max.y = max.y.max(v.y);
        }

        Ok(ObstaclePolygon {
            vertices,
            bounds: Rectangle::from_corners(min, max),
        })
    }

    pub fn vertices(&self) -> &[Point2<f32>] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn bounds(&self) -> Rectangle {
        self.bounds
    }

    /// Ring neighbours of vertex `i`, as `(prev, next)`.
    pub fn neighbours(&self, i: usize) -> (Point2<f32>, Point2<f32>) {
        let n = self.vertices.len();
        (self.vertices[(i + n - 1) % n], self.vertices[(i + 1) % n])
    }

    /// Directed edges of the closed ring, the closing edge last.
    pub fn edges(&self) -> impl Iterator<Item = (Point2<f32>, Point2<f32>)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Ring indices of the vertices whose interior angle is convex.
    pub fn convex_vertices(&self) -> Vec<usize> {
        (0..self.vertices.len())
            .filter(|&i| {
                let (prev, next) = self.neighbours(i);
                is_angle_convex(prev, self.vertices[i], next)
            })
            .collect()
    }

    /// Returns true if the segment `a`-`b` crosses an edge of the ring.
    ///
    /// Edges having `a` or `b` as an endpoint are ignored, so a segment that
    /// starts or ends on a vertex is not blocked by that vertex's own edges.
    pub fn is_line_intersecting(&self, a: Point2<f32>, b: Point2<f32>) -> bool {
        if !self.bounds_touch_segment(a, b) {
            return false;
        }
        self.edges().any(|(e1, e2)| {
            if e1 == a || e1 == b || e2 == a || e2 == b {
                return false;
            }
            segments_intersect(a, b, e1, e2)
        })
    }

    // Closed-interval test: a segment grazing the bounds may still touch a vertex.
    fn bounds_touch_segment(&self, a: Point2<f32>, b: Point2<f32>) -> bool {
        a.x.max(b.x) >= self.bounds.left()
            && a.x.min(b.x) <= self.bounds.right()
            && a.y.max(b.y) >= self.bounds.top()
            && a.y.min(b.y) <= self.bounds.bottom()
    }
}

// Positive for rings wound clockwise on screen (y down).
fn twice_signed_area(vertices: &[Point2<f32>]) -> f32 {
    let n = vertices.len();
    (0..n)
        .map(|i| {
            let (a, b) = (vertices[i], vertices[(i + 1) % n]);
            a.x * b.y - b.x * a.y
        })
        .sum()
}

fn drop_collinear(vertices: &mut Vec<Point2<f32>>) {
    let mut i = 0;
    while vertices.len() >= 3 && i < vertices.len() {
        let n = vertices.len();
        let prev = vertices[(i + n - 1) % n];
        let next = vertices[(i + 1) % n];
        let (d1, d2) = (vertices[i] - prev, next - vertices[i]);
        let cross = d1.x * d2.y - d1.y * d2.x;
        if cross.abs() <= COLLINEAR_EPSILON * d1.norm() * d2.norm() {
            vertices.remove(i);
            // The previous vertex has a new neighbour; look at it again.
            i = i.saturating_sub(1);
        } else {
            i += 1;
        }
    }
}
