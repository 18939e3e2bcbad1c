use crate::config::DEFAULT_MAX_CLEARANCE;
use crate::error::PathfindingResult;
use crate::polygon::ObstaclePolygon;
use common::geometry::{
    convex_angle_contains, is_angle_convex, point_segment_distance, unit_vector,
};
use log::debug;
use nalgebra::{Point2, Vector2};
use smallvec::SmallVec;

/// A convex corner of an obstacle, the only places a shortest path around
/// polygonal obstacles can bend.
#[derive(Debug, Clone)]
pub struct ConvexVertex {
    pub position: Point2<f32>,
    /// Ring neighbours, convex or not. Together with `position` they span
    /// the wedge a line of sight may not enter.
    pub prev: Point2<f32>,
    pub next: Point2<f32>,
    pub polygon: usize,
    pub ring_index: usize,
    /// Outgoing edge ids.
    pub edges: SmallVec<[u32; 8]>,
}

impl ConvexVertex {
    /// Returns true if `point` lies inside the obstacle's interior angle at this vertex.
    pub fn wedge_contains(&self, point: Point2<f32>) -> bool {
        convex_angle_contains(self.prev, self.position, self.next, point)
    }
}

/// Directed edge of the visibility graph.
#[derive(Debug, Clone)]
pub struct PathEdge {
    pub from: u32,
    pub to: u32,
    pub length: f32,
    pub length_sq: f32,
    pub direction: Vector2<f32>,
    /// Free distance from the segment to the nearest obstacle edge.
    pub clearance: f32,
    /// True when the edge runs along a polygon side between two ring neighbours.
    pub is_edge: bool,
}

/// Visibility graph over the convex vertices of a set of static obstacles.
///
/// Built once at map load and immutable afterwards.
#[derive(Debug, Clone)]
pub struct ObstacleGraph {
    polygons: Vec<ObstaclePolygon>,
    vertices: Vec<ConvexVertex>,
    edges: Vec<PathEdge>,
    max_clearance: f32,
}

impl ObstacleGraph {
    pub fn new(polygons: Vec<ObstaclePolygon>) -> Self {
        Self::new_with_max_clearance(polygons, DEFAULT_MAX_CLEARANCE)
    }

    pub fn new_with_max_clearance(polygons: Vec<ObstaclePolygon>, max_clearance: f32) -> Self {
        let mut graph = ObstacleGraph {
            polygons,
            vertices: Vec::new(),
            edges: Vec::new(),
            max_clearance,
        };
        graph.collect_vertices();
        graph.link_vertices();

        debug!(
            "obstacle graph: {} polygons, {} convex vertices, {} edges",
            graph.polygons.len(),
            graph.vertices.len(),
            graph.edges.len()
        );
        graph
    }

    /// Validates raw rings and builds the graph from them.
    pub fn from_rings(rings: Vec<Vec<Point2<f32>>>) -> PathfindingResult<Self> {
        let polygons = rings
            .into_iter()
            .enumerate()
            .map(|(index, ring)| ObstaclePolygon::new(index, ring))
            .collect::<PathfindingResult<Vec<_>>>()?;
        Ok(Self::new(polygons))
    }

    pub fn polygons(&self) -> &[ObstaclePolygon] {
        &self.polygons
    }

    pub fn vertices(&self) -> &[ConvexVertex] {
        &self.vertices
    }

    pub fn vertex(&self, id: u32) -> &ConvexVertex {
        &self.vertices[id as usize]
    }

    pub fn edges(&self) -> &[PathEdge] {
        &self.edges
    }

    pub fn edge(&self, id: u32) -> &PathEdge {
        &self.edges[id as usize]
    }

    pub fn max_clearance(&self) -> f32 {
        self.max_clearance
    }

    /// Outgoing edges of a vertex.
    pub fn edges_from(&self, vertex: u32) -> impl Iterator<Item = &PathEdge> + '_ {
        self.vertices[vertex as usize]
            .edges
            .iter()
            .map(move |&id| &self.edges[id as usize])
    }

    /// Returns true if the segment `a`-`b` crosses no obstacle edge.
    pub fn is_unobstructed(&self, a: Point2<f32>, b: Point2<f32>) -> bool {
        !self
            .polygons
            .iter()
            .any(|polygon| polygon.is_line_intersecting(a, b))
    }

    /// Returns true if `point` can see the vertex: the segment between them
    /// crosses no obstacle edge and does not enter the vertex's wedge.
    pub fn is_visible_from(&self, point: Point2<f32>, vertex: u32) -> bool {
        let v = &self.vertices[vertex as usize];
        !v.wedge_contains(point) && self.is_unobstructed(point, v.position)
    }

    /// Ids of the vertices visible from `point`, in enumeration order.
    pub fn visible_vertices(&self, point: Point2<f32>) -> Vec<u32> {
        (0..self.vertices.len() as u32)
            .filter(|&id| self.is_visible_from(point, id))
            .collect()
    }

    fn collect_vertices(&mut self) {
        for (polygon_id, polygon) in self.polygons.iter().enumerate() {
            for ring_index in polygon.convex_vertices() {
                let (prev, next) = polygon.neighbours(ring_index);
                self.vertices.push(ConvexVertex {
                    position: polygon.vertices()[ring_index],
                    prev,
                    next,
                    polygon: polygon_id,
                    ring_index,
                    edges: SmallVec::new(),
                });
            }
        }
    }

    fn link_vertices(&mut self) {
        let count = self.vertices.len();
        for i in 0..count {
            for j in (i + 1)..count {
                let (p, q) = (&self.vertices[i], &self.vertices[j]);
                if !self.is_unobstructed(p.position, q.position) {
                    continue;
                }

                let is_edge = self.are_ring_neighbours(p, q);
                if !is_edge && (p.wedge_contains(q.position) || q.wedge_contains(p.position)) {
                    continue;
                }

                self.add_edge(i as u32, j as u32, is_edge);
                self.add_edge(j as u32, i as u32, is_edge);
            }
        }
    }

    fn add_edge(&mut self, from: u32, to: u32, is_edge: bool) {
        let p = &self.vertices[from as usize];
        let q = &self.vertices[to as usize];
        let delta = q.position - p.position;
        let length_sq = delta.norm_squared();
        let length = length_sq.sqrt();
        let direction = unit_vector(p.position, q.position).unwrap_or_else(Vector2::zeros);
        let clearance = self.clearance(p, q, is_edge);

        let edge = PathEdge {
            from,
            to,
            length,
            length_sq,
            direction,
            clearance,
            is_edge,
        };
        let id = self.edges.len() as u32;
        self.edges.push(edge);
        self.vertices[from as usize].edges.push(id);
    }

    fn are_ring_neighbours(&self, p: &ConvexVertex, q: &ConvexVertex) -> bool {
        p.polygon == q.polygon && (q.next == p.position || p.next == q.position)
    }

    // Distance from the segment p-q to the nearest obstacle edge not touching p or q.
    fn clearance(&self, p: &ConvexVertex, q: &ConvexVertex, is_edge: bool) -> f32 {
        // p -> q follows the ring winding, so the exterior is on its left.
        let follows_winding = p.next == q.position;
        let mut clearance = self.max_clearance;

        for polygon in &self.polygons {
            for (e1, e2) in polygon.edges() {
                if e1 == p.position || e1 == q.position || e2 == p.position || e2 == q.position {
                    continue;
                }

                if is_edge {
                    for e in [e1, e2] {
                        let on_interior_side = is_angle_convex(p.position, q.position, e);
                        if on_interior_side != follows_winding {
                            clearance =
                                clearance.min(point_segment_distance(p.position, q.position, e));
                        }
                    }
                } else {
                    clearance = clearance
                        .min(point_segment_distance(e1, e2, p.position))
                        .min(point_segment_distance(e1, e2, q.position))
                        .min(point_segment_distance(p.position, q.position, e1))
                        .min(point_segment_distance(p.position, q.position, e2));
                }
            }
        }
        clearance
    }
}
