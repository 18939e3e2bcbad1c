use crate::config::PlannerConfig;
use crate::error::{Endpoint, PathfindingError, PathfindingResult};
use crate::graph::ObstacleGraph;
use common::geometry::unit_vector;
use log::{debug, warn};
use nalgebra::{Point2, Vector2};
use smallvec::SmallVec;

/// One straight leg of a path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Waypoint {
    pub destination: Point2<f32>,
    pub distance: f32,
    pub direction: Vector2<f32>,
}

impl Waypoint {
    pub fn between(from: Point2<f32>, to: Point2<f32>) -> Self {
        Waypoint {
            destination: to,
            distance: (to - from).norm(),
            direction: unit_vector(from, to).unwrap_or_else(Vector2::zeros),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathStatus {
    /// Straight line to the goal, or no movement at all.
    Direct,
    /// Routed around obstacles all the way to the goal.
    Complete,
    /// The search hit its exploration limit; the path ends early.
    Truncated,
    /// No route exists for this diameter. The single waypoint heads straight
    /// for the goal and the caller is expected to query again later.
    Unreachable,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    pub waypoints: Vec<Waypoint>,
    pub status: PathStatus,
}

impl Path {
    fn direct(start: Point2<f32>, goal: Point2<f32>, status: PathStatus) -> Self {
        Path {
            waypoints: vec![Waypoint::between(start, goal)],
            status,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// Sum of the leg lengths.
    pub fn distance(&self) -> f32 {
        self.waypoints.iter().map(|waypoint| waypoint.distance).sum()
    }

    /// Polyline of the path including its start point.
    pub fn points(&self, start: Point2<f32>) -> Vec<Point2<f32>> {
        let mut points = Vec::with_capacity(self.waypoints.len() + 1);
        points.push(start);
        points.extend(self.waypoints.iter().map(|waypoint| waypoint.destination));
        points
    }
}

#[derive(Debug, Clone, PartialEq)]
enum SearchOutcome {
    Found(Vec<u32>),
    Truncated(Vec<u32>),
    Unreachable,
}

struct Frame {
    vertex: u32,
    via: Option<u32>,
    candidates: SmallVec<[u32; 8]>,
    next: usize,
}

/// Plans paths for circular entities around the obstacles of an [`ObstacleGraph`].
///
/// The search is a greedy depth-first walk, not a shortest-path search: at
/// each vertex it tries the outgoing edges cheapest first and never revisits
/// a vertex, so the first route found is returned.
pub struct Pathfinder {
    graph: ObstacleGraph,
    config: PlannerConfig,
}

impl Pathfinder {
    pub fn new_with_config(graph: ObstacleGraph, config: PlannerConfig) -> Self {
        Pathfinder { graph, config }
    }

    pub fn new(graph: ObstacleGraph) -> Self {
        Self::new_with_config(graph, PlannerConfig::default())
    }

    pub fn graph(&self) -> &ObstacleGraph {
        &self.graph
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    pub fn get_path(
        &self,
        diameter: f32,
        start: Point2<f32>,
        goal: Point2<f32>,
    ) -> PathfindingResult<Path> {
        if !diameter.is_finite() || diameter < 0.0 {
            return Err(PathfindingError::InvalidDiameter { diameter });
        }

        if start == goal {
            return Ok(Path {
                waypoints: Vec::new(),
                status: PathStatus::Direct,
            });
        }
        if self.graph.is_unobstructed(start, goal) {
            return Ok(Path::direct(start, goal, PathStatus::Direct));
        }

        let start_vertex = self.closest_visible(Endpoint::Start, start, goal)?;
        let goal_vertex = self.closest_visible(Endpoint::Goal, goal, start)?;

        let outcome = self.search(diameter, start_vertex, goal_vertex);
        let (edges, status) = match outcome {
            SearchOutcome::Found(edges) => (edges, PathStatus::Complete),
            SearchOutcome::Truncated(edges) => {
                warn!(
                    "path search truncated after {} edges, {} deep",
                    self.config.exploration_limit,
                    edges.len()
                );
                (edges, PathStatus::Truncated)
            }
            SearchOutcome::Unreachable => {
                warn!(
                    "goal ({}, {}) unreachable from ({}, {}) for diameter {}",
                    goal.x, goal.y, start.x, start.y, diameter
                );
                return Ok(Path::direct(start, goal, PathStatus::Unreachable));
            }
        };

        let path = self.build_path(start, goal, start_vertex, &edges, status);
        debug!(
            "path of {} waypoints ({:?}) over {} graph edges",
            path.len(),
            path.status,
            edges.len()
        );
        Ok(path)
    }

    // Visible vertex minimising the detour |from - c|² + |c - to|²; ties keep the first.
    fn closest_visible(
        &self,
        endpoint: Endpoint,
        from: Point2<f32>,
        to: Point2<f32>,
    ) -> PathfindingResult<u32> {
        let mut best: Option<(u32, f32)> = None;
        for id in self.graph.visible_vertices(from) {
            let c = self.graph.vertex(id).position;
            let cost = (c - from).norm_squared() + (to - c).norm_squared();
            if best.map_or(true, |(_, best_cost)| cost < best_cost) {
                best = Some((id, cost));
            }
        }

        best.map(|(id, _)| id)
            .ok_or(PathfindingError::NoVisibleVertex {
                endpoint,
                x: from.x,
                y: from.y,
            })
    }

    fn search(&self, diameter: f32, start: u32, goal: u32) -> SearchOutcome {
        let mut visited = vec![false; self.graph.vertices().len()];
        let mut stack = vec![self.frame(diameter, start, None, goal)];
        visited[start as usize] = true;
        let mut explored = 0;

        while let Some(frame) = stack.last_mut() {
            if frame.vertex == goal {
                return SearchOutcome::Found(Self::trail(&stack));
            }

            let Some(&edge_id) = frame.candidates.get(frame.next) else {
                stack.pop();
                continue;
            };
            if explored >= self.config.exploration_limit {
                return SearchOutcome::Truncated(Self::trail(&stack));
            }
            frame.next += 1;
            explored += 1;

            let to = self.graph.edge(edge_id).to;
            if visited[to as usize] {
                continue;
            }
            visited[to as usize] = true;
            stack.push(self.frame(diameter, to, Some(edge_id), goal));
        }

        SearchOutcome::Unreachable
    }

    // Outgoing edges wide enough for the entity, cheapest first.
    fn frame(&self, diameter: f32, vertex: u32, via: Option<u32>, goal: u32) -> Frame {
        let target = self.graph.vertex(goal).position;
        let mut scored: SmallVec<[(u32, f32); 8]> = self
            .graph
            .vertex(vertex)
            .edges
            .iter()
            .filter_map(|&id| {
                let edge = self.graph.edge(id);
                let clearance = edge.clearance.min(self.config.max_clearance);
                let required = if edge.is_edge { diameter } else { diameter / 2.0 };
                if clearance < required {
                    return None;
                }
                let dest = self.graph.vertex(edge.to).position;
                Some((id, edge.length_sq + (dest - target).norm_squared()))
            })
            .collect();
        scored.sort_by(|a, b| a.1.total_cmp(&b.1));

        Frame {
            vertex,
            via,
            candidates: scored.into_iter().map(|(id, _)| id).collect(),
            next: 0,
        }
    }

    fn trail(stack: &[Frame]) -> Vec<u32> {
        stack.iter().filter_map(|frame| frame.via).collect()
    }

    fn build_path(
        &self,
        start: Point2<f32>,
        goal: Point2<f32>,
        start_vertex: u32,
        edges: &[u32],
        status: PathStatus,
    ) -> Path {
        let mut trail = Vec::with_capacity(edges.len() + 1);
        trail.push(start_vertex);
        trail.extend(edges.iter().map(|&id| self.graph.edge(id).to));

        // Skip ahead to the last vertex the start can already see.
        let first = (0..trail.len())
            .rev()
            .find(|&i| self.graph.is_visible_from(start, trail[i]))
            .unwrap_or(0);
        // Stop at the first remaining vertex the goal can see.
        let last = (first..trail.len()).find(|&i| self.graph.is_visible_from(goal, trail[i]));

        let mut waypoints = vec![Waypoint::between(
            start,
            self.graph.vertex(trail[first]).position,
        )];

        let end = last.unwrap_or(trail.len() - 1);
        for &id in &edges[first..end] {
            let edge = self.graph.edge(id);
            waypoints.push(Waypoint {
                destination: self.graph.vertex(edge.to).position,
                distance: edge.length,
                direction: edge.direction,
            });
        }

        if last.is_some() {
            waypoints.push(Waypoint::between(
                self.graph.vertex(trail[end]).position,
                goal,
            ));
        }

        Path { waypoints, status }
    }
}
