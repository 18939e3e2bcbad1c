pub mod config;
pub mod error;
pub mod graph;
pub mod pathfinder;
pub mod polygon;

pub use config::PlannerConfig;
pub use error::{Endpoint, PathfindingError, PathfindingResult};
pub use graph::{ConvexVertex, ObstacleGraph, PathEdge};
pub use pathfinder::{Path, PathStatus, Pathfinder, Waypoint};
pub use polygon::ObstaclePolygon;
