use std::fmt;
use thiserror::Error;

/// Which end of a path query an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Goal,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Start => write!(f, "start"),
            Endpoint::Goal => write!(f, "goal"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum PathfindingError {
    #[error("polygon {polygon} has {vertices} distinct vertices, at least 3 are required")]
    DegeneratePolygon { polygon: usize, vertices: usize },
    #[error("polygon {polygon} has a non-finite vertex")]
    NonFiniteVertex { polygon: usize },
    #[error("diameter must be finite and non-negative, got {diameter}")]
    InvalidDiameter { diameter: f32 },
    #[error("no obstacle vertex is visible from the {endpoint} at ({x}, {y})")]
    NoVisibleVertex { endpoint: Endpoint, x: f32, y: f32 },
}

pub type PathfindingResult<T> = Result<T, PathfindingError>;
