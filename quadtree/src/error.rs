use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum QuadtreeError {
    #[error(
        "rectangle must have a finite center and finite, non-negative width/height (x: {x}, y: {y}, width: {width}, height: {height})"
    )]
    InvalidRectangle {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
    #[error("entity {value} does not overlap any quad of the tree")]
    EntityOutOfBounds { value: u32 },
    #[error("entity {value} has no bounding rectangle")]
    UnknownEntity { value: u32 },
}

pub type QuadtreeResult<T> = Result<T, QuadtreeError>;
