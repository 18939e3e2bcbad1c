pub mod entity;
pub mod error;
pub mod quadtree;

pub use entity::EntityView;
pub use error::{QuadtreeError, QuadtreeResult};
pub use quadtree::{Config, QuadSnapshot, QuadTree};
