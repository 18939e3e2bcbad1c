pub mod config;
pub mod finder;
pub mod handler;
pub mod manager;

pub use config::ResolverConfig;
pub use finder::{Collision, CollisionFinder};
pub use handler::CollisionHandler;
pub use manager::CollisionManager;

use nalgebra::Point2;
use quadtree::EntityView;

/// Write access the collision handler needs on top of [`EntityView`].
pub trait EntityMover: EntityView {
    /// Ask an entity to walk towards `target`. The entity is expected to
    /// report itself as moving on the next tick.
    fn go_to(&mut self, value: u32, target: Point2<f32>);
}
