use crate::config::ResolverConfig;
use crate::finder::Collision;
use crate::EntityMover;

/// Pushes colliding entities apart by sending each a fixed distance away
/// from the other.
#[derive(Debug, Clone, Default)]
pub struct CollisionHandler {
    config: ResolverConfig,
}

impl CollisionHandler {
    pub fn new_with_config(config: ResolverConfig) -> Self {
        CollisionHandler { config }
    }

    pub fn new() -> Self {
        Self::new_with_config(ResolverConfig::default())
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    pub fn handle<W>(&self, collisions: &[Collision], world: &mut W)
    where
        W: EntityMover + ?Sized,
    {
        let nudge = self.config.nudge_distance;
        for collision in collisions {
            let offset = collision.unit_vector * nudge;
            if let Some(rect) = world.bounding_rect(collision.first) {
                world.go_to(collision.first, rect.center() + offset);
            }
            if let Some(rect) = world.bounding_rect(collision.second) {
                world.go_to(collision.second, rect.center() - offset);
            }
        }
    }
}
