use common::shapes::Circle;
use nalgebra::Vector2;
use quadtree::EntityView;

/// Two overlapping entities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Collision {
    pub first: u32,
    pub second: u32,
    /// Radius sum minus centre distance.
    pub penetration_depth: f32,
    /// Points from the second entity's centre towards the first's.
    pub unit_vector: Vector2<f32>,
}

/// Narrow phase: circle overlap tests on broad-phase candidate pairs.
#[derive(Debug, Default, Clone, Copy)]
pub struct CollisionFinder;

impl CollisionFinder {
    pub fn new() -> Self {
        CollisionFinder
    }

    /// Entities are treated as circles inscribed in their bounding rectangle.
    /// Pairs with an entity the view no longer knows are skipped.
    pub fn find<V>(&self, pairs: &[(u32, u32)], view: &V) -> Vec<Collision>
    where
        V: EntityView + ?Sized,
    {
        let mut collisions = Vec::new();
        for &(first, second) in pairs {
            let (Some(a), Some(b)) = (view.bounding_rect(first), view.bounding_rect(second)) else {
                continue;
            };
            let a = Circle::from_bounding_box(&a);
            let b = Circle::from_bounding_box(&b);

            let radius_sum = a.radius + b.radius;
            let delta = a.center() - b.center();
            let distance_sq = delta.norm_squared();
            if distance_sq >= radius_sum * radius_sum {
                continue;
            }

            let distance = distance_sq.sqrt();
            let collision = if distance > 0.0 {
                Collision {
                    first,
                    second,
                    penetration_depth: radius_sum - distance,
                    unit_vector: delta / distance,
                }
            } else {
                log::warn!(
                    "entities {} and {} share a centre, separating along +x",
                    first,
                    second
                );
                Collision {
                    first,
                    second,
                    penetration_depth: radius_sum,
                    unit_vector: Vector2::new(1.0, 0.0),
                }
            };
            collisions.push(collision);
        }

        log::trace!("{} collisions in {} candidate pairs", collisions.len(), pairs.len());
        collisions
    }
}
