use crate::config::ResolverConfig;
use crate::finder::{Collision, CollisionFinder};
use crate::handler::CollisionHandler;
use crate::EntityMover;
use common::shapes::Rectangle;
use quadtree::{Config, EntityView, QuadTree, QuadtreeResult};

/// Per-tick collision pipeline: the quadtree broad phase, circle tests and
/// separation nudges.
pub struct CollisionManager {
    quadtree: QuadTree,
    finder: CollisionFinder,
    handler: CollisionHandler,
}

impl CollisionManager {
    pub fn new_with_config(area: Rectangle, config: Config, resolver: ResolverConfig) -> Self {
        CollisionManager {
            quadtree: QuadTree::new_with_config(area, config),
            finder: CollisionFinder::new(),
            handler: CollisionHandler::new_with_config(resolver),
        }
    }

    pub fn new(area: Rectangle) -> Self {
        Self::new_with_config(area, Config::default(), ResolverConfig::default())
    }

    pub fn quadtree(&self) -> &QuadTree {
        &self.quadtree
    }

    pub fn insert_entity<V>(&mut self, value: u32, view: &V) -> QuadtreeResult<bool>
    where
        V: EntityView + ?Sized,
    {
        self.quadtree.insert_entity(value, view)
    }

    /// Refresh the index, then find and resolve this tick's collisions.
    pub fn update<W>(&mut self, world: &mut W) -> Vec<Collision>
    where
        W: EntityMover + ?Sized,
    {
        self.quadtree.update(&*world);
        let pairs = self.quadtree.nearby_pairs();
        let collisions = self.finder.find(&pairs, &*world);
        self.handler.handle(&collisions, world);
        collisions
    }

    pub fn remove_wrecks<V>(&mut self, view: &V) -> Vec<u32>
    where
        V: EntityView + ?Sized,
    {
        self.quadtree.remove_wrecks(view)
    }

    /// Bounds of every quad, for debug drawing.
    pub fn all_node_bounding_boxes(&self, bounding_boxes: &mut Vec<Rectangle>) {
        self.quadtree.all_node_bounding_boxes(bounding_boxes);
    }
}
