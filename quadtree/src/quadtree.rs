mod collision_pairs;
mod config;
mod maintenance;
mod types;
mod update_entities;

pub use config::Config;
pub use types::QuadSnapshot;

use crate::entity::EntityView;
use crate::error::{QuadtreeError, QuadtreeResult};
use common::shapes::Rectangle;
use fxhash::FxHashMap;
use types::{validate_rect, IndexNode, Quad, QuadStack, ROOT};

// Every quad, interior or leaf, holds each entity overlapping it.
pub struct QuadTree {
    quads: Vec<Quad>,
    free_quads: Vec<u32>,
    nodes: FxHashMap<u32, IndexNode>,
    config: Config,
}

impl QuadTree {
    pub fn new_with_config(bounding_box: Rectangle, config: Config) -> Self {
        QuadTree {
            quads: vec![Quad::new(bounding_box, 0)],
            free_quads: Vec::new(),
            nodes: FxHashMap::default(),
            config,
        }
    }

    pub fn new(bounding_box: Rectangle) -> Self {
        Self::new_with_config(bounding_box, Config::default())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn bounding_box(&self) -> Rectangle {
        self.quads[ROOT as usize].bounds
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, value: u32) -> bool {
        self.nodes.contains_key(&value)
    }

    pub fn quad_count(&self) -> usize {
        self.quads.len() - self.free_quads.len()
    }

    // Ok(false) if already tracked or marked for removal.
    pub fn insert_entity<V>(&mut self, value: u32, view: &V) -> QuadtreeResult<bool>
    where
        V: EntityView + ?Sized,
    {
        if self.nodes.contains_key(&value) || view.is_marked_for_removal(value) {
            return Ok(false);
        }

        let rect = view
            .bounding_rect(value)
            .ok_or(QuadtreeError::UnknownEntity { value })?;
        validate_rect(&rect)?;
        if !self.bounding_box().intersects(&rect) {
            return Err(QuadtreeError::EntityOutOfBounds { value });
        }

        self.nodes.insert(value, IndexNode::new(rect));
        self.register(value);
        Ok(true)
    }

    // Add the entity to every quad overlapping its cached rectangle, top-down from the root
    fn register(&mut self, value: u32) {
        let Some(node) = self.nodes.get_mut(&value) else {
            return;
        };

        let mut stack = QuadStack::new();
        stack.push(ROOT);
        while let Some(quad_id) = stack.pop() {
            let quad = &mut self.quads[quad_id as usize];
            if !quad.bounds.intersects(&node.rect) {
                continue;
            }
            if quad.members.insert(value) {
                node.quads.push(quad_id);
            }
            if let Some(children) = quad.children {
                stack.extend(children);
            }
        }
    }

    // Visit live quads in pre-order: a quad, then its top-left, top-right, bottom-left
    // and bottom-right subtrees.
    fn walk<F>(&self, mut f: F)
    where
        F: FnMut(u32, &Quad),
    {
        let mut stack = QuadStack::new();
        stack.push(ROOT);
        while let Some(quad_id) = stack.pop() {
            let quad = &self.quads[quad_id as usize];
            f(quad_id, quad);
            if let Some(children) = quad.children {
                stack.extend(children.into_iter().rev());
            }
        }
    }

    // Retrieve all quad bounding boxes from the QuadTree
    pub fn all_node_bounding_boxes(&self, bounding_boxes: &mut Vec<Rectangle>) {
        self.walk(|_, quad| bounding_boxes.push(quad.bounds));
    }

    pub fn quads(&self) -> Vec<QuadSnapshot> {
        let mut snapshots = Vec::with_capacity(self.quad_count());
        self.walk(|_, quad| snapshots.push(QuadSnapshot::from(quad)));
        snapshots
    }

    pub fn quads_of(&self, value: u32) -> Vec<Rectangle> {
        let mut bounds = Vec::new();
        if let Some(node) = self.nodes.get(&value) {
            self.walk(|quad_id, quad| {
                if node.quads.contains(&quad_id) {
                    bounds.push(quad.bounds);
                }
            });
        }
        bounds
    }
}
