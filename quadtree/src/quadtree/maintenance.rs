use super::*;

impl QuadTree {
    // Call before the owner frees the returned handles.
    pub fn remove_wrecks<V>(&mut self, view: &V) -> Vec<u32>
    where
        V: EntityView + ?Sized,
    {
        let mut wrecks: Vec<u32> = self
            .nodes
            .iter()
            .filter(|&(&value, node)| {
                node.quads.is_empty()
                    || view.is_marked_for_removal(value)
                    || view.bounding_rect(value).is_none()
            })
            .map(|(&value, _)| value)
            .collect();
        wrecks.sort_unstable();

        for &value in &wrecks {
            if let Some(node) = self.nodes.remove(&value) {
                if node.quads.is_empty() {
                    log::warn!("entity {} left the quadtree bounds and is no longer tracked", value);
                }
                for quad_id in node.quads {
                    self.quads[quad_id as usize].members.remove(&value);
                }
            }
        }

        wrecks
    }

    pub(super) fn update_tree(&mut self, quad_id: u32) {
        let quad = &self.quads[quad_id as usize];
        let count = quad.members.len();
        if quad.is_leaf() {
            if count > self.config.node_capacity && quad.level < self.config.max_depth {
                self.split(quad_id);
            }
        } else if count < self.config.node_capacity {
            self.merge(quad_id);
        }

        if let Some(children) = self.quads[quad_id as usize].children {
            for child in children {
                self.update_tree(child);
            }
        }
    }

    // Subdivide a quad into four quadrants and redistribute its entities
    fn split(&mut self, quad_id: u32) {
        let (bounds, level) = {
            let quad = &self.quads[quad_id as usize];
            (quad.bounds, quad.level)
        };
        log::debug!("splitting quad {} at level {}", quad_id, level);

        let quadrants = bounds.quadrants();
        let mut children = [0u32; 4];
        for (child, child_bounds) in children.iter_mut().zip(quadrants) {
            *child = self.alloc_quad(child_bounds, level + 1);
        }
        self.quads[quad_id as usize].children = Some(children);

        let members: Vec<u32> = self.quads[quad_id as usize].members.iter().copied().collect();
        for value in members {
            let Some(node) = self.nodes.get_mut(&value) else {
                continue;
            };
            for child in children {
                let quad = &mut self.quads[child as usize];
                if quad.bounds.intersects(&node.rect) && quad.members.insert(value) {
                    node.quads.push(child);
                }
            }
        }
    }

    // Discard all descendants of a quad; its own membership already covers theirs
    fn merge(&mut self, quad_id: u32) {
        log::debug!("merging quad {}", quad_id);
        if let Some(children) = self.quads[quad_id as usize].children.take() {
            for child in children {
                self.clear(child);
            }
        }
    }

    fn clear(&mut self, quad_id: u32) {
        if let Some(children) = self.quads[quad_id as usize].children.take() {
            for child in children {
                self.clear(child);
            }
        }

        let members = std::mem::take(&mut self.quads[quad_id as usize].members);
        for value in members {
            if let Some(node) = self.nodes.get_mut(&value) {
                node.quads.retain(|id| *id != quad_id);
            }
        }
        self.free_quads.push(quad_id);
    }

    fn alloc_quad(&mut self, bounds: Rectangle, level: usize) -> u32 {
        match self.free_quads.pop() {
            Some(quad_id) => {
                self.quads[quad_id as usize] = Quad::new(bounds, level);
                quad_id
            }
            None => {
                self.quads.push(Quad::new(bounds, level));
                (self.quads.len() - 1) as u32
            }
        }
    }
}
