use super::*;

impl QuadTree {
    // Entities moved out of the root land in no quad until remove_wrecks.
    pub fn update<V>(&mut self, view: &V)
    where
        V: EntityView + ?Sized,
    {
        let mut moved = Vec::new();
        let quads = &mut self.quads;
        for (&value, node) in self.nodes.iter_mut() {
            if !view.is_moving(value) {
                continue;
            }
            let Some(rect) = view.bounding_rect(value) else {
                continue;
            };

            node.rect = rect;
            node.quads.retain(|quad_id| {
                let quad = &mut quads[*quad_id as usize];
                if quad.bounds.intersects(&rect) {
                    true
                } else {
                    quad.members.remove(&value);
                    false
                }
            });
            moved.push(value);
        }

        log::trace!("quadtree update: {} of {} entities moving", moved.len(), self.nodes.len());

        for value in moved {
            self.register(value);
        }

        self.update_tree(ROOT);
    }
}
