use super::*;
use fxhash::FxHashSet;

impl QuadTree {
    // Sorted (smaller, larger) pairs sharing a leaf, each reported once.
    pub fn nearby_pairs(&self) -> Vec<(u32, u32)> {
        let mut pairs = FxHashSet::default();
        let mut members = Vec::new();
        self.walk(|_, quad| {
            if !quad.is_leaf() || quad.members.len() < 2 {
                return;
            }

            members.clear();
            members.extend(quad.members.iter().copied());
            members.sort_unstable();
            for (i, &a) in members.iter().enumerate() {
                for &b in &members[i + 1..] {
                    pairs.insert((a, b));
                }
            }
        });

        let mut pairs: Vec<(u32, u32)> = pairs.into_iter().collect();
        pairs.sort_unstable();
        pairs
    }
}
