use crate::error::{QuadtreeError, QuadtreeResult};
use common::shapes::Rectangle;
use fxhash::FxHashSet;
use smallvec::SmallVec;

pub(crate) const ROOT: u32 = 0;

pub(crate) type QuadStack = SmallVec<[u32; 32]>;

pub(crate) struct Quad {
    pub(crate) bounds: Rectangle,
    pub(crate) level: usize,
    // Either no children or exactly four, in top-left, top-right, bottom-left, bottom-right order
    pub(crate) children: Option<[u32; 4]>,
    pub(crate) members: FxHashSet<u32>,
}

impl Quad {
    pub(crate) fn new(bounds: Rectangle, level: usize) -> Self {
        Self {
            bounds,
            level,
            children: None,
            members: FxHashSet::default(),
        }
    }

    pub(crate) fn is_leaf(&self) -> bool {
        self.children.is_none()
    }
}

// Registry entry for one tracked entity
pub(crate) struct IndexNode {
    // Rectangle as of the last insert/update, used to redistribute on split
    pub(crate) rect: Rectangle,
    pub(crate) quads: SmallVec<[u32; 8]>,
}

impl IndexNode {
    pub(crate) fn new(rect: Rectangle) -> Self {
        Self {
            rect,
            quads: SmallVec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuadSnapshot {
    pub bounds: Rectangle,
    pub level: usize,
    pub is_leaf: bool,
    // Sorted.
    pub members: Vec<u32>,
}

impl From<&Quad> for QuadSnapshot {
    fn from(quad: &Quad) -> Self {
        let mut members: Vec<u32> = quad.members.iter().copied().collect();
        members.sort_unstable();
        Self {
            bounds: quad.bounds,
            level: quad.level,
            is_leaf: quad.is_leaf(),
            members,
        }
    }
}

pub(crate) fn validate_rect(rect: &Rectangle) -> QuadtreeResult<()> {
    let finite = rect.x.is_finite()
        && rect.y.is_finite()
        && rect.width.is_finite()
        && rect.height.is_finite();
    if !finite || rect.width < 0.0 || rect.height < 0.0 {
        return Err(QuadtreeError::InvalidRectangle {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
        });
    }
    Ok(())
}
