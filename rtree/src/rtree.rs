use crate::config::RTreeConfig;
use crate::error::RTreeResult;
use crate::hilbert::hilbert_value;
use common::collision_detection::aabb_aabb;
use common::shapes::Aabb;
use fxhash::FxHashMap;
use smallvec::SmallVec;

mod build;
mod search;

#[derive(Clone, Copy, Debug)]
pub(crate) struct Item {
    pub(crate) value: u32,
    pub(crate) aabb: Aabb,
    pub(crate) alive: bool,
}

pub(crate) type NodeStack = SmallVec<[usize; 32]>;

/// Packed R-tree over rectangles, ordered along a Hilbert curve.
///
/// Items are only added in bulk with [`HilbertRTree::load`], which rebuilds
/// the whole tree. Removal only flags the item: node boxes keep covering it
/// (they stay valid, only looser) and the item is dropped on the next load.
///
/// Layout follows the flatbush scheme: `boxes` holds the leaves first, in
/// Hilbert order, then every parent level bottom-up; `indices` holds, for a
/// leaf, its slot in `items` and, for a parent, the position of its first
/// child in `boxes`.
#[derive(Clone, Debug)]
pub struct HilbertRTree {
    items: Vec<Item>,
    slots: FxHashMap<u32, usize>,
    boxes: Vec<Aabb>,
    indices: Vec<u32>,
    level_bounds: Vec<usize>,
    node_size: usize,
    dead: usize,
    sort_scratch: Vec<(u32, Item)>,
}

impl HilbertRTree {
    pub fn new() -> Self {
        Self::with_node_size(RTreeConfig::default().node_size)
    }

    pub fn new_with_config(config: RTreeConfig) -> RTreeResult<Self> {
        config.validate()?;
        Ok(Self::with_node_size(config.node_size))
    }

    fn with_node_size(node_size: usize) -> Self {
        Self {
            items: Vec::new(),
            slots: FxHashMap::default(),
            boxes: Vec::new(),
            indices: Vec::new(),
            level_bounds: Vec::new(),
            node_size,
            dead: 0,
            sort_scratch: Vec::new(),
        }
    }

    /// Number of live items.
    pub fn len(&self) -> usize {
        self.items.len() - self.dead
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, value: u32) -> bool {
        self.slots.contains_key(&value)
    }

    /// Bounding box of the whole tree as of the last load.
    pub fn bounds(&self) -> Option<Aabb> {
        self.boxes.last().copied()
    }

    /// Flags `value` as removed. Returns false if it was not in the tree.
    pub fn remove(&mut self, value: u32) -> bool {
        match self.slots.remove(&value) {
            Some(slot) => {
                self.items[slot].alive = false;
                self.dead += 1;
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.slots.clear();
        self.boxes.clear();
        self.indices.clear();
        self.level_bounds.clear();
        self.dead = 0;
    }
}

impl Default for HilbertRTree {
    fn default() -> Self {
        Self::new()
    }
}
