use super::ObjectPositionsContainer;
use crate::ids_set::ObjectIdsSet;
use common::shapes::Aabb;
use rtree::HilbertRTree;

/// Stores object positions in a Hilbert R-tree: fast `search`, in exchange
/// for a `load` that rebuilds the tree. Batching all the updates of a sync
/// into one `load` per type keeps that cost to one rebuild per frame.
#[derive(Debug, Clone, Default)]
pub struct RTreeObjectPositionsContainer {
    rtree: HilbertRTree,
}

impl RTreeObjectPositionsContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rtree(rtree: HilbertRTree) -> Self {
        Self { rtree }
    }
}

impl ObjectPositionsContainer for RTreeObjectPositionsContainer {
    fn search(&self, area: &Aabb, object_ids: &ObjectIdsSet, results: &mut Vec<u32>) {
        // The tree returns every entry in the area, keep only the requested ones.
        self.rtree
            .search_filter(area, |object_id| object_ids.contains(object_id), results);
    }

    fn load(&mut self, entries: &[(u32, Aabb)]) {
        self.rtree.load(entries);
    }

    fn remove(&mut self, object_id: u32) {
        self.rtree.remove(object_id);
    }

    fn len(&self) -> usize {
        self.rtree.len()
    }
}
