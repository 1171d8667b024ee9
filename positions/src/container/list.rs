use super::ObjectPositionsContainer;
use crate::ids_set::ObjectIdsSet;
use common::collision_detection::aabb_aabb;
use common::shapes::Aabb;
use fxhash::FxHashMap;

/// Keeps object positions without any spatial data structure. Searches still
/// do an AABB overlap check, but are linear; `load`/`remove` are as cheap as
/// a map insertion/removal.
#[derive(Debug, Clone, Default)]
pub struct ListObjectPositionsContainer {
    object_positions: FxHashMap<u32, Aabb>,
}

impl ListObjectPositionsContainer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ObjectPositionsContainer for ListObjectPositionsContainer {
    fn search(&self, area: &Aabb, object_ids: &ObjectIdsSet, results: &mut Vec<u32>) {
        // Walk whichever side is smaller.
        if object_ids.len() <= self.object_positions.len() {
            for object_id in object_ids.iter() {
                // The set can hold ids that are stored in other containers.
                if let Some(aabb) = self.object_positions.get(&object_id) {
                    if aabb_aabb(aabb, area) {
                        results.push(object_id);
                    }
                }
            }
        } else {
            for (&object_id, aabb) in &self.object_positions {
                if object_ids.contains(object_id) && aabb_aabb(aabb, area) {
                    results.push(object_id);
                }
            }
        }
    }

    fn load(&mut self, entries: &[(u32, Aabb)]) {
        self.object_positions.reserve(entries.len());
        for &(object_id, aabb) in entries {
            self.object_positions.insert(object_id, aabb);
        }
    }

    fn remove(&mut self, object_id: u32) {
        self.object_positions.remove(&object_id);
    }

    fn len(&self) -> usize {
        self.object_positions.len()
    }
}
