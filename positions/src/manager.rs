use crate::config::PositionsConfig;
use crate::container::{ContainerFactory, ObjectPositionsContainer};
use crate::error::PositionsResult;
use crate::ids_set::ObjectIdsSet;
use crate::object::{ObjectHandle, ObjectPosition};
use crate::profiler::ProfilerHandle;
use collisions::{collision_test, is_point_inside, raycast_test, Hitbox, RaycastResult};
use common::collision_detection::squared_distance;
use common::shapes::Aabb;
use fxhash::{FxHashMap, FxHashSet};
use log::debug;
use std::time::Instant;

mod pairs;
mod points;
mod raycast;
mod separation;
mod sync;

const SYNC_COUNTER: &str = "ObjectPositionsManager.update";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionsCounters {
    pub object_positions_containers_count: usize,
    pub all_object_positions_count: usize,
}

/// Stores the coordinates, AABB and hitboxes of the objects of a scene, and
/// answers queries about them: objects near a position or another object,
/// collisions, raycasts, and separation of colliding objects.
///
/// Objects report their changes with `mark_created`, `mark_dirty` and
/// `mark_removed`; the changes are applied to the spatial containers (one per
/// object type) at the next `sync`, which every query runs first.
pub struct ObjectPositionsManager {
    factory: ContainerFactory,
    dirty_objects: FxHashMap<u32, ObjectHandle>,
    removed_object_ids: FxHashSet<u32>,
    object_positions_containers: FxHashMap<u32, Box<dyn ObjectPositionsContainer>>,
    /// Every object handled by the manager, keyed by object id.
    all_object_positions: FxHashMap<u32, ObjectPosition>,
    profiler: Option<ProfilerHandle>,

    // Scratch buffers, cleared and reused by each sync/query.
    bulk_object_position_updates: FxHashMap<u32, Vec<(u32, Aabb)>>,
    object_name_ids: Vec<u32>,
    candidates: Vec<u32>,
    position_updates: Vec<(u32, f32, f32)>,
}

impl ObjectPositionsManager {
    pub fn new() -> Self {
        Self::with_factory(ContainerFactory::default())
    }

    pub fn new_with_config(config: PositionsConfig) -> PositionsResult<Self> {
        Ok(Self::with_factory(ContainerFactory::new(config)?))
    }

    fn with_factory(factory: ContainerFactory) -> Self {
        Self {
            factory,
            dirty_objects: FxHashMap::default(),
            removed_object_ids: FxHashSet::default(),
            object_positions_containers: FxHashMap::default(),
            all_object_positions: FxHashMap::default(),
            profiler: None,
            bulk_object_position_updates: FxHashMap::default(),
            object_name_ids: Vec::new(),
            candidates: Vec::new(),
            position_updates: Vec::new(),
        }
    }

    pub fn config(&self) -> &PositionsConfig {
        self.factory.config()
    }

    /// Sets the profiler receiving the sync counters, or `None` to use none.
    pub fn set_profiler(&mut self, profiler: Option<ProfilerHandle>) {
        self.profiler = profiler;
    }

    pub fn get_counters(&self) -> PositionsCounters {
        PositionsCounters {
            object_positions_containers_count: self.object_positions_containers.len(),
            all_object_positions_count: self.all_object_positions.len(),
        }
    }

    /// Snapshot of an object, as of the last sync.
    pub fn object_position(&self, object_id: u32) -> Option<&ObjectPosition> {
        self.all_object_positions.get(&object_id)
    }

    /// Container of an object type, if one was created.
    pub fn container(&self, object_name_id: u32) -> Option<&dyn ObjectPositionsContainer> {
        self.object_positions_containers
            .get(&object_name_id)
            .map(|container| container.as_ref())
    }

    pub fn has_pending_changes(&self) -> bool {
        !self.dirty_objects.is_empty() || !self.removed_object_ids.is_empty()
    }

    /// Registers a new object, so that its coordinates, AABB and hitboxes
    /// are read at the next sync.
    pub fn mark_created(&mut self, object: &ObjectHandle) {
        let object_id = object.borrow().id();
        // A destroyed object can be recreated with the same id in the same frame.
        self.removed_object_ids.remove(&object_id);
        self.dirty_objects.insert(object_id, object.clone());
    }

    /// Registers an object that moved, or whose AABB/hitboxes changed.
    pub fn mark_dirty(&mut self, object: &ObjectHandle) {
        let object_id = object.borrow().id();
        self.dirty_objects.insert(object_id, object.clone());
    }

    /// Registers an object to be forgotten at the next sync.
    pub fn mark_removed(&mut self, object: &ObjectHandle) {
        let object_id = object.borrow().id();
        self.removed_object_ids.insert(object_id);
    }

    /// Sorted, deduplicated name ids of the known objects of `object_ids`,
    /// i.e. the containers to search them in.
    fn collect_object_name_ids(&self, object_ids: &ObjectIdsSet, object_name_ids: &mut Vec<u32>) {
        object_name_ids.clear();
        for object_id in object_ids.iter() {
            // Ids of deleted objects can still be manipulated by events: ignore them.
            if let Some(object_position) = self.all_object_positions.get(&object_id) {
                object_name_ids.push(object_position.object_name_id);
            }
        }
        object_name_ids.sort_unstable();
        object_name_ids.dedup();
    }
}

impl Default for ObjectPositionsManager {
    fn default() -> Self {
        Self::new()
    }
}

fn get_or_create_container<'a>(
    containers: &'a mut FxHashMap<u32, Box<dyn ObjectPositionsContainer>>,
    factory: &ContainerFactory,
    object_name_id: u32,
) -> &'a mut Box<dyn ObjectPositionsContainer> {
    containers
        .entry(object_name_id)
        .or_insert_with(|| factory.make(object_name_id))
}

// True if any polygon of the first list touches any polygon of the second.
fn check_hitboxes_collision(
    hitboxes1: &[Hitbox],
    hitboxes2: &[Hitbox],
    ignore_touching_edges: bool,
) -> bool {
    hitboxes1.iter().any(|hitbox1| {
        hitboxes2
            .iter()
            .any(|hitbox2| collision_test(hitbox1, hitbox2, ignore_touching_edges).is_some())
    })
}

fn is_point_inside_hitboxes(hitboxes: &[Hitbox], x: f32, y: f32) -> bool {
    hitboxes.iter().any(|hitbox| is_point_inside(hitbox, x, y))
}
