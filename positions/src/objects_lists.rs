//! Bridges between the lists of objects used by events and the id sets used
//! by the manager queries.

use crate::ids_set::ObjectIdsSet;
use crate::object::ObjectHandle;
use fxhash::FxHashMap;

/// Lists of live objects, keyed by object name.
pub type ObjectsLists = FxHashMap<String, Vec<ObjectHandle>>;

/// Set of the ids of all the objects of the lists.
pub fn objects_lists_to_object_ids_set(objects_lists: &ObjectsLists) -> ObjectIdsSet {
    objects_lists
        .values()
        .flatten()
        .map(|object| object.borrow().id())
        .collect()
}

/// Removes from the lists every object whose id is not in `object_ids`.
/// The order of the remaining objects is kept.
pub fn keep_only_objects_from_object_ids_set(
    objects_lists: &mut ObjectsLists,
    object_ids: &ObjectIdsSet,
) {
    for list in objects_lists.values_mut() {
        list.retain(|object| object_ids.contains(object.borrow().id()));
    }
}

/// Removes from the lists every object whose id is in none of the sets.
/// The keys of `grouped_object_ids` are not used.
pub fn keep_only_objects_from_grouped_object_ids_sets<K>(
    objects_lists: &mut ObjectsLists,
    grouped_object_ids: &FxHashMap<K, ObjectIdsSet>,
) {
    for list in objects_lists.values_mut() {
        list.retain(|object| {
            let object_id = object.borrow().id();
            grouped_object_ids
                .values()
                .any(|object_ids| object_ids.contains(object_id))
        });
    }
}
