use super::*;

impl ObjectPositionsManager {
    /// Moves the objects of the first set so that they stop overlapping the
    /// objects of the second set.
    ///
    /// For each object, the translations needed to get out of every colliding
    /// object are summed, and applied once all its collisions are handled, so
    /// the result does not depend on the order of the pairs. An object caught
    /// between several others may need a few frames to be fully separated.
    ///
    /// Moved objects get their new position written back and are marked as
    /// dirty, to be indexed again at the next sync.
    pub fn separate_objects(
        &mut self,
        object1_ids: &ObjectIdsSet,
        object2_ids: &ObjectIdsSet,
        ignore_touching_edges: bool,
    ) {
        self.sync();

        let mut object_name_ids = std::mem::take(&mut self.object_name_ids);
        let mut candidates = std::mem::take(&mut self.candidates);
        let mut position_updates = std::mem::take(&mut self.position_updates);
        position_updates.clear();
        self.collect_object_name_ids(object2_ids, &mut object_name_ids);

        for object1_id in object1_ids.iter() {
            let object1_position = match self.all_object_positions.get(&object1_id) {
                Some(object_position) => object_position,
                None => continue,
            };

            let mut moved = false;
            let (mut move_x, mut move_y) = (0.0, 0.0);
            for object_name_id in &object_name_ids {
                let container = match self.object_positions_containers.get(object_name_id) {
                    Some(container) => container,
                    None => continue,
                };
                candidates.clear();
                container.search(&object1_position.aabb, object2_ids, &mut candidates);

                for &object2_id in &candidates {
                    if object2_id == object1_id {
                        continue;
                    }
                    let object2_position = match self.all_object_positions.get(&object2_id) {
                        Some(object_position) => object_position,
                        None => continue,
                    };

                    for hitbox1 in &object1_position.hitboxes {
                        for hitbox2 in &object2_position.hitboxes {
                            if let Some(result) =
                                collision_test(hitbox1, hitbox2, ignore_touching_edges)
                            {
                                move_x += result.move_axis.0;
                                move_y += result.move_axis.1;
                                moved = true;
                            }
                        }
                    }
                }
            }

            if moved {
                position_updates.push((object1_id, move_x, move_y));
            }
        }

        // Apply all new positions at once, after all collisions are handled.
        for &(object_id, move_x, move_y) in &position_updates {
            let object_position = match self.all_object_positions.get_mut(&object_id) {
                Some(object_position) => object_position,
                None => continue,
            };
            object_position.move_by(move_x, move_y);

            if let Some(object) = object_position.object.upgrade() {
                {
                    let mut live = object.borrow_mut();
                    live.set_x(object_position.x);
                    live.set_y(object_position.y);
                }
                self.dirty_objects.insert(object_id, object);
            }
        }

        self.object_name_ids = object_name_ids;
        self.candidates = candidates;
        self.position_updates = position_updates;
    }
}
