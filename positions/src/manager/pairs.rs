use super::*;

impl ObjectPositionsManager {
    /// Checks collisions between two sets of objects (any hitbox of an object
    /// of the first set touching any hitbox of an object of the second set).
    ///
    /// Both sets are filtered to keep only the objects in collision with a
    /// member of the other set. If `inverted` is true, only the first set is
    /// filtered, keeping the objects NOT in collision with any object of the
    /// second set; the second set is left untouched.
    ///
    /// If `ignore_touching_edges` is true, polygons are not considered in
    /// collision when only their edges touch.
    pub fn collision_test(
        &mut self,
        object1_ids: &mut ObjectIdsSet,
        object2_ids: &mut ObjectIdsSet,
        inverted: bool,
        ignore_touching_edges: bool,
    ) -> bool {
        self.pick_pairs(object1_ids, object2_ids, inverted, 0.0, |position1, position2| {
            check_hitboxes_collision(
                &position1.hitboxes,
                &position2.hitboxes,
                ignore_touching_edges,
            )
        })
    }

    /// Same filtering as [`ObjectPositionsManager::collision_test`], for
    /// objects whose centers are strictly closer than `distance`.
    pub fn distance_test(
        &mut self,
        object1_ids: &mut ObjectIdsSet,
        object2_ids: &mut ObjectIdsSet,
        distance: f32,
        inverted: bool,
    ) -> bool {
        let squared_distance = distance * distance;
        // Centers can be up to `distance` away while the AABBs don't overlap:
        // the search area is grown accordingly.
        self.pick_pairs(object1_ids, object2_ids, inverted, distance, |position1, position2| {
            position1.squared_distance_to(position2) < squared_distance
        })
    }

    /// Runs `is_match` on every pair of distinct objects (one from each set)
    /// whose AABBs are within `margin` of each other, then narrows the sets.
    fn pick_pairs<F>(
        &mut self,
        object1_ids: &mut ObjectIdsSet,
        object2_ids: &mut ObjectIdsSet,
        inverted: bool,
        margin: f32,
        mut is_match: F,
    ) -> bool
    where
        F: FnMut(&ObjectPosition, &ObjectPosition) -> bool,
    {
        self.sync();

        let mut object_name_ids = std::mem::take(&mut self.object_name_ids);
        let mut candidates = std::mem::take(&mut self.candidates);
        // The containers to search objects of the second set in.
        self.collect_object_name_ids(object2_ids, &mut object_name_ids);

        let mut is_true = false;
        let mut picked_object1_ids = ObjectIdsSet::new();
        let mut picked_object2_ids = ObjectIdsSet::new();

        for object1_id in object1_ids.iter() {
            let object1_position = match self.all_object_positions.get(&object1_id) {
                Some(object_position) => object_position,
                None => continue,
            };
            let search_area = if margin > 0.0 {
                object1_position.aabb.expanded_by(margin)
            } else {
                object1_position.aabb
            };

            let mut at_least_one_object = false;
            for object_name_id in &object_name_ids {
                let container = match self.object_positions_containers.get(object_name_id) {
                    Some(container) => container,
                    None => continue,
                };
                candidates.clear();
                container.search(&search_area, object2_ids, &mut candidates);

                for &object2_id in &candidates {
                    // Both sets can contain the same objects.
                    if object2_id == object1_id {
                        continue;
                    }
                    let object2_position = match self.all_object_positions.get(&object2_id) {
                        Some(object_position) => object_position,
                        None => continue,
                    };

                    if is_match(object1_position, object2_position) {
                        if !inverted {
                            is_true = true;
                            picked_object1_ids.insert(object1_id);
                            picked_object2_ids.insert(object2_id);
                        }
                        at_least_one_object = true;
                    }
                }
            }

            if !at_least_one_object && inverted {
                // The object is not matching any object of the second set.
                is_true = true;
                picked_object1_ids.insert(object1_id);
            }
        }

        self.object_name_ids = object_name_ids;
        self.candidates = candidates;

        object1_ids.replace_with(picked_object1_ids);
        if !inverted {
            object2_ids.replace_with(picked_object2_ids);
        }

        is_true
    }
}
