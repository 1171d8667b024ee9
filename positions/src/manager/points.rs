use super::*;

impl ObjectPositionsManager {
    /// Keeps in `object_ids` the objects containing at least one of `points`
    /// inside their hitboxes (inside their AABB if `accurate` is false).
    /// Returns true if any object contains any point.
    ///
    /// If `inverted` is true, the objects containing a point are removed
    /// instead, and the result is true if at least one object is left.
    pub fn points_test(
        &mut self,
        object_ids: &mut ObjectIdsSet,
        points: &[(f32, f32)],
        accurate: bool,
        inverted: bool,
    ) -> bool {
        self.sync();

        let mut object_name_ids = std::mem::take(&mut self.object_name_ids);
        let mut candidates = std::mem::take(&mut self.candidates);
        self.collect_object_name_ids(object_ids, &mut object_name_ids);

        let mut is_any_object_containing_any_point = false;
        let mut picked_object_ids = ObjectIdsSet::new();

        for object_name_id in &object_name_ids {
            let container = match self.object_positions_containers.get(object_name_id) {
                Some(container) => container,
                None => continue,
            };

            for &(x, y) in points {
                candidates.clear();
                container.search(&Aabb::from_point(x, y), object_ids, &mut candidates);

                for &object_id in &candidates {
                    let object_position = match self.all_object_positions.get(&object_id) {
                        Some(object_position) => object_position,
                        None => continue,
                    };
                    let is_on_object =
                        !accurate || is_point_inside_hitboxes(&object_position.hitboxes, x, y);
                    if is_on_object {
                        if !inverted {
                            is_any_object_containing_any_point = true;
                        }
                        picked_object_ids.insert(object_id);
                    }
                }
            }
        }

        self.object_name_ids = object_name_ids;
        self.candidates = candidates;

        if inverted {
            object_ids.remove_all(&picked_object_ids);
            !object_ids.is_empty()
        } else {
            object_ids.replace_with(picked_object_ids);
            is_any_object_containing_any_point
        }
    }
}
