use super::*;

impl ObjectPositionsManager {
    /// Casts a ray from (x, y) to (end_x, end_y).
    ///
    /// `object_ids` is replaced by the single object whose hitboxes intersect
    /// the ray closest to the start (farthest, if `inverted` is true), and
    /// the intersection point is returned. When nothing intersects the ray,
    /// the set is cleared and `None` is returned.
    ///
    /// Among objects hit at exactly the same distance, the winner depends on
    /// the iteration order of the containers.
    pub fn raycast_test(
        &mut self,
        object_ids: &mut ObjectIdsSet,
        x: f32,
        y: f32,
        end_x: f32,
        end_y: f32,
        inverted: bool,
    ) -> Option<(f32, f32)> {
        self.sync();

        let mut object_name_ids = std::mem::take(&mut self.object_name_ids);
        let mut candidates = std::mem::take(&mut self.candidates);
        self.collect_object_name_ids(object_ids, &mut object_name_ids);

        let max_sq_dist = squared_distance(x, y, end_x, end_y);
        let mut test_sq_dist = if inverted { 0.0 } else { max_sq_dist };
        let search_area = Aabb::from_segment(x, y, end_x, end_y);
        let mut matched: Option<(u32, f32, f32)> = None;

        for object_name_id in &object_name_ids {
            let container = match self.object_positions_containers.get(object_name_id) {
                Some(container) => container,
                None => continue,
            };
            candidates.clear();
            container.search(&search_area, object_ids, &mut candidates);

            for &object_id in &candidates {
                let object_position = match self.all_object_positions.get(&object_id) {
                    Some(object_position) => object_position,
                    None => continue,
                };
                let result = match raycast_against_hitboxes(
                    &object_position.hitboxes,
                    x,
                    y,
                    end_x,
                    end_y,
                    max_sq_dist,
                    inverted,
                ) {
                    Some(result) => result,
                    None => continue,
                };

                if !inverted && result.close_sq_dist <= test_sq_dist {
                    test_sq_dist = result.close_sq_dist;
                    matched = Some((object_id, result.close_x, result.close_y));
                } else if inverted && result.far_sq_dist >= test_sq_dist {
                    test_sq_dist = result.far_sq_dist;
                    matched = Some((object_id, result.far_x, result.far_y));
                }
            }
        }

        self.object_name_ids = object_name_ids;
        self.candidates = candidates;

        object_ids.clear();
        let (object_id, intersection_x, intersection_y) = matched?;
        object_ids.insert(object_id);
        Some((intersection_x, intersection_y))
    }
}

/// Closest (farthest, if `inverted`) intersection of the ray with the
/// hitboxes of one object, ignoring intersections beyond the ray end.
fn raycast_against_hitboxes(
    hitboxes: &[Hitbox],
    x: f32,
    y: f32,
    end_x: f32,
    end_y: f32,
    max_sq_dist: f32,
    inverted: bool,
) -> Option<RaycastResult> {
    let mut best: Option<RaycastResult> = None;
    let mut test_sq_dist = if inverted { 0.0 } else { max_sq_dist };

    for hitbox in hitboxes {
        let result = match raycast_test(hitbox, x, y, end_x, end_y) {
            Some(result) => result,
            None => continue,
        };
        if !inverted && result.close_sq_dist < test_sq_dist {
            test_sq_dist = result.close_sq_dist;
            best = Some(result);
        } else if inverted
            && result.far_sq_dist > test_sq_dist
            && result.far_sq_dist <= max_sq_dist
        {
            test_sq_dist = result.far_sq_dist;
            best = Some(result);
        }
    }

    best
}
