use super::*;

impl ObjectPositionsManager {
    /// Applies the pending changes to the spatial containers: reads the
    /// geometry of dirty objects again, then forgets removed objects.
    ///
    /// Every query calls this first. It does nothing if no object was marked
    /// since the previous call.
    pub fn sync(&mut self) {
        let start = self.profiler.as_ref().map(|_| Instant::now());

        if self.has_pending_changes() {
            self.apply_pending_changes();
        }

        if let (Some(profiler), Some(start)) = (&self.profiler, start) {
            let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
            let mut profiler = profiler.borrow_mut();
            profiler.increment_call_counter(SYNC_COUNTER);
            profiler.add_time(SYNC_COUNTER, elapsed_ms);
        }
    }

    fn apply_pending_changes(&mut self) {
        let dirty_count = self.dirty_objects.len();
        let removed_count = self.removed_object_ids.len();

        // "Update" moved objects by removing them from their container, then
        // adding them back below. Use the stored name id: the object may now be
        // of another type if its id was reused.
        for object_id in self.dirty_objects.keys() {
            if let Some(object_position) = self.all_object_positions.get(object_id) {
                if let Some(container) = self
                    .object_positions_containers
                    .get_mut(&object_position.object_name_id)
                {
                    container.remove(*object_id);
                }
            }
        }

        for updates in self.bulk_object_position_updates.values_mut() {
            updates.clear();
        }

        for (object_id, object) in self.dirty_objects.drain() {
            let object_position = ObjectPosition::from_object(&object);
            self.bulk_object_position_updates
                .entry(object_position.object_name_id)
                .or_default()
                .push((object_id, object_position.aabb));
            self.all_object_positions.insert(object_id, object_position);
        }

        // One bulk load per type instead of one insertion per object.
        for (object_name_id, updates) in &self.bulk_object_position_updates {
            if updates.is_empty() {
                continue;
            }
            get_or_create_container(
                &mut self.object_positions_containers,
                &self.factory,
                *object_name_id,
            )
            .load(updates);
        }

        // Removals come after updates: an object can be marked as removed,
        // then moved, before the end of the frame.
        for object_id in self.removed_object_ids.drain() {
            if let Some(object_position) = self.all_object_positions.remove(&object_id) {
                if let Some(container) = self
                    .object_positions_containers
                    .get_mut(&object_position.object_name_id)
                {
                    container.remove(object_id);
                }
            }
        }

        debug!(
            "synced object positions: {} refreshed, {} removed, {} tracked",
            dirty_count,
            removed_count,
            self.all_object_positions.len()
        );
    }
}
