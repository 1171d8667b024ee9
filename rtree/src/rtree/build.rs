use super::*;

impl HilbertRTree {
    /// Adds all `entries` at once and rebuilds the tree. Values already in
    /// the tree are replaced.
    pub fn load(&mut self, entries: &[(u32, Aabb)]) {
        for (value, _) in entries {
            self.remove(*value);
        }
        if self.dead > 0 {
            self.items.retain(|item| item.alive);
            self.dead = 0;
        }

        self.items.reserve(entries.len());
        for &(value, aabb) in entries {
            self.items.push(Item {
                value,
                aabb,
                alive: true,
            });
        }

        self.rebuild();
    }

    fn rebuild(&mut self) {
        self.boxes.clear();
        self.indices.clear();
        self.level_bounds.clear();
        self.slots.clear();

        let num_items = self.items.len();
        if num_items == 0 {
            return;
        }

        let mut bounds = Aabb::empty();
        for item in &self.items {
            bounds.expand_to_include(&item.aabb);
        }

        // Sort leaves along the Hilbert curve so that siblings are close in space.
        let mut keyed = std::mem::take(&mut self.sort_scratch);
        keyed.clear();
        keyed.extend(
            self.items
                .iter()
                .map(|item| (hilbert_value(&item.aabb, &bounds), *item)),
        );
        keyed.sort_unstable_by_key(|(key, _)| *key);
        self.items.clear();
        self.items.extend(keyed.iter().map(|(_, item)| *item));
        self.sort_scratch = keyed;

        for (slot, item) in self.items.iter().enumerate() {
            self.slots.insert(item.value, slot);
            self.boxes.push(item.aabb);
            self.indices.push(slot as u32);
        }
        self.level_bounds.push(num_items);

        // Group each level into parents until a single root remains.
        let mut level_start = 0;
        let mut level_end = num_items;
        while level_end - level_start > 1 {
            let mut child = level_start;
            while child < level_end {
                let group_end = (child + self.node_size).min(level_end);
                let mut node_box = Aabb::empty();
                for child_box in &self.boxes[child..group_end] {
                    node_box.expand_to_include(child_box);
                }
                self.boxes.push(node_box);
                self.indices.push(child as u32);
                child = group_end;
            }
            level_start = level_end;
            level_end = self.boxes.len();
            self.level_bounds.push(level_end);
        }
    }

    pub(crate) fn level_end(&self, position: usize) -> usize {
        for &bound in &self.level_bounds {
            if bound > position {
                return bound;
            }
        }
        self.boxes.len()
    }
}
