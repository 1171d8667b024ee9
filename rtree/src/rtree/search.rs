use super::*;

impl HilbertRTree {
    /// Appends to `results` the values of all items whose box intersects
    /// `area` (touching edges included).
    pub fn search(&self, area: &Aabb, results: &mut Vec<u32>) {
        self.search_filter(area, |_| true, results);
    }

    /// Same as [`HilbertRTree::search`], keeping only values accepted by `filter`.
    pub fn search_filter<F>(&self, area: &Aabb, mut filter: F, results: &mut Vec<u32>)
    where
        F: FnMut(u32) -> bool,
    {
        let root = match self.boxes.len().checked_sub(1) {
            Some(root) => root,
            None => return,
        };
        if !aabb_aabb(&self.boxes[root], area) {
            return;
        }

        let num_items = self.items.len();
        if root < num_items {
            let item = &self.items[self.indices[root] as usize];
            if item.alive && filter(item.value) {
                results.push(item.value);
            }
            return;
        }

        let mut stack = NodeStack::new();
        stack.push(root);
        while let Some(node) = stack.pop() {
            let first_child = self.indices[node] as usize;
            let end = (first_child + self.node_size).min(self.level_end(first_child));
            for child in first_child..end {
                if !aabb_aabb(&self.boxes[child], area) {
                    continue;
                }
                if child < num_items {
                    let item = &self.items[self.indices[child] as usize];
                    if item.alive && filter(item.value) {
                        results.push(item.value);
                    }
                } else {
                    stack.push(child);
                }
            }
        }
    }
}
