use fxhash::FxHashSet;

/// Existence-only set of object ids, used both as the input of queries and
/// as their (in place narrowed) output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectIdsSet {
    items: FxHashSet<u32>,
}

impl ObjectIdsSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: FxHashSet::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    pub fn from_ids(ids: &[u32]) -> Self {
        ids.iter().copied().collect()
    }

    pub fn insert(&mut self, object_id: u32) -> bool {
        self.items.insert(object_id)
    }

    pub fn remove(&mut self, object_id: u32) -> bool {
        self.items.remove(&object_id)
    }

    pub fn contains(&self, object_id: u32) -> bool {
        self.items.contains(&object_id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.items.iter().copied()
    }

    /// Removes from this set every id of `other`.
    pub fn remove_all(&mut self, other: &ObjectIdsSet) {
        if other.len() < self.len() {
            for object_id in other.iter() {
                self.items.remove(&object_id);
            }
        } else {
            self.items.retain(|object_id| !other.contains(*object_id));
        }
    }

    /// Replaces the content of this set by the content of `other`, reusing
    /// its storage instead of copying it. `other` is consumed.
    pub fn replace_with(&mut self, other: ObjectIdsSet) {
        self.items = other.items;
    }
}

impl FromIterator<u32> for ObjectIdsSet {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl Extend<u32> for ObjectIdsSet {
    fn extend<I: IntoIterator<Item = u32>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remove_all_either_direction() {
        let mut big = ObjectIdsSet::from_ids(&[1, 2, 3, 4, 5]);
        big.remove_all(&ObjectIdsSet::from_ids(&[2, 4, 42]));
        assert_eq!(big, ObjectIdsSet::from_ids(&[1, 3, 5]));

        let mut small = ObjectIdsSet::from_ids(&[1, 2]);
        small.remove_all(&ObjectIdsSet::from_ids(&[2, 3, 4, 5, 6]));
        assert_eq!(small, ObjectIdsSet::from_ids(&[1]));
    }

    #[test]
    fn replace_with_moves_content() {
        let mut set = ObjectIdsSet::from_ids(&[1, 2, 3]);
        let picked = ObjectIdsSet::from_ids(&[7]);
        set.replace_with(picked);
        assert_eq!(set.len(), 1);
        assert!(set.contains(7));
        assert!(!set.contains(1));
    }
}
