use crate::config::{ContainerKind, PositionsConfig};
use crate::error::PositionsResult;
use crate::ids_set::ObjectIdsSet;
use common::shapes::Aabb;
use log::trace;
use rtree::HilbertRTree;

mod list;
mod rtree_container;

pub use list::ListObjectPositionsContainer;
pub use rtree_container::RTreeObjectPositionsContainer;

/// Storage for the AABBs of the objects of one type.
///
/// Entries are `(object id, aabb)` pairs. Implementations must return the
/// same results for the same content, whatever their internal structure.
pub trait ObjectPositionsContainer {
    /// Appends to `results` the ids of entries whose AABB intersects `area`
    /// (touching edges included) and which are in `object_ids`.
    fn search(&self, area: &Aabb, object_ids: &ObjectIdsSet, results: &mut Vec<u32>);

    /// Adds all entries at once. Previous entries of the same ids must have
    /// been removed before.
    fn load(&mut self, entries: &[(u32, Aabb)]);

    /// Removes the entry of `object_id`, if any.
    fn remove(&mut self, object_id: u32);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Creates the container of each object type, as configured.
#[derive(Debug, Clone)]
pub struct ContainerFactory {
    config: PositionsConfig,
    // Validated once, cloned for every new tree container.
    rtree_prototype: HilbertRTree,
}

impl ContainerFactory {
    pub fn new(config: PositionsConfig) -> PositionsResult<Self> {
        let rtree_prototype = HilbertRTree::new_with_config(config.rtree.clone())?;
        Ok(Self {
            config,
            rtree_prototype,
        })
    }

    pub fn config(&self) -> &PositionsConfig {
        &self.config
    }

    pub fn make(&self, object_name_id: u32) -> Box<dyn ObjectPositionsContainer> {
        let kind = self.config.container_kind(object_name_id);
        trace!(
            "creating {} container for object name id {}",
            kind,
            object_name_id
        );
        match kind {
            ContainerKind::List => Box::new(ListObjectPositionsContainer::new()),
            ContainerKind::RTree => Box::new(RTreeObjectPositionsContainer::from_rtree(
                self.rtree_prototype.clone(),
            )),
        }
    }
}

impl Default for ContainerFactory {
    fn default() -> Self {
        Self {
            config: PositionsConfig::default(),
            rtree_prototype: HilbertRTree::new(),
        }
    }
}
