use crate::error::PositionsError;
use fxhash::FxHashMap;
use rtree::RTreeConfig;
use std::fmt;
use std::str::FromStr;

/// Spatial container used to store the positions of one object type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    /// Plain map with an AABB check per object: cheap updates, linear searches.
    List,
    /// Hilbert R-tree: logarithmic searches, rebuilt on every bulk load.
    RTree,
}

impl FromStr for ContainerKind {
    type Err = PositionsError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.trim().to_ascii_lowercase().as_str() {
            "list" => Ok(ContainerKind::List),
            "rtree" | "r-tree" => Ok(ContainerKind::RTree),
            _ => Err(PositionsError::UnknownContainerKind {
                name: name.to_string(),
            }),
        }
    }
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContainerKind::List => write!(f, "list"),
            ContainerKind::RTree => write!(f, "rtree"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PositionsConfig {
    pub default_container: ContainerKind,
    /// Container to use for specific object types, keyed by name id.
    pub container_overrides: FxHashMap<u32, ContainerKind>,
    pub rtree: RTreeConfig,
}

impl PositionsConfig {
    pub fn container_kind(&self, object_name_id: u32) -> ContainerKind {
        self.container_overrides
            .get(&object_name_id)
            .copied()
            .unwrap_or(self.default_container)
    }

    pub fn with_container(mut self, object_name_id: u32, kind: ContainerKind) -> Self {
        self.container_overrides.insert(object_name_id, kind);
        self
    }
}

impl Default for PositionsConfig {
    fn default() -> Self {
        PositionsConfig {
            default_container: ContainerKind::RTree,
            container_overrides: FxHashMap::default(),
            rtree: RTreeConfig::default(),
        }
    }
}
