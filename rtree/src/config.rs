use crate::error::{RTreeError, RTreeResult};

#[derive(Debug, Clone)]
pub struct RTreeConfig {
    /// Maximum number of children grouped under one node.
    pub node_size: usize,
}

impl RTreeConfig {
    pub fn validate(&self) -> RTreeResult<()> {
        if self.node_size < 2 {
            return Err(RTreeError::InvalidNodeSize {
                node_size: self.node_size,
            });
        }
        Ok(())
    }
}

impl Default for RTreeConfig {
    fn default() -> Self {
        RTreeConfig { node_size: 9 }
    }
}
