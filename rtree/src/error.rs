use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RTreeError {
    InvalidNodeSize { node_size: usize },
}

pub type RTreeResult<T> = Result<T, RTreeError>;

impl fmt::Display for RTreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RTreeError::InvalidNodeSize { node_size } => {
                write!(
                    f,
                    "node size must be at least 2 (node_size: {})",
                    node_size
                )
            }
        }
    }
}

impl std::error::Error for RTreeError {}
