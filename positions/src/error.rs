use rtree::RTreeError;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum PositionsError {
    UnknownContainerKind { name: String },
    InvalidRTreeConfig(RTreeError),
}

pub type PositionsResult<T> = Result<T, PositionsError>;

impl fmt::Display for PositionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionsError::UnknownContainerKind { name } => {
                write!(
                    f,
                    "unknown container kind (name: {:?}, expected \"list\" or \"rtree\")",
                    name
                )
            }
            PositionsError::InvalidRTreeConfig(err) => {
                write!(f, "invalid rtree configuration: {}", err)
            }
        }
    }
}

impl std::error::Error for PositionsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PositionsError::InvalidRTreeConfig(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RTreeError> for PositionsError {
    fn from(err: RTreeError) -> Self {
        PositionsError::InvalidRTreeConfig(err)
    }
}
