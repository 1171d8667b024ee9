use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CollisionsError {
    DegenerateHitbox { vertices: usize },
    NonFiniteVertex { x: f32, y: f32 },
}

pub type CollisionsResult<T> = Result<T, CollisionsError>;

impl fmt::Display for CollisionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollisionsError::DegenerateHitbox { vertices } => {
                write!(
                    f,
                    "hitbox needs at least three non-collinear vertices (vertices: {})",
                    vertices
                )
            }
            CollisionsError::NonFiniteVertex { x, y } => {
                write!(f, "hitbox vertices must be finite (x: {}, y: {})", x, y)
            }
        }
    }
}

impl std::error::Error for CollisionsError {}
