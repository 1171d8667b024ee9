pub mod config;
pub mod error;
pub mod hilbert;
pub mod rtree;

pub use config::RTreeConfig;
pub use error::{RTreeError, RTreeResult};
pub use rtree::HilbertRTree;
