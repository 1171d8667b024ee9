pub mod collision_detection;
pub mod shapes;

pub use shapes::Aabb;
