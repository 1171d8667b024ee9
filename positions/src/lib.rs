//! Spatial bookkeeping for the objects of a scene.
//!
//! The [`ObjectPositionsManager`] keeps a snapshot of the coordinates, AABB
//! and hitboxes of every object, indexed per object type in spatial
//! containers, and answers the queries used by events: collisions, distance,
//! points, raycasts and separation. Queries work on [`ObjectIdsSet`]s that
//! they narrow in place.

pub mod config;
pub mod container;
pub mod error;
pub mod ids_set;
pub mod manager;
pub mod object;
pub mod objects_lists;
pub mod profiler;

pub use config::{ContainerKind, PositionsConfig};
pub use container::{
    ContainerFactory, ListObjectPositionsContainer, ObjectPositionsContainer,
    RTreeObjectPositionsContainer,
};
pub use error::{PositionsError, PositionsResult};
pub use ids_set::ObjectIdsSet;
pub use manager::{ObjectPositionsManager, PositionsCounters};
pub use object::{ObjectHandle, ObjectPosition, ObjectWithCoordinates};
pub use objects_lists::{
    keep_only_objects_from_grouped_object_ids_sets, keep_only_objects_from_object_ids_set,
    objects_lists_to_object_ids_set, ObjectsLists,
};
pub use profiler::{Profiler, ProfilerHandle};
