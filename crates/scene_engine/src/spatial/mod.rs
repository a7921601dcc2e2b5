//! Spatial primitives for visibility determination
//!
//! Pure geometry with no ECS dependencies: planes, the camera frustum, and
//! the closed set of bounding-volume variants tested against it.

mod frustum;
mod volume;

pub use frustum::{Frustum, Plane};
pub use volume::BoundingVolume;
