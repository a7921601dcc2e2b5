//! Error types for scene mutation failures
//!
//! Per-frame systems never return these: a missing optional component is a
//! silent skip and resource exhaustion degrades by truncation. Errors are
//! reserved for scene-construction mistakes that must fail fast.

use crate::ecs::Entity;
use thiserror::Error;

/// Errors raised at scene-mutation time
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SceneError {
    /// Reparenting would create a cycle in the transform hierarchy
    #[error("hierarchy cycle detected: entity {child:?} cannot be parented to its descendant {parent:?}")]
    HierarchyCycle {
        /// The entity being reparented
        child: Entity,
        /// The requested parent
        parent: Entity,
    },

    /// An operation referenced an entity that was never created or was destroyed
    #[error("dangling entity reference: {0:?}")]
    DanglingEntity(Entity),

    /// A hierarchy operation required a transform component that is missing
    #[error("entity {0:?} has no transform component")]
    MissingTransform(Entity),
}
