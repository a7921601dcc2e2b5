//! Entity implementation

/// Entity identifier
///
/// Opaque id with no intrinsic data. Ids are handed out monotonically by the
/// [`World`](super::World) and never reused within a session, so a stale
/// handle can be detected instead of silently aliasing a new entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Entity {
    id: u32,
}

impl Entity {
    /// Create a new entity with the given ID
    pub(super) fn new(id: u32) -> Self {
        Self { id }
    }

    /// Get the entity ID
    pub fn id(&self) -> u32 {
        self.id
    }
}
