use core::fmt;

/// Unique identifier for any entity tracked by the host world.
///
/// Enhancers and effects refer to entities through this handle only; they
/// never hold a reference that would keep an entity alive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityId(pub u32);

impl EntityId {
    /// Reserved identifier for effects with no living source (environment, items).
    pub const WORLD: Self = Self(u32::MAX);

    /// Returns true if this id is the world sentinel.
    #[inline]
    pub const fn is_world(self) -> bool {
        self.0 == Self::WORLD.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Lifecycle state of an entity inside the world.
///
/// Only `Active` entities can be affected by direct spell effects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ObjectState {
    #[default]
    Active,
    Inactive,
    Deleted,
}
