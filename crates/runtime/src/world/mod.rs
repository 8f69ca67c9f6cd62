//! In-memory entity store.
//!
//! The world owns every [`EntityRecord`]. Casts need two records at once
//! (caster and target), which [`World::with_pair`] provides by taking the
//! target out of the map for the duration of the call.
mod record;

use std::collections::BTreeMap;

use ability_core::{EntityId, Living};

pub use record::{AggroTable, EntityKind, EntityRecord, InterruptTimer};

/// Caster and target borrowed together for one cast.
pub enum CastPair<'a> {
    /// Caster and target are different entities.
    Split {
        caster: &'a mut EntityRecord,
        target: Option<&'a mut EntityRecord>,
    },
    /// The caster targeted itself.
    SelfCast(&'a mut EntityRecord),
}

#[derive(Clone, Debug, Default)]
pub struct World {
    entities: BTreeMap<EntityId, EntityRecord>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `record`, returning it back if its id is taken.
    pub fn insert(&mut self, record: EntityRecord) -> Result<(), EntityRecord> {
        let id = record.id();
        if self.entities.contains_key(&id) {
            return Err(record);
        }
        self.entities.insert(id, record);
        Ok(())
    }

    pub fn remove(&mut self, id: EntityId) -> Option<EntityRecord> {
        self.entities.remove(&id)
    }

    pub fn get(&self, id: EntityId) -> Option<&EntityRecord> {
        self.entities.get(&id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut EntityRecord> {
        self.entities.get_mut(&id)
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.entities.contains_key(&id)
    }

    pub fn ids(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.entities.keys().copied()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut EntityRecord> {
        self.entities.values_mut()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Runs `f` with the caster and (if present) the target borrowed mutably.
    ///
    /// Returns `None` when the caster is not in the world. A target id that
    /// is not in the world is passed as a missing target.
    pub fn with_pair<R>(
        &mut self,
        caster: EntityId,
        target: Option<EntityId>,
        f: impl FnOnce(CastPair<'_>) -> R,
    ) -> Option<R> {
        if target == Some(caster) {
            let record = self.entities.get_mut(&caster)?;
            return Some(f(CastPair::SelfCast(record)));
        }

        let mut taken = target.and_then(|id| self.entities.remove(&id));
        let result = self.entities.get_mut(&caster).map(|caster| {
            f(CastPair::Split {
                caster,
                target: taken.as_mut(),
            })
        });

        if let Some(record) = taken {
            self.entities.insert(record.id(), record);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world() -> World {
        let mut world = World::new();
        world
            .insert(EntityRecord::player(EntityId(1), "Aelric", 100))
            .unwrap();
        world
            .insert(EntityRecord::player(EntityId(2), "Brynja", 100))
            .unwrap();
        world
    }

    #[test]
    fn duplicate_ids_are_refused() {
        let mut world = world();
        let rejected = world.insert(EntityRecord::player(EntityId(1), "Copy", 10));
        assert!(rejected.is_err());
        assert_eq!(world.get(EntityId(1)).unwrap().name(), "Aelric");
    }

    #[test]
    fn pair_access_restores_the_target() {
        let mut world = world();

        let names = world.with_pair(EntityId(1), Some(EntityId(2)), |pair| match pair {
            CastPair::Split {
                caster,
                target: Some(target),
            } => {
                target.set_mana(0);
                (caster.name().to_string(), target.name().to_string())
            }
            _ => panic!("expected split pair"),
        });

        assert_eq!(names, Some(("Aelric".to_string(), "Brynja".to_string())));
        assert_eq!(world.len(), 2);
        assert_eq!(world.get(EntityId(2)).unwrap().mana(), 0);
    }

    #[test]
    fn missing_caster_returns_none_and_keeps_target() {
        let mut world = world();
        let result = world.with_pair(EntityId(7), Some(EntityId(2)), |_| ());

        assert!(result.is_none());
        assert!(world.contains(EntityId(2)));
    }

    #[test]
    fn self_target_borrows_once() {
        let mut world = world();
        let self_cast = world.with_pair(EntityId(1), Some(EntityId(1)), |pair| {
            matches!(pair, CastPair::SelfCast(_))
        });
        assert_eq!(self_cast, Some(true));
    }
}
