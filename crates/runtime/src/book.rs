//! Per-character trained abilities.

use std::collections::BTreeMap;
use std::sync::Arc;

use ability_core::{EnhancerDefinition, EntityId, Living, PropertyEnhancer, UpdateNotifier};

/// The realm abilities one character has trained, plus unspent realm points.
#[derive(Clone, Debug)]
pub struct AbilityBook {
    owner: EntityId,
    realm_points: u32,
    enhancers: BTreeMap<String, PropertyEnhancer>,
}

impl AbilityBook {
    pub fn new(owner: EntityId) -> Self {
        Self {
            owner,
            realm_points: 0,
            enhancers: BTreeMap::new(),
        }
    }

    pub fn owner(&self) -> EntityId {
        self.owner
    }

    pub fn realm_points(&self) -> u32 {
        self.realm_points
    }

    pub fn grant_realm_points(&mut self, points: u32) {
        self.realm_points = self.realm_points.saturating_add(points);
    }

    /// Deducts `cost` if affordable.
    pub(crate) fn spend_realm_points(&mut self, cost: u32) -> bool {
        match self.realm_points.checked_sub(cost) {
            Some(left) => {
                self.realm_points = left;
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, ability: &str) -> bool {
        self.enhancers.contains_key(ability)
    }

    pub fn get(&self, ability: &str) -> Option<&PropertyEnhancer> {
        self.enhancers.get(ability)
    }

    pub fn get_mut(&mut self, ability: &str) -> Option<&mut PropertyEnhancer> {
        self.enhancers.get_mut(ability)
    }

    /// Adds an inactive enhancer at `level`.
    pub(crate) fn learn(
        &mut self,
        definition: Arc<EnhancerDefinition>,
        level: u8,
    ) -> &mut PropertyEnhancer {
        let name = definition.name.clone();
        self.enhancers
            .entry(name)
            .or_insert_with(|| PropertyEnhancer::new(definition, level))
    }

    /// Enhancers in name order.
    pub fn iter(&self) -> impl Iterator<Item = &PropertyEnhancer> {
        self.enhancers.values()
    }

    pub fn len(&self) -> usize {
        self.enhancers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enhancers.is_empty()
    }

    /// Activates every inactive enhancer on `living`, returning how many changed.
    pub fn activate_all<L, N>(&mut self, living: &mut L, notifier: &mut N) -> usize
    where
        L: Living + ?Sized,
        N: UpdateNotifier + ?Sized,
    {
        self.enhancers
            .values_mut()
            .filter(|enhancer| !enhancer.is_active())
            .map(|enhancer| enhancer.activate(living, true, notifier))
            .filter(|transition| transition.is_applied())
            .count()
    }

    /// Deactivates every enhancer active on `living`, returning how many changed.
    pub fn deactivate_all<L, N>(&mut self, living: &mut L, notifier: &mut N) -> usize
    where
        L: Living + ?Sized,
        N: UpdateNotifier + ?Sized,
    {
        let id = living.id();
        self.enhancers
            .values_mut()
            .filter(|enhancer| enhancer.active_on() == Some(id))
            .map(|enhancer| enhancer.deactivate(living, true, notifier))
            .filter(|transition| transition.is_applied())
            .count()
    }
}
