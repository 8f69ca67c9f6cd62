//! Name-indexed content ready for a host to hand out.

use std::collections::BTreeMap;
use std::sync::Arc;

use ability_core::{AbilityEffect, EngineConfig, EnhancerDefinition, ShearDefinition};

/// Loaded content, looked up by record name.
///
/// Enhancer definitions are shared behind [`Arc`] because every trained
/// instance points at the same record.
#[derive(Clone, Debug, Default)]
pub struct ContentRegistry {
    pub config: EngineConfig,
    enhancers: BTreeMap<String, Arc<EnhancerDefinition>>,
    shears: BTreeMap<String, ShearDefinition>,
    effects: BTreeMap<String, AbilityEffect>,
}

impl ContentRegistry {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Registers an enhancer, returning the record it replaced.
    pub fn insert_enhancer(
        &mut self,
        definition: EnhancerDefinition,
    ) -> Option<Arc<EnhancerDefinition>> {
        self.enhancers
            .insert(definition.name.clone(), Arc::new(definition))
    }

    /// Registers a shear, returning the record it replaced.
    pub fn insert_shear(&mut self, definition: ShearDefinition) -> Option<ShearDefinition> {
        self.shears.insert(definition.spell.name.clone(), definition)
    }

    /// Registers a timed ability effect, returning the record it replaced.
    pub fn insert_effect(&mut self, effect: AbilityEffect) -> Option<AbilityEffect> {
        self.effects.insert(effect.name.clone(), effect)
    }

    pub fn enhancer(&self, name: &str) -> Option<Arc<EnhancerDefinition>> {
        self.enhancers.get(name).cloned()
    }

    pub fn shear(&self, name: &str) -> Option<&ShearDefinition> {
        self.shears.get(name)
    }

    pub fn effect(&self, name: &str) -> Option<&AbilityEffect> {
        self.effects.get(name)
    }

    /// Enhancers in name order.
    pub fn enhancers(&self) -> impl Iterator<Item = &Arc<EnhancerDefinition>> {
        self.enhancers.values()
    }

    /// Shears in name order.
    pub fn shears(&self) -> impl Iterator<Item = &ShearDefinition> {
        self.shears.values()
    }

    /// Timed effects in name order.
    pub fn effects(&self) -> impl Iterator<Item = &AbilityEffect> {
        self.effects.values()
    }
}
