//! Request-level entry points for ability hosts.
//!
//! [`AbilityService`] owns the world, every character's [`AbilityBook`], the
//! loaded content, and the feedback log. Each method is one player or server
//! request and runs to completion before the next; the service is not shared
//! across threads, only its [`ScalingSwitch`] is.

use std::collections::BTreeMap;

use ability_content::ContentRegistry;
use ability_core::{
    BuffShear, CancelSource, EffectId, EntityId, Living, PricingPolicy, PropertyEnhancer,
    ShearOutcome,
};
use tracing::{debug, info};

use crate::book::AbilityBook;
use crate::config::{RuntimeConfig, ScalingSwitch};
use crate::error::{Result, RuntimeError};
use crate::feedback::FeedbackLog;
use crate::world::{CastPair, EntityRecord, World};

pub struct AbilityService {
    world: World,
    books: BTreeMap<EntityId, AbilityBook>,
    content: ContentRegistry,
    shears: BTreeMap<String, BuffShear>,
    config: ScalingSwitch,
    feedback: FeedbackLog,
    now_ms: u64,
}

impl AbilityService {
    pub fn new(content: ContentRegistry, config: ScalingSwitch) -> Self {
        let shears = content
            .shears()
            .map(|definition| (definition.spell.name.clone(), BuffShear::new(definition.clone())))
            .collect();

        Self {
            world: World::new(),
            books: BTreeMap::new(),
            content,
            shears,
            config,
            feedback: FeedbackLog::new(),
            now_ms: 0,
        }
    }

    /// Loads content named by `config` and builds a service around it.
    ///
    /// The environment override for the scaling flag wins over `config.toml`.
    pub fn from_config(config: &RuntimeConfig) -> Result<Self> {
        let content = match &config.data_dir {
            Some(dir) => ability_content::ContentFactory::new(dir).load_registry()?,
            None => ability_content::load_builtin()?,
        };
        let scaling = config
            .use_new_actives_scaling
            .unwrap_or(content.config.use_new_actives_scaling);

        info!(
            data_dir = ?config.data_dir,
            use_new_actives_scaling = scaling,
            "ability service ready"
        );
        Ok(Self::new(content, ScalingSwitch::new(scaling)))
    }

    pub fn content(&self) -> &ContentRegistry {
        &self.content
    }

    /// Live pricing switch; clones may be handed to admin tooling.
    pub fn config(&self) -> &ScalingSwitch {
        &self.config
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn entity(&self, id: EntityId) -> Option<&EntityRecord> {
        self.world.get(id)
    }

    pub fn entity_mut(&mut self, id: EntityId) -> Option<&mut EntityRecord> {
        self.world.get_mut(id)
    }

    pub fn book(&self, id: EntityId) -> Option<&AbilityBook> {
        self.books.get(&id)
    }

    pub fn feedback(&self) -> &FeedbackLog {
        &self.feedback
    }

    pub fn feedback_mut(&mut self) -> &mut FeedbackLog {
        &mut self.feedback
    }

    /// Host clock in milliseconds.
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Adds an entity with an empty ability book.
    pub fn spawn(&mut self, record: EntityRecord) -> Result<()> {
        let id = record.id();
        self.world
            .insert(record)
            .map_err(|_| RuntimeError::DuplicateEntity(id))?;
        self.books.insert(id, AbilityBook::new(id));
        debug!(entity = %id, "entity spawned");
        Ok(())
    }

    /// Removes an entity, first taking every enhancer bonus off it.
    pub fn despawn(&mut self, id: EntityId) -> Result<EntityRecord> {
        let record = self
            .world
            .get_mut(id)
            .ok_or(RuntimeError::UnknownEntity(id))?;

        let mut deactivated = 0;
        for book in self.books.values_mut() {
            deactivated += book.deactivate_all(record, &mut self.feedback);
        }
        self.books.remove(&id);

        let record = self
            .world
            .remove(id)
            .ok_or(RuntimeError::UnknownEntity(id))?;
        debug!(entity = %id, deactivated, "entity despawned");
        Ok(record)
    }

    pub fn grant_realm_points(&mut self, id: EntityId, points: u32) -> Result<()> {
        self.book_mut(id)?.grant_realm_points(points);
        Ok(())
    }

    /// Trains `ability` to level 1 and activates it on its owner.
    pub fn train(&mut self, id: EntityId, ability: &str) -> Result<()> {
        let definition = self
            .content
            .enhancer(ability)
            .ok_or_else(|| RuntimeError::UnknownAbility {
                name: ability.to_string(),
            })?;
        let record = self
            .world
            .get_mut(id)
            .ok_or(RuntimeError::UnknownEntity(id))?;
        let book = self
            .books
            .get_mut(&id)
            .ok_or(RuntimeError::UnknownEntity(id))?;

        if book.contains(ability) {
            return Err(RuntimeError::AlreadyTrained {
                entity: id,
                ability: ability.to_string(),
            });
        }

        let cost = PricingPolicy::from_config(&self.config).cost_for_upgrade(0);
        spend(book, cost)?;

        let enhancer = book.learn(definition, 1);
        let _ = enhancer.activate(record, true, &mut self.feedback);

        info!(entity = %id, ability, cost, "ability trained");
        Ok(())
    }

    /// Raises `ability` one level, paying its upgrade cost. Returns the new level.
    pub fn raise_level(&mut self, id: EntityId, ability: &str) -> Result<u8> {
        let record = self
            .world
            .get_mut(id)
            .ok_or(RuntimeError::UnknownEntity(id))?;
        let book = self
            .books
            .get_mut(&id)
            .ok_or(RuntimeError::UnknownEntity(id))?;

        let (level, cost) = {
            let enhancer = book.get(ability).ok_or_else(|| not_trained(id, ability))?;
            let level = enhancer.level();
            if level >= enhancer.max_level(&self.config) {
                return Err(RuntimeError::MaxLevel {
                    ability: ability.to_string(),
                    level,
                });
            }
            (level, enhancer.cost_for_upgrade(level, &self.config))
        };
        spend(book, cost)?;

        let enhancer = book
            .get_mut(ability)
            .ok_or_else(|| not_trained(id, ability))?;
        let _ = enhancer.set_level(record, level + 1, &mut self.feedback);

        info!(entity = %id, ability, level = level + 1, cost, "ability level raised");
        Ok(level + 1)
    }

    /// Switches `ability` on or off for its owner. Returns whether it is now active.
    pub fn toggle(&mut self, id: EntityId, ability: &str) -> Result<bool> {
        let record = self
            .world
            .get_mut(id)
            .ok_or(RuntimeError::UnknownEntity(id))?;
        let enhancer = self
            .books
            .get_mut(&id)
            .and_then(|book| book.get_mut(ability))
            .ok_or_else(|| not_trained(id, ability))?;

        let _ = if enhancer.is_active() {
            enhancer.deactivate(record, true, &mut self.feedback)
        } else {
            enhancer.activate(record, true, &mut self.feedback)
        };
        Ok(enhancer.is_active())
    }

    /// Casts a shear from `caster` on `target`: cost first, then resolution.
    ///
    /// A target that is not in the world resolves as a missing target.
    pub fn cast_shear(
        &mut self,
        caster: EntityId,
        target: Option<EntityId>,
        shear: &str,
    ) -> Result<ShearOutcome> {
        let shear = self
            .shears
            .get(shear)
            .ok_or_else(|| RuntimeError::UnknownShear {
                name: shear.to_string(),
            })?;
        let feedback = &mut self.feedback;

        self.world
            .with_pair(caster, target, |pair| {
                let mut sink = feedback.for_caster(caster);
                match pair {
                    CastPair::Split { caster, target } => shear.finish_spell_cast(
                        caster,
                        target.map(|target| target as &mut dyn Living),
                        &mut sink,
                    ),
                    CastPair::SelfCast(record) => {
                        shear.pay_power_cost(record);
                        let id = record.id();
                        shear.on_direct_effect(id, Some(record as &mut dyn Living), &mut sink)
                    }
                }
            })
            .ok_or(RuntimeError::UnknownEntity(caster))
    }

    /// Reports that `target` resisted a shear from `caster`.
    ///
    /// Returns whether the target's interrupt timer was started.
    pub fn resist_shear(&mut self, caster: EntityId, target: EntityId, shear: &str) -> Result<bool> {
        let shear = self
            .shears
            .get(shear)
            .ok_or_else(|| RuntimeError::UnknownShear {
                name: shear.to_string(),
            })?;
        let record = self
            .world
            .get_mut(target)
            .ok_or(RuntimeError::UnknownEntity(target))?;

        Ok(shear.on_spell_resisted(caster, record))
    }

    /// Starts a timed ability effect on `id` at the current host time.
    pub fn start_effect(&mut self, id: EntityId, name: &str) -> Result<EffectId> {
        let effect = self
            .content
            .effect(name)
            .cloned()
            .ok_or_else(|| RuntimeError::UnknownEffect {
                name: name.to_string(),
            })?;
        let record = self
            .world
            .get_mut(id)
            .ok_or(RuntimeError::UnknownEntity(id))?;

        let effect_id = record.effects_mut().start_ability_effect(effect, self.now_ms);
        debug!(entity = %id, effect = name, %effect_id, "ability effect started");
        Ok(effect_id)
    }

    /// Player request to click an effect off.
    pub fn cancel_effect(&mut self, id: EntityId, effect: EffectId) -> Result<()> {
        let record = self
            .world
            .get_mut(id)
            .ok_or(RuntimeError::UnknownEntity(id))?;

        record
            .effects_mut()
            .cancel(effect, CancelSource::Player)
            .map(|_| ())
            .map_err(|source| RuntimeError::Cancel {
                entity: id,
                effect,
                source,
            })
    }

    /// Advances the host clock, ends expired effects and closes elapsed
    /// interrupt windows. Returns how many effects ended.
    pub fn advance(&mut self, elapsed_ms: u64) -> usize {
        self.now_ms = self.now_ms.saturating_add(elapsed_ms);

        let mut ended = 0;
        for record in self.world.iter_mut() {
            record.elapse_interrupts(elapsed_ms);
            for effect in record.effects_mut().remove_expired(self.now_ms) {
                debug!(entity = %record.id(), effect = %effect.id, "effect expired");
                ended += 1;
            }
        }
        ended
    }

    /// Delve lines for an ability, as shown before training.
    pub fn delve_ability(&self, ability: &str) -> Result<Vec<String>> {
        let definition = self
            .content
            .enhancer(ability)
            .ok_or_else(|| RuntimeError::UnknownAbility {
                name: ability.to_string(),
            })?;
        Ok(PropertyEnhancer::new(definition, 0).delve_info(&self.config))
    }

    pub fn delve_shear(&self, shear: &str) -> Result<Vec<String>> {
        self.shears
            .get(shear)
            .map(BuffShear::delve_info)
            .ok_or_else(|| RuntimeError::UnknownShear {
                name: shear.to_string(),
            })
    }

    /// Delve lines for an effect on `id`, `None` if it is not there.
    pub fn delve_effect(&self, id: EntityId, effect: EffectId) -> Option<Vec<String>> {
        let effect = self.world.get(id)?.effects().get(effect)?;
        Some(effect.delve_info(self.now_ms))
    }

    fn book_mut(&mut self, id: EntityId) -> Result<&mut AbilityBook> {
        self.books
            .get_mut(&id)
            .ok_or(RuntimeError::UnknownEntity(id))
    }
}

fn spend(book: &mut AbilityBook, cost: u32) -> Result<()> {
    if book.spend_realm_points(cost) {
        return Ok(());
    }
    Err(RuntimeError::NotEnoughRealmPoints {
        entity: book.owner(),
        cost,
        available: book.realm_points(),
    })
}

fn not_trained(entity: EntityId, ability: &str) -> RuntimeError {
    RuntimeError::NotTrained {
        entity,
        ability: ability.to_string(),
    }
}
