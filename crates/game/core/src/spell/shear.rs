//! Buff shears.
//!
//! A shear strips one buff from its target. Resolution runs in a fixed order
//! that other systems depend on:
//!
//! 1. Ignore missing, dead, or inactive targets.
//! 2. Start the target's interrupt timer.
//! 3. Break mesmerize and stop. No shear feedback is sent.
//! 4. Add minimal aggro for the caster on aggressive NPCs.
//! 5. Find the first candidate in application order.
//! 6. Remove it, or report it as too strong (typed shears only).
//! 7. Report "nothing found" when there is no candidate.
//!
//! The power cost is paid before resolution and is never refunded.

use tracing::debug;

use crate::config::EngineConfig;
use crate::env::{AnimationResult, AttackKind, ChatType, Living, SpellFeedback};
use crate::error::DefinitionError;
use crate::spell::delve::{format_cast_time, format_power_cost};
use crate::spell::{BuffCatalog, DamageType, SpellData};
use crate::state::{CancelSource, EffectId, EffectList, EntityId, ObjectState};

pub const MSG_RIPPED_AWAY: &str = "Your spell rips away some of your target's enhancing magic.";
pub const MSG_TARGET_RIPPED_AWAY: &str =
    "Some of your enhancing magic has been ripped away by a spell!";
pub const MSG_TOO_STRONG: &str =
    "The target's connection to their enhancement is too strong for you to remove.";
pub const MSG_NOT_FOUND: &str = "No enhancement of that type found on the target.";

/// What a shear looks for on its target.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShearTarget {
    /// First effect with this spell type, gated by ownership and potency.
    SpellType(String),
    /// First effect whose handler is in the catalog, removed unconditionally.
    Catalog(BuffCatalog),
}

/// Content record for one shear spell.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShearDefinition {
    pub spell: SpellData,
    pub target: ShearTarget,
    /// Label shown on the delve `Type:` line, e.g. `"Str/Con"`.
    pub delve_type: String,
}

impl ShearDefinition {
    /// Shear removing buffs of `spell_type`.
    pub fn typed(spell: SpellData, spell_type: impl Into<String>, delve_type: impl Into<String>) -> Self {
        Self {
            spell,
            target: ShearTarget::SpellType(spell_type.into()),
            delve_type: delve_type.into(),
        }
    }

    /// Shear removing the first buff found in `catalog`.
    pub fn catalog(spell: SpellData, catalog: BuffCatalog, delve_type: impl Into<String>) -> Self {
        Self {
            spell,
            target: ShearTarget::Catalog(catalog),
            delve_type: delve_type.into(),
        }
    }

    /// Checks the invariants deserialized records bypass.
    pub fn validate(&self) -> Result<(), DefinitionError> {
        match &self.target {
            ShearTarget::SpellType(spell_type) if spell_type.is_empty() => {
                return Err(DefinitionError::MissingShearType {
                    name: self.spell.name.clone(),
                });
            }
            ShearTarget::Catalog(catalog) if catalog.is_empty() => {
                return Err(DefinitionError::EmptyCatalog {
                    name: self.spell.name.clone(),
                });
            }
            _ => {}
        }

        if self.spell.value < 0.0 {
            return Err(DefinitionError::NegativeCeiling {
                name: self.spell.name.clone(),
                value: self.spell.value.to_string(),
            });
        }

        if self.spell.power < -100 {
            return Err(DefinitionError::PowerPercentOutOfRange {
                name: self.spell.name.clone(),
                percent: -i64::from(self.spell.power),
            });
        }

        Ok(())
    }
}

/// How a shear resolved against its target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShearOutcome {
    /// No target, or the target was dead or inactive.
    Ignored,
    /// A mesmerize effect was broken instead of shearing.
    MesmerizeBroken(EffectId),
    /// The candidate was removed.
    Removed(EffectId),
    /// The candidate resisted removal.
    TooStrong(EffectId),
    /// No candidate was on the target.
    NotFound,
}

/// Resolver for one shear spell.
#[derive(Clone, Debug, PartialEq)]
pub struct BuffShear {
    definition: ShearDefinition,
}

impl BuffShear {
    pub fn new(definition: ShearDefinition) -> Self {
        Self { definition }
    }

    pub fn definition(&self) -> &ShearDefinition {
        &self.definition
    }

    pub fn spell(&self) -> &SpellData {
        &self.definition.spell
    }

    /// Power this cast costs `caster`.
    ///
    /// Percent costs are computed in `i64` and saturate at `i32::MAX`.
    pub fn power_cost<L>(&self, caster: &L) -> i32
    where
        L: Living + ?Sized,
    {
        let power = self.definition.spell.power;
        if power < 0 {
            let cost = i64::from(caster.max_mana()) * -i64::from(power) / 100;
            i32::try_from(cost).unwrap_or(i32::MAX)
        } else {
            power
        }
    }

    /// Deducts the power cost from `caster` and returns it.
    pub fn pay_power_cost<L>(&self, caster: &mut L) -> i32
    where
        L: Living + ?Sized,
    {
        let cost = self.power_cost(caster);
        caster.set_mana(caster.mana().saturating_sub(cost));
        cost
    }

    /// Completes a cast: pays the cost, then resolves the shear on `target`.
    pub fn finish_spell_cast<L, F>(
        &self,
        caster: &mut L,
        target: Option<&mut dyn Living>,
        feedback: &mut F,
    ) -> ShearOutcome
    where
        L: Living + ?Sized,
        F: SpellFeedback + ?Sized,
    {
        let cost = self.pay_power_cost(caster);
        debug!(spell = %self.spell().name, caster = %caster.name(), cost, "shear cast finished");
        self.on_direct_effect(caster.id(), target, feedback)
    }

    /// Resolves the shear on `target` for a spell cast by `caster`.
    pub fn on_direct_effect<F>(
        &self,
        caster: EntityId,
        target: Option<&mut dyn Living>,
        feedback: &mut F,
    ) -> ShearOutcome
    where
        F: SpellFeedback + ?Sized,
    {
        let Some(target) = target else {
            return ShearOutcome::Ignored;
        };

        if !target.is_alive() || target.object_state() != ObjectState::Active {
            return ShearOutcome::Ignored;
        }

        let duration = target.spell_interrupt_duration();
        target.start_interrupt_timer(duration, AttackKind::Spell, caster);

        if let Some(mez) = target
            .effects()
            .find_spell_type(EngineConfig::MESMERIZE_SPELL_TYPE)
        {
            // The id was just looked up, so the forced cancel cannot fail.
            let _ = target.effects_mut().cancel(mez, CancelSource::Forced);
            debug!(spell = %self.spell().name, target = %target.name(), "shear broke mesmerize");
            return ShearOutcome::MesmerizeBroken(mez);
        }

        if let Some(aggro) = target.aggro_list() {
            aggro.add_to_aggro(caster, EngineConfig::AGGRO_ON_SHEAR);
        }

        let target_id = target.id();
        let client_effect = self.definition.spell.client_effect;
        let outcome = match self.find_candidate(target_id, target.effects()) {
            Some(Candidate::Eligible(effect)) => {
                feedback.send_effect_animation(
                    target_id,
                    client_effect,
                    false,
                    AnimationResult::Success,
                );
                let _ = target.effects_mut().cancel(effect, CancelSource::Forced);
                feedback.message_to_caster(MSG_RIPPED_AWAY, ChatType::Spell);
                feedback.message_to_living(target_id, MSG_TARGET_RIPPED_AWAY, ChatType::Spell);
                ShearOutcome::Removed(effect)
            }
            Some(Candidate::TooStrong(effect)) => {
                feedback.send_effect_animation(
                    target_id,
                    client_effect,
                    false,
                    AnimationResult::Failure,
                );
                feedback.message_to_caster(MSG_TOO_STRONG, ChatType::SpellResisted);
                ShearOutcome::TooStrong(effect)
            }
            None => {
                feedback.send_effect_animation(
                    target_id,
                    client_effect,
                    false,
                    AnimationResult::Failure,
                );
                feedback.message_to_caster(MSG_NOT_FOUND, ChatType::SpellResisted);
                ShearOutcome::NotFound
            }
        };

        debug!(
            spell = %self.spell().name,
            target = %target.name(),
            ?outcome,
            "shear resolved"
        );
        outcome
    }

    /// Called when the target resisted the cast.
    ///
    /// Instant utility shears still register as an attack on the target.
    pub fn on_spell_resisted(&self, caster: EntityId, target: &mut dyn Living) -> bool {
        if !self.definition.spell.is_instant_utility() {
            return false;
        }

        let duration = target.spell_interrupt_duration();
        target.start_interrupt_timer(duration, AttackKind::Spell, caster);
        true
    }

    /// Delve lines for the shear spell.
    pub fn delve_info(&self) -> Vec<String> {
        let spell = &self.definition.spell;
        let function = if spell.spell_type.is_empty() {
            "(not implemented)"
        } else {
            spell.spell_type.as_str()
        };

        let mut list = vec![
            format!("Function: {function}"),
            " ".to_string(),
            spell.description.clone(),
            " ".to_string(),
            format!("Type: {}", self.definition.delve_type),
            format!("Maximum strength of buffs removed: {}", spell.value),
        ];

        if spell.range != 0 {
            list.push(format!("Range: {}", spell.range));
        }
        if spell.power != 0 {
            list.push(format!("Power cost: {}", format_power_cost(spell.power)));
        }
        list.push(format!("Casting time: {}", format_cast_time(spell.cast_time_ms)));
        if spell.radius != 0 {
            list.push(format!("Radius: {}", spell.radius));
        }
        if spell.damage_type != DamageType::Natural {
            list.push(format!("Damage: {}", spell.damage_type.name()));
        }

        list
    }

    /// First candidate on `effects`, worn by `carrier`.
    fn find_candidate(&self, carrier: EntityId, effects: &EffectList) -> Option<Candidate> {
        match &self.definition.target {
            ShearTarget::SpellType(spell_type) => {
                let (id, effect) = effects
                    .spell_effects()
                    .find(|(_, effect)| effect.spell_type == *spell_type)?;

                let removable = effect.caster != carrier || effect.shearable;
                if removable && effect.value <= self.definition.spell.value {
                    Some(Candidate::Eligible(id))
                } else {
                    Some(Candidate::TooStrong(id))
                }
            }
            ShearTarget::Catalog(catalog) => effects
                .spell_effects()
                .find(|(_, effect)| catalog.contains(effect.handler))
                .map(|(id, _)| Candidate::Eligible(id)),
        }
    }
}

enum Candidate {
    Eligible(EffectId),
    TooStrong(EffectId),
}
