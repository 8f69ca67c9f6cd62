//! Active effects carried by an entity.
//!
//! # Ordering
//!
//! [`EffectList`] keeps effects in application order and never reorders them.
//! Every scan (mesmerize lookup, shear candidate search) walks the list from
//! the front, so when several effects qualify the earliest-applied one wins.
//!
//! # Time
//!
//! Timed effects store `expires_at` in host milliseconds. The list has no clock
//! of its own; hosts call [`EffectList::remove_expired`] as time advances.

use core::fmt;

use crate::error::CancelError;
use crate::spell::HandlerKind;
use crate::state::EntityId;

/// Identifier of an effect within one entity's [`EffectList`].
///
/// Ids grow monotonically per list, so comparing two ids tells which effect
/// was applied first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectId(pub u32);

impl fmt::Display for EffectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "effect#{}", self.0)
    }
}

/// Who asked for an effect to end.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CancelSource {
    /// The carrier clicked the effect off.
    Player,
    /// Game logic (shears, mesmerize breaks, expiry) removed it.
    Forced,
}

/// A buff or debuff created by a spell.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpellEffect {
    /// Spell that produced the effect.
    pub spell_id: u16,
    /// Spell type identity, e.g. `"StrengthBuff"` or `"Mesmerize"`.
    pub spell_type: String,
    /// Implementation kind, matched by catalog shears.
    pub handler: HandlerKind,
    /// Potency compared against a shear's ceiling.
    pub value: f64,
    /// Entity that cast the spell.
    pub caster: EntityId,
    /// Whether a self-cast instance may still be sheared.
    pub shearable: bool,
}

impl SpellEffect {
    pub fn new(
        spell_type: impl Into<String>,
        handler: HandlerKind,
        value: f64,
        caster: EntityId,
    ) -> Self {
        Self {
            spell_id: 0,
            spell_type: spell_type.into(),
            handler,
            value,
            caster,
            shearable: false,
        }
    }

    #[must_use]
    pub fn with_spell_id(mut self, spell_id: u16) -> Self {
        self.spell_id = spell_id;
        self
    }

    #[must_use]
    pub fn with_shearable(mut self, shearable: bool) -> Self {
        self.shearable = shearable;
        self
    }
}

/// A timed effect started by a realm ability rather than a spell.
///
/// Shears never consider these.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AbilityEffect {
    pub name: String,
    pub icon: u16,
    pub description: String,
    pub duration_ms: u64,
    pub player_cancellable: bool,
}

impl AbilityEffect {
    /// Delve lines for an instance with `remaining_ms` left to run.
    pub fn delve_info(&self, remaining_ms: u64) -> Vec<String> {
        let mut list = Vec::with_capacity(3);
        list.push(self.description.clone());

        let seconds = remaining_ms / 1000;
        if seconds > 0 {
            list.push(" ".to_string());
            list.push(format!("- {} seconds remaining.", seconds));
        }

        list
    }
}

/// What created an active effect.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EffectSource {
    Spell(SpellEffect),
    Ability(AbilityEffect),
}

impl From<SpellEffect> for EffectSource {
    fn from(effect: SpellEffect) -> Self {
        Self::Spell(effect)
    }
}

impl From<AbilityEffect> for EffectSource {
    fn from(effect: AbilityEffect) -> Self {
        Self::Ability(effect)
    }
}

/// One effect on an entity's list.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActiveEffect {
    pub id: EffectId,
    pub source: EffectSource,
    /// Host time (ms) at which the effect ends; `None` for permanent effects.
    pub expires_at: Option<u64>,
}

impl ActiveEffect {
    /// Spell data if this effect came from a spell.
    pub fn as_spell(&self) -> Option<&SpellEffect> {
        match &self.source {
            EffectSource::Spell(spell) => Some(spell),
            EffectSource::Ability(_) => None,
        }
    }

    /// Whether the carrier may click this effect off.
    pub fn player_cancellable(&self) -> bool {
        match &self.source {
            EffectSource::Spell(_) => true,
            EffectSource::Ability(ability) => ability.player_cancellable,
        }
    }

    /// Milliseconds left at `now`, `None` for permanent effects.
    pub fn remaining_ms(&self, now: u64) -> Option<u64> {
        self.expires_at.map(|at| at.saturating_sub(now))
    }

    /// Delve lines for this effect at host time `now`.
    ///
    /// Spell effects have no delve of their own here; the spell line's
    /// handler describes them.
    pub fn delve_info(&self, now: u64) -> Vec<String> {
        match &self.source {
            EffectSource::Ability(ability) => ability.delve_info(self.remaining_ms(now).unwrap_or(0)),
            EffectSource::Spell(spell) => vec![spell.spell_type.clone()],
        }
    }
}

/// Ordered collection of effects on one entity.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectList {
    effects: Vec<ActiveEffect>,
    next_id: u32,
}

impl EffectList {
    /// Creates an empty effect list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a permanent effect and returns its id.
    pub fn add(&mut self, source: impl Into<EffectSource>) -> EffectId {
        self.push(source.into(), None)
    }

    /// Appends an effect that ends at host time `expires_at`.
    pub fn add_timed(&mut self, source: impl Into<EffectSource>, expires_at: u64) -> EffectId {
        self.push(source.into(), Some(expires_at))
    }

    /// Starts a realm-ability effect at host time `now` for its full duration.
    pub fn start_ability_effect(&mut self, effect: AbilityEffect, now: u64) -> EffectId {
        let expires_at = now.saturating_add(effect.duration_ms);
        self.add_timed(effect, expires_at)
    }

    fn push(&mut self, source: EffectSource, expires_at: Option<u64>) -> EffectId {
        let id = EffectId(self.next_id);
        self.next_id += 1;
        self.effects.push(ActiveEffect {
            id,
            source,
            expires_at,
        });
        id
    }

    /// Looks up an effect by id.
    pub fn get(&self, id: EffectId) -> Option<&ActiveEffect> {
        self.effects.iter().find(|effect| effect.id == id)
    }

    /// Returns true if the effect is still on the list.
    pub fn contains(&self, id: EffectId) -> bool {
        self.get(id).is_some()
    }

    /// Iterates all effects in application order.
    pub fn iter(&self) -> impl Iterator<Item = &ActiveEffect> {
        self.effects.iter()
    }

    /// Iterates spell effects in application order.
    pub fn spell_effects(&self) -> impl Iterator<Item = (EffectId, &SpellEffect)> {
        self.effects
            .iter()
            .filter_map(|effect| effect.as_spell().map(|spell| (effect.id, spell)))
    }

    /// First spell effect of the given spell type.
    pub fn find_spell_type(&self, spell_type: &str) -> Option<EffectId> {
        self.spell_effects()
            .find(|(_, spell)| spell.spell_type == spell_type)
            .map(|(id, _)| id)
    }

    /// Ends an effect.
    ///
    /// Player cancellation is refused for effects that are not
    /// player-cancellable; forced cancellation always succeeds.
    pub fn cancel(
        &mut self,
        id: EffectId,
        source: CancelSource,
    ) -> Result<ActiveEffect, CancelError> {
        let index = self
            .effects
            .iter()
            .position(|effect| effect.id == id)
            .ok_or(CancelError::Unknown(id))?;

        if source == CancelSource::Player && !self.effects[index].player_cancellable() {
            return Err(CancelError::Protected(id));
        }

        Ok(self.effects.remove(index))
    }

    /// Removes every effect whose expiry is at or before `now`.
    pub fn remove_expired(&mut self, now: u64) -> Vec<ActiveEffect> {
        let (expired, kept): (Vec<_>, Vec<_>) = self
            .effects
            .drain(..)
            .partition(|effect| effect.expires_at.is_some_and(|at| at <= now));
        self.effects = kept;
        expired
    }

    /// Number of effects on the list.
    pub fn len(&self) -> usize {
        self.effects.len()
    }

    /// Returns true if no effects are active.
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }
}
