use crate::state::{EffectList, EntityId, ObjectState, PropertyBonuses};

/// Kind of attack that started an interrupt timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackKind {
    Melee,
    Ranged,
    Spell,
}

/// An NPC's ranking of entities by provocation.
pub trait AggroList {
    /// Adds `amount` aggro for `attacker`.
    fn add_to_aggro(&mut self, attacker: EntityId, amount: i64);
}

/// A game actor the engine can read and mutate.
///
/// Access to one entity is assumed to be serialized by the host scheduler.
pub trait Living {
    fn id(&self) -> EntityId;

    fn name(&self) -> &str;

    fn is_alive(&self) -> bool;

    fn object_state(&self) -> ObjectState;

    /// Current power pool.
    fn mana(&self) -> i32;

    fn max_mana(&self) -> i32;

    /// Sets the power pool; implementations clamp to their valid range.
    fn set_mana(&mut self, mana: i32);

    /// Aggregate bonuses granted by abilities.
    fn ability_bonus(&self) -> &PropertyBonuses;

    fn ability_bonus_mut(&mut self) -> &mut PropertyBonuses;

    fn effects(&self) -> &EffectList;

    fn effects_mut(&mut self) -> &mut EffectList;

    /// Length (ms) of the interrupt window opened when this entity is attacked.
    fn spell_interrupt_duration(&self) -> u32;

    /// Registers that this entity was attacked, disrupting its own casting.
    fn start_interrupt_timer(&mut self, duration: u32, kind: AttackKind, attacker: EntityId);

    /// Aggro list of an NPC with an aggressive brain; `None` for players and
    /// passive NPCs.
    fn aggro_list(&mut self) -> Option<&mut dyn AggroList> {
        None
    }
}
