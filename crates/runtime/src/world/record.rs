//! Concrete entity stored by the runtime world.

use std::collections::BTreeMap;

use ability_core::{
    AggroList, AttackKind, EffectList, EntityId, Living, ObjectState, PropertyBonuses,
};

/// Interrupt window opened on an entity when it was attacked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InterruptTimer {
    pub duration: u32,
    pub kind: AttackKind,
    pub attacker: EntityId,
    /// Time left in the window; the timer is dropped when it reaches zero.
    pub remaining_ms: u32,
}

/// Accumulated aggro of an aggressive NPC.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AggroTable {
    amounts: BTreeMap<EntityId, i64>,
}

impl AggroTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Aggro held against `attacker`.
    pub fn amount(&self, attacker: EntityId) -> i64 {
        self.amounts.get(&attacker).copied().unwrap_or(0)
    }

    /// Entity with the most aggro; ties go to the lowest id.
    pub fn top(&self) -> Option<EntityId> {
        self.amounts
            .iter()
            .max_by(|(a_id, a), (b_id, b)| a.cmp(b).then(b_id.cmp(a_id)))
            .map(|(id, _)| *id)
    }

    pub fn is_empty(&self) -> bool {
        self.amounts.is_empty()
    }
}

impl AggroList for AggroTable {
    fn add_to_aggro(&mut self, attacker: EntityId, amount: i64) {
        *self.amounts.entry(attacker).or_insert(0) += amount;
    }
}

/// What kind of actor a record represents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityKind {
    Player,
    Npc { aggressive: bool },
}

/// A player or NPC hosted by the runtime.
#[derive(Clone, Debug)]
pub struct EntityRecord {
    id: EntityId,
    name: String,
    kind: EntityKind,
    alive: bool,
    state: ObjectState,
    mana: i32,
    max_mana: i32,
    interrupt_duration: u32,
    bonuses: PropertyBonuses,
    effects: EffectList,
    interrupts: Vec<InterruptTimer>,
    aggro: Option<AggroTable>,
}

impl EntityRecord {
    /// Interrupt window used when none is configured.
    pub const DEFAULT_INTERRUPT_MS: u32 = 4500;

    pub fn player(id: EntityId, name: impl Into<String>, max_mana: i32) -> Self {
        Self::new(id, name, EntityKind::Player, max_mana)
    }

    /// An NPC; aggressive ones keep an aggro table.
    pub fn npc(id: EntityId, name: impl Into<String>, max_mana: i32, aggressive: bool) -> Self {
        Self::new(id, name, EntityKind::Npc { aggressive }, max_mana)
    }

    fn new(id: EntityId, name: impl Into<String>, kind: EntityKind, max_mana: i32) -> Self {
        let max_mana = max_mana.max(0);
        let aggro = match kind {
            EntityKind::Npc { aggressive: true } => Some(AggroTable::new()),
            _ => None,
        };

        Self {
            id,
            name: name.into(),
            kind,
            alive: true,
            state: ObjectState::Active,
            mana: max_mana,
            max_mana,
            interrupt_duration: Self::DEFAULT_INTERRUPT_MS,
            bonuses: PropertyBonuses::new(),
            effects: EffectList::new(),
            interrupts: Vec::new(),
            aggro,
        }
    }

    #[must_use]
    pub fn with_interrupt_duration(mut self, duration: u32) -> Self {
        self.interrupt_duration = duration;
        self
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn set_alive(&mut self, alive: bool) {
        self.alive = alive;
    }

    pub fn set_object_state(&mut self, state: ObjectState) {
        self.state = state;
    }

    /// Open interrupt windows, oldest first. One per attacker and kind.
    pub fn interrupts(&self) -> &[InterruptTimer] {
        &self.interrupts
    }

    /// Runs the interrupt windows down by `elapsed_ms` and drops closed ones.
    /// Returns how many closed.
    pub fn elapse_interrupts(&mut self, elapsed_ms: u64) -> usize {
        let elapsed = u32::try_from(elapsed_ms).unwrap_or(u32::MAX);
        let before = self.interrupts.len();
        self.interrupts.retain_mut(|timer| {
            timer.remaining_ms = timer.remaining_ms.saturating_sub(elapsed);
            timer.remaining_ms > 0
        });
        before - self.interrupts.len()
    }

    pub fn aggro(&self) -> Option<&AggroTable> {
        self.aggro.as_ref()
    }
}

impl Living for EntityRecord {
    fn id(&self) -> EntityId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_alive(&self) -> bool {
        self.alive
    }

    fn object_state(&self) -> ObjectState {
        self.state
    }

    fn mana(&self) -> i32 {
        self.mana
    }

    fn max_mana(&self) -> i32 {
        self.max_mana
    }

    fn set_mana(&mut self, mana: i32) {
        self.mana = mana.clamp(0, self.max_mana);
    }

    fn ability_bonus(&self) -> &PropertyBonuses {
        &self.bonuses
    }

    fn ability_bonus_mut(&mut self) -> &mut PropertyBonuses {
        &mut self.bonuses
    }

    fn effects(&self) -> &EffectList {
        &self.effects
    }

    fn effects_mut(&mut self) -> &mut EffectList {
        &mut self.effects
    }

    fn spell_interrupt_duration(&self) -> u32 {
        self.interrupt_duration
    }

    fn start_interrupt_timer(&mut self, duration: u32, kind: AttackKind, attacker: EntityId) {
        self.interrupts
            .retain(|timer| timer.attacker != attacker || timer.kind != kind);
        if duration == 0 {
            return;
        }
        self.interrupts.push(InterruptTimer {
            duration,
            kind,
            attacker,
            remaining_ms: duration,
        });
    }

    fn aggro_list(&mut self) -> Option<&mut dyn AggroList> {
        self.aggro.as_mut().map(|table| table as &mut dyn AggroList)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mana_is_clamped_to_pool() {
        let mut record = EntityRecord::player(EntityId(1), "Aelric", 200);

        record.set_mana(-40);
        assert_eq!(record.mana(), 0);
        record.set_mana(900);
        assert_eq!(record.mana(), 200);
    }

    #[test]
    fn only_aggressive_npcs_keep_aggro() {
        assert!(EntityRecord::player(EntityId(1), "Aelric", 10).aggro().is_none());
        assert!(EntityRecord::npc(EntityId(2), "rat", 0, false).aggro().is_none());

        let mut wolf = EntityRecord::npc(EntityId(3), "wolf", 0, true);
        let aggro = wolf.aggro_list().unwrap();
        aggro.add_to_aggro(EntityId(1), 1);
        aggro.add_to_aggro(EntityId(1), 4);
        aggro.add_to_aggro(EntityId(9), 2);

        let table = wolf.aggro().unwrap();
        assert_eq!(table.amount(EntityId(1)), 5);
        assert_eq!(table.top(), Some(EntityId(1)));
    }

    #[test]
    fn repeat_interrupts_refresh_one_window() {
        let mut record = EntityRecord::player(EntityId(1), "Aelric", 10);

        for _ in 0..50 {
            record.start_interrupt_timer(3000, AttackKind::Spell, EntityId(2));
        }
        record.start_interrupt_timer(3000, AttackKind::Melee, EntityId(2));
        record.start_interrupt_timer(3000, AttackKind::Spell, EntityId(3));

        assert_eq!(record.interrupts().len(), 3);
    }

    #[test]
    fn interrupt_windows_close_as_time_passes() {
        let mut record = EntityRecord::player(EntityId(1), "Aelric", 10);
        record.start_interrupt_timer(3000, AttackKind::Spell, EntityId(2));
        record.start_interrupt_timer(1000, AttackKind::Spell, EntityId(3));

        assert_eq!(record.elapse_interrupts(1000), 1);
        assert_eq!(record.interrupts().len(), 1);
        assert_eq!(record.interrupts()[0].remaining_ms, 2000);

        assert_eq!(record.elapse_interrupts(u64::MAX), 1);
        assert!(record.interrupts().is_empty());
    }
}
