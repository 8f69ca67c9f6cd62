//! In-memory collaborators for unit tests.

use crate::env::{
    AggroList, AnimationResult, AttackKind, ChatType, Living, SpellFeedback, UpdateKind,
    UpdateNotifier,
};
use crate::state::{EffectList, EntityId, ObjectState, PropertyBonuses};

pub struct TestLiving {
    pub id: EntityId,
    pub name: String,
    pub alive: bool,
    pub state: ObjectState,
    pub mana: i32,
    pub max_mana: i32,
    pub bonuses: PropertyBonuses,
    pub effects: EffectList,
    pub interrupts: Vec<(u32, AttackKind, EntityId)>,
    pub aggro: Option<Vec<(EntityId, i64)>>,
}

impl TestLiving {
    pub fn player(id: u32) -> Self {
        Self {
            id: EntityId(id),
            name: format!("player-{id}"),
            alive: true,
            state: ObjectState::Active,
            mana: 100,
            max_mana: 100,
            bonuses: PropertyBonuses::new(),
            effects: EffectList::new(),
            interrupts: Vec::new(),
            aggro: None,
        }
    }

    pub fn aggressive_npc(id: u32) -> Self {
        Self {
            name: format!("npc-{id}"),
            aggro: Some(Vec::new()),
            ..Self::player(id)
        }
    }
}

impl AggroList for Vec<(EntityId, i64)> {
    fn add_to_aggro(&mut self, attacker: EntityId, amount: i64) {
        self.push((attacker, amount));
    }
}

impl Living for TestLiving {
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
        1500
    }

    fn start_interrupt_timer(&mut self, duration: u32, kind: AttackKind, attacker: EntityId) {
        self.interrupts.push((duration, kind, attacker));
    }

    fn aggro_list(&mut self) -> Option<&mut dyn AggroList> {
        self.aggro.as_mut().map(|list| list as &mut dyn AggroList)
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub updates: Vec<(EntityId, UpdateKind)>,
}

impl UpdateNotifier for RecordingNotifier {
    fn send_updates(&mut self, living: EntityId, kind: UpdateKind) {
        self.updates.push((living, kind));
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FeedbackEvent {
    ToCaster(String, ChatType),
    ToLiving(EntityId, String, ChatType),
    Animation(EntityId, u16, AnimationResult),
}

#[derive(Default)]
pub struct RecordingFeedback {
    pub events: Vec<FeedbackEvent>,
}

impl SpellFeedback for RecordingFeedback {
    fn message_to_caster(&mut self, text: &str, chat: ChatType) {
        self.events.push(FeedbackEvent::ToCaster(text.to_string(), chat));
    }

    fn message_to_living(&mut self, living: EntityId, text: &str, chat: ChatType) {
        self.events
            .push(FeedbackEvent::ToLiving(living, text.to_string(), chat));
    }

    fn send_effect_animation(
        &mut self,
        target: EntityId,
        client_effect: u16,
        _no_sound: bool,
        result: AnimationResult,
    ) {
        self.events
            .push(FeedbackEvent::Animation(target, client_effect, result));
    }
}
