//! Recorded client feedback.
//!
//! The runtime has no sockets. Everything the engine would send to a client
//! (chat lines, effect animations, stat refreshes) is appended to a
//! [`FeedbackLog`] that hosts drain after each request.

use ability_core::{
    AnimationResult, ChatType, EntityId, SpellFeedback, UpdateKind, UpdateNotifier,
};

/// One outbound client notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Feedback {
    Message {
        to: EntityId,
        text: String,
        chat: ChatType,
    },
    Animation {
        source: EntityId,
        target: EntityId,
        client_effect: u16,
        no_sound: bool,
        result: AnimationResult,
    },
    Update {
        living: EntityId,
        kind: UpdateKind,
    },
}

#[derive(Clone, Debug, Default)]
pub struct FeedbackLog {
    events: Vec<Feedback>,
}

impl FeedbackLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// A [`SpellFeedback`] bound to `caster`.
    pub fn for_caster(&mut self, caster: EntityId) -> CastFeedback<'_> {
        CastFeedback { log: self, caster }
    }

    pub fn push(&mut self, event: Feedback) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[Feedback] {
        &self.events
    }

    /// Chat lines delivered to `living`, oldest first.
    pub fn messages_to(&self, living: EntityId) -> impl Iterator<Item = (&str, ChatType)> {
        self.events.iter().filter_map(move |event| match event {
            Feedback::Message { to, text, chat } if *to == living => Some((text.as_str(), *chat)),
            _ => None,
        })
    }

    /// Removes and returns every recorded event.
    pub fn drain(&mut self) -> Vec<Feedback> {
        std::mem::take(&mut self.events)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl UpdateNotifier for FeedbackLog {
    fn send_updates(&mut self, living: EntityId, kind: UpdateKind) {
        if kind != UpdateKind::None {
            self.push(Feedback::Update { living, kind });
        }
    }
}

/// Feedback sink for one cast.
pub struct CastFeedback<'a> {
    log: &'a mut FeedbackLog,
    caster: EntityId,
}

impl SpellFeedback for CastFeedback<'_> {
    fn message_to_caster(&mut self, text: &str, chat: ChatType) {
        self.log.push(Feedback::Message {
            to: self.caster,
            text: text.to_string(),
            chat,
        });
    }

    fn message_to_living(&mut self, living: EntityId, text: &str, chat: ChatType) {
        self.log.push(Feedback::Message {
            to: living,
            text: text.to_string(),
            chat,
        });
    }

    fn send_effect_animation(
        &mut self,
        target: EntityId,
        client_effect: u16,
        no_sound: bool,
        result: AnimationResult,
    ) {
        self.log.push(Feedback::Animation {
            source: self.caster,
            target,
            client_effect,
            no_sound,
            result,
        });
    }
}
