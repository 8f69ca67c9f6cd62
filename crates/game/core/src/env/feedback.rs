use strum::{Display, IntoStaticStr};

use crate::state::EntityId;

/// Chat channel a message is delivered on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChatType {
    Spell,
    SpellResisted,
    System,
}

/// Result code attached to an effect animation.
///
/// Both "too strong" and "nothing found" shear branches use [`Failure`];
/// the chat message tells them apart.
///
/// [`Failure`]: AnimationResult::Failure
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnimationResult {
    Failure = 0,
    Success = 1,
}

impl AnimationResult {
    /// Wire code sent to clients.
    pub const fn code(self) -> u8 {
        self as u8
    }
}

/// Outbound messaging for one cast.
///
/// An implementation is bound to the caster of the spell being resolved.
pub trait SpellFeedback {
    fn message_to_caster(&mut self, text: &str, chat: ChatType);

    fn message_to_living(&mut self, living: EntityId, text: &str, chat: ChatType);

    fn send_effect_animation(
        &mut self,
        target: EntityId,
        client_effect: u16,
        no_sound: bool,
        result: AnimationResult,
    );
}

/// Which client view must be refreshed after an ability bonus changes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UpdateKind {
    /// The bonus is not shown anywhere that needs a refresh.
    #[default]
    None,
    Stats,
    Resists,
    Health,
    Power,
    Speed,
}

/// Sends client refreshes after bonus changes.
pub trait UpdateNotifier {
    fn send_updates(&mut self, living: EntityId, kind: UpdateKind);
}
