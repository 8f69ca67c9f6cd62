//! Entity-side data the engine reads and writes.
//!
//! The engine never owns entities. It mutates two things on them through the
//! [`Living`](crate::env::Living) trait: the ability bonus map
//! ([`PropertyBonuses`]) and the ordered effect collection ([`EffectList`]).
mod effects;
mod entity;
mod property;

pub use effects::{
    AbilityEffect, ActiveEffect, CancelSource, EffectId, EffectList, EffectSource, SpellEffect,
};
pub use entity::{EntityId, ObjectState};
pub use property::{Property, PropertyBonuses};
