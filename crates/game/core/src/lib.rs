//! Realm-ability enhancers and buff shears.
//!
//! `ability-core` holds the rules for abilities that permanently raise an
//! entity's properties and for spells that strip buffs from a target. It owns
//! no entities, timers, or sockets: hosts implement the collaborator traits in
//! [`env`] and pass them to [`ability::PropertyEnhancer`] and
//! [`spell::BuffShear`] on every call.
pub mod ability;
pub mod config;
pub mod env;
pub mod error;
pub mod spell;
pub mod state;

#[cfg(test)]
mod test_helpers;

pub use ability::{
    AmountCurve, EnhancerDefinition, IgnoreReason, PricingPolicy, PropertyEnhancer, Transition,
};
pub use config::EngineConfig;
pub use env::{
    AggroList, AnimationResult, AttackKind, ChatType, ConfigOracle, Living, SpellFeedback,
    UpdateKind, UpdateNotifier,
};
pub use error::{CancelError, DefinitionError, EngineError, ErrorSeverity};
pub use spell::{
    BuffCatalog, BuffShear, DamageType, HandlerKind, ShearDefinition, ShearOutcome, ShearTarget,
    SpellData,
};
pub use state::{
    AbilityEffect, ActiveEffect, CancelSource, EffectId, EffectList, EffectSource, EntityId,
    ObjectState, Property, PropertyBonuses, SpellEffect,
};
