//! Unified error types surfaced by the ability runtime.
//!
//! Gameplay non-matches (a shear that finds nothing, a misused enhancer) are
//! outcomes, not errors. These variants cover requests the host could not
//! route: unknown ids or names, training rules, and content failures.
use ability_core::{CancelError, EffectId, EntityId};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("entity {0} is not in the world")]
    UnknownEntity(EntityId),

    #[error("entity {0} is already in the world")]
    DuplicateEntity(EntityId),

    #[error("no ability named `{name}`")]
    UnknownAbility { name: String },

    #[error("no shear named `{name}`")]
    UnknownShear { name: String },

    #[error("no timed effect named `{name}`")]
    UnknownEffect { name: String },

    #[error("entity {entity} has not trained `{ability}`")]
    NotTrained { entity: EntityId, ability: String },

    #[error("entity {entity} has already trained `{ability}`")]
    AlreadyTrained { entity: EntityId, ability: String },

    #[error("`{ability}` is already at its maximum level {level}")]
    MaxLevel { ability: String, level: u8 },

    #[error("entity {entity} needs {cost} realm points but has {available}")]
    NotEnoughRealmPoints {
        entity: EntityId,
        cost: u32,
        available: u32,
    },

    #[error("cannot cancel {effect} on entity {entity}")]
    Cancel {
        entity: EntityId,
        effect: EffectId,
        #[source]
        source: CancelError,
    },

    #[error(transparent)]
    Content(#[from] anyhow::Error),
}
