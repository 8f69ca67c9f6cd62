//! Buff shear spells and the data they are built from.
mod catalog;
mod data;
pub mod delve;
mod shear;

pub use catalog::{BuffCatalog, HandlerKind};
pub use data::{DamageType, SpellData};
pub use shear::{
    BuffShear, MSG_NOT_FOUND, MSG_RIPPED_AWAY, MSG_TARGET_RIPPED_AWAY, MSG_TOO_STRONG,
    ShearDefinition, ShearOutcome, ShearTarget,
};
