//! Data-driven ability content and loaders.
//!
//! This crate houses the built-in realm abilities, shear spells, and timed
//! ability effects, and provides loaders for RON/TOML data files:
//! - Property enhancers (data-driven via RON)
//! - Buff shears and their catalogs (data-driven via RON)
//! - Timed ability effects (data-driven via RON)
//! - Engine configuration (data-driven via TOML)
//!
//! All loaders use ability-core types directly with serde for RON/TOML deserialization.

pub mod registry;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use registry::ContentRegistry;

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentFactory, EffectLoader, EnhancerLoader, LoadResult, ShearLoader,
    load_builtin,
};
