//! Traits describing the collaborators the engine drives.
//!
//! The engine owns no entities, sockets, or configuration store. Hosts
//! implement these traits and hand them to enhancers and shears per call:
//! - [`Living`] for the entity being read and mutated
//! - [`AggroList`] for NPCs with an aggressive brain
//! - [`SpellFeedback`] for chat messages and effect animations
//! - [`UpdateNotifier`] for client stat refreshes
//! - [`ConfigOracle`] for server-wide rule switches
mod config;
mod feedback;
mod living;

pub use config::ConfigOracle;
pub use feedback::{AnimationResult, ChatType, SpellFeedback, UpdateKind, UpdateNotifier};
pub use living::{AggroList, AttackKind, Living};
