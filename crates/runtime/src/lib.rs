//! In-process host for realm-ability enhancers and buff shears.
//!
//! This crate wires `ability-core` rules to concrete entities, loaded content,
//! and a recorded feedback channel. Consumers embed [`AbilityService`] and
//! drive it one request at a time.
//!
//! Modules are organized by responsibility:
//! - [`service`] hosts the request entry points
//! - [`world`] stores entity records and provides caster/target access
//! - [`book`] tracks each character's trained abilities
//! - [`feedback`] records outbound client notifications
//! - [`config`] and [`logging`] cover process setup
pub mod book;
pub mod config;
pub mod error;
pub mod feedback;
pub mod logging;
pub mod service;
pub mod world;

pub use book::AbilityBook;
pub use config::{RuntimeConfig, ScalingSwitch};
pub use error::{Result, RuntimeError};
pub use feedback::{CastFeedback, Feedback, FeedbackLog};
pub use service::AbilityService;
pub use world::{AggroTable, CastPair, EntityKind, EntityRecord, InterruptTimer, World};
