//! Realm-ability property enhancers.
//!
//! Each concrete ability is a data record ([`EnhancerDefinition`]) holding its
//! target properties and an [`AmountCurve`]; a trained instance
//! ([`PropertyEnhancer`]) adds the level's amount to one entity at a time.
//! Upgrade costs and the level cap come from [`PricingPolicy`], chosen by
//! configuration on every call.
mod curve;
mod enhancer;
mod pricing;

pub use curve::AmountCurve;
pub use enhancer::{EnhancerDefinition, IgnoreReason, PropertyEnhancer, Transition};
pub use pricing::PricingPolicy;
