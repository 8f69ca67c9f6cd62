//! Realm point pricing for property enhancers.

use crate::env::ConfigOracle;

/// Level → upgrade cost and level cap table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PricingPolicy {
    /// New actives scaling: 5, 5, 5, 7, 8, capped at level 5.
    Graduated,
    /// Classic scaling: `(level + 1) * 5`, capped at level 3.
    Linear,
}

impl PricingPolicy {
    /// Cost quoted past the end of the graduated table.
    pub const PROHIBITIVE_COST: u32 = 1000;

    /// Policy selected by the configuration at the time of the call.
    pub fn from_config<C>(config: &C) -> Self
    where
        C: ConfigOracle + ?Sized,
    {
        if config.use_new_actives_scaling() {
            Self::Graduated
        } else {
            Self::Linear
        }
    }

    /// Realm points needed to go from `level` to `level + 1`.
    pub const fn cost_for_upgrade(self, level: u8) -> u32 {
        match self {
            Self::Graduated => match level {
                0..=2 => 5,
                3 => 7,
                4 => 8,
                _ => Self::PROHIBITIVE_COST,
            },
            Self::Linear => (level as u32 + 1) * 5,
        }
    }

    /// Highest trainable level.
    pub const fn max_level(self) -> u8 {
        match self {
            Self::Graduated => 5,
            Self::Linear => 3,
        }
    }
}
