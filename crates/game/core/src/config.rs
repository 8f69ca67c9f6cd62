/// Engine configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    /// Selects the graduated realm-ability pricing table (5 levels) instead of
    /// the classic linear one (3 levels).
    pub use_new_actives_scaling: bool,
}

impl EngineConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum number of properties a single enhancer may touch.
    pub const MAX_ENHANCED_PROPERTIES: usize = 12;

    // ===== fixed rules =====
    /// Spell type whose presence pre-empts every shear.
    pub const MESMERIZE_SPELL_TYPE: &'static str = "Mesmerize";
    /// Aggro granted to the caster when a shear lands on an aggressive NPC.
    pub const AGGRO_ON_SHEAR: i64 = 1;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_USE_NEW_ACTIVES_SCALING: bool = false;

    pub fn new() -> Self {
        Self {
            use_new_actives_scaling: Self::DEFAULT_USE_NEW_ACTIVES_SCALING,
        }
    }

    pub fn with_new_actives_scaling(use_new_actives_scaling: bool) -> Self {
        Self {
            use_new_actives_scaling,
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}
