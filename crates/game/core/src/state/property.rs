//! Property identifiers and the aggregate bonus map.

use std::collections::BTreeMap;

use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Attribute identifier an ability bonus can target.
///
/// Names are stable: they are used by content files and diagnostics.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Property {
    // ========================================================================
    // Primary stats
    // ========================================================================
    Strength,
    Dexterity,
    Constitution,
    Quickness,
    Intelligence,
    Piety,
    Empathy,
    Charisma,
    Acuity,

    // ========================================================================
    // Pools
    // ========================================================================
    MaxHealth,
    /// Power pool percentage.
    PowerPool,
    Fatigue,

    // ========================================================================
    // Defense
    // ========================================================================
    ArmorFactor,
    ArmorAbsorption,
    EvadeChance,
    ParryChance,
    BlockChance,

    // ========================================================================
    // Resists
    // ========================================================================
    ResistBody,
    ResistCold,
    ResistEnergy,
    ResistHeat,
    ResistMatter,
    ResistSpirit,
    ResistCrush,
    ResistSlash,
    ResistThrust,

    // ========================================================================
    // Regeneration
    // ========================================================================
    HealthRegenerationRate,
    PowerRegenerationRate,
    EnduranceRegenerationRate,

    // ========================================================================
    // Speed and range
    // ========================================================================
    MeleeSpeed,
    CastingSpeed,
    ArcherySpeed,
    MaxSpeed,
    SpellRange,
    ArcheryRange,

    // ========================================================================
    // Offense
    // ========================================================================
    MeleeDamage,
    SpellDamage,
    RangedDamage,
    CriticalMeleeHitChance,
    CriticalSpellHitChance,
    CriticalArcheryHitChance,
    CriticalHealHitChance,

    // ========================================================================
    // Effect tuning
    // ========================================================================
    SpellDuration,
    BuffEffectiveness,
    DebuffEffectiveness,
    StealthRange,
}

impl Property {
    /// All magic and physical resist properties.
    pub const RESISTS: [Property; 9] = [
        Property::ResistBody,
        Property::ResistCold,
        Property::ResistEnergy,
        Property::ResistHeat,
        Property::ResistMatter,
        Property::ResistSpirit,
        Property::ResistCrush,
        Property::ResistSlash,
        Property::ResistThrust,
    ];

    /// Stable identifier used in content files.
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// Aggregate ability bonuses keyed by property.
///
/// Missing entries read as zero and entries that return to zero are dropped,
/// so applying and then removing the same bonuses restores an equal map.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PropertyBonuses {
    values: BTreeMap<Property, i32>,
}

impl PropertyBonuses {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current bonus for a property (zero when absent).
    pub fn get(&self, property: Property) -> i32 {
        self.values.get(&property).copied().unwrap_or(0)
    }

    /// Adds `delta` to the bonus of `property`.
    pub fn add(&mut self, property: Property, delta: i32) {
        if delta == 0 {
            return;
        }
        let value = self.values.entry(property).or_insert(0);
        *value += delta;
        if *value == 0 {
            self.values.remove(&property);
        }
    }

    /// Iterates non-zero bonuses in property order.
    pub fn iter(&self) -> impl Iterator<Item = (Property, i32)> + '_ {
        self.values.iter().map(|(property, value)| (*property, *value))
    }

    /// Returns true if no property carries a bonus.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
