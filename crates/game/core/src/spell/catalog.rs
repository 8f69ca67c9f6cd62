//! Buff implementation identities and the random shear allow-list.

use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Implementation kind of a spell effect.
///
/// This identifies *how* an effect works, independently of the spell type
/// string a particular spell line uses.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumString, EnumIter, IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HandlerKind {
    // ========================================================================
    // Stat buffs
    // ========================================================================
    AcuityBuff,
    StrengthBuff,
    DexterityBuff,
    ConstitutionBuff,
    StrengthConBuff,
    DexterityQuiBuff,

    // ========================================================================
    // Defensive buffs
    // ========================================================================
    ArmorFactorBuff,
    ArmorAbsorptionBuff,
    EvadeChanceBuff,
    ParryChanceBuff,
    ColdResistBuff,
    EnergyResistBuff,
    CrushResistBuff,
    ThrustResistBuff,
    SlashResistBuff,
    MatterResistBuff,
    BodyResistBuff,
    HeatResistBuff,
    SpiritResistBuff,
    BodySpiritEnergyBuff,
    HeatColdMatterBuff,
    CrushSlashThrustBuff,

    // ========================================================================
    // Utility buffs
    // ========================================================================
    HealthRegen,
    PowerRegen,
    EnduranceRegen,
    CombatSpeedBuff,
    Uninterruptable,
    WeaponSkillBuff,
    DpsBuff,
    DamageAdd,
    DamageShield,
    SpeedEnhancement,
    Bladeturn,

    // ========================================================================
    // Crowd control and debuffs
    // ========================================================================
    Mesmerize,
    Stun,
    Root,
    Snare,
    DamageOverTime,
    StatDebuff,
}

impl HandlerKind {
    /// Kinds the random shear may remove, in lookup order.
    pub const RANDOM_SHEAR: [HandlerKind; 31] = [
        HandlerKind::AcuityBuff,
        HandlerKind::StrengthBuff,
        HandlerKind::DexterityBuff,
        HandlerKind::ConstitutionBuff,
        HandlerKind::StrengthConBuff,
        HandlerKind::DexterityQuiBuff,
        HandlerKind::ArmorFactorBuff,
        HandlerKind::ArmorAbsorptionBuff,
        HandlerKind::HealthRegen,
        HandlerKind::CombatSpeedBuff,
        HandlerKind::PowerRegen,
        HandlerKind::Uninterruptable,
        HandlerKind::WeaponSkillBuff,
        HandlerKind::DpsBuff,
        HandlerKind::EvadeChanceBuff,
        HandlerKind::ParryChanceBuff,
        HandlerKind::ColdResistBuff,
        HandlerKind::EnergyResistBuff,
        HandlerKind::CrushResistBuff,
        HandlerKind::ThrustResistBuff,
        HandlerKind::SlashResistBuff,
        HandlerKind::MatterResistBuff,
        HandlerKind::BodyResistBuff,
        HandlerKind::HeatResistBuff,
        HandlerKind::SpiritResistBuff,
        HandlerKind::BodySpiritEnergyBuff,
        HandlerKind::HeatColdMatterBuff,
        HandlerKind::CrushSlashThrustBuff,
        HandlerKind::EnduranceRegen,
        HandlerKind::DamageAdd,
        HandlerKind::DamageShield,
    ];
}

/// Closed set of handler kinds a catalog shear may remove.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct BuffCatalog {
    kinds: Vec<HandlerKind>,
}

impl BuffCatalog {
    /// Creates a catalog; duplicate kinds are dropped, first occurrence kept.
    pub fn new(kinds: impl IntoIterator<Item = HandlerKind>) -> Self {
        let mut unique = Vec::new();
        for kind in kinds {
            if !unique.contains(&kind) {
                unique.push(kind);
            }
        }
        Self { kinds: unique }
    }

    /// The random shear allow-list.
    pub fn random_shear() -> Self {
        Self::new(HandlerKind::RANDOM_SHEAR)
    }

    pub fn contains(&self, kind: HandlerKind) -> bool {
        self.kinds.contains(&kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = HandlerKind> + '_ {
        self.kinds.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_shear_covers_buffs_only() {
        let catalog = BuffCatalog::random_shear();

        assert_eq!(catalog.len(), 31);
        assert!(catalog.contains(HandlerKind::DamageShield));
        assert!(catalog.contains(HandlerKind::CrushSlashThrustBuff));
        assert!(!catalog.contains(HandlerKind::Mesmerize));
        assert!(!catalog.contains(HandlerKind::SpeedEnhancement));
        assert!(!catalog.contains(HandlerKind::Bladeturn));
    }

    #[test]
    fn catalog_drops_duplicates() {
        let catalog = BuffCatalog::new([
            HandlerKind::StrengthBuff,
            HandlerKind::DexterityBuff,
            HandlerKind::StrengthBuff,
        ]);
        assert_eq!(
            catalog.iter().collect::<Vec<_>>(),
            vec![HandlerKind::StrengthBuff, HandlerKind::DexterityBuff]
        );
    }

    #[test]
    fn handler_names_are_stable() {
        assert_eq!(HandlerKind::DpsBuff.to_string(), "DpsBuff");
        assert_eq!(
            "HeatColdMatterBuff".parse::<HandlerKind>().unwrap(),
            HandlerKind::HeatColdMatterBuff
        );
    }
}
