use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Damage type of a spell.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DamageType {
    /// No damage type; omitted from delve output.
    #[default]
    Natural,
    Crush,
    Slash,
    Thrust,
    Body,
    Cold,
    Energy,
    Heat,
    Matter,
    Spirit,
    Falling,
}

impl DamageType {
    /// Player-facing name.
    pub fn name(self) -> &'static str {
        self.into()
    }
}

/// Static spell row from content data.
///
/// Fields mirror what the cast pipeline and delve output need; everything
/// else about a spell (targeting, duration, line) belongs to the pipeline.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SpellData {
    pub id: u16,
    pub name: String,
    /// Handler identity, e.g. `"StrengthShear"`. Empty for unimplemented spells.
    pub spell_type: String,
    pub description: String,
    /// Primary magnitude; for shears, the highest buff value removed.
    pub value: f64,
    /// Power cost; a negative value is a percentage of the caster's max power.
    pub power: i32,
    pub cast_time_ms: u32,
    pub range: u32,
    pub radius: u32,
    pub damage: f64,
    pub damage_type: DamageType,
    /// Client animation id.
    pub client_effect: u16,
}

impl SpellData {
    /// An instant spell that deals no damage.
    pub fn is_instant_utility(&self) -> bool {
        self.damage == 0.0 && self.cast_time_ms == 0
    }
}
