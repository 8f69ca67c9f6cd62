//! Property enhancer state machine.
//!
//! A [`PropertyEnhancer`] adds a per-level amount to one or more properties of
//! at most one entity at a time.
//!
//! ```text
//!            activate                 on_level_change
//! Inactive ───────────▶ ActiveOn(id) ◀───────────────┐
//!    ▲                       │      └────────────────┘
//!    └───────────────────────┘
//!            deactivate
//! ```
//!
//! Misuse (activating twice, deactivating while inactive, touching a different
//! entity than the one the bonus sits on) is logged and ignored. The bonus map
//! is never changed by an ignored call.

use std::sync::Arc;

use arrayvec::ArrayVec;
use tracing::{debug, warn};

use crate::ability::{AmountCurve, PricingPolicy};
use crate::config::EngineConfig;
use crate::env::{ConfigOracle, Living, UpdateKind, UpdateNotifier};
use crate::error::DefinitionError;
use crate::state::{EntityId, Property};

/// Content record describing one enhancer ability.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnhancerDefinition {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    pub properties: ArrayVec<Property, { EngineConfig::MAX_ENHANCED_PROPERTIES }>,
    pub curve: AmountCurve,
    /// Suffix printed after amounts in delve output, e.g. `"%"`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub value_unit: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub update_kind: UpdateKind,
}

impl EnhancerDefinition {
    /// Creates a validated definition.
    pub fn new(
        name: impl Into<String>,
        properties: impl IntoIterator<Item = Property>,
        curve: AmountCurve,
    ) -> Result<Self, DefinitionError> {
        let name = name.into();
        let properties: Vec<Property> = properties.into_iter().collect();

        if properties.len() > EngineConfig::MAX_ENHANCED_PROPERTIES {
            return Err(DefinitionError::TooManyProperties {
                name,
                count: properties.len(),
                max: EngineConfig::MAX_ENHANCED_PROPERTIES,
            });
        }

        let definition = Self {
            name,
            description: String::new(),
            properties: properties.into_iter().collect(),
            curve,
            value_unit: String::new(),
            update_kind: UpdateKind::None,
        };
        definition.validate()?;
        Ok(definition)
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.value_unit = unit.into();
        self
    }

    #[must_use]
    pub fn with_update_kind(mut self, kind: UpdateKind) -> Self {
        self.update_kind = kind;
        self
    }

    /// Checks the invariants deserialized records bypass.
    pub fn validate(&self) -> Result<(), DefinitionError> {
        if self.properties.is_empty() {
            return Err(DefinitionError::NoProperties {
                name: self.name.clone(),
            });
        }

        for (index, property) in self.properties.iter().enumerate() {
            if self.properties[..index].contains(property) {
                return Err(DefinitionError::DuplicateProperty {
                    name: self.name.clone(),
                    property: *property,
                });
            }
        }

        Ok(())
    }
}

/// Result of a state machine call.
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// The bonus map was updated (or the level stored) as requested.
    Applied,
    /// The call was a no-op; a warning has been logged.
    Ignored(IgnoreReason),
}

impl Transition {
    pub const fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Why a call was ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IgnoreReason {
    AlreadyActive { active_on: EntityId },
    NotActive,
    TargetMismatch { active_on: EntityId },
}

/// A trained enhancer belonging to one character.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PropertyEnhancer {
    definition: Arc<EnhancerDefinition>,
    level: u8,
    active_on: Option<EntityId>,
}

impl PropertyEnhancer {
    /// Creates an inactive enhancer at `level`.
    pub fn new(definition: Arc<EnhancerDefinition>, level: u8) -> Self {
        Self {
            definition,
            level,
            active_on: None,
        }
    }

    pub fn definition(&self) -> &EnhancerDefinition {
        &self.definition
    }

    pub fn name(&self) -> &str {
        &self.definition.name
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    /// Entity currently carrying this enhancer's bonus.
    pub fn active_on(&self) -> Option<EntityId> {
        self.active_on
    }

    pub fn is_active(&self) -> bool {
        self.active_on.is_some()
    }

    /// Amount granted at `level`.
    pub fn amount_for_level(&self, level: u8) -> i32 {
        self.definition.curve.amount_for_level(level)
    }

    /// Amount granted at the current level.
    pub fn amount(&self) -> i32 {
        self.amount_for_level(self.level)
    }

    /// Realm points needed to go from `level` to `level + 1`.
    pub fn cost_for_upgrade<C>(&self, level: u8, config: &C) -> u32
    where
        C: ConfigOracle + ?Sized,
    {
        PricingPolicy::from_config(config).cost_for_upgrade(level)
    }

    /// Highest trainable level under the current configuration.
    pub fn max_level<C>(&self, config: &C) -> u8
    where
        C: ConfigOracle + ?Sized,
    {
        PricingPolicy::from_config(config).max_level()
    }

    /// Applies the current amount to `living`.
    pub fn activate<L, N>(&mut self, living: &mut L, send_updates: bool, notifier: &mut N) -> Transition
    where
        L: Living + ?Sized,
        N: UpdateNotifier + ?Sized,
    {
        if let Some(active_on) = self.active_on {
            warn!(
                ability = %self.name(),
                living = %living.name(),
                %active_on,
                "ability already activated"
            );
            return Transition::Ignored(IgnoreReason::AlreadyActive { active_on });
        }

        self.apply(living, self.amount());
        self.active_on = Some(living.id());
        if send_updates {
            notifier.send_updates(living.id(), self.definition.update_kind);
        }

        debug!(
            ability = %self.name(),
            living = %living.name(),
            level = self.level,
            amount = self.amount(),
            "ability activated"
        );
        Transition::Applied
    }

    /// Removes the current amount from `living`.
    pub fn deactivate<L, N>(
        &mut self,
        living: &mut L,
        send_updates: bool,
        notifier: &mut N,
    ) -> Transition
    where
        L: Living + ?Sized,
        N: UpdateNotifier + ?Sized,
    {
        if let Err(reason) = self.check_active_on(living) {
            warn!(
                ability = %self.name(),
                living = %living.name(),
                ?reason,
                "ability already deactivated"
            );
            return Transition::Ignored(reason);
        }

        self.apply(living, -self.amount());
        if send_updates {
            notifier.send_updates(living.id(), self.definition.update_kind);
        }
        self.active_on = None;

        debug!(ability = %self.name(), living = %living.name(), "ability deactivated");
        Transition::Applied
    }

    /// Moves the applied bonus from `old_level` to `new_level`.
    ///
    /// `new_level` defaults to the current level; when given it becomes the
    /// current level. Updates are always sent.
    pub fn on_level_change<L, N>(
        &mut self,
        living: &mut L,
        old_level: u8,
        new_level: Option<u8>,
        notifier: &mut N,
    ) -> Transition
    where
        L: Living + ?Sized,
        N: UpdateNotifier + ?Sized,
    {
        if let Err(reason) = self.check_active_on(living) {
            warn!(
                ability = %self.name(),
                living = %living.name(),
                ?reason,
                "level change on an ability that is not active"
            );
            return Transition::Ignored(reason);
        }

        let new_level = match new_level {
            Some(level) => {
                self.level = level;
                level
            }
            None => self.level,
        };

        let delta = self.amount_for_level(new_level) - self.amount_for_level(old_level);
        self.apply(living, delta);
        notifier.send_updates(living.id(), self.definition.update_kind);

        debug!(
            ability = %self.name(),
            living = %living.name(),
            old_level,
            new_level,
            delta,
            "ability level changed"
        );
        Transition::Applied
    }

    /// Stores `new_level`, moving the bonus on `living` if it is active there.
    pub fn set_level<L, N>(&mut self, living: &mut L, new_level: u8, notifier: &mut N) -> Transition
    where
        L: Living + ?Sized,
        N: UpdateNotifier + ?Sized,
    {
        match self.active_on {
            None => {
                self.level = new_level;
                Transition::Applied
            }
            Some(_) => {
                let old_level = self.level;
                self.on_level_change(living, old_level, Some(new_level), notifier)
            }
        }
    }

    /// Delve lines: description, blank line, then one line per trainable level.
    pub fn delve_info<C>(&self, config: &C) -> Vec<String>
    where
        C: ConfigOracle + ?Sized,
    {
        let max_level = self.max_level(config);
        let mut list = Vec::with_capacity(2 + usize::from(max_level));
        list.push(self.definition.description.clone());
        list.push(String::new());

        for level in 1..=max_level {
            list.push(format!(
                "Level {}: {}{}",
                level,
                self.amount_for_level(level),
                self.definition.value_unit
            ));
        }

        list
    }

    fn check_active_on<L>(&self, living: &L) -> Result<(), IgnoreReason>
    where
        L: Living + ?Sized,
    {
        match self.active_on {
            None => Err(IgnoreReason::NotActive),
            Some(active_on) if active_on != living.id() => {
                Err(IgnoreReason::TargetMismatch { active_on })
            }
            Some(_) => Ok(()),
        }
    }

    fn apply<L>(&self, living: &mut L, delta: i32)
    where
        L: Living + ?Sized,
    {
        let bonuses = living.ability_bonus_mut();
        for property in &self.definition.properties {
            bonuses.add(*property, delta);
        }
    }
}
