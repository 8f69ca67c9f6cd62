//! Common error infrastructure for ability-core.
//!
//! Gameplay never fails through this crate: misusing an enhancer is a logged
//! no-op and a shear that finds nothing is a normal outcome. Errors only arise
//! when content definitions are malformed, which loaders report before any
//! record reaches the engine.

use crate::state::{EffectId, Property};

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Validation**: Invalid input that should be rejected without retry
/// - **Internal**: Unexpected state inconsistencies that require investigation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input, should not retry without changes.
    ///
    /// Examples: enhancer without properties, shear without a target type
    Validation,

    /// Unexpected state inconsistency. These indicate bugs.
    ///
    /// Examples: cancelling an effect id that is not on the list
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all ability-core errors.
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait EngineError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Malformed enhancer, shear, or catalog definition.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DefinitionError {
    #[error("ability `{name}` does not enhance any property")]
    NoProperties { name: String },

    #[error("ability `{name}` enhances {count} properties, at most {max} are supported")]
    TooManyProperties {
        name: String,
        count: usize,
        max: usize,
    },

    #[error("ability `{name}` lists property {property} more than once")]
    DuplicateProperty { name: String, property: Property },

    #[error("shear `{name}` has no spell type to remove")]
    MissingShearType { name: String },

    #[error("shear `{name}` has an empty buff catalog")]
    EmptyCatalog { name: String },

    #[error("shear `{name}` has a negative potency ceiling ({value})")]
    NegativeCeiling { name: String, value: String },

    #[error("shear `{name}` costs {percent}% of max mana, at most 100% is supported")]
    PowerPercentOutOfRange { name: String, percent: i64 },
}

impl EngineError for DefinitionError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NoProperties { .. } => "NO_PROPERTIES",
            Self::TooManyProperties { .. } => "TOO_MANY_PROPERTIES",
            Self::DuplicateProperty { .. } => "DUPLICATE_PROPERTY",
            Self::MissingShearType { .. } => "MISSING_SHEAR_TYPE",
            Self::EmptyCatalog { .. } => "EMPTY_CATALOG",
            Self::NegativeCeiling { .. } => "NEGATIVE_CEILING",
            Self::PowerPercentOutOfRange { .. } => "POWER_PERCENT_OUT_OF_RANGE",
        }
    }
}

/// Effect cancellation that could not be carried out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CancelError {
    #[error("effect {0} is not active")]
    Unknown(EffectId),

    #[error("effect {0} cannot be cancelled by the player")]
    Protected(EffectId),
}

impl EngineError for CancelError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Unknown(_) => ErrorSeverity::Internal,
            Self::Protected(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Unknown(_) => "UNKNOWN_EFFECT",
            Self::Protected(_) => "PROTECTED_EFFECT",
        }
    }
}
