//! Common error infrastructure for damage-core.
//!
//! Every failure inside an evaluation is local to that evaluation: there is no
//! partial state to recover and no retry that could succeed. Search drivers are
//! expected to treat an `Err` as "this candidate is invalid" and move on.
//!
//! # Design Principles
//!
//! - **Fail fast**: unsupported enumeration text and out-of-range talent levels
//!   are rejected, never silently defaulted
//! - **Severity Classification**: errors are categorized so drivers can tell
//!   bad input apart from broken catalog content
//! - **Deterministic**: all types are plain data, comparable in tests

use crate::stats::StatKind;

/// Severity level of an error, used for categorization and handling strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Validation error - invalid input, the candidate or request is rejected.
    ///
    /// Examples: unknown hit type text, talent level 0
    Validation,

    /// Internal error - catalog content broke an evaluation contract.
    ///
    /// Examples: a weapon passive that reads the stat it contributes to.
    /// These indicate bugs in content and should be investigated.
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

    /// Returns true if this error indicates a bug in content or core.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all damage-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on who has to fix it, not on impact
pub trait CoreError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// This is useful for error categorization, metrics, and testing.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Errors raised while evaluating stats, multipliers or talent formulas.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EvalError {
    /// Text did not name any variant of a closed enumeration.
    #[error("unsupported {kind} variant: {value:?}")]
    UnsupportedVariant { kind: String, value: String },

    /// Talent level outside the 1-indexed bounds of a scaling table.
    #[error("talent level {level} out of range for {curve} curve (1..={len})")]
    TalentLevelOutOfRange { curve: String, level: u8, len: usize },

    /// A stat contribution asked for the stat it is contributing to.
    #[error("stat {0} depends on itself")]
    StatCycle(StatKind),
}

impl EvalError {
    /// Builds an [`EvalError::UnsupportedVariant`] for the named enumeration.
    pub fn unsupported(kind: &str, value: &str) -> Self {
        Self::UnsupportedVariant {
            kind: kind.into(),
            value: value.into(),
        }
    }
}

impl CoreError for EvalError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnsupportedVariant { .. } | Self::TalentLevelOutOfRange { .. } => {
                ErrorSeverity::Validation
            }
            Self::StatCycle(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnsupportedVariant { .. } => "EVAL_UNSUPPORTED_VARIANT",
            Self::TalentLevelOutOfRange { .. } => "EVAL_TALENT_LEVEL_OUT_OF_RANGE",
            Self::StatCycle(_) => "EVAL_STAT_CYCLE",
        }
    }
}

/// Parses a strum-backed enumeration, mapping failures to
/// [`EvalError::UnsupportedVariant`].
pub(crate) fn parse_variant<T>(kind: &str, value: &str) -> Result<T, EvalError>
where
    T: core::str::FromStr,
{
    value
        .parse()
        .map_err(|_| EvalError::unsupported(kind, value))
}
