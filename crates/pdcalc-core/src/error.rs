//! # Error Types
//!
//! Defines the error taxonomy shared by every crate in the workspace. All
//! errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.
//!
//! ## Design
//!
//! - Nothing here is transient. Every error surfaces to the caller
//!   immediately and is never retried.
//! - A fact that is merely ambiguous is resolved by a logged assumption,
//!   not an error. [`PdError::MissingRequiredFact`] is reserved for facts a
//!   rule cannot proceed without.

use thiserror::Error;

/// Top-level error type for public-domain evaluation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PdError {
    /// No calculator is registered under the requested jurisdiction code.
    #[error("unknown jurisdiction: {0:?}")]
    UnknownJurisdiction(String),

    /// The work carries a type tag the rule engine cannot dispatch on.
    #[error("do not know about work type {0:?}, cannot determine status")]
    InvalidWorkType(String),

    /// A rule requires a fact that is absent and cannot be defaulted.
    #[error("missing required fact `{fact}`: {context}")]
    MissingRequiredFact {
        /// Name of the missing fact (e.g. `death_date`).
        fact: &'static str,
        /// Which rule needed it.
        context: String,
    },

    /// The work or one of its authors violates a model invariant.
    #[error("invalid work: {0}")]
    InvalidWork(String),

    /// A jurisdiction code failed validation.
    #[error("invalid jurisdiction code: {0:?}")]
    InvalidJurisdictionCode(String),

    /// A date string could not be parsed.
    #[error("invalid date: {0}")]
    InvalidDate(String),
}

impl PdError {
    /// Shorthand for [`PdError::MissingRequiredFact`].
    pub fn missing(fact: &'static str, context: impl Into<String>) -> Self {
        Self::MissingRequiredFact {
            fact,
            context: context.into(),
        }
    }
}

/// Result alias used throughout the workspace.
pub type PdResult<T> = Result<T, PdError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_work_type_carries_value() {
        let err = PdError::InvalidWorkType("sculpture".into());
        assert!(err.to_string().contains("\"sculpture\""));
    }

    #[test]
    fn test_missing_fact_display() {
        let err = PdError::missing("death_date", "fr.artistic.life_plus_70");
        assert_eq!(
            err.to_string(),
            "missing required fact `death_date`: fr.artistic.life_plus_70"
        );
    }
}
