//! # Rule Configuration
//!
//! Product-level switches that change how rule engines treat incomplete
//! author data. Defaults reproduce the established behaviour.

use serde::{Deserialize, Serialize};

/// How to derive the last surviving author's death when some natural-person
/// authors have no recorded death date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingDeathPolicy {
    /// Take the latest recorded death; authors without one are ignored.
    /// Fails only when no author has a recorded death.
    #[default]
    LatestRecorded,
    /// Every natural-person author must have a recorded death date.
    Strict,
}

/// Configuration shared by all rule engines built at bootstrap.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    pub missing_death_policy: MissingDeathPolicy,
}

impl RulesConfig {
    pub fn strict() -> Self {
        Self {
            missing_death_policy: MissingDeathPolicy::Strict,
        }
    }
}
