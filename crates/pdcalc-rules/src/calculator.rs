//! # Calculator Contract
//!
//! One capability per jurisdiction: given a work and a reference date,
//! decide whether the work is in the public domain. Each call returns its
//! own [`Determination`], assumptions included, so a calculator instance
//! holds no per-call state and can be shared freely across threads.

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use pdcalc_core::{today, AssumptionLog, PdResult, Work};

/// Outcome of one evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Determination {
    /// Whether the protection term has expired.
    pub public_domain: bool,
    /// Name of the decision-tree leaf that produced the outcome.
    pub rule: &'static str,
    /// Defaults applied during this evaluation, in order.
    pub assumptions: AssumptionLog,
}

impl Determination {
    pub fn assumptions(&self) -> impl Iterator<Item = &str> {
        self.assumptions.iter()
    }
}

/// A jurisdiction's public-domain rule engine.
///
/// Implementations must be pure over `(work, as_of)`: two calls with the
/// same inputs yield the same [`Determination`].
pub trait Calculator: Send + Sync + fmt::Debug {
    /// Registry code this calculator serves (e.g. `"fr"`).
    fn code(&self) -> &'static str;

    /// Evaluate `work` as of the reference date `as_of`.
    ///
    /// A work that breaks the model's date invariants is `InvalidWork`.
    fn status(&self, work: &Work, as_of: NaiveDate) -> PdResult<Determination>;

    /// Evaluate `work` as of today (UTC).
    fn status_now(&self, work: &Work) -> PdResult<Determination> {
        self.status(work, today())
    }
}
