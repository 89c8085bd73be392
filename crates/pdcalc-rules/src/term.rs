//! # Term Tests
//!
//! Every leaf of a jurisdiction's decision tree ends in the same question:
//! have more than N years elapsed on some clock? A [`TermTest`] names the
//! clock and the term; [`TermTest::expired()`] answers with strict `>`, so
//! a span of exactly N years is still protected.

use chrono::NaiveDate;

use pdcalc_core::{years_since, PdError, PdResult, Work};

/// The event a term runs from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clock {
    /// First publication (or first communication to the public).
    Publication,
    /// Creation, completion, or fixation.
    Creation,
    /// Last substantial change of a database.
    LastChange,
    /// Death of the last surviving author.
    Death(NaiveDate),
}

impl Clock {
    fn start(&self, work: &Work) -> PdResult<NaiveDate> {
        match *self {
            Self::Publication => work
                .publication_date
                .ok_or_else(|| PdError::missing("publication_date", "term runs from publication")),
            Self::Creation => Ok(work.creation_date),
            Self::LastChange => work
                .last_changed
                .ok_or_else(|| PdError::missing("last_changed", "term runs from last substantial change")),
            Self::Death(date) => Ok(date),
        }
    }
}

/// "More than `years` have elapsed on `clock`."
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TermTest {
    pub clock: Clock,
    pub years: f64,
}

impl TermTest {
    pub const fn new(clock: Clock, years: f64) -> Self {
        Self { clock, years }
    }

    /// Fractional years elapsed on the clock as of `as_of`.
    pub fn elapsed(&self, work: &Work, as_of: NaiveDate) -> PdResult<f64> {
        Ok(years_since(self.clock.start(work)?, as_of))
    }

    /// Whether the term has expired. Strictly greater-than.
    pub fn expired(&self, work: &Work, as_of: NaiveDate) -> PdResult<bool> {
        Ok(self.elapsed(work, as_of)? > self.years)
    }
}
