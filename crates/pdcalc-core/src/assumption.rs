//! # Assumption Log
//!
//! Ordered record of every default a rule engine applied while evaluating
//! one work. The log belongs to a single evaluation: engines create a
//! fresh [`AssumptionLog`] per call and hand it back inside the result, so
//! no assumption can leak from one evaluation into the next.

use serde::{Deserialize, Serialize};

/// Ordered, append-only list of assumption texts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssumptionLog(Vec<String>);

impl AssumptionLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an assumption.
    pub fn record(&mut self, text: impl Into<String>) {
        let text = text.into();
        tracing::debug!(assumption = %text, "assumption applied");
        self.0.push(text);
    }

    /// Whether an identical assumption text has been recorded.
    pub fn contains(&self, text: &str) -> bool {
        self.0.iter().any(|a| a == text)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl<'a> IntoIterator for &'a AssumptionLog {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
