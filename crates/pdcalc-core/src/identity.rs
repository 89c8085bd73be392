//! # Jurisdiction Code
//!
//! Newtype for the short code under which a jurisdiction's calculator is
//! registered (`"fr"`). Codes are normalized to lower case at
//! construction so `"FR"` and `"fr"` resolve to the same calculator.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PdError;

/// Validated, lower-cased jurisdiction code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct JurisdictionCode(String);

impl JurisdictionCode {
    /// Validate and normalize a jurisdiction code.
    ///
    /// Accepts 2 to 8 ASCII alphanumerics or `-`, starting with a letter.
    pub fn new(code: impl AsRef<str>) -> Result<Self, PdError> {
        let raw = code.as_ref().trim();
        let valid = (2..=8).contains(&raw.len())
            && raw.starts_with(|c: char| c.is_ascii_alphabetic())
            && raw.chars().all(|c| c.is_ascii_alphanumeric() || c == '-');
        if !valid {
            return Err(PdError::InvalidJurisdictionCode(raw.to_string()));
        }
        Ok(Self(raw.to_ascii_lowercase()))
    }

    /// The normalized code.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JurisdictionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for JurisdictionCode {
    type Err = PdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for JurisdictionCode {
    type Error = PdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<JurisdictionCode> for String {
    fn from(code: JurisdictionCode) -> Self {
        code.0
    }
}
