//! # Temporal Arithmetic: Fractional Years
//!
//! Every term rule compares an elapsed span against a whole number of
//! years. Spans are measured in days and divided by a 365.25-day year, so
//! a comparison such as "more than 70 years since death" is a comparison
//! of two `f64` values with strict `>`.
//!
//! ## Document Dates
//!
//! Work documents carry calendar dates either in the compact `YYYYMMDD`
//! form used by older data sets or in ISO 8601 `YYYY-MM-DD`. Both are
//! accepted by [`parse_date()`]; [`serde_date`] always writes ISO 8601.

use chrono::{NaiveDate, Utc};

use crate::error::PdError;

/// Length of a year in days for all elapsed-years computations.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Fractional years from `from` to `to`.
///
/// Negative when `to` precedes `from`.
pub fn years_between(from: NaiveDate, to: NaiveDate) -> f64 {
    (to - from).num_days() as f64 / DAYS_PER_YEAR
}

/// Fractional years elapsed since `date`, as of `as_of`.
pub fn years_since(date: NaiveDate, as_of: NaiveDate) -> f64 {
    years_between(date, as_of)
}

/// The current UTC calendar date. Default reference date for evaluation.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Parse a document date in `YYYYMMDD` or `YYYY-MM-DD` form.
pub fn parse_date(s: &str) -> Result<NaiveDate, PdError> {
    let s = s.trim();
    let format = if s.len() == 8 && s.bytes().all(|b| b.is_ascii_digit()) {
        "%Y%m%d"
    } else {
        "%Y-%m-%d"
    };
    NaiveDate::parse_from_str(s, format)
        .map_err(|e| PdError::InvalidDate(format!("{s:?}: {e}")))
}

/// Serde adapters for document dates.
pub mod serde_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDate, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(&date.format("%Y-%m-%d"))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(d)?;
        super::parse_date(&raw).map_err(serde::de::Error::custom)
    }

    /// Same adapters for optional dates. `null` and a missing key both
    /// deserialize to `None`; an empty string is treated as absent too.
    pub mod option {
        use chrono::NaiveDate;
        use serde::{Deserialize, Deserializer, Serializer};

        pub fn serialize<S: Serializer>(date: &Option<NaiveDate>, s: S) -> Result<S::Ok, S::Error> {
            match date {
                Some(d) => s.collect_str(&d.format("%Y-%m-%d")),
                None => s.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<NaiveDate>, D::Error> {
            match Option::<String>::deserialize(d)? {
                Some(raw) if !raw.trim().is_empty() => super::super::parse_date(&raw)
                    .map(Some)
                    .map_err(serde::de::Error::custom),
                _ => Ok(None),
            }
        }
    }
}
