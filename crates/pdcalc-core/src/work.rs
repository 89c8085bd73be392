//! # Work and Author Model
//!
//! Immutable description of a work and its authors, as supplied by the
//! caller. The model carries facts only; every legal conclusion is drawn
//! by a jurisdiction's rule engine.
//!
//! ## Document Shape
//!
//! Works deserialize from the document format used by existing
//! public-domain data sets: `type` for the work-type tag, `date` for the
//! publication date, `treaty` for the treaty term, and author `type` for
//! the author kind. Dates accept `YYYYMMDD` or `YYYY-MM-DD`.
//!
//! ## Invariants
//!
//! - `authors` may be empty; rule engines treat that as an orphan work.
//! - An author's `death_date` is never before the `birth_date`.
//! - A missing `publication_date` always means unpublished.
//!
//! [`Work::validate()`] checks the date invariants; loaders call it once
//! after construction.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::eea::is_eea_country;
use crate::error::PdError;
use crate::temporal::{self, serde_date};

// ---------------------------------------------------------------------------
// WorkType
// ---------------------------------------------------------------------------

/// Every work type a rule engine can dispatch on.
///
/// Works carry their type as a raw tag; the tag is parsed into this enum
/// at dispatch time so an unrecognized tag surfaces as
/// [`PdError::InvalidWorkType`] carrying the offending value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkType {
    /// Unoriginal database (sui generis right).
    Database,
    /// Literary work.
    Literary,
    /// Artistic work (painting, drawing, sculpture as artwork category).
    Artistic,
    /// Dramatic work.
    Dramatic,
    /// Photograph.
    Photograph,
    /// Musical composition.
    Composition,
    /// Collective work (authorship vested in the person publishing it).
    Collective,
    /// Cinematographic or audiovisual work.
    Film,
    /// Sound recording (phonogram).
    Recording,
    /// Fixed performance.
    Performance,
    /// Broadcast.
    Broadcast,
}

impl WorkType {
    /// All work types in canonical order.
    pub fn all() -> &'static [WorkType] {
        &[
            Self::Database,
            Self::Literary,
            Self::Artistic,
            Self::Dramatic,
            Self::Photograph,
            Self::Composition,
            Self::Collective,
            Self::Film,
            Self::Recording,
            Self::Performance,
            Self::Broadcast,
        ]
    }

    /// The tag used in work documents. Matches the serde format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Database => "database",
            Self::Literary => "literary",
            Self::Artistic => "artistic",
            Self::Dramatic => "dramatic",
            Self::Photograph => "photograph",
            Self::Composition => "composition",
            Self::Collective => "collective",
            Self::Film => "film",
            Self::Recording => "recording",
            Self::Performance => "performance",
            Self::Broadcast => "broadcast",
        }
    }
}

impl fmt::Display for WorkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkType {
    type Err = PdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| PdError::InvalidWorkType(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Author
// ---------------------------------------------------------------------------

/// How an author is identified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthorKind {
    /// Identified natural person.
    Person,
    /// Author not named.
    Anonymous,
    /// Author named under a pseudonym that does not reveal identity.
    Pseudonym,
}

/// An author of a work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: AuthorKind,
    #[serde(default, with = "serde_date::option", skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
    /// Absent when the author is alive or the date is unknown.
    #[serde(default, with = "serde_date::option", skip_serializing_if = "Option::is_none")]
    pub death_date: Option<NaiveDate>,
    /// ISO 3166-1 alpha-2 country of nationality or residence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl Author {
    /// A natural-person author with no recorded dates.
    pub fn person(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: AuthorKind::Person,
            birth_date: None,
            death_date: None,
            country: None,
        }
    }

    pub fn with_kind(mut self, kind: AuthorKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn born(mut self, date: NaiveDate) -> Self {
        self.birth_date = Some(date);
        self
    }

    pub fn died(mut self, date: NaiveDate) -> Self {
        self.death_date = Some(date);
        self
    }

    pub fn from_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Whether the author's country is an EEA state.
    pub fn is_eea(&self) -> bool {
        self.country.as_deref().is_some_and(is_eea_country)
    }

    pub fn is_anonymous(&self) -> bool {
        matches!(self.kind, AuthorKind::Anonymous | AuthorKind::Pseudonym)
    }
}

// ---------------------------------------------------------------------------
// Work
// ---------------------------------------------------------------------------

/// A work whose protection status is to be determined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Work {
    pub title: String,
    /// Raw work-type tag; see [`WorkType`].
    #[serde(rename = "type")]
    pub work_type: String,
    /// Creation, completion, or fixation date.
    #[serde(with = "serde_date")]
    pub creation_date: NaiveDate,
    /// First publication. `None` means unpublished.
    #[serde(
        rename = "date",
        default,
        with = "serde_date::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub publication_date: Option<NaiveDate>,
    /// Databases only: substantially changed since completion.
    #[serde(default)]
    pub changed: bool,
    #[serde(default, with = "serde_date::option", skip_serializing_if = "Option::is_none")]
    pub last_changed: Option<NaiveDate>,
    /// Explicit EEA connection. When absent, derived from author countries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eea: Option<bool>,
    /// Treaty term in years, for works from treaty countries.
    #[serde(rename = "treaty", default, skip_serializing_if = "Option::is_none")]
    pub treaty_term: Option<u32>,
    #[serde(default)]
    pub authors: Vec<Author>,
}

impl Work {
    /// An unpublished work with no authors.
    pub fn new(title: impl Into<String>, work_type: impl Into<String>, creation_date: NaiveDate) -> Self {
        Self {
            title: title.into(),
            work_type: work_type.into(),
            creation_date,
            publication_date: None,
            changed: false,
            last_changed: None,
            eea: None,
            treaty_term: None,
            authors: Vec::new(),
        }
    }

    pub fn published(mut self, date: NaiveDate) -> Self {
        self.publication_date = Some(date);
        self
    }

    pub fn changed_on(mut self, date: NaiveDate) -> Self {
        self.changed = true;
        self.last_changed = Some(date);
        self
    }

    pub fn with_eea(mut self, eea: bool) -> Self {
        self.eea = Some(eea);
        self
    }

    pub fn with_treaty_term(mut self, years: u32) -> Self {
        self.treaty_term = Some(years);
        self
    }

    pub fn with_author(mut self, author: Author) -> Self {
        self.authors.push(author);
        self
    }

    /// Parse the work-type tag.
    pub fn kind(&self) -> Result<WorkType, PdError> {
        self.work_type.parse()
    }

    /// Whether the work or any of its authors is connected to an EEA
    /// state. An explicit `eea` flag on the work takes precedence.
    pub fn has_eea_connection(&self) -> bool {
        self.eea
            .unwrap_or_else(|| self.authors.iter().any(Author::is_eea))
    }

    pub fn treaty_term(&self) -> Option<u32> {
        self.treaty_term
    }

    pub fn is_published(&self) -> bool {
        self.publication_date.is_some()
    }

    /// Latest recorded death date across all authors.
    ///
    /// Authors without a death date do not contribute.
    pub fn last_surviving_death(&self) -> Option<NaiveDate> {
        self.authors.iter().filter_map(|a| a.death_date).max()
    }

    pub fn has_anonymous_author(&self) -> bool {
        self.authors.iter().any(Author::is_anonymous)
    }

    pub fn creation_years(&self, as_of: NaiveDate) -> f64 {
        temporal::years_since(self.creation_date, as_of)
    }

    /// Check the model's date invariants.
    pub fn validate(&self) -> Result<(), PdError> {
        for author in &self.authors {
            if let (Some(born), Some(died)) = (author.birth_date, author.death_date) {
                if died < born {
                    return Err(PdError::InvalidWork(format!(
                        "author {:?} died ({died}) before being born ({born})",
                        author.name
                    )));
                }
            }
        }
        if let Some(changed) = self.last_changed {
            if changed < self.creation_date {
                return Err(PdError::InvalidWork(format!(
                    "last change ({changed}) precedes creation ({})",
                    self.creation_date
                )));
            }
        }
        Ok(())
    }
}
