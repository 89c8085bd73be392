//! # pdcalc-core: Foundational Types for the Public-Domain Calculator
//!
//! Defines the facts every jurisdiction's rule engine reasons over, and
//! the arithmetic it reasons with. Rule engines live in `pdcalc-rules`;
//! this crate depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Facts, not conclusions.** [`Work`] and [`Author`] describe what is
//!    known about a work. Nothing here decides protection status.
//!
//! 2. **One year length.** All elapsed-years comparisons go through
//!    [`temporal::years_between()`] with a 365.25-day year.
//!
//! 3. **Raw work-type tags.** A work keeps its type tag as supplied and
//!    parses it into [`WorkType`] at dispatch, so an unrecognized tag is an
//!    error carrying the offending value rather than a deserialization
//!    failure.
//!
//! 4. **Assumptions are data.** Every default applied during an
//!    evaluation is appended to that evaluation's [`AssumptionLog`].
//!
//! ## Crate Policy
//!
//! - No dependencies on other `pdcalc-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod assumption;
pub mod eea;
pub mod error;
pub mod identity;
pub mod temporal;
pub mod work;

// Re-export primary types for ergonomic imports.
pub use assumption::AssumptionLog;
pub use eea::is_eea_country;
pub use error::{PdError, PdResult};
pub use identity::JurisdictionCode;
pub use temporal::{today, years_between, years_since, DAYS_PER_YEAR};
pub use work::{Author, AuthorKind, Work, WorkType};
