//! # pdcalc-rules: Jurisdiction Rule Engines
//!
//! Turns the facts in `pdcalc-core` into a public-domain determination.
//!
//! - **Calculator** (`calculator.rs`): the one capability every
//!   jurisdiction provides, `status(work, as_of)`, returning a
//!   [`Determination`] that carries the outcome, the decision-tree leaf
//!   that produced it, and the assumptions applied on the way.
//!
//! - **Term** (`term.rs`): strict `>` elapsed-years tests against a named
//!   clock (publication, creation, last change, death).
//!
//! - **Registry** (`registry.rs`): jurisdiction code → calculator, with an
//!   explicit [`bootstrap()`] instead of load-time self-registration.
//!
//! - **Jurisdictions** (`jurisdiction/`): concrete decision trees. France
//!   ships today.
//!
//! ## Example
//!
//! ```
//! use chrono::NaiveDate;
//! use pdcalc_core::{Author, Work};
//! use pdcalc_rules::Registry;
//!
//! let registry = Registry::with_defaults().unwrap();
//! let calc = registry.lookup("fr").unwrap();
//!
//! let work = Work::new("I love flowers", "recording", NaiveDate::from_ymd_opt(1945, 1, 1).unwrap())
//!     .published(NaiveDate::from_ymd_opt(1945, 1, 1).unwrap())
//!     .with_author(Author::person("Schumann, Robert").from_country("uk"));
//!
//! let det = calc.status(&work, NaiveDate::from_ymd_opt(2030, 1, 1).unwrap()).unwrap();
//! assert!(det.public_domain);
//! assert_eq!(det.assumptions.len(), 1);
//! ```
//!
//! ## Crate Policy
//!
//! - Depends only on `pdcalc-core` internally.
//! - Calculators hold no per-call state; assumptions travel in the result.
//! - Every `match` on `WorkType` is exhaustive.

pub mod calculator;
pub mod config;
pub mod jurisdiction;
pub mod registry;
pub mod term;

pub use calculator::{Calculator, Determination};
pub use config::{MissingDeathPolicy, RulesConfig};
pub use registry::{bootstrap, Registry};
pub use term::{Clock, TermTest};
