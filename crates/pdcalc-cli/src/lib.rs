//! # pdcalc-cli: Public-Domain Calculator Command-Line Interface
//!
//! Thin front end over `pdcalc-rules`: argument parsing and document
//! loading live here, every legal decision lives in the rule engines.
//!
//! ## Subcommands
//!
//! - `status`: evaluate a work document under a jurisdiction
//! - `jurisdictions`: list registered jurisdiction codes
//!
//! ## Crate Policy
//!
//! - Handlers write to a caller-supplied `Write` so they can be tested
//!   without capturing stdout.
//! - Logging goes to stderr; reports go to stdout.

pub mod jurisdictions;
pub mod load;
pub mod status;
