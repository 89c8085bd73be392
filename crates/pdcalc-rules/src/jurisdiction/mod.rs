//! # Jurisdiction Rule Engines
//!
//! One module per jurisdiction. Each exposes a type implementing
//! [`Calculator`](crate::calculator::Calculator); [`bootstrap()`](crate::registry::bootstrap)
//! registers them.

pub mod fr;

pub use fr::France;
