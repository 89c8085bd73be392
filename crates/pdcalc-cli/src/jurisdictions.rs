//! # Jurisdictions Subcommand
//!
//! Lists the jurisdiction codes registered at bootstrap.

use std::io::Write;

use pdcalc_rules::Registry;

/// Print one registered code per line.
pub fn run(out: &mut impl Write) -> anyhow::Result<()> {
    let registry = Registry::with_defaults()?;
    for code in registry.codes() {
        writeln!(out, "{code}")?;
    }
    Ok(())
}
