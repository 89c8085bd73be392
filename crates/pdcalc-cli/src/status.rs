//! # Status Subcommand
//!
//! `pdcalc status <FILE>`: evaluate one work document under a
//! jurisdiction and print the determination with its assumption trail.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use chrono::NaiveDate;
use clap::Args;
use serde::Serialize;

use pdcalc_core::temporal::{parse_date, today};
use pdcalc_rules::{bootstrap, Calculator, Registry, RulesConfig};

use crate::load::{load_rules_config, load_work};

/// Arguments for the status subcommand.
#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Work document (JSON, or YAML with a .yaml/.yml extension).
    pub file: PathBuf,

    /// Jurisdiction code.
    #[arg(short, long, default_value = "fr")]
    pub jurisdiction: String,

    /// Reference date (YYYY-MM-DD or YYYYMMDD). Defaults to today.
    #[arg(long, value_parser = parse_as_of)]
    pub as_of: Option<NaiveDate>,

    /// Rule configuration file.
    #[arg(long)]
    pub rules: Option<PathBuf>,

    /// Require a recorded death date for every natural-person author.
    #[arg(long)]
    pub strict_deaths: bool,

    /// Emit the determination as JSON.
    #[arg(long)]
    pub json: bool,
}

fn parse_as_of(s: &str) -> Result<NaiveDate, String> {
    parse_date(s).map_err(|e| e.to_string())
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    title: &'a str,
    jurisdiction: &'a str,
    as_of: String,
    public_domain: bool,
    rule: &'a str,
    assumptions: &'a [String],
}

/// Run the status subcommand, writing the report to `out`.
pub fn run(args: &StatusArgs, out: &mut impl Write) -> anyhow::Result<()> {
    let mut config = match &args.rules {
        Some(path) => load_rules_config(path)?,
        None => RulesConfig::default(),
    };
    if args.strict_deaths {
        config = RulesConfig::strict();
    }

    let registry = Registry::new();
    bootstrap(&registry, &config)?;
    let calculator = registry.lookup(&args.jurisdiction)?;

    let work = load_work(&args.file)?;
    let as_of = args.as_of.unwrap_or_else(today);
    let determination = calculator
        .status(&work, as_of)
        .with_context(|| format!("cannot determine status of {:?}", work.title))?;

    tracing::info!(
        title = %work.title,
        jurisdiction = calculator.code(),
        %as_of,
        public_domain = determination.public_domain,
        rule = determination.rule,
        "status determined"
    );

    if args.json {
        let report = Report {
            title: &work.title,
            jurisdiction: calculator.code(),
            as_of: as_of.format("%Y-%m-%d").to_string(),
            public_domain: determination.public_domain,
            rule: determination.rule,
            assumptions: determination.assumptions.as_slice(),
        };
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
        return Ok(());
    }

    let verdict = if determination.public_domain {
        "public domain"
    } else {
        "protected"
    };
    writeln!(out, "{} [{}, as of {as_of}]: {verdict}", work.title, calculator.code())?;
    writeln!(out, "  rule: {}", determination.rule)?;
    for assumption in determination.assumptions() {
        writeln!(out, "  assumption: {assumption}")?;
    }
    Ok(())
}
