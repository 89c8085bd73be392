//! # pdcalc CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use clap::Parser;

/// Public-domain calculator.
///
/// Determines whether a work's protection term has expired under a
/// jurisdiction's statutory rules, and reports every assumption made.
#[derive(Parser, Debug)]
#[command(name = "pdcalc", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Determine the public-domain status of a work document.
    Status(pdcalc_cli::status::StatusArgs),
    /// List registered jurisdictions.
    Jurisdictions,
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Commands::Status(args) => pdcalc_cli::status::run(&args, &mut stdout),
        Commands::Jurisdictions => pdcalc_cli::jurisdictions::run(&mut stdout),
    }
}
