//! Development tasks for the ability workspace
//!
//! This binary provides development utilities using the cargo-xtask pattern.
//! Run with: `cargo xtask <command>`

mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Delve, Validate};

/// Development tasks for the ability workspace
#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development tools for realm abilities and shears", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Print delve text for abilities, shears, and timed effects
    Delve(Delve),

    /// Load a content directory and report problems
    Validate(Validate),
}

fn main() -> Result<()> {
    ability_runtime::logging::init();

    let cli = Cli::parse();

    match cli.command {
        Command::Delve(cmd) => cmd.execute(),
        Command::Validate(cmd) => cmd.execute(),
    }
}
