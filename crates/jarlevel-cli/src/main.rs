//! Jarlevel CLI - validates the bytecode language level of jar and aar
//! archives.

mod cli;
mod commands;
mod error;
mod logging;
mod progress;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    logging::init(cli.verbose);

    commands::validate::execute(&cli)
}
