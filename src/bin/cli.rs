// src/bin/cli.rs
use clap::Parser;
use sport_corpus::cli::{self, Cli};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    sport_corpus::log::init("info");

    cli::run(Cli::parse())?;
    Ok(())
}
