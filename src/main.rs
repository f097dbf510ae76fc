//! This crate contains the source code for the binary of the mapgrid converter.

#![expect(
    unused_crate_dependencies,
    reason = "The dependencies are used in the library crate."
)]

use clap::Parser as _;
use color_eyre::{eyre::Result, install};
use mapgrid::Cli;

fn main() -> Result<()> {
    install()?;
    mapgrid::init_tracing()?;

    let cli = Cli::parse();
    mapgrid::run(&cli)
}
