//! Reshapes the flat tile data of a tile-map export into a row-major grid.
//!
//! The converter reads the first layer of an export, splits its `data` array into consecutive rows
//! whose length is the layer's `height` field, and writes the rows as a JSON array of arrays to
//! [`OUTPUT_PATH`].

use std::path::Path;

use color_eyre::eyre::{eyre, Result, WrapErr as _};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

pub use crate::{
    cli::{Cli, OUTPUT_PATH},
    grid::Grid,
};

mod cli;
mod export;
mod file_loader;
mod grid;

/// Runs the converter for parsed command-line arguments.
///
/// This function converts the export named on the command line and writes the grid to
/// [`OUTPUT_PATH`], replacing any previous file there.
///
/// # Errors
///
/// This function returns any error raised by [`convert`].
pub fn run(cli: &Cli) -> Result<()> {
    let _ = convert(&cli.input, Path::new(OUTPUT_PATH))?;

    Ok(())
}

/// Converts an export file into a grid file.
///
/// This function reads the first layer of the export at `input`, partitions its tile data into
/// rows of `height` tiles and writes the result to `output`. The destination is only opened once
/// the grid has been built, so a failure while reading, parsing or reshaping leaves it untouched.
///
/// # Errors
///
/// This function may return errors if:
/// - The input cannot be read
/// - The input is not well-formed JSON or lacks a usable first layer
/// - The layer's `height` is zero
/// - The output cannot be created or written
pub fn convert(input: &Path, output: &Path) -> Result<Grid> {
    let layer = file_loader::read_export(input)?;
    debug!(tiles = layer.data.len(), chunk_size = layer.height, "loaded first layer");

    let grid = Grid::reshape(&layer.data, layer.height)?;
    file_loader::write_grid(output, &grid)?;
    info!(rows = grid.rows.len(), path = %output.display(), "wrote grid");

    Ok(grid)
}

/// Installs the global log subscriber.
///
/// Events go to standard error, filtered by `RUST_LOG` and defaulting to warnings only.
///
/// # Errors
///
/// This function returns an error if a global subscriber is already installed.
pub fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| eyre!(err))
        .wrap_err("failed to install log subscriber")
}
