//! File reading and writing utilities for map exports and grids.

use std::{
    fs::{self, File},
    io::{BufWriter, Write as _},
    path::Path,
};

use color_eyre::eyre::{Result, WrapErr as _};
use tracing::debug;

use crate::{
    export::{self, Layer},
    grid::Grid,
};

/// Reads a tile-map export file and returns its first layer.
///
/// This function reads the whole file as text and hands it to the export parser. The file handle
/// is released as soon as the read completes.
///
/// # Errors
///
/// This function may return errors if:
/// - The file does not exist or cannot be read as UTF-8 text
/// - The contents are not a well-formed export with a usable first layer
pub(crate) fn read_export(path: &Path) -> Result<Layer> {
    let contents = fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read map export {}", path.display()))?;
    debug!(path = %path.display(), bytes = contents.len(), "read map export");

    export::parse(&contents)
        .wrap_err_with(|| format!("failed to parse map export {}", path.display()))
}

/// Writes a grid to a file as compact JSON.
///
/// This function serializes the grid before touching the destination, then creates or truncates
/// the file and writes the encoded text through a buffered writer. The handle is dropped when the
/// function returns, on success and on error alike. The parent directory must already exist.
///
/// # Errors
///
/// This function may return errors if:
/// - The grid cannot be serialized
/// - The destination cannot be created, written or flushed
pub(crate) fn write_grid(path: &Path, grid: &Grid) -> Result<()> {
    let json = grid.to_json()?;

    let file = File::create(path)
        .wrap_err_with(|| format!("failed to create grid file {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(json.as_bytes())
        .wrap_err_with(|| format!("failed to write grid file {}", path.display()))?;
    writer
        .flush()
        .wrap_err_with(|| format!("failed to flush grid file {}", path.display()))?;

    Ok(())
}
