//! Tile-map export data module.
//!
//! This module contains the `Export` and `Layer` structs for the parts of a tile-map export the
//! converter reads, along with the parsing routine that extracts the first layer from the raw
//! document text.

use color_eyre::eyre::{ensure, OptionExt as _, Result, WrapErr as _};
use serde::{de::Error as _, Deserialize, Deserializer};
use serde_json::{Number, Value};

/// Smallest float that lies past the `u64` range, `2^64`.
///
/// Integer literals this large only survive JSON parsing as floats. Every float at or above this
/// bound is a whole number.
const PAST_U64_RANGE: f64 = 18_446_744_073_709_551_616.0;

/// Top-level tile-map export document.
///
/// This structure only requires a `layers` sequence. The layers are kept as raw JSON values so
/// that nothing past the first one is ever inspected, whatever its contents.
#[derive(Debug, Deserialize)]
pub(crate) struct Export {
    /// Raw layer objects in declaration order.
    pub(crate) layers: Vec<Value>,
}

/// First layer of a tile-map export.
///
/// This structure holds the flat tile data and the value that drives its reshaping. Any other
/// field the exporter writes into the layer object is ignored.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub(crate) struct Layer {
    /// Tile indices in row-major order.
    ///
    /// Signed 64-bit storage holds every global tile id an exporter can write, including the ids
    /// carrying flip flags in their upper bits.
    pub(crate) data: Vec<i64>,
    /// Number of tiles per output row.
    ///
    /// The export labels this field `height`, and it is read under that name, but the converter
    /// uses it as the chunk size of each row rather than as a row count. Values past the `usize`
    /// range saturate, since any of them already exceeds the length of the tile data.
    #[serde(deserialize_with = "chunk_size")]
    pub(crate) height: usize,
}

/// Deserializes a non-negative JSON integer as a chunk size, saturating at [`usize::MAX`].
fn chunk_size<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    let number = Number::deserialize(deserializer)?;
    if let Some(value) = number.as_u64() {
        return Ok(usize::try_from(value).unwrap_or(usize::MAX));
    }

    match number.as_f64() {
        Some(value) if value >= PAST_U64_RANGE => Ok(usize::MAX),
        _ => Err(D::Error::custom(format!(
            "invalid chunk size {number}, expected a non-negative integer"
        ))),
    }
}

/// Parses export text and returns its first layer.
///
/// This function parses the text as JSON, checks that it carries a non-empty `layers` sequence
/// and deserializes the first element into a [`Layer`]. Further layers are left untouched.
///
/// # Errors
///
/// This function may return errors if:
/// - The text is not well-formed JSON
/// - The document has no `layers` sequence, or it is empty
/// - The first layer lacks an integer array `data` or a non-negative integer `height`
pub(crate) fn parse(text: &str) -> Result<Layer> {
    let document: Value =
        serde_json::from_str(text).wrap_err("map export is not well-formed JSON")?;
    ensure!(document.is_object(), "map export has no `layers` sequence");
    let export =
        Export::deserialize(document).wrap_err("map export has no `layers` sequence")?;
    let first = export
        .layers
        .into_iter()
        .next()
        .ok_or_eyre("map export has an empty `layers` sequence")?;
    ensure!(
        first.is_object(),
        "first layer lacks integer `data` and non-negative `height` fields"
    );

    Layer::deserialize(first)
        .wrap_err("first layer lacks integer `data` and non-negative `height` fields")
}
