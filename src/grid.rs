//! Row-major grid module.
//!
//! This module contains the `Grid` struct, which holds the reshaped tile rows written by the
//! converter, together with the partitioning of a flat tile sequence into rows.

use color_eyre::eyre::{ensure, Result, WrapErr as _};
use serde::Serialize;

/// Row-major tile grid.
///
/// This structure holds the tile rows in order. It serializes transparently, so its JSON form is a
/// plain array of integer arrays.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Grid {
    /// Tile rows in order, each one a run of consecutive tiles from the flat data.
    pub rows: Vec<Vec<i64>>,
}

impl Grid {
    /// Partitions flat tile data into rows of `chunk_size` tiles.
    ///
    /// Rows are consecutive and non-overlapping and keep the order of the flat data. Every row
    /// holds exactly `chunk_size` tiles except the last, which holds whatever remains. Empty data
    /// yields a grid with no rows, and a chunk size larger than the data yields a single row.
    ///
    /// # Errors
    ///
    /// This function returns an error if `chunk_size` is zero.
    pub fn reshape(data: &[i64], chunk_size: usize) -> Result<Self> {
        ensure!(chunk_size > 0, "chunk size must be positive, got {chunk_size}");

        Ok(Self {
            rows: data.chunks(chunk_size).map(<[i64]>::to_vec).collect(),
        })
    }

    /// Encodes the grid as compact JSON.
    ///
    /// # Errors
    ///
    /// This function returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).wrap_err("failed to serialize grid")
    }
}
