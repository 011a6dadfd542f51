//! Loading raw record collections from JSON files.
//!
//! Operators occasionally hand over an exported records file instead of a
//! live source; this loader feeds such files through the same normalization
//! path the remote fetch uses.

use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;

use super::normalizer::{normalize_batch, NormalizeOutcome};

/// Read a JSON array of raw records from a file.
pub fn load_raw_records(path: &Path) -> Result<Vec<Value>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read records file {}", path.display()))?;

    let values: Vec<Value> =
        serde_json::from_str(&content).context("Failed to parse records JSON")?;
    Ok(values)
}

/// Load and normalize a records file in one step.
pub fn load_records(path: &Path) -> Result<NormalizeOutcome> {
    let raw = load_raw_records(path)?;
    Ok(normalize_batch(&raw))
}
