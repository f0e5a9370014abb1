// src/report/persist.rs
// =============================================================================
// This module writes processed outcomes to disk.
//
// Output format: {base}_results.json - a pretty-printed UTF-8 JSON array of
// ResolutionOutcome objects. serde_json keeps non-ASCII characters as literal
// characters (no \uXXXX escaping), so filenames in any language survive
// intact.
//
// A write failure is the caller's problem to report, not ours to panic over:
// the outcomes stay in memory either way.
// =============================================================================

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use crate::resolver::ResolutionOutcome;

// Writes outcomes to {base_name}_results.json
//
// Parameters:
//   outcomes: the batch results to serialize
//   base_name: prefix for the output file (may include a directory path)
//
// Returns: the path that was written, or the error for the caller to
// surface as a warning
pub fn persist_results(outcomes: &[ResolutionOutcome], base_name: &str) -> Result<PathBuf> {
    let path = PathBuf::from(format!("{}_results.json", base_name));

    let json = serde_json::to_string_pretty(outcomes)
        .context("Failed to serialize results")?;

    fs::write(&path, json)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(path)
}
