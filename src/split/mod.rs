//! Offline region-split utility: one JSON array of region records in, one
//! `<slug>.json` file per record out.
//!
//! Per-record problems (non-object entry, missing/non-string slug) are
//! reported and skipped; only catastrophic failures (unreadable input,
//! invalid JSON, non-array top level) are errors.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;

use crate::core::errors::{GovDirError, Result};

/// One record skipped during a split run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedRecord {
    /// Index in the input array.
    pub index: usize,
    /// The record's `region` field, or "(unknown)".
    pub name: String,
    /// Why it was skipped.
    pub reason: String,
}

/// Outcome of one split run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SplitReport {
    /// Files written.
    pub written: usize,
    /// Records skipped with reasons.
    pub skipped: Vec<SkippedRecord>,
    /// Output directory.
    pub out_dir: PathBuf,
}

/// Split `input` (a JSON array of region records) into per-slug files under
/// `out_dir`, creating the directory as needed. Record shape is preserved;
/// files are pretty-printed with a trailing newline.
pub fn split_regions(input: &Path, out_dir: &Path) -> Result<SplitReport> {
    let raw = fs::read_to_string(input).map_err(|source| GovDirError::io(input, source))?;

    let parsed: Value = serde_json::from_str(&raw).map_err(|error| GovDirError::FixtureParse {
        source_name: input.display().to_string(),
        details: error.to_string(),
    })?;

    let Value::Array(regions) = parsed else {
        return Err(GovDirError::FixtureShape {
            details: format!("{}: expected an array of regions", input.display()),
        });
    };

    fs::create_dir_all(out_dir).map_err(|source| GovDirError::io(out_dir, source))?;

    let mut written = 0;
    let mut skipped = Vec::new();

    for (index, region) in regions.iter().enumerate() {
        let Value::Object(map) = region else {
            skipped.push(SkippedRecord {
                index,
                name: "(unknown)".to_string(),
                reason: "not an object".to_string(),
            });
            continue;
        };

        let Some(slug) = map.get("slug").and_then(Value::as_str).filter(|s| !s.is_empty())
        else {
            skipped.push(SkippedRecord {
                index,
                name: map
                    .get("region")
                    .and_then(Value::as_str)
                    .unwrap_or("(unknown)")
                    .to_string(),
                reason: "missing or non-string slug".to_string(),
            });
            continue;
        };

        let out_path = out_dir.join(format!("{slug}.json"));
        let mut body = serde_json::to_string_pretty(region)?;
        body.push('\n');
        fs::write(&out_path, body).map_err(|source| GovDirError::io(&out_path, source))?;
        written += 1;
    }

    Ok(SplitReport {
        written,
        skipped,
        out_dir: out_dir.to_path_buf(),
    })
}
