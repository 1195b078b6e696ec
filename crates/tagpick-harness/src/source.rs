#![forbid(unsafe_code)]

//! Tag source and pre-seed inputs.

use std::path::Path;

use tagpick_widgets::TagRecord;

use crate::error::HarnessError;

/// Tags used when no tag file is configured.
pub const SAMPLE_TAGS: &[(i64, &str)] = &[
    (1, "Go"),
    (2, "Rust"),
    (3, "Zig"),
    (4, "Python"),
    (5, "TypeScript"),
    (6, "Haskell"),
];

/// The built-in sample list.
#[must_use]
pub fn sample_tags() -> Vec<TagRecord> {
    SAMPLE_TAGS
        .iter()
        .map(|&(id, name)| TagRecord::new(id, name))
        .collect()
}

/// Decode a JSON array of `{"tagId": .., "tagName": ..}` records.
pub fn parse_tags(json: &str) -> Result<Vec<TagRecord>, HarnessError> {
    Ok(serde_json::from_str(json)?)
}

/// Load tags from `path`, or the sample list when `path` is `None`.
pub fn load_tags(path: Option<&Path>) -> Result<Vec<TagRecord>, HarnessError> {
    match path {
        Some(path) => parse_tags(&std::fs::read_to_string(path)?),
        None => Ok(sample_tags()),
    }
}

/// Parse a comma-separated list of tag ids.
///
/// Entries are trimmed and empty entries skipped. Every remaining entry
/// must be an integer id.
pub fn parse_preseed(list: &str) -> Result<Vec<String>, HarnessError> {
    list.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            entry
                .parse::<i64>()
                .map(|id| id.to_string())
                .map_err(|_| HarnessError::Preseed(entry.to_owned()))
        })
        .collect()
}
