#![forbid(unsafe_code)]

//! Environment configuration of the harness binary.
//!
//! | Variable | Meaning | Default |
//! |----------|---------|---------|
//! | `TAGPICK_TAGS_FILE` | JSON array of `{tagId, tagName}` | built-in sample |
//! | `TAGPICK_PRESEED` | comma-separated ids selected up front | none |
//! | `TAGPICK_SCRIPT_FILE` | interaction script | stdin |
//! | `TAGPICK_MAX_CHIPS` | chip cap | 4 |
//! | `TAGPICK_WIDGETS` | pickers to host | 1 |
//! | `TAGPICK_LOG_JSON` | JSON log lines on stderr | off |
//!
//! Values are trimmed; an empty value counts as unset.

use std::path::PathBuf;

use tagpick_widgets::chips::DEFAULT_MAX_CHIPS;

use crate::error::HarnessError;
use crate::source::parse_preseed;

/// Harness settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Tag source file; `None` uses the sample list.
    pub tags_file: Option<PathBuf>,
    /// Ids selected in every picker before the script runs.
    pub preseed: Vec<String>,
    /// Script file; `None` reads stdin.
    pub script_file: Option<PathBuf>,
    /// Chip cap of every picker.
    pub max_chips: usize,
    /// Number of pickers.
    pub widgets: usize,
    /// Emit JSON log lines.
    pub log_json: bool,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            tags_file: None,
            preseed: Vec::new(),
            script_file: None,
            max_chips: DEFAULT_MAX_CHIPS,
            widgets: 1,
            log_json: false,
        }
    }
}

impl HarnessConfig {
    /// Read the process environment.
    pub fn from_env() -> Result<Self, HarnessError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read settings through `lookup`, which returns the raw value of a
    /// variable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, HarnessError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let preseed = match env_string(&lookup, "TAGPICK_PRESEED") {
            Some(list) => parse_preseed(&list)?,
            None => Vec::new(),
        };
        Ok(Self {
            tags_file: env_string(&lookup, "TAGPICK_TAGS_FILE").map(PathBuf::from),
            preseed,
            script_file: env_string(&lookup, "TAGPICK_SCRIPT_FILE").map(PathBuf::from),
            max_chips: env_u64(&lookup, "TAGPICK_MAX_CHIPS")
                .and_then(|n| usize::try_from(n).ok())
                .unwrap_or(defaults.max_chips),
            widgets: env_u64(&lookup, "TAGPICK_WIDGETS")
                .and_then(|n| usize::try_from(n).ok())
                .filter(|&n| n > 0)
                .unwrap_or(defaults.widgets),
            log_json: env_flag(&lookup, "TAGPICK_LOG_JSON").unwrap_or(defaults.log_json),
        })
    }
}

fn env_flag<F: Fn(&str) -> Option<String>>(lookup: &F, name: &str) -> Option<bool> {
    let value = lookup(name)?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    let enabled = matches!(
        trimmed,
        "1" | "true" | "TRUE" | "True" | "yes" | "YES" | "on" | "ON"
    );
    Some(enabled)
}

fn env_u64<F: Fn(&str) -> Option<String>>(lookup: &F, name: &str) -> Option<u64> {
    lookup(name).and_then(|value| value.trim().parse::<u64>().ok())
}

fn env_string<F: Fn(&str) -> Option<String>>(lookup: &F, name: &str) -> Option<String> {
    lookup(name).and_then(|value| {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}
