#![forbid(unsafe_code)]

//! Scripted driver and snapshot testing for tag pickers.
//!
//! - **Scripted driver**: hosts pickers in a [`Registry`](tagpick_widgets::Registry),
//!   feeds them a line-oriented [`script`], and reports the submission.
//! - **Snapshot testing**: compares rendered markup against stored `.snap`
//!   files and shows diffs on mismatch.
//!
//! # Quick Start
//!
//! ```ignore
//! use tagpick_harness::assert_markup_snapshot;
//! use tagpick_widgets::{TagSelect, render_to_string};
//!
//! #[test]
//! fn empty_picker_renders() {
//!     let select = TagSelect::from_options([("1", "Go")]);
//!     assert_markup_snapshot!("empty_picker", &render_to_string(&select));
//! }
//! ```
//!
//! # Updating Snapshots
//!
//! Run tests with `BLESS=1` to create or update snapshot files:
//!
//! ```sh
//! BLESS=1 cargo test
//! ```
//!
//! Snapshot files are stored under `tests/snapshots/` relative to the
//! crate's `CARGO_MANIFEST_DIR`.

pub mod config;
pub mod error;
pub mod script;
pub mod source;

use std::fmt::Write as FmtWrite;
use std::path::{Path, PathBuf};

pub use config::HarnessConfig;
pub use error::HarnessError;
pub use script::{Command, ScriptLine, Session, SubmitStatus, parse_script};
pub use source::{load_tags, parse_preseed, parse_tags, sample_tags};

// ============================================================================
// Match Modes & Normalization
// ============================================================================

/// Comparison mode for snapshot testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Byte-exact string comparison.
    Exact,
    /// Trim trailing whitespace on each line before comparing.
    TrimTrailing,
    /// Collapse all whitespace runs to single spaces and trim each line.
    Fuzzy,
}

/// Normalize text according to the requested match mode.
fn normalize(text: &str, mode: MatchMode) -> String {
    match mode {
        MatchMode::Exact => text.to_string(),
        MatchMode::TrimTrailing => text
            .lines()
            .map(|l| l.trim_end())
            .collect::<Vec<_>>()
            .join("\n"),
        MatchMode::Fuzzy => text
            .lines()
            .map(|l| l.split_whitespace().collect::<Vec<_>>().join(" "))
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

// ============================================================================
// Diff
// ============================================================================

/// Line-by-line diff of two texts.
///
/// Lines prefixed with ` ` match, `-` lines appear only in `expected`, and
/// `+` lines only in `actual`. Empty when the inputs are identical.
#[must_use]
pub fn diff_text(expected: &str, actual: &str) -> String {
    let expected_lines: Vec<&str> = expected.lines().collect();
    let actual_lines: Vec<&str> = actual.lines().collect();

    let max_lines = expected_lines.len().max(actual_lines.len());
    let mut out = String::new();
    let mut has_diff = false;

    for i in 0..max_lines {
        let exp = expected_lines.get(i).copied();
        let act = actual_lines.get(i).copied();

        match (exp, act) {
            (Some(e), Some(a)) if e == a => writeln!(out, " {e}").unwrap(),
            (Some(e), Some(a)) => {
                has_diff = true;
                writeln!(out, "-{e}").unwrap();
                writeln!(out, "+{a}").unwrap();
            }
            (Some(e), None) => {
                has_diff = true;
                writeln!(out, "-{e}").unwrap();
            }
            (None, Some(a)) => {
                has_diff = true;
                writeln!(out, "+{a}").unwrap();
            }
            (None, None) => {}
        }
    }

    if has_diff { out } else { String::new() }
}

// ============================================================================
// Snapshot Assertion
// ============================================================================

/// Resolve the snapshot file path.
fn snapshot_path(base_dir: &Path, name: &str) -> PathBuf {
    base_dir
        .join("tests")
        .join("snapshots")
        .join(format!("{name}.snap"))
}

/// Check if the `BLESS` environment variable is set.
fn is_bless() -> bool {
    std::env::var("BLESS").is_ok_and(|v| v == "1" || v.eq_ignore_ascii_case("true"))
}

/// Assert that rendered markup matches a stored snapshot.
///
/// # Arguments
///
/// * `name`     – Snapshot identifier (used as the `.snap` filename).
/// * `markup`   – The rendered markup.
/// * `base_dir` – Root directory for snapshot storage (use `env!("CARGO_MANIFEST_DIR")`).
/// * `mode`     – How to compare the text.
///
/// # Panics
///
/// * If the snapshot file does not exist and `BLESS=1` is **not** set.
/// * If the markup does not match the stored snapshot.
pub fn assert_markup_snapshot(name: &str, markup: &str, base_dir: &str, mode: MatchMode) {
    let path = snapshot_path(Path::new(base_dir), name);

    if is_bless() {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("failed to create snapshot directory");
        }
        std::fs::write(&path, markup).expect("failed to write snapshot");
        return;
    }

    match std::fs::read_to_string(&path) {
        Ok(expected) => {
            let norm_expected = normalize(&expected, mode);
            let norm_actual = normalize(markup, mode);

            if norm_expected != norm_actual {
                let diff = diff_text(&norm_expected, &norm_actual);
                panic!(
                    "\n\
                     === Snapshot mismatch: '{name}' ===\n\
                     File: {}\n\
                     Mode: {mode:?}\n\
                     Set BLESS=1 to update.\n\n\
                     Diff (- expected, + actual):\n{diff}",
                    path.display()
                );
            }
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            panic!(
                "\n\
                 === No snapshot found: '{name}' ===\n\
                 Expected at: {}\n\
                 Run with BLESS=1 to create it.\n\n\
                 Actual output:\n{markup}",
                path.display(),
            );
        }
        Err(e) => {
            panic!("Failed to read snapshot '{}': {e}", path.display());
        }
    }
}

/// Assert that markup matches a stored snapshot.
///
/// Uses `CARGO_MANIFEST_DIR` to locate the snapshot directory and
/// [`MatchMode::TrimTrailing`] unless a mode is given.
#[macro_export]
macro_rules! assert_markup_snapshot {
    ($name:expr, $markup:expr) => {
        $crate::assert_markup_snapshot(
            $name,
            $markup,
            env!("CARGO_MANIFEST_DIR"),
            $crate::MatchMode::TrimTrailing,
        )
    };
    ($name:expr, $markup:expr, $mode:expr) => {
        $crate::assert_markup_snapshot($name, $markup, env!("CARGO_MANIFEST_DIR"), $mode)
    };
}
