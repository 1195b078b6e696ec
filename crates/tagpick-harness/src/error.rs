#![forbid(unsafe_code)]

//! Harness errors.

use std::fmt;
use std::io;

/// Errors raised while loading inputs or running a script.
#[derive(Debug)]
pub enum HarnessError {
    /// Reading a file or stdin failed.
    Io(io::Error),
    /// The tag source is not a JSON array of `{tagId, tagName}` records.
    TagSource(serde_json::Error),
    /// A script line could not be parsed or run.
    Script {
        /// 1-based line number.
        line: usize,
        /// What went wrong.
        message: String,
    },
    /// A pre-seed entry is not a tag id.
    Preseed(String),
}

impl HarnessError {
    pub(crate) fn script(line: usize, message: impl Into<String>) -> Self {
        Self::Script {
            line,
            message: message.into(),
        }
    }
}

impl fmt::Display for HarnessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::TagSource(e) => write!(f, "invalid tag source: {e}"),
            Self::Script { line, message } => write!(f, "script line {line}: {message}"),
            Self::Preseed(entry) => write!(f, "invalid pre-seed id: {entry:?}"),
        }
    }
}

impl std::error::Error for HarnessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::TagSource(e) => Some(e),
            Self::Script { .. } | Self::Preseed(_) => None,
        }
    }
}

impl From<io::Error> for HarnessError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for HarnessError {
    fn from(err: serde_json::Error) -> Self {
        Self::TagSource(err)
    }
}

impl From<HarnessError> for io::Error {
    fn from(err: HarnessError) -> Self {
        match err {
            HarnessError::Io(e) => e,
            other => io::Error::new(io::ErrorKind::InvalidInput, other.to_string()),
        }
    }
}
