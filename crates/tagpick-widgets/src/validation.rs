#![forbid(unsafe_code)]

//! Submit-time validation of tag pickers.
//!
//! Every picker on a page must have a non-empty selection before the form
//! may be submitted. Failing pickers show their inline error; passing ones
//! hide it.
//!
//! # Invariants
//!
//! 1. **No short-circuit**: every picker is visited, so every failing picker
//!    shows its error after one call.
//! 2. **Aggregate**: the gate passes iff every picker passes.
//! 3. **Advisory**: a failure is reported through state, never a panic.

use std::fmt;

use crate::registry::Registry;
use crate::select::TagSelect;

/// Error code for an empty selection.
pub const ERROR_CODE_REQUIRED: &str = "required";

/// A validation error with a stable code and a display message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Stable error code for programmatic handling.
    pub code: &'static str,
    /// Human-readable message.
    pub message: String,
}

impl ValidationError {
    /// Create a new validation error.
    #[must_use]
    pub fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// The result of validating one picker.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ValidationResult {
    /// The picker has a selection.
    #[default]
    Valid,
    /// The picker failed.
    Invalid(ValidationError),
}

impl ValidationResult {
    /// Returns `true` if the result is `Valid`.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Returns the error if the result is `Invalid`.
    #[must_use]
    pub fn error(&self) -> Option<&ValidationError> {
        match self {
            Self::Valid => None,
            Self::Invalid(e) => Some(e),
        }
    }
}

/// Checks that pickers have a selection.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidationGate;

impl ValidationGate {
    /// Validate one picker without touching its error flag.
    #[must_use]
    pub fn check(select: &TagSelect) -> ValidationResult {
        if select.selection().is_empty() {
            ValidationResult::Invalid(ValidationError::new(
                ERROR_CODE_REQUIRED,
                select.config().required_message.clone(),
            ))
        } else {
            ValidationResult::Valid
        }
    }

    /// Validate every picker, showing or hiding each one's inline error.
    ///
    /// Returns `true` only if all pickers pass.
    pub fn validate_all<'a, I>(selects: I) -> bool
    where
        I: IntoIterator<Item = &'a mut TagSelect>,
    {
        let mut all_valid = true;
        for select in selects {
            let valid = Self::check(select).is_valid();
            select.set_error_visible(!valid);
            all_valid &= valid;
        }
        all_valid
    }

    /// Validate every picker of a registry.
    pub fn validate_registry(registry: &mut Registry) -> bool {
        let valid = Self::validate_all(registry.iter_mut().map(|(_, select)| select));
        if !valid {
            tagpick_core::debug!(
                widget = "ValidationGate",
                widgets = registry.len(),
                "submission blocked by empty selection"
            );
        }
        valid
    }
}
