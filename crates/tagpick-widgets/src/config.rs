#![forbid(unsafe_code)]

//! Per-picker configuration.

use crate::chips::DEFAULT_MAX_CHIPS;

/// Default placeholder shown while nothing is selected.
pub const DEFAULT_PLACEHOLDER: &str = "Select the tags";
/// Default search field placeholder.
pub const DEFAULT_SEARCH_PLACEHOLDER: &str = "Search tags";
/// Default "no results" message.
pub const DEFAULT_NO_RESULTS_MESSAGE: &str = "No results found";
/// Default inline error for an empty selection.
pub const DEFAULT_REQUIRED_MESSAGE: &str = "Please select at least one tag";
/// Default label of the "all tags" pseudo-option.
pub const DEFAULT_ALL_TAGS_LABEL: &str = "All tags";
/// Default name of the hidden form input.
pub const DEFAULT_INPUT_NAME: &str = "tags";

/// Texts and limits of one tag picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagSelectConfig {
    /// Chips shown before collapsing into an `N+` counter.
    pub max_chips: usize,
    /// Placeholder of the selected-options area.
    pub placeholder: String,
    /// Placeholder of the search field.
    pub search_placeholder: String,
    /// Message shown when the search matches nothing.
    pub no_results_message: String,
    /// Inline error shown when submitting an empty selection.
    pub required_message: String,
    /// Label of the "all tags" pseudo-option.
    pub all_tags_label: String,
    /// Name attribute of the hidden input.
    pub input_name: String,
}

impl Default for TagSelectConfig {
    fn default() -> Self {
        Self {
            max_chips: DEFAULT_MAX_CHIPS,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            search_placeholder: DEFAULT_SEARCH_PLACEHOLDER.to_string(),
            no_results_message: DEFAULT_NO_RESULTS_MESSAGE.to_string(),
            required_message: DEFAULT_REQUIRED_MESSAGE.to_string(),
            all_tags_label: DEFAULT_ALL_TAGS_LABEL.to_string(),
            input_name: DEFAULT_INPUT_NAME.to_string(),
        }
    }
}

impl TagSelectConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the chip cap.
    #[must_use]
    pub fn with_max_chips(mut self, max_chips: usize) -> Self {
        self.max_chips = max_chips;
        self
    }

    /// Set the placeholder text.
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set the search field placeholder.
    #[must_use]
    pub fn with_search_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.search_placeholder = placeholder.into();
        self
    }

    /// Set the "no results" message.
    #[must_use]
    pub fn with_no_results_message(mut self, message: impl Into<String>) -> Self {
        self.no_results_message = message.into();
        self
    }

    /// Set the required-field error message.
    #[must_use]
    pub fn with_required_message(mut self, message: impl Into<String>) -> Self {
        self.required_message = message.into();
        self
    }

    /// Set the "all tags" label.
    #[must_use]
    pub fn with_all_tags_label(mut self, label: impl Into<String>) -> Self {
        self.all_tags_label = label.into();
        self
    }

    /// Set the hidden input name.
    #[must_use]
    pub fn with_input_name(mut self, name: impl Into<String>) -> Self {
        self.input_name = name.into();
        self
    }
}
