#![forbid(unsafe_code)]

//! Search filtering of picker options.
//!
//! Matching is a case-insensitive substring test on the option label. An
//! empty term matches every option. The result is a membership set, not a
//! ranking, so no tie-breaking is involved.

use crate::option::TagOptions;

/// Result of filtering the options with one search term.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOutcome {
    /// Values of the matching options, in option order.
    pub visible: Vec<String>,
    /// Whether at least one option matched.
    pub any_visible: bool,
    /// Whether the term was non-empty (cosmetic `search-active` flag).
    pub search_active: bool,
}

impl FilterOutcome {
    /// Outcome with every option visible and no search active.
    #[must_use]
    pub fn show_all(options: &TagOptions) -> Self {
        OptionFilter::apply(options, "")
    }

    /// Whether the option with `value` is visible.
    #[must_use]
    pub fn is_visible(&self, value: &str) -> bool {
        self.visible.iter().any(|v| v == value)
    }

    /// Whether the "no results" message should show.
    #[must_use]
    pub fn show_no_results(&self) -> bool {
        !self.any_visible
    }
}

/// Stateless label filter.
#[derive(Debug, Clone, Copy, Default)]
pub struct OptionFilter;

impl OptionFilter {
    /// Filter `options` by `term`.
    #[must_use]
    pub fn apply(options: &TagOptions, term: &str) -> FilterOutcome {
        let needle = term.to_lowercase();
        let visible: Vec<String> = options
            .iter()
            .filter(|option| option.label.to_lowercase().contains(&needle))
            .map(|option| option.value.clone())
            .collect();
        FilterOutcome {
            any_visible: !visible.is_empty(),
            visible,
            search_active: !term.is_empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn options() -> TagOptions {
        [("1", "Python"), ("2", "Rust"), ("3", "TypeScript")]
            .into_iter()
            .collect()
    }

    #[test]
    fn empty_term_shows_everything() {
        let outcome = OptionFilter::apply(&options(), "");
        assert_eq!(outcome.visible, ["1", "2", "3"]);
        assert!(outcome.any_visible);
        assert!(!outcome.search_active);
    }

    #[test]
    fn match_is_case_insensitive() {
        let outcome = OptionFilter::apply(&options(), "rUs");
        assert_eq!(outcome.visible, ["2"]);
        assert!(outcome.search_active);
    }

    #[test]
    fn match_is_substring() {
        let outcome = OptionFilter::apply(&options(), "t");
        assert_eq!(outcome.visible, ["1", "2", "3"]);
        let outcome = OptionFilter::apply(&options(), "scr");
        assert_eq!(outcome.visible, ["3"]);
    }

    #[test]
    fn no_match_reports_no_results() {
        let options: TagOptions = [("1", "Python"), ("2", "Rust")].into_iter().collect();
        let outcome = OptionFilter::apply(&options, "xyz");
        assert!(outcome.visible.is_empty());
        assert!(!outcome.any_visible);
        assert!(outcome.show_no_results());
    }

    #[test]
    fn empty_options_have_nothing_visible() {
        let outcome = OptionFilter::apply(&TagOptions::new(), "");
        assert!(!outcome.any_visible);
    }

    #[test]
    fn whitespace_is_part_of_the_term() {
        let outcome = OptionFilter::apply(&options(), " rust");
        assert!(!outcome.any_visible);
        assert!(outcome.search_active);
    }

    #[test]
    fn visibility_lookup() {
        let outcome = OptionFilter::apply(&options(), "py");
        assert!(outcome.is_visible("1"));
        assert!(!outcome.is_visible("2"));
    }

    proptest! {
        #[test]
        fn empty_term_visibility_matches_option_count(labels in proptest::collection::vec("[a-zA-Z]{1,8}", 0..10)) {
            let options: TagOptions = labels
                .iter()
                .enumerate()
                .map(|(idx, label)| crate::option::TagOption::new(idx.to_string(), label.clone()))
                .collect();
            let outcome = OptionFilter::apply(&options, "");
            prop_assert_eq!(outcome.any_visible, !options.is_empty());
            prop_assert_eq!(outcome.visible.len(), options.len());
        }

        #[test]
        fn visible_labels_contain_term(term in "[a-z]{0,3}") {
            let options = options();
            let outcome = OptionFilter::apply(&options, &term);
            for option in &options {
                let contains = option.label.to_lowercase().contains(&term);
                prop_assert_eq!(outcome.is_visible(&option.value), contains);
            }
        }
    }
}
