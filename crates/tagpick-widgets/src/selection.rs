#![forbid(unsafe_code)]

//! Selection model of one tag picker.
//!
//! The set of selected values is explicit state; any UI is a projection of
//! it. Every mutating call takes the option list so that the selection can
//! never hold a value that is not an option.
//!
//! # Invariants
//!
//! 1. `selected ⊆ options.values`.
//! 2. `toggle` is its own inverse: toggling a value twice restores the
//!    previous membership.
//! 3. The "all tags" sentinel is tracked as a separate visual flag and is
//!    never a member of `selected`.

use std::collections::HashSet;

use crate::option::TagOptions;

/// Selected values of one picker, plus the sentinel's visual flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected: HashSet<String>,
    all_tags_active: bool,
}

impl SelectionState {
    /// Create an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `value`.
    ///
    /// Unknown values are ignored. Returns `true` if the selection changed.
    pub fn toggle(&mut self, options: &TagOptions, value: &str) -> bool {
        if !options.contains(value) {
            return false;
        }
        if !self.selected.remove(value) {
            self.selected.insert(value.to_owned());
        }
        true
    }

    /// Flip every option independently and flip the sentinel flag.
    ///
    /// Starting from an empty selection this selects everything; starting
    /// from a full selection it deselects everything. A mixed starting state
    /// yields the complement of the current selection, not a uniform result.
    pub fn toggle_all(&mut self, options: &TagOptions) {
        for option in options {
            if !self.selected.remove(&option.value) {
                self.selected.insert(option.value.clone());
            }
        }
        self.all_tags_active = !self.all_tags_active;
    }

    /// Remove `value` if selected. Returns `true` if it was.
    ///
    /// When the last value goes, the sentinel flag is dropped as well.
    pub fn remove(&mut self, value: &str) -> bool {
        let removed = self.selected.remove(value);
        if removed && self.selected.is_empty() {
            self.all_tags_active = false;
        }
        removed
    }

    /// Empty the selection unconditionally.
    pub fn clear(&mut self) {
        self.selected.clear();
        self.all_tags_active = false;
    }

    /// Mark every known id in `ids` as selected.
    ///
    /// Used by edit flows to restore existing associations before the picker
    /// becomes interactive. Returns the number of newly selected values.
    pub fn preseed<I, S>(&mut self, options: &TagOptions, ids: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut added = 0;
        for id in ids {
            let id = id.as_ref().trim();
            if options.contains(id) && self.selected.insert(id.to_owned()) {
                added += 1;
            }
        }
        added
    }

    /// Whether `value` is selected.
    #[must_use]
    pub fn is_selected(&self, value: &str) -> bool {
        self.selected.contains(value)
    }

    /// Whether the "all tags" pseudo-option is shown as active.
    #[must_use]
    pub fn all_tags_active(&self) -> bool {
        self.all_tags_active
    }

    /// Number of selected values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Whether nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Selected values in option order.
    pub fn values_in<'a>(&'a self, options: &'a TagOptions) -> impl Iterator<Item = &'a str> + 'a {
        options
            .iter()
            .filter(|option| self.selected.contains(&option.value))
            .map(|option| option.value.as_str())
    }
}
