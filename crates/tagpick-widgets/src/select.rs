#![forbid(unsafe_code)]

//! Tag picker controller.
//!
//! [`TagSelect`] owns the state of one picker instance and turns input
//! events into state transitions. Everything a presentation layer shows
//! (chips, hidden input, option visibility, messages) is derived from this
//! state on demand.
//!
//! # State machine
//!
//! | Event | Effect |
//! |-------|--------|
//! | click select box | `Closed` ⇄ `Open` |
//! | click option / Enter on focused option | toggle that value |
//! | click "all tags" / Enter on it | flip every option independently |
//! | click chip remove glyph | deselect that value |
//! | input on search field | re-filter options |
//! | click clear / Enter on it | reset search, show every option |
//!
//! Only the select box changes `Open`/`Closed` from inside the widget.
//! Outside clicks are handled by the [`Registry`](crate::registry::Registry).
//!
//! # Failure Modes
//!
//! | Scenario | Behavior |
//! |----------|----------|
//! | Unknown option value | `SelectAction::Ignored`, state unchanged |
//! | Removing an unselected chip | `SelectAction::Ignored` |
//! | Enter without focus | `SelectAction::Ignored` |
//! | Key release | `SelectAction::Ignored` |

use tagpick_core::event::{Event, KeyEvent, Target};

use crate::chips::{ChipRenderer, ChipView};
use crate::config::TagSelectConfig;
use crate::filter::{FilterOutcome, OptionFilter};
use crate::option::{TagOption, TagOptions};
use crate::selection::SelectionState;

/// Whether the dropdown is expanded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SelectState {
    /// Dropdown hidden.
    #[default]
    Closed,
    /// Dropdown shown.
    Open,
}

/// Outcome of handling one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectAction {
    /// The event did not change anything.
    Ignored,
    /// The dropdown opened.
    Opened,
    /// The dropdown closed.
    Closed,
    /// One option was toggled.
    Toggled {
        /// Option value.
        value: String,
        /// Membership after the toggle.
        selected: bool,
    },
    /// The "all tags" pseudo-option flipped every option.
    ToggledAll,
    /// A chip was removed.
    Removed(String),
    /// The search term changed.
    Filtered {
        /// Whether any option still matches.
        any_visible: bool,
    },
    /// The search was reset.
    SearchCleared,
}

impl SelectAction {
    /// Whether the selection changed, so chips and hidden input need a
    /// re-render.
    #[must_use]
    pub fn changed_selection(&self) -> bool {
        matches!(
            self,
            Self::Toggled { .. } | Self::ToggledAll | Self::Removed(_)
        )
    }
}

/// One tag picker instance.
#[derive(Debug, Clone)]
pub struct TagSelect {
    config: TagSelectConfig,
    options: TagOptions,
    selection: SelectionState,
    search_term: String,
    filter: FilterOutcome,
    state: SelectState,
    focus: Option<Target>,
    error_visible: bool,
}

impl Default for TagSelect {
    fn default() -> Self {
        Self::new(TagOptions::new())
    }
}

impl TagSelect {
    /// Create a closed picker with nothing selected.
    #[must_use]
    pub fn new(options: TagOptions) -> Self {
        let filter = FilterOutcome::show_all(&options);
        Self {
            config: TagSelectConfig::default(),
            options,
            selection: SelectionState::new(),
            search_term: String::new(),
            filter,
            state: SelectState::Closed,
            focus: None,
            error_visible: false,
        }
    }

    /// Create a picker from tag source records.
    #[must_use]
    pub fn from_options<I, T>(options: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TagOption>,
    {
        Self::new(options.into_iter().collect())
    }

    /// Set the configuration.
    #[must_use]
    pub fn with_config(mut self, config: TagSelectConfig) -> Self {
        self.config = config;
        self
    }

    /// Pre-select values (edit flows). See [`SelectionState::preseed`].
    #[must_use]
    pub fn with_preseed<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.preseed(ids);
        self
    }

    /// Pre-select values. Returns the number of newly selected values.
    pub fn preseed<I, S>(&mut self, ids: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let added = self.selection.preseed(&self.options, ids);
        tagpick_core::debug!(widget = "TagSelect", action = "preseed", added);
        added
    }

    /// Replace the option list.
    ///
    /// Selected values that no longer exist are dropped. The current search
    /// term is re-applied.
    pub fn set_options(&mut self, options: TagOptions) {
        let kept: Vec<String> = self
            .selection
            .values_in(&self.options)
            .filter(|value| options.contains(value))
            .map(str::to_owned)
            .collect();
        self.selection.clear();
        self.selection.preseed(&options, kept);
        self.options = options;
        self.filter = OptionFilter::apply(&self.options, &self.search_term);
    }

    // --- Accessors ---------------------------------------------------------

    /// Configuration.
    #[must_use]
    pub fn config(&self) -> &TagSelectConfig {
        &self.config
    }

    /// Option list.
    #[must_use]
    pub fn options(&self) -> &TagOptions {
        &self.options
    }

    /// Selection.
    #[must_use]
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Whether `value` is selected.
    #[must_use]
    pub fn is_selected(&self, value: &str) -> bool {
        self.selection.is_selected(value)
    }

    /// Open/closed state.
    #[must_use]
    pub fn state(&self) -> SelectState {
        self.state
    }

    /// Whether the dropdown is expanded.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state == SelectState::Open
    }

    /// Current search term.
    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Visibility of options under the current search term.
    #[must_use]
    pub fn filter(&self) -> &FilterOutcome {
        &self.filter
    }

    /// Focused region, if any.
    #[must_use]
    pub fn focus(&self) -> Option<&Target> {
        self.focus.as_ref()
    }

    /// Whether the inline "required" error is shown.
    #[must_use]
    pub fn error_visible(&self) -> bool {
        self.error_visible
    }

    pub(crate) fn set_error_visible(&mut self, visible: bool) {
        self.error_visible = visible;
    }

    /// Chips and hidden input value for the current selection.
    #[must_use]
    pub fn chip_view(&self) -> ChipView {
        ChipRenderer::new(self.config.max_chips).render(&self.selection, &self.options)
    }

    /// Value of the hidden form input.
    #[must_use]
    pub fn hidden_input_value(&self) -> String {
        self.chip_view().hidden_input_value
    }

    // --- Transitions -------------------------------------------------------

    /// Expand the dropdown. Returns `true` if it was closed.
    pub fn open(&mut self) -> bool {
        let was_closed = self.state == SelectState::Closed;
        self.state = SelectState::Open;
        was_closed
    }

    /// Collapse the dropdown. Returns `true` if it was open.
    ///
    /// Closing a closed picker is a no-op.
    pub fn close(&mut self) -> bool {
        let was_open = self.state == SelectState::Open;
        self.state = SelectState::Closed;
        was_open
    }

    fn toggle_open(&mut self) -> SelectAction {
        if self.close() {
            SelectAction::Closed
        } else {
            self.open();
            SelectAction::Opened
        }
    }

    /// Toggle one option.
    pub fn toggle_option(&mut self, value: &str) -> SelectAction {
        if !self.selection.toggle(&self.options, value) {
            return SelectAction::Ignored;
        }
        let selected = self.selection.is_selected(value);
        tagpick_core::debug!(widget = "TagSelect", action = "toggle", value, selected);
        SelectAction::Toggled {
            value: value.to_owned(),
            selected,
        }
    }

    /// Apply the "all tags" pseudo-option.
    pub fn toggle_all(&mut self) -> SelectAction {
        self.selection.toggle_all(&self.options);
        tagpick_core::debug!(
            widget = "TagSelect",
            action = "toggle_all",
            selected = self.selection.len(),
            all_tags = self.selection.all_tags_active()
        );
        SelectAction::ToggledAll
    }

    /// Remove the chip for `value`.
    pub fn remove_chip(&mut self, value: &str) -> SelectAction {
        if !self.selection.remove(value) {
            return SelectAction::Ignored;
        }
        tagpick_core::debug!(widget = "TagSelect", action = "remove", value);
        SelectAction::Removed(value.to_owned())
    }

    /// Filter options by `term`.
    pub fn set_search(&mut self, term: impl Into<String>) -> SelectAction {
        self.search_term = term.into();
        self.filter = OptionFilter::apply(&self.options, &self.search_term);
        tagpick_core::debug!(
            widget = "TagSelect",
            action = "search",
            term = self.search_term.as_str(),
            visible = self.filter.visible.len()
        );
        SelectAction::Filtered {
            any_visible: self.filter.any_visible,
        }
    }

    /// Reset the search term and show every option. The selection is kept.
    pub fn clear_search(&mut self) -> SelectAction {
        self.search_term.clear();
        self.filter = FilterOutcome::show_all(&self.options);
        tagpick_core::debug!(widget = "TagSelect", action = "clear_search");
        SelectAction::SearchCleared
    }

    // --- Event handling ----------------------------------------------------

    /// Handle one input event.
    pub fn handle_event(&mut self, event: &Event) -> SelectAction {
        match event {
            Event::Click(target) => self.activate(target),
            Event::Key(key) => self.handle_key(key),
            Event::Input(term) => self.set_search(term.clone()),
            Event::Focus(target) => {
                self.focus = Some(target.clone());
                SelectAction::Ignored
            }
            Event::Blur => {
                self.focus = None;
                SelectAction::Ignored
            }
        }
    }

    fn handle_key(&mut self, key: &KeyEvent) -> SelectAction {
        if !key.is_enter_press() {
            return SelectAction::Ignored;
        }
        match self.focus.clone() {
            Some(target @ (Target::Option(_) | Target::AllTags | Target::Clear)) => {
                self.activate(&target)
            }
            _ => SelectAction::Ignored,
        }
    }

    fn activate(&mut self, target: &Target) -> SelectAction {
        match target {
            Target::SelectBox => self.toggle_open(),
            Target::Option(value) => self.toggle_option(value),
            Target::AllTags => self.toggle_all(),
            Target::ChipRemove(value) => self.remove_chip(value),
            Target::Clear => self.clear_search(),
            Target::Chip(_) | Target::Search | Target::Document => SelectAction::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tagpick_core::event::{KeyCode, KeyEventKind};

    fn picker() -> TagSelect {
        TagSelect::from_options([("1", "Go"), ("2", "Rust"), ("3", "Zig")])
    }

    fn click(target: Target) -> Event {
        Event::Click(target)
    }

    #[test]
    fn starts_closed_and_empty() {
        let picker = picker();
        assert_eq!(picker.state(), SelectState::Closed);
        assert!(picker.selection().is_empty());
        assert!(picker.chip_view().is_placeholder());
    }

    #[test]
    fn select_box_toggles_open_state() {
        let mut picker = picker();
        assert_eq!(picker.handle_event(&click(Target::SelectBox)), SelectAction::Opened);
        assert!(picker.is_open());
        assert_eq!(picker.handle_event(&click(Target::SelectBox)), SelectAction::Closed);
        assert!(!picker.is_open());
    }

    #[test]
    fn chip_body_click_does_not_toggle_dropdown() {
        let mut picker = picker();
        picker.toggle_option("1");
        assert_eq!(
            picker.handle_event(&click(Target::Chip("1".into()))),
            SelectAction::Ignored
        );
        assert!(!picker.is_open());
    }

    #[test]
    fn option_click_toggles_without_changing_open_state() {
        let mut picker = picker();
        picker.open();
        let action = picker.handle_event(&click(Target::Option("2".into())));
        assert_eq!(
            action,
            SelectAction::Toggled {
                value: "2".into(),
                selected: true
            }
        );
        assert!(action.changed_selection());
        assert!(picker.is_open());
        assert_eq!(picker.hidden_input_value(), "2");
    }

    #[test]
    fn unknown_option_is_ignored() {
        let mut picker = picker();
        assert_eq!(
            picker.handle_event(&click(Target::Option("9".into()))),
            SelectAction::Ignored
        );
        assert!(picker.selection().is_empty());
    }

    #[test]
    fn enter_on_focused_option_toggles() {
        let mut picker = picker();
        picker.handle_event(&Event::Focus(Target::Option("3".into())));
        assert!(matches!(
            picker.handle_event(&Event::enter()),
            SelectAction::Toggled { selected: true, .. }
        ));
        assert!(picker.is_selected("3"));
    }

    #[test]
    fn enter_release_and_other_keys_are_ignored() {
        let mut picker = picker();
        picker.handle_event(&Event::Focus(Target::Option("3".into())));
        let release = KeyEvent::new(KeyCode::Enter).with_kind(KeyEventKind::Release);
        assert_eq!(picker.handle_event(&Event::Key(release)), SelectAction::Ignored);
        let space = KeyEvent::new(KeyCode::Space);
        assert_eq!(picker.handle_event(&Event::Key(space)), SelectAction::Ignored);
        assert!(!picker.is_selected("3"));
    }

    #[test]
    fn enter_without_focus_is_ignored() {
        let mut picker = picker();
        assert_eq!(picker.handle_event(&Event::enter()), SelectAction::Ignored);
        picker.handle_event(&Event::Focus(Target::Option("1".into())));
        picker.handle_event(&Event::Blur);
        assert_eq!(picker.handle_event(&Event::enter()), SelectAction::Ignored);
        assert!(picker.focus().is_none());
    }

    #[test]
    fn enter_on_select_box_does_not_open() {
        let mut picker = picker();
        picker.handle_event(&Event::Focus(Target::SelectBox));
        assert_eq!(picker.handle_event(&Event::enter()), SelectAction::Ignored);
        assert!(!picker.is_open());
    }

    #[test]
    fn all_tags_from_none_selects_everything() {
        let mut picker = picker();
        assert_eq!(picker.handle_event(&click(Target::AllTags)), SelectAction::ToggledAll);
        assert_eq!(picker.hidden_input_value(), "1, 2, 3");
        assert!(picker.selection().all_tags_active());
    }

    #[test]
    fn all_tags_from_mixed_state_flips_each_option() {
        let mut picker = picker();
        picker.toggle_option("2");
        picker.handle_event(&click(Target::AllTags));
        assert!(picker.is_selected("1"));
        assert!(!picker.is_selected("2"));
        assert!(picker.is_selected("3"));
        assert_eq!(picker.hidden_input_value(), "1, 3");
    }

    #[test]
    fn all_tags_ignores_search_filter() {
        let mut picker = picker();
        picker.set_search("ru");
        picker.toggle_all();
        assert_eq!(picker.selection().len(), 3);
    }

    #[test]
    fn enter_on_all_tags() {
        let mut picker = picker();
        picker.handle_event(&Event::Focus(Target::AllTags));
        assert_eq!(picker.handle_event(&Event::enter()), SelectAction::ToggledAll);
        assert_eq!(picker.selection().len(), 3);
    }

    #[test]
    fn remove_chip_deselects() {
        let mut picker = picker();
        picker.toggle_option("2");
        assert_eq!(
            picker.handle_event(&click(Target::ChipRemove("2".into()))),
            SelectAction::Removed("2".into())
        );
        let view = picker.chip_view();
        assert!(picker.selection().is_empty());
        assert_eq!(view.hidden_input_value, "");
        assert!(view.is_placeholder());
    }

    #[test]
    fn remove_chip_of_unselected_value_is_ignored() {
        let mut picker = picker();
        assert_eq!(
            picker.handle_event(&click(Target::ChipRemove("1".into()))),
            SelectAction::Ignored
        );
    }

    #[test]
    fn removing_last_chip_after_all_tags_resets_sentinel() {
        let mut picker = TagSelect::from_options([("1", "Go")]);
        picker.toggle_all();
        assert!(picker.selection().all_tags_active());
        picker.remove_chip("1");
        assert!(!picker.selection().all_tags_active());
    }

    #[test]
    fn search_input_filters_without_touching_selection() {
        let mut picker = picker();
        picker.toggle_option("1");
        let action = picker.handle_event(&Event::Input("zi".into()));
        assert_eq!(action, SelectAction::Filtered { any_visible: true });
        assert_eq!(picker.filter().visible, ["3"]);
        assert!(picker.filter().search_active);
        assert!(picker.is_selected("1"));
    }

    #[test]
    fn search_without_match_shows_no_results() {
        let mut picker = picker();
        let action = picker.handle_event(&Event::Input("xyz".into()));
        assert_eq!(action, SelectAction::Filtered { any_visible: false });
        assert!(picker.filter().show_no_results());
    }

    #[test]
    fn clear_restores_visibility_and_keeps_selection() {
        let mut picker = picker();
        picker.toggle_option("2");
        picker.set_search("xyz");
        assert_eq!(picker.handle_event(&click(Target::Clear)), SelectAction::SearchCleared);
        assert_eq!(picker.search_term(), "");
        assert_eq!(picker.filter().visible, ["1", "2", "3"]);
        assert!(!picker.filter().search_active);
        assert!(picker.is_selected("2"));
    }

    #[test]
    fn enter_on_clear_resets_search() {
        let mut picker = picker();
        picker.set_search("go");
        picker.handle_event(&Event::Focus(Target::Clear));
        assert_eq!(picker.handle_event(&Event::enter()), SelectAction::SearchCleared);
        assert_eq!(picker.filter().visible.len(), 3);
    }

    #[test]
    fn preseed_marks_known_values() {
        let picker = picker().with_preseed(["3", "7"]);
        assert!(picker.is_selected("3"));
        assert_eq!(picker.hidden_input_value(), "3");
    }

    #[test]
    fn set_options_drops_stale_selection() {
        let mut picker = picker().with_preseed(["1", "2"]);
        picker.set_search("o");
        picker.set_options([("2", "Rust"), ("4", "Odin")].into_iter().collect());
        assert!(!picker.is_selected("1"));
        assert!(picker.is_selected("2"));
        assert_eq!(picker.filter().visible, ["4"]);
    }

    #[test]
    fn chip_cap_follows_config() {
        let mut picker = picker().with_config(TagSelectConfig::new().with_max_chips(1));
        picker.toggle_all();
        let view = picker.chip_view();
        assert_eq!(view.chips.len(), 1);
        assert_eq!(view.overflow_count, 2);
        assert_eq!(view.hidden_input_value, "1, 2, 3");
    }

    #[test]
    fn go_rust_zig_scenario() {
        let mut picker = picker();
        picker.handle_event(&click(Target::Option("2".into())));
        picker.handle_event(&click(Target::ChipRemove("2".into())));
        let view = picker.chip_view();
        assert!(picker.selection().is_empty());
        assert_eq!(view.hidden_input_value, "");
        assert!(view.is_placeholder());
    }
}
