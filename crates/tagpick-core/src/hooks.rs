#![forbid(unsafe_code)]

//! Class-name hooks of the tag picker markup.
//!
//! Page scripts and stylesheets locate the sub-elements of a picker through
//! these class names, so they are part of the component's external contract
//! and must not change.

/// Root element of one picker instance.
pub const CUSTOM_SELECT: &str = "custom-select";
/// Clickable box that opens and closes the dropdown.
pub const SELECT_BOX: &str = "select-box";
/// Container of the rendered chips (or the placeholder).
pub const SELECTED_OPTIONS: &str = "selected-options";
/// One rendered chip.
pub const TAG: &str = "tag";
/// `N+` counter of selected options not shown as chips.
pub const TAG_OVERFLOW: &str = "tag-overflow";
/// Remove glyph inside a chip.
pub const REMOVE_TAG: &str = "remove-tag";
/// Placeholder shown while nothing is selected.
pub const PLACEHOLDER: &str = "placeholder";
/// Dropdown container.
pub const OPTIONS: &str = "options";
/// A selectable option.
pub const OPTION: &str = "option";
/// Extra class carried by the "all tags" pseudo-option.
pub const ALL_TAGS: &str = "all-tags";
/// State class of a selected option.
pub const ACTIVE: &str = "active";
/// Search field inside the dropdown.
pub const SEARCH_TAGS: &str = "search-tags";
/// Search reset control.
pub const CLEAR: &str = "clear";
/// Message shown when the search matches nothing.
pub const NO_RESULT_MESSAGE: &str = "no-result-message";
/// Hidden input carrying the joined selection.
pub const TAGS_INPUT: &str = "tags_input";
/// Inline "required" error message.
pub const ERROR: &str = "error";
/// State class of an expanded picker.
pub const OPEN: &str = "open";
/// State class of a picker with a non-empty search term.
pub const SEARCH_ACTIVE: &str = "search-active";

/// Every hook, in document order of first appearance.
pub const ALL: [&str; 18] = [
    CUSTOM_SELECT,
    SELECT_BOX,
    SELECTED_OPTIONS,
    TAG,
    TAG_OVERFLOW,
    REMOVE_TAG,
    PLACEHOLDER,
    OPTIONS,
    OPTION,
    ALL_TAGS,
    ACTIVE,
    SEARCH_TAGS,
    CLEAR,
    NO_RESULT_MESSAGE,
    TAGS_INPUT,
    ERROR,
    OPEN,
    SEARCH_ACTIVE,
];
