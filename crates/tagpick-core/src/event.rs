#![forbid(unsafe_code)]

//! Canonical input/event types.
//!
//! This module defines the events a tag picker reacts to. A host (a browser
//! shim, a test, or the scripted harness) translates its own input into these
//! types and hands them to a widget or to the registry. All events derive
//! `Clone`, `PartialEq`, and `Eq` for use in tests and pattern matching.
//!
//! # Design Notes
//!
//! - Clicks carry the [`Target`] that was hit, not coordinates; hit testing
//!   belongs to the host's presentation layer.
//! - `KeyEventKind` defaults to `Press` when the host cannot distinguish.

/// Canonical input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A keyboard event, delivered to whatever target currently has focus.
    Key(KeyEvent),

    /// A primary-button click on a widget region.
    Click(Target),

    /// The search field's content changed to the given text.
    Input(String),

    /// A region of the widget received keyboard focus.
    Focus(Target),

    /// Keyboard focus left the widget.
    Blur,
}

impl Event {
    /// Shorthand for a plain Enter key press.
    #[must_use]
    pub const fn enter() -> Self {
        Self::Key(KeyEvent::new(KeyCode::Enter))
    }
}

/// A clickable or focusable region of one tag picker.
///
/// Each variant corresponds to one class-name hook of the markup contract
/// (see [`crate::hooks`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Target {
    /// The select box that toggles the dropdown (`.select-box`).
    SelectBox,

    /// The body of a rendered chip (`.tag`), not its remove glyph.
    Chip(String),

    /// The remove glyph of a rendered chip (`.remove-tag`).
    ChipRemove(String),

    /// A regular option (`.option`), identified by its value.
    Option(String),

    /// The "all tags" pseudo-option (`.option.all-tags`).
    AllTags,

    /// The search field (`.search-tags`).
    Search,

    /// The search clear control (`.clear`).
    Clear,

    /// Page content outside every picker.
    Document,
}

/// A keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key code that was pressed.
    pub code: KeyCode,

    /// The type of key event (press, repeat, or release).
    pub kind: KeyEventKind,
}

impl KeyEvent {
    /// Create a new key event with Press kind.
    #[must_use]
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            kind: KeyEventKind::Press,
        }
    }

    /// Create a key event with a specific kind.
    #[must_use]
    pub const fn with_kind(mut self, kind: KeyEventKind) -> Self {
        self.kind = kind;
        self
    }

    /// Whether this is an Enter press (or auto-repeat).
    #[must_use]
    pub fn is_enter_press(&self) -> bool {
        self.code == KeyCode::Enter && self.kind != KeyEventKind::Release
    }
}

/// Key codes for keyboard events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A regular character key.
    Char(char),

    /// Enter/Return key.
    Enter,

    /// Space bar.
    Space,
}

/// The type of key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyEventKind {
    /// Key was pressed (default when not distinguishable).
    #[default]
    Press,

    /// Key is being held (repeat event).
    Repeat,

    /// Key was released.
    Release,
}
