#![forbid(unsafe_code)]

//! Chip projection of a selection.
//!
//! At most `max_chips` selected options are shown as chips; the rest
//! collapse into an `N+` counter. The hidden form value always carries the
//! whole selection. The cap is cosmetic and never drops submitted values.
//!
//! # Invariants
//!
//! 1. `chips.len() == min(selected, max_chips)`.
//! 2. `chips.len() + overflow_count == selected`.
//! 3. `hidden_input_value` lists every selected value, in option order,
//!    joined by `", "`.

use crate::option::TagOptions;
use crate::selection::SelectionState;

/// Default number of chips shown before collapsing.
pub const DEFAULT_MAX_CHIPS: usize = 4;

/// Separator of the hidden input value.
pub const HIDDEN_VALUE_SEPARATOR: &str = ", ";

/// A chip for one selected option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chip {
    /// Option label.
    pub label: String,
    /// Option value, used by the remove control.
    pub value: String,
}

/// Rendered state of the selected-options area.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChipView {
    /// Chips to display, in option order.
    pub chips: Vec<Chip>,
    /// Selected options not shown as chips.
    pub overflow_count: usize,
    /// Value of the hidden form input.
    pub hidden_input_value: String,
}

impl ChipView {
    /// Whether the placeholder is shown, i.e. nothing is selected.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.chips.is_empty() && self.overflow_count == 0
    }

    /// `"N+"` counter text, when anything overflowed.
    #[must_use]
    pub fn overflow_label(&self) -> Option<String> {
        (self.overflow_count > 0).then(|| format!("{}+", self.overflow_count))
    }
}

/// Projects a [`SelectionState`] into a [`ChipView`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChipRenderer {
    max_chips: usize,
}

impl Default for ChipRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_CHIPS)
    }
}

impl ChipRenderer {
    /// Create a renderer showing at most `max_chips` chips.
    #[must_use]
    pub const fn new(max_chips: usize) -> Self {
        Self { max_chips }
    }

    /// Chip cap.
    #[must_use]
    pub const fn max_chips(&self) -> usize {
        self.max_chips
    }

    /// Render the selection.
    #[must_use]
    pub fn render(&self, selection: &SelectionState, options: &TagOptions) -> ChipView {
        let selected: Vec<_> = options
            .iter()
            .filter(|option| !option.is_sentinel() && selection.is_selected(&option.value))
            .collect();

        let hidden_input_value = selected
            .iter()
            .map(|option| option.value.as_str())
            .collect::<Vec<_>>()
            .join(HIDDEN_VALUE_SEPARATOR);

        let shown = selected.len().min(self.max_chips);
        let chips = selected[..shown]
            .iter()
            .map(|option| Chip {
                label: option.label.clone(),
                value: option.value.clone(),
            })
            .collect();

        ChipView {
            chips,
            overflow_count: selected.len() - shown,
            hidden_input_value,
        }
    }
}
