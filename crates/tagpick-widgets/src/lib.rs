#![forbid(unsafe_code)]

//! Headless multi-select tag picker.
//!
//! State lives in explicit structs ([`SelectionState`], [`TagSelect`],
//! [`Registry`]); HTML is a projection produced through the [`Widget`]
//! trait. Nothing here performs I/O.
//!
//! # Example
//!
//! ```
//! use tagpick_core::event::{Event, Target};
//! use tagpick_widgets::{Registry, SubmitGate, TagRecord, TagSelect};
//!
//! let records = vec![TagRecord::new(1, "Go"), TagRecord::new(2, "Rust")];
//! let mut registry = Registry::new();
//! let id = registry.register(TagSelect::from_options(records));
//!
//! registry.dispatch(Some(id), &Event::Click(Target::Option("2".into())));
//!
//! let mut gate = SubmitGate::new();
//! let submission = gate.submit(&mut registry).unwrap();
//! assert_eq!(submission.value(id), Some("2"));
//! ```

pub mod chips;
pub mod config;
pub mod filter;
pub mod markup;
pub mod option;
pub mod registry;
pub mod select;
pub mod selection;
pub mod submit;
pub mod validation;

pub use chips::{Chip, ChipRenderer, ChipView};
pub use config::TagSelectConfig;
pub use filter::{FilterOutcome, OptionFilter};
pub use markup::{Markup, render_to_string};
pub use option::{ALL_TAGS_VALUE, TagOption, TagOptions, TagRecord};
pub use registry::{DispatchOutcome, Registry, WidgetId};
pub use select::{SelectAction, SelectState, TagSelect};
pub use selection::SelectionState;
pub use submit::{SubmitGate, Submission};
pub use validation::{ValidationError, ValidationGate, ValidationResult};

/// A `Widget` is a renderable component.
///
/// Widgets write themselves into a [`Markup`] writer. Rendering must not
/// mutate widget state.
pub trait Widget {
    /// Render the widget.
    fn render(&self, out: &mut Markup);
}
