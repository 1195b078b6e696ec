#![forbid(unsafe_code)]

//! Form submission gated on picker validation.
//!
//! The host registers a callback once. Each [`SubmitGate::submit`] call runs
//! the [`ValidationGate`] over every picker and, when all pass, hands the
//! joined hidden-input values to the callback synchronously.

use std::fmt;

use crate::registry::{Registry, WidgetId};
use crate::validation::ValidationGate;

/// Hidden-input values of every picker at submit time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Submission {
    /// `(picker, hidden input value)` in registration order.
    pub fields: Vec<(WidgetId, String)>,
}

impl Submission {
    /// Hidden input value of one picker.
    #[must_use]
    pub fn value(&self, id: WidgetId) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field, _)| *field == id)
            .map(|(_, value)| value.as_str())
    }
}

type SubmitCallback = Box<dyn FnMut(&Submission)>;

/// Submit handler registration.
#[derive(Default)]
pub struct SubmitGate {
    on_submit: Option<SubmitCallback>,
}

impl fmt::Debug for SubmitGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubmitGate")
            .field("on_submit", &self.on_submit.is_some())
            .finish()
    }
}

impl SubmitGate {
    /// Create a gate without a callback.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the callback run on every successful submit.
    ///
    /// Replaces any previously registered callback.
    pub fn on_submit<F>(&mut self, callback: F)
    where
        F: FnMut(&Submission) + 'static,
    {
        self.on_submit = Some(Box::new(callback));
    }

    /// Validate and submit.
    ///
    /// Returns `None` (without running the callback) when any picker has an
    /// empty selection; those pickers now show their inline error.
    pub fn submit(&mut self, registry: &mut Registry) -> Option<Submission> {
        if !ValidationGate::validate_registry(registry) {
            return None;
        }
        let submission = Submission {
            fields: registry
                .iter()
                .map(|(id, select)| (id, select.hidden_input_value()))
                .collect(),
        };
        tagpick_core::debug!(
            widget = "SubmitGate",
            action = "submit",
            fields = submission.fields.len()
        );
        if let Some(callback) = self.on_submit.as_mut() {
            callback(&submission);
        }
        Some(submission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::select::TagSelect;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn picker() -> TagSelect {
        TagSelect::from_options([("1", "Go"), ("2", "Rust"), ("3", "Zig")])
    }

    #[test]
    fn blocked_submit_skips_callback() {
        let calls = Rc::new(RefCell::new(0));
        let seen = Rc::clone(&calls);
        let mut gate = SubmitGate::new();
        gate.on_submit(move |_| *seen.borrow_mut() += 1);

        let mut registry = Registry::new();
        let id = registry.register(picker());
        assert_eq!(gate.submit(&mut registry), None);
        assert_eq!(*calls.borrow(), 0);
        assert!(registry.get(id).unwrap().error_visible());
    }

    #[test]
    fn successful_submit_runs_callback_with_values() {
        let captured = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&captured);
        let mut gate = SubmitGate::new();
        gate.on_submit(move |submission| *sink.borrow_mut() = Some(submission.clone()));

        let mut registry = Registry::new();
        let id = registry.register(picker().with_preseed(["3", "1"]));
        let submission = gate.submit(&mut registry).unwrap();

        assert_eq!(submission.value(id), Some("1, 3"));
        assert_eq!(captured.borrow().as_ref(), Some(&submission));
    }

    #[test]
    fn submit_without_callback_still_returns_values() {
        let mut gate = SubmitGate::new();
        let mut registry = Registry::new();
        let a = registry.register(picker().with_preseed(["2"]));
        let b = registry.register(picker().with_preseed(["1", "2", "3"]));
        let submission = gate.submit(&mut registry).unwrap();
        assert_eq!(submission.fields, [(a, "2".to_string()), (b, "1, 2, 3".to_string())]);
    }

    #[test]
    fn debug_hides_callback() {
        let mut gate = SubmitGate::new();
        gate.on_submit(|_| {});
        assert_eq!(format!("{gate:?}"), "SubmitGate { on_submit: true }");
    }
}
