#![forbid(unsafe_code)]

//! Registry of the tag pickers hosted by one page.
//!
//! Pickers are registered when created and deregistered on teardown. The
//! registry routes events to their target picker and implements the
//! document-level "click outside closes every dropdown" rule by iterating
//! its own entries.
//!
//! # Invariants
//!
//! 1. Ids are never reused within one registry.
//! 2. Iteration follows registration order.
//! 3. An outside click only writes the open flag; it is idempotent.

use std::fmt;

use tagpick_core::event::{Event, Target};

use crate::select::{SelectAction, TagSelect};

/// Identifier of a registered picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WidgetId(u64);

impl WidgetId {
    /// Raw id value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tag-select-{}", self.0)
    }
}

/// Result of routing one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The event went to one picker.
    Widget(WidgetId, SelectAction),
    /// An outside click closed this many open pickers.
    ClosedAll(usize),
    /// No picker took the event (unknown id, or non-click outside).
    Unhandled,
}

/// Page-wide list of live pickers.
#[derive(Debug, Default)]
pub struct Registry {
    entries: Vec<(WidgetId, TagSelect)>,
    next_id: u64,
}

impl Registry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a picker and return its id.
    pub fn register(&mut self, select: TagSelect) -> WidgetId {
        let id = WidgetId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, select));
        tagpick_core::debug!(widget = "Registry", action = "register", id = id.get());
        id
    }

    /// Remove a picker, returning it.
    pub fn deregister(&mut self, id: WidgetId) -> Option<TagSelect> {
        let idx = self.entries.iter().position(|(entry, _)| *entry == id)?;
        tagpick_core::debug!(widget = "Registry", action = "deregister", id = id.get());
        Some(self.entries.remove(idx).1)
    }

    /// Borrow a picker.
    #[must_use]
    pub fn get(&self, id: WidgetId) -> Option<&TagSelect> {
        self.entries
            .iter()
            .find(|(entry, _)| *entry == id)
            .map(|(_, select)| select)
    }

    /// Mutably borrow a picker.
    pub fn get_mut(&mut self, id: WidgetId) -> Option<&mut TagSelect> {
        self.entries
            .iter_mut()
            .find(|(entry, _)| *entry == id)
            .map(|(_, select)| select)
    }

    /// Ids in registration order.
    pub fn ids(&self) -> impl Iterator<Item = WidgetId> + '_ {
        self.entries.iter().map(|(id, _)| *id)
    }

    /// Pickers in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (WidgetId, &TagSelect)> {
        self.entries.iter().map(|(id, select)| (*id, select))
    }

    /// Mutable pickers in registration order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (WidgetId, &mut TagSelect)> {
        self.entries.iter_mut().map(|(id, select)| (*id, select))
    }

    /// Number of registered pickers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no picker is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Close every picker. Returns how many were open.
    pub fn close_all(&mut self) -> usize {
        let mut closed = 0;
        for (_, select) in &mut self.entries {
            if select.close() {
                closed += 1;
            }
        }
        closed
    }

    /// Route an event.
    ///
    /// `target` is the picker the event happened in, or `None` for the rest
    /// of the document. A click outside every picker closes all of them,
    /// unless it hit a chip remove glyph (the glyph may already be detached
    /// from its picker by the time the click bubbles up).
    pub fn dispatch(&mut self, target: Option<WidgetId>, event: &Event) -> DispatchOutcome {
        match target {
            Some(id) => match self.get_mut(id) {
                Some(select) => DispatchOutcome::Widget(id, select.handle_event(event)),
                None => DispatchOutcome::Unhandled,
            },
            None => match event {
                Event::Click(Target::ChipRemove(_)) => DispatchOutcome::Unhandled,
                Event::Click(_) => {
                    let closed = self.close_all();
                    tagpick_core::debug!(widget = "Registry", action = "outside_click", closed);
                    DispatchOutcome::ClosedAll(closed)
                }
                _ => DispatchOutcome::Unhandled,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn picker() -> TagSelect {
        TagSelect::from_options([("1", "Go"), ("2", "Rust")])
    }

    #[test]
    fn ids_are_unique_and_not_reused() {
        let mut registry = Registry::new();
        let a = registry.register(picker());
        let b = registry.register(picker());
        assert_ne!(a, b);
        registry.deregister(a);
        let c = registry.register(picker());
        assert_ne!(a, c);
        assert_ne!(b, c);
        assert_eq!(registry.ids().collect::<Vec<_>>(), [b, c]);
    }

    #[test]
    fn ids_continue_past_u32_range() {
        let mut registry = Registry {
            next_id: u64::from(u32::MAX),
            ..Registry::default()
        };
        let a = registry.register(picker());
        let b = registry.register(picker());
        assert_eq!(a.get(), u64::from(u32::MAX));
        assert_eq!(b.get(), u64::from(u32::MAX) + 1);
        assert_eq!(b.to_string(), "tag-select-4294967296");
    }

    #[test]
    fn deregister_unknown_returns_none() {
        let mut registry = Registry::new();
        let id = registry.register(picker());
        assert!(registry.deregister(id).is_some());
        assert!(registry.deregister(id).is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn dispatch_routes_to_target_only() {
        let mut registry = Registry::new();
        let a = registry.register(picker());
        let b = registry.register(picker());
        let outcome = registry.dispatch(Some(b), &Event::Click(Target::Option("1".into())));
        assert!(matches!(outcome, DispatchOutcome::Widget(id, SelectAction::Toggled { .. }) if id == b));
        assert!(registry.get(b).unwrap().is_selected("1"));
        assert!(!registry.get(a).unwrap().is_selected("1"));
    }

    #[test]
    fn outside_click_closes_every_picker() {
        let mut registry = Registry::new();
        let a = registry.register(picker());
        let b = registry.register(picker());
        let _c = registry.register(picker());
        registry.dispatch(Some(a), &Event::Click(Target::SelectBox));
        registry.dispatch(Some(b), &Event::Click(Target::SelectBox));

        let outcome = registry.dispatch(None, &Event::Click(Target::Document));
        assert_eq!(outcome, DispatchOutcome::ClosedAll(2));
        assert!(registry.iter().all(|(_, select)| !select.is_open()));

        // Idempotent.
        assert_eq!(
            registry.dispatch(None, &Event::Click(Target::Document)),
            DispatchOutcome::ClosedAll(0)
        );
    }

    #[test]
    fn click_inside_one_picker_keeps_others_open() {
        let mut registry = Registry::new();
        let a = registry.register(picker());
        let b = registry.register(picker());
        registry.dispatch(Some(a), &Event::Click(Target::SelectBox));
        registry.dispatch(Some(b), &Event::Click(Target::Option("2".into())));
        assert!(registry.get(a).unwrap().is_open());
    }

    #[test]
    fn detached_chip_remove_click_does_not_close() {
        let mut registry = Registry::new();
        let a = registry.register(picker());
        registry.dispatch(Some(a), &Event::Click(Target::SelectBox));
        let outcome = registry.dispatch(None, &Event::Click(Target::ChipRemove("1".into())));
        assert_eq!(outcome, DispatchOutcome::Unhandled);
        assert!(registry.get(a).unwrap().is_open());
    }

    #[test]
    fn non_click_outside_is_unhandled() {
        let mut registry = Registry::new();
        registry.register(picker());
        assert_eq!(
            registry.dispatch(None, &Event::Input("go".into())),
            DispatchOutcome::Unhandled
        );
    }

    #[test]
    fn dispatch_to_deregistered_id_is_unhandled() {
        let mut registry = Registry::new();
        let a = registry.register(picker());
        registry.deregister(a);
        assert_eq!(
            registry.dispatch(Some(a), &Event::Click(Target::SelectBox)),
            DispatchOutcome::Unhandled
        );
    }

    #[test]
    fn widget_id_display() {
        let mut registry = Registry::new();
        let id = registry.register(picker());
        assert_eq!(id.to_string(), "tag-select-0");
    }
}
