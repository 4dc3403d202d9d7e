// SPDX-License-Identifier: MPL-2.0
//! Per-overlay visibility and content state.
//!
//! The store owns the `visible` flag and the content payload of one overlay.
//! Mutations flow exclusively through [`OverlayStore::show`] and
//! [`OverlayStore::clear`]; visibility changes notify subscribed observers so
//! view bindings can react without an implicit re-render mechanism.

use std::fmt;

type Observer = Box<dyn FnMut(bool)>;

/// Visibility flag plus content payload for a single overlay.
pub struct OverlayStore<C: Default> {
    visible: bool,
    content: C,
    observers: Vec<Observer>,
}

impl<C: Default> Default for OverlayStore<C> {
    fn default() -> Self {
        Self {
            visible: false,
            content: C::default(),
            observers: Vec::new(),
        }
    }
}

impl<C: Default> OverlayStore<C> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `content` and makes the overlay visible.
    pub fn show(&mut self, content: C) {
        self.content = content;
        self.set_visible(true);
    }

    /// Resets the content to its default empty value and hides the overlay.
    pub fn clear(&mut self) {
        self.content = C::default();
        self.set_visible(false);
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn content(&self) -> &C {
        &self.content
    }

    /// Registers an observer notified with the new visibility whenever it
    /// changes.
    pub fn subscribe(&mut self, observer: impl FnMut(bool) + 'static) {
        self.observers.push(Box::new(observer));
    }

    fn set_visible(&mut self, visible: bool) {
        if self.visible == visible {
            return;
        }
        self.visible = visible;
        for observer in &mut self.observers {
            observer(visible);
        }
    }
}

impl<C: Default + fmt::Debug> fmt::Debug for OverlayStore<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OverlayStore")
            .field("visible", &self.visible)
            .field("content", &self.content)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn new_store_is_hidden_and_empty() {
        let store: OverlayStore<Vec<String>> = OverlayStore::new();
        assert!(!store.is_visible());
        assert!(store.content().is_empty());
    }

    #[test]
    fn show_stores_content_and_sets_visible() {
        let mut store = OverlayStore::new();
        store.show(vec!["a".to_string()]);
        assert!(store.is_visible());
        assert_eq!(store.content().len(), 1);
    }

    #[test]
    fn clear_resets_content_and_visibility() {
        let mut store = OverlayStore::new();
        store.show(vec!["a".to_string()]);
        store.clear();
        assert!(!store.is_visible());
        assert!(store.content().is_empty());
    }

    #[test]
    fn clear_is_idempotent() {
        let mut store = OverlayStore::new();
        store.show(vec![1, 2, 3]);
        store.clear();
        store.clear();
        assert!(!store.is_visible());
        assert!(store.content().is_empty());
    }

    #[test]
    fn observers_are_notified_on_visibility_changes_only() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut store: OverlayStore<String> = OverlayStore::new();
        store.subscribe(move |visible| sink.borrow_mut().push(visible));

        store.show("hello".to_string());
        // Replacing content while already visible is not a visibility change.
        store.show("world".to_string());
        store.clear();
        store.clear();

        assert_eq!(*seen.borrow(), vec![true, false]);
    }
}
