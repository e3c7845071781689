//! In-process listener registry.
//!
//! # Responsibility
//! - Register and unregister change listeners behind stable handles.
//! - Fan out one notification to every live listener.
//!
//! # Invariants
//! - Notification order equals registration order.
//! - A handle is never reused for another listener.
//! - Unregistering is idempotent.

use crate::model::record::Record;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Callback invoked after a successful mutation with a read-only view of the
/// collection.
pub type Listener = Box<dyn FnMut(&[Record])>;

/// Stable handle returned by `ListenerRegistry::register`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SubscriptionId(Uuid);

impl SubscriptionId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Display for SubscriptionId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered listener storage.
#[derive(Default)]
pub struct ListenerRegistry {
    entries: Vec<(SubscriptionId, Listener)>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one listener at the end of the notification order.
    pub fn register(&mut self, listener: impl FnMut(&[Record]) + 'static) -> SubscriptionId {
        let id = SubscriptionId::new();
        let listener: Listener = Box::new(listener);
        self.entries.push((id, listener));
        id
    }

    /// Removes one listener.
    ///
    /// Returns `false` when `id` was never registered or is already removed.
    pub fn unregister(&mut self, id: SubscriptionId) -> bool {
        let Some(position) = self.entries.iter().position(|(entry_id, _)| *entry_id == id) else {
            return false;
        };
        self.entries.remove(position);
        true
    }

    pub fn contains(&self, id: SubscriptionId) -> bool {
        self.entries.iter().any(|(entry_id, _)| *entry_id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Invokes every listener once, in registration order.
    pub fn notify(&mut self, records: &[Record]) {
        for (_, listener) in self.entries.iter_mut() {
            listener(records);
        }
    }
}

impl std::fmt::Debug for ListenerRegistry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerRegistry")
            .field(
                "subscriptions",
                &self.entries.iter().map(|(id, _)| *id).collect::<Vec<_>>(),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::ListenerRegistry;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn notifies_in_registration_order() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let mut registry = ListenerRegistry::new();
        for label in ["first", "second", "third"] {
            let calls = Rc::clone(&calls);
            registry.register(move |_| calls.borrow_mut().push(label));
        }

        registry.notify(&[]);
        assert_eq!(*calls.borrow(), vec!["first", "second", "third"]);
    }

    #[test]
    fn passes_current_records_to_listeners() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut registry = ListenerRegistry::new();
        let sink = Rc::clone(&seen);
        registry.register(move |records| sink.borrow_mut().extend(records.iter().cloned()));

        registry.notify(&["a".to_string(), "b".to_string()]);
        assert_eq!(*seen.borrow(), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn unregister_is_idempotent() {
        let mut registry = ListenerRegistry::new();
        let id = registry.register(|_| {});
        assert!(registry.contains(id));

        assert!(registry.unregister(id));
        assert!(!registry.unregister(id));
        assert!(!registry.contains(id));
        assert!(registry.is_empty());
    }

    #[test]
    fn handles_are_unique() {
        let mut registry = ListenerRegistry::new();
        let first = registry.register(|_| {});
        let second = registry.register(|_| {});
        assert_ne!(first, second);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn unregister_keeps_order_of_remaining_listeners() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let mut registry = ListenerRegistry::new();
        let mut ids = Vec::new();
        for label in ["a", "b", "c"] {
            let calls = Rc::clone(&calls);
            ids.push(registry.register(move |_| calls.borrow_mut().push(label)));
        }

        registry.unregister(ids[1]);
        registry.notify(&[]);
        assert_eq!(*calls.borrow(), vec!["a", "c"]);
    }
}
