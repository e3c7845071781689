//! Observable list store.
//!
//! # Responsibility
//! - Provide create/read/update/delete over an ordered text collection.
//! - Notify subscribed listeners exactly once per successful mutation.
//!
//! # Invariants
//! - `create` always appends and always notifies.
//! - `update`/`delete` with `index >= len` are silent no-ops.
//! - `try_update`/`try_delete` share the same mutation path but report
//!   out-of-range indices as `StoreError::IndexOutOfRange`.
//! - Record text is never written to logs.
//!
//! # Reentrancy
//! Listeners must not mutate the store that is notifying them. Mutations take
//! `&mut self`, so a listener can only reach the store through shared
//! ownership (`Rc<RefCell<ListStore>>`), and the nested borrow panics.

use crate::model::record::{ListSnapshot, Record};
use crate::notify::registry::{ListenerRegistry, SubscriptionId};
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Store error for explicit-result mutation variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    IndexOutOfRange { index: usize, len: usize },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} is out of range for list of length {len}")
            }
        }
    }
}

impl Error for StoreError {}

/// In-memory observable collection of text records.
///
/// Build one instance at the top of the call graph and hand `&mut ListStore`
/// to the code that needs it.
#[derive(Debug, Default)]
pub struct ListStore {
    records: Vec<Record>,
    listeners: ListenerRegistry,
}

impl ListStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `records`.
    ///
    /// Seeding happens before any listener can exist, so nothing is notified.
    pub fn with_records<I, S>(records: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Record>,
    {
        Self {
            records: records.into_iter().map(Into::into).collect(),
            listeners: ListenerRegistry::new(),
        }
    }

    /// Appends `value` at the end of the collection.
    pub fn create(&mut self, value: impl Into<Record>) {
        self.records.push(value.into());
        debug!(
            "event=record_create module=store status=ok index={} len={}",
            self.records.len() - 1,
            self.records.len()
        );
        self.notify_listeners();
    }

    /// Returns the current collection in display order.
    pub fn read_all(&self) -> &[Record] {
        &self.records
    }

    /// Replaces the record at `index`. Out-of-range indices are ignored.
    pub fn update(&mut self, index: usize, value: impl Into<Record>) {
        let _ = self.try_update(index, value);
    }

    /// Removes the record at `index`. Out-of-range indices are ignored.
    pub fn delete(&mut self, index: usize) {
        let _ = self.try_delete(index);
    }

    /// Signed-index variant of `update`; negative indices are ignored.
    pub fn update_signed(&mut self, index: i64, value: impl Into<Record>) {
        if let Ok(index) = usize::try_from(index) {
            self.update(index, value);
        } else {
            log_skipped("record_update", index, self.records.len());
        }
    }

    /// Signed-index variant of `delete`; negative indices are ignored.
    pub fn delete_signed(&mut self, index: i64) {
        if let Ok(index) = usize::try_from(index) {
            self.delete(index);
        } else {
            log_skipped("record_delete", index, self.records.len());
        }
    }

    /// Replaces the record at `index`, reporting out-of-range indices.
    ///
    /// # Errors
    /// - Returns `StoreError::IndexOutOfRange` when `index >= len`; the store
    ///   is left untouched and no listener runs.
    pub fn try_update(&mut self, index: usize, value: impl Into<Record>) -> StoreResult<()> {
        let len = self.records.len();
        let Some(slot) = self.records.get_mut(index) else {
            log_skipped("record_update", index, len);
            return Err(StoreError::IndexOutOfRange { index, len });
        };
        *slot = value.into();
        debug!("event=record_update module=store status=ok index={index} len={len}");
        self.notify_listeners();
        Ok(())
    }

    /// Removes and returns the record at `index`, reporting out-of-range
    /// indices.
    ///
    /// # Errors
    /// - Returns `StoreError::IndexOutOfRange` when `index >= len`; the store
    ///   is left untouched and no listener runs.
    pub fn try_delete(&mut self, index: usize) -> StoreResult<Record> {
        let len = self.records.len();
        if index >= len {
            log_skipped("record_delete", index, len);
            return Err(StoreError::IndexOutOfRange { index, len });
        }
        let removed = self.records.remove(index);
        debug!(
            "event=record_delete module=store status=ok index={index} len={}",
            self.records.len()
        );
        self.notify_listeners();
        Ok(removed)
    }

    /// Removes every record. Notifies only when something was removed.
    pub fn clear(&mut self) {
        if self.records.is_empty() {
            return;
        }
        let removed = self.records.len();
        self.records.clear();
        debug!("event=record_clear module=store status=ok removed={removed}");
        self.notify_listeners();
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns an owned copy of the collection.
    pub fn snapshot(&self) -> ListSnapshot {
        ListSnapshot::capture(&self.records)
    }

    /// Registers `listener` for every future successful mutation.
    pub fn subscribe(&mut self, listener: impl FnMut(&[Record]) + 'static) -> SubscriptionId {
        let id = self.listeners.register(listener);
        debug!(
            "event=listener_subscribe module=store status=ok subscription={id} listeners={}",
            self.listeners.len()
        );
        id
    }

    /// Removes a listener. Unknown or already removed handles are ignored.
    pub fn unsubscribe(&mut self, subscription: SubscriptionId) {
        let removed = self.listeners.unregister(subscription);
        debug!(
            "event=listener_unsubscribe module=store status={} subscription={subscription} listeners={}",
            if removed { "ok" } else { "skipped" },
            self.listeners.len()
        );
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn notify_listeners(&mut self) {
        self.listeners.notify(&self.records);
    }
}

fn log_skipped(event: &str, index: impl Display, len: usize) {
    debug!(
        "event={event} module=store status=skipped reason=index_out_of_range index={index} len={len}"
    );
}
