//! Record and snapshot model.
//!
//! # Responsibility
//! - Name the opaque text value stored by `ListStore`.
//! - Provide an owned, serializable point-in-time copy of the collection.
//!
//! # Invariants
//! - Snapshot order equals collection order at capture time.
//! - A snapshot never observes later mutations.

use serde::{Deserialize, Serialize};

/// Opaque text value stored in the collection.
///
/// Kept as a type alias to make positional-record intent explicit in
/// signatures.
pub type Record = String;

/// Owned point-in-time copy of the record collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListSnapshot {
    /// Records in display order.
    pub records: Vec<Record>,
}

impl ListSnapshot {
    /// Captures a snapshot from a borrowed collection view.
    pub fn capture(records: &[Record]) -> Self {
        Self {
            records: records.to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the record at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    /// Iterates `(index, record)` pairs in display order.
    pub fn iter_indexed(&self) -> impl Iterator<Item = (usize, &Record)> {
        self.records.iter().enumerate()
    }
}

impl From<Vec<Record>> for ListSnapshot {
    fn from(records: Vec<Record>) -> Self {
        Self { records }
    }
}

#[cfg(test)]
mod tests {
    use super::ListSnapshot;

    #[test]
    fn capture_copies_records_in_order() {
        let source = vec!["a".to_string(), "b".to_string()];
        let snapshot = ListSnapshot::capture(&source);
        assert_eq!(snapshot.records, source);
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.get(1).map(String::as_str), Some("b"));
        assert!(snapshot.get(2).is_none());
    }

    #[test]
    fn iter_indexed_yields_positions() {
        let snapshot = ListSnapshot::from(vec!["x".to_string(), "y".to_string()]);
        let pairs: Vec<(usize, &str)> = snapshot
            .iter_indexed()
            .map(|(index, record)| (index, record.as_str()))
            .collect();
        assert_eq!(pairs, vec![(0, "x"), (1, "y")]);
    }
}
