//! Entry use-case service.
//!
//! # Responsibility
//! - Apply the "no empty entries" input convention before store writes.
//! - Surface out-of-range edits as errors instead of silent no-ops.
//!
//! # Invariants
//! - Input text is trimmed before it is stored.
//! - Blank input never reaches the store.
//! - The service borrows the store; it never owns or copies it.

use crate::model::record::Record;
use crate::store::list_store::{ListStore, StoreError};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, EntryServiceError>;

/// Entry service error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryServiceError {
    EmptyText,
    Store(StoreError),
}

impl Display for EntryServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyText => write!(f, "entry text cannot be empty"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for EntryServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::EmptyText => None,
            Self::Store(err) => Some(err),
        }
    }
}

impl From<StoreError> for EntryServiceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Use-case wrapper for validated entry edits.
pub struct EntryService<'store> {
    store: &'store mut ListStore,
}

impl<'store> EntryService<'store> {
    pub fn new(store: &'store mut ListStore) -> Self {
        Self { store }
    }

    /// Adds a trimmed, non-empty entry.
    ///
    /// # Contract
    /// - Returns the index of the new entry.
    /// - Rejects blank input with `EntryServiceError::EmptyText`.
    pub fn add_entry(&mut self, text: &str) -> ServiceResult<usize> {
        let value = normalize_entry_text(text)?;
        self.store.create(value);
        Ok(self.store.len() - 1)
    }

    /// Replaces the entry at `index` with trimmed, non-empty text.
    ///
    /// Blank input is rejected before the index is checked.
    pub fn edit_entry(&mut self, index: usize, text: &str) -> ServiceResult<()> {
        let value = normalize_entry_text(text)?;
        self.store.try_update(index, value)?;
        Ok(())
    }

    /// Removes and returns the entry at `index`.
    pub fn remove_entry(&mut self, index: usize) -> ServiceResult<Record> {
        Ok(self.store.try_delete(index)?)
    }

    pub fn entries(&self) -> &[Record] {
        self.store.read_all()
    }
}

fn normalize_entry_text(text: &str) -> ServiceResult<Record> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(EntryServiceError::EmptyText);
    }
    Ok(trimmed.to_string())
}
