//! Observable record store.
//!
//! # Responsibility
//! - Own the record collection and its listener registry.
//! - Apply CRUD mutations and notify listeners after each successful one.
//!
//! # Invariants
//! - Indices are contiguous and zero-based.
//! - Out-of-range mutations change nothing and notify nobody.
//! - Listeners run strictly after the mutation is fully applied.

pub mod list_store;
