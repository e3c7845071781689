//! Domain model for the observable record list.
//!
//! # Responsibility
//! - Define the record and snapshot shapes shared by store and callers.
//!
//! # Invariants
//! - Records carry no identity; a record is addressed only by its index.

pub mod record;
