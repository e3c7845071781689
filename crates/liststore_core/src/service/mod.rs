//! Core use-case services.
//!
//! # Responsibility
//! - Wrap store mutations with caller-side input conventions.
//! - Keep presentation layers free of duplicated validation.

pub mod entry_service;
