//! Change notification primitives.
//!
//! # Responsibility
//! - Own listener storage and the notify call-out used by stores.
//!
//! # Invariants
//! - Listeners are invoked synchronously, in registration order.

pub mod registry;
