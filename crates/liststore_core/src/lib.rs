//! Core domain logic for ListStore.
//! This crate owns the observable record list and its notification rules.

pub mod config;
pub mod logging;
pub mod model;
pub mod notify;
pub mod service;
pub mod store;

pub use config::{ConfigError, CoreConfig};
pub use logging::{default_log_level, init_logging, init_logging_from_config, logging_status};
pub use model::record::{ListSnapshot, Record};
pub use notify::registry::{Listener, ListenerRegistry, SubscriptionId};
pub use service::entry_service::{EntryService, EntryServiceError, ServiceResult};
pub use store::list_store::{ListStore, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
