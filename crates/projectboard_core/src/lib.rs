//! Core domain logic for the project board.
//! This crate is the single source of truth for board invariants.

pub mod logging;
pub mod model;
pub mod service;
pub mod store;
pub mod validate;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::project::{
    Project, ProjectId, ProjectStatus, ProjectValidationError, DESCRIPTION_MIN_LEN,
};
pub use service::board_service::{BoardService, BoardServiceError, PEOPLE_MIN};
pub use store::project_store::{
    ProjectListener, ProjectStore, SharedProjectStore, SubscriptionId,
};
pub use validate::{validate, FieldRules, FieldValue};

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
