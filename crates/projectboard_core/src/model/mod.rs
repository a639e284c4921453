//! Domain model for the project board.
//!
//! # Responsibility
//! - Define the canonical project record used by core business logic.
//! - Keep one shape shared by the store, the service layer and embedders.
//!
//! # Invariants
//! - Every project is identified by a stable `ProjectId`.
//! - Status is the only field that changes after creation.

pub mod project;
