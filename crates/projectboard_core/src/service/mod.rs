//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate validation and store calls into use-case level APIs.
//! - Keep embedders decoupled from store locking details.

pub mod board_service;
