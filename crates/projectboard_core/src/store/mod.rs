//! Observable in-memory state for the board.
//!
//! # Responsibility
//! - Hold the authoritative project collection for one session.
//! - Fan committed mutations out to registered subscribers.
//!
//! # Invariants
//! - Subscribers only ever see fully committed snapshots.
//! - Insertion order is list order; no reordering operation exists.

pub mod project_store;
