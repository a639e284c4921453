//! Board use-case service.
//!
//! # Responsibility
//! - Apply the form rule sets before anything reaches the store.
//! - Provide submit/move/subscribe entry points over the shared store.
//!
//! # Invariants
//! - An invalid submission never touches the store and never notifies.
//! - Move requests never fail for unknown ids; they are silent no-ops.

use crate::model::project::{Project, ProjectId, ProjectStatus, DESCRIPTION_MIN_LEN};
use crate::store::project_store::{ProjectListener, SharedProjectStore, SubscriptionId};
use crate::validate::{validate, FieldRules, FieldValue};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Minimum head count accepted by the submission form.
pub const PEOPLE_MIN: i64 = 1;

/// Service error for board use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardServiceError {
    /// Submission rejected by the form rule sets. Carries no per-field
    /// detail; the notice is the whole user-facing contract.
    InvalidInput,
    /// The shared store lock was poisoned by a panicking holder.
    StorePoisoned,
}

impl Display for BoardServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput => write!(f, "invalid input, please try again"),
            Self::StorePoisoned => write!(f, "board state is unavailable"),
        }
    }
}

impl Error for BoardServiceError {}

/// Use-case layer over one shared project store.
pub struct BoardService {
    store: SharedProjectStore,
}

impl BoardService {
    /// Creates a service over the store handle owned by the composition
    /// point. Clones of the handle observe the same collection.
    pub fn new(store: SharedProjectStore) -> Self {
        Self { store }
    }

    /// Validates one submission and admits it to the board.
    ///
    /// Rule sets match the submission form: title is required, description
    /// is required with a minimum length, people is required with a
    /// positive lower bound. The three checks are combined with AND.
    ///
    /// # Errors
    /// - `InvalidInput` when any rule set is unsatisfied; the store is
    ///   untouched and no notification fires.
    pub fn submit(
        &self,
        title: &str,
        description: &str,
        people: i64,
    ) -> Result<ProjectId, BoardServiceError> {
        let title_rules = FieldRules {
            required: true,
            ..FieldRules::default()
        };
        let description_rules = FieldRules {
            required: true,
            min_length: Some(DESCRIPTION_MIN_LEN),
            ..FieldRules::default()
        };
        let people_rules = FieldRules {
            required: true,
            min: Some(PEOPLE_MIN),
            ..FieldRules::default()
        };

        let accepted = validate(FieldValue::Text(title), &title_rules)
            && validate(FieldValue::Text(description), &description_rules)
            && validate(FieldValue::Number(people), &people_rules);
        if !accepted {
            warn!("event=submission_rejected reason=rule_set");
            return Err(BoardServiceError::InvalidInput);
        }
        let people = u32::try_from(people).map_err(|_| {
            warn!("event=submission_rejected reason=people_out_of_range");
            BoardServiceError::InvalidInput
        })?;

        let mut store = self
            .store
            .lock()
            .map_err(|_| BoardServiceError::StorePoisoned)?;
        let id = store
            .add_project(title, description, people)
            .map_err(|_| BoardServiceError::InvalidInput)?;
        info!("event=submission_accepted id={id}");
        Ok(id)
    }

    /// Requests a move to the target bucket.
    ///
    /// Returns whether a move was committed. Unknown ids and moves to the
    /// current bucket return `Ok(false)` without notifying anyone.
    pub fn move_to(
        &self,
        id: ProjectId,
        target: ProjectStatus,
    ) -> Result<bool, BoardServiceError> {
        let mut store = self
            .store
            .lock()
            .map_err(|_| BoardServiceError::StorePoisoned)?;
        Ok(store.move_project(id, target))
    }

    /// Registers a snapshot subscriber on the underlying store.
    pub fn subscribe(&self, listener: ProjectListener) -> Result<SubscriptionId, BoardServiceError> {
        let mut store = self
            .store
            .lock()
            .map_err(|_| BoardServiceError::StorePoisoned)?;
        Ok(store.subscribe(listener))
    }

    /// Removes one subscriber. Returns whether the handle was registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> Result<bool, BoardServiceError> {
        let mut store = self
            .store
            .lock()
            .map_err(|_| BoardServiceError::StorePoisoned)?;
        Ok(store.unsubscribe(id))
    }

    /// Returns a snapshot copy of the current board.
    pub fn snapshot(&self) -> Result<Vec<Project>, BoardServiceError> {
        let store = self
            .store
            .lock()
            .map_err(|_| BoardServiceError::StorePoisoned)?;
        Ok(store.snapshot())
    }
}
