//! Project domain model.
//!
//! # Responsibility
//! - Define the canonical record for one board entry.
//! - Enforce admission invariants at construction time.
//!
//! # Invariants
//! - `id` is stable and never reused for another project.
//! - `title`, `description` and `people` are fixed once constructed.
//! - `status` changes only through the store's move operation.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Minimum number of characters a project description must carry.
pub const DESCRIPTION_MIN_LEN: usize = 5;

/// Stable identifier for every project in a board.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ProjectId = Uuid;

/// Lifecycle bucket a project is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// Newly admitted, still being worked on.
    Active,
    /// Dragged to the finished list.
    Finished,
}

impl ProjectStatus {
    /// Returns the stable lowercase name used on CLI and wire boundaries.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Finished => "finished",
        }
    }

    /// Parses a stable lowercase name back into a status.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "active" => Some(Self::Active),
            "finished" => Some(Self::Finished),
            _ => None,
        }
    }
}

impl Display for ProjectStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Admission errors for constructed project data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectValidationError {
    /// The nil UUID is reserved and never a valid project id.
    NilId,
    /// Title is empty after trimming.
    EmptyTitle,
    /// Description is shorter than [`DESCRIPTION_MIN_LEN`].
    DescriptionTooShort { min: usize, actual: usize },
    /// A project must have at least one person assigned.
    ZeroPeople,
}

impl Display for ProjectValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "project id must not be the nil uuid"),
            Self::EmptyTitle => write!(f, "project title must not be empty"),
            Self::DescriptionTooShort { min, actual } => write!(
                f,
                "project description must have at least {min} characters, got {actual}"
            ),
            Self::ZeroPeople => write!(f, "project must have at least one person assigned"),
        }
    }
}

impl Error for ProjectValidationError {}

/// Canonical record for one titled unit of work on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Stable global ID used for moves, rendering and auditing.
    pub id: ProjectId,
    /// Short human-readable name. Non-empty.
    pub title: String,
    /// Free-form description. Length checked at admission only.
    pub description: String,
    /// Positive head count assigned to the project.
    pub people: u32,
    /// Current list bucket.
    pub status: ProjectStatus,
}

impl Project {
    /// Creates a new active project with a generated stable ID.
    ///
    /// # Errors
    /// - Returns an admission error when any field violates the model
    ///   invariants; no partially valid project is ever produced.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> Result<Self, ProjectValidationError> {
        Self::with_id(Uuid::new_v4(), title, description, people)
    }

    /// Creates a project with a caller-provided stable ID.
    ///
    /// Used by tests and future import paths where identity already exists.
    ///
    /// # Errors
    /// - Rejects the nil UUID and any field violating model invariants.
    pub fn with_id(
        id: ProjectId,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> Result<Self, ProjectValidationError> {
        let project = Self {
            id,
            title: title.into(),
            description: description.into(),
            people,
            status: ProjectStatus::Active,
        };
        project.validate()?;
        Ok(project)
    }

    /// Checks this record against the admission invariants.
    ///
    /// # Errors
    /// - Returns the first violated invariant, checked in field order.
    pub fn validate(&self) -> Result<(), ProjectValidationError> {
        if self.id.is_nil() {
            return Err(ProjectValidationError::NilId);
        }
        if self.title.trim().is_empty() {
            return Err(ProjectValidationError::EmptyTitle);
        }
        let description_len = self.description.chars().count();
        if description_len < DESCRIPTION_MIN_LEN {
            return Err(ProjectValidationError::DescriptionTooShort {
                min: DESCRIPTION_MIN_LEN,
                actual: description_len,
            });
        }
        if self.people == 0 {
            return Err(ProjectValidationError::ZeroPeople);
        }
        Ok(())
    }

    /// Returns whether this project sits in the given bucket.
    pub fn is_in(&self, status: ProjectStatus) -> bool {
        self.status == status
    }
}
