//! Project domain model.
//!
//! # Responsibility
//! - Define the record every list view renders and the store owns.
//! - Provide constructors that guarantee fresh, unique identity.
//!
//! # Invariants
//! - `id` is stable and never reused for another project.
//! - `status` is always exactly one of the two enum values.
//! - Identity fields (`id`, `title`, `description`, `number_of_people`)
//!   never change after construction; only `status` may move.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for every project held by the store.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ProjectId = Uuid;

/// Lifecycle bucket a project is filed under.
///
/// Exactly one list view is bound to each variant; the drop target of a
/// drag gesture decides which variant a project moves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// Work is ongoing; the default for newly created projects.
    Active,
    /// Work is done; reached only via an explicit move.
    Finished,
}

impl ProjectStatus {
    /// Returns the other bucket.
    ///
    /// Total because the enumeration is closed at two variants.
    pub fn toggled(self) -> Self {
        match self {
            Self::Active => Self::Finished,
            Self::Finished => Self::Active,
        }
    }

    /// Stable lowercase tag used in logs and list headings.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Finished => "finished",
        }
    }
}

/// Canonical record for one tracked project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Stable global ID used as the drag payload token.
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    /// Headcount assigned to the project; the form bounds it to [1, 5].
    pub number_of_people: u8,
    /// Only the store's move operation may change this after construction.
    pub status: ProjectStatus,
}

impl Project {
    /// Creates a new project with a generated stable ID.
    ///
    /// # Invariants
    /// - `status` starts as `ProjectStatus::Active`.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        number_of_people: u8,
    ) -> Self {
        Self::with_id(Uuid::new_v4(), title, description, number_of_people)
    }

    /// Creates a project with a caller-provided stable ID.
    ///
    /// Used by tests that need deterministic identity.
    pub fn with_id(
        id: ProjectId,
        title: impl Into<String>,
        description: impl Into<String>,
        number_of_people: u8,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            number_of_people,
            status: ProjectStatus::Active,
        }
    }

    /// Returns whether this project sits in the active bucket.
    pub fn is_active(&self) -> bool {
        self.status == ProjectStatus::Active
    }
}
