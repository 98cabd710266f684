//! Project input form.
//!
//! # Responsibility
//! - Buffer the three input fields the host's form widget edits.
//! - Validate on submit and forward the creation request to the store.
//!
//! # Invariants
//! - A failed submit leaves every field buffer untouched (no partial
//!   clear); a successful one clears all three.
//! - The form is the store's sole producer with validation; the store
//!   itself accepts anything.

use crate::model::project::ProjectId;
use crate::store::project_store::SharedProjectStore;
use crate::validation::{NumberRules, StringRules};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

const DESCRIPTION_MIN_LENGTH: usize = 5;
const PEOPLE_MIN: i64 = 1;
const PEOPLE_MAX: i64 = 5;

/// Validation failure surfaced to the user; the submit is aborted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    EmptyTitle,
    DescriptionTooShort { min: usize, actual: usize },
    PeopleNotANumber(String),
    PeopleOutOfRange(i64),
}

impl Display for FormError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "title must not be empty"),
            Self::DescriptionTooShort { min, actual } => write!(
                f,
                "description must be at least {min} characters, got {actual}"
            ),
            Self::PeopleNotANumber(raw) => {
                write!(f, "number of people must be an integer, got `{raw}`")
            }
            Self::PeopleOutOfRange(value) => write!(
                f,
                "number of people must be between {PEOPLE_MIN} and {PEOPLE_MAX}, got {value}"
            ),
        }
    }
}

impl Error for FormError {}

/// Field buffers plus the store handle new projects are submitted to.
pub struct ProjectForm {
    store: SharedProjectStore,
    title: String,
    description: String,
    people: String,
}

impl ProjectForm {
    pub fn new(store: SharedProjectStore) -> Self {
        Self {
            store,
            title: String::new(),
            description: String::new(),
            people: String::new(),
        }
    }

    pub fn set_title(&mut self, value: impl Into<String>) {
        self.title = value.into();
    }

    pub fn set_description(&mut self, value: impl Into<String>) {
        self.description = value.into();
    }

    /// Raw text; parsing happens at submit, matching free-form host input.
    pub fn set_people(&mut self, value: impl Into<String>) {
        self.people = value.into();
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn people(&self) -> &str {
        &self.people
    }

    /// Validates the buffers and creates the project on success.
    ///
    /// # Contract
    /// - Returns the new project's id and clears all three fields.
    /// - On any validation failure the buffers stay exactly as entered.
    ///
    /// # Errors
    /// - `EmptyTitle` when the trimmed title is empty.
    /// - `DescriptionTooShort` below the 5-character minimum.
    /// - `PeopleNotANumber` / `PeopleOutOfRange` for the headcount field.
    pub fn submit(&mut self) -> Result<ProjectId, FormError> {
        let (title, description, people) = self.gather()?;
        let id = self
            .store
            .borrow_mut()
            .add_project(title, description, people);
        self.clear();
        info!("event=form_submitted module=form status=ok id={id}");
        Ok(id)
    }

    fn gather(&self) -> Result<(String, String, u8), FormError> {
        let title_rules = StringRules {
            required: true,
            ..StringRules::default()
        };
        if !title_rules.check(&self.title) {
            return Err(FormError::EmptyTitle);
        }

        let description_rules = StringRules {
            required: true,
            min_length: Some(DESCRIPTION_MIN_LENGTH),
            ..StringRules::default()
        };
        if !description_rules.check(&self.description) {
            return Err(FormError::DescriptionTooShort {
                min: DESCRIPTION_MIN_LENGTH,
                actual: self.description.trim().chars().count(),
            });
        }

        let raw_people = self.people.trim();
        let people: i64 = raw_people
            .parse()
            .map_err(|_| FormError::PeopleNotANumber(raw_people.to_string()))?;
        let people_rules = NumberRules {
            min: Some(PEOPLE_MIN),
            max: Some(PEOPLE_MAX),
        };
        if !people_rules.check(people) {
            return Err(FormError::PeopleOutOfRange(people));
        }

        Ok((
            self.title.trim().to_string(),
            self.description.trim().to_string(),
            people as u8,
        ))
    }

    fn clear(&mut self) {
        self.title.clear();
        self.description.clear();
        self.people.clear();
    }
}
