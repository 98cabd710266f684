//! Single-project item view.
//!
//! # Responsibility
//! - Render one project's heading, headcount line and body.
//! - Act as the drag source carrying the project's id token.

use crate::dragdrop::{DragPayload, DragSource, DropEffect};
use crate::model::project::{Project, ProjectId};
use crate::view::widget::Renderable;

/// Rendered representation of one project inside a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectItem {
    project: Project,
    heading: String,
    subheading: String,
    body: String,
}

impl ProjectItem {
    pub fn new(project: Project) -> Self {
        let mut item = Self {
            project,
            heading: String::new(),
            subheading: String::new(),
            body: String::new(),
        };
        item.render();
        item
    }

    pub fn project_id(&self) -> ProjectId {
        self.project.id
    }

    /// Headcount with singular/plural handling.
    pub fn persons_label(&self) -> String {
        if self.project.number_of_people == 1 {
            "1 person".to_string()
        } else {
            format!("{} people", self.project.number_of_people)
        }
    }

    pub fn heading(&self) -> &str {
        &self.heading
    }

    pub fn subheading(&self) -> &str {
        &self.subheading
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}

impl Renderable for ProjectItem {
    fn render(&mut self) {
        self.heading = self.project.title.clone();
        self.subheading = format!("{} assigned", self.persons_label());
        self.body = self.project.description.clone();
    }
}

impl DragSource for ProjectItem {
    fn drag_start(&self) -> (DragPayload, DropEffect) {
        (DragPayload::project_id(self.project.id), DropEffect::Move)
    }
}
