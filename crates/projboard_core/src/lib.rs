//! Core domain logic for the project board.
//! This crate is the single source of truth for board invariants.

pub mod dragdrop;
pub mod form;
pub mod logging;
pub mod model;
pub mod store;
pub mod validation;
pub mod view;

pub use dragdrop::{
    DragGesture, DragPayload, DragResponse, DragSource, DropEffect, DropTarget, PLAIN_TEXT,
};
pub use form::{FormError, ProjectForm};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::project::{Project, ProjectId, ProjectStatus};
pub use store::project_store::{Listener, ProjectStore, SharedProjectStore};
pub use view::list_view::{payload_for_item, ListView, SharedListView};
pub use view::project_item::ProjectItem;
pub use view::widget::Renderable;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
