//! Status-bound project list view.
//!
//! # Responsibility
//! - Render the subset of the store matching this view's bound status.
//! - Act as the drop target that turns a dropped id into a move request.
//!
//! # Invariants
//! - The bound status is fixed at construction and never changes.
//! - `assigned` preserves the store's original relative order.
//! - The droppable affordance toggle is idempotent.

use crate::dragdrop::{DragPayload, DragResponse, DragSource, DropEffect, DropTarget};
use crate::model::project::{Project, ProjectStatus};
use crate::store::project_store::SharedProjectStore;
use crate::view::project_item::ProjectItem;
use crate::view::widget::Renderable;
use log::warn;
use std::cell::RefCell;
use std::rc::Rc;
use uuid::Uuid;

/// Handle type list views live behind.
///
/// The store listener and the host's drop events both need to reach the
/// same view, so it is shared from the moment it is attached.
pub type SharedListView = Rc<RefCell<ListView>>;

/// One of the two status-bound lists on the board.
pub struct ListView {
    status: ProjectStatus,
    store: SharedProjectStore,
    assigned: Vec<Project>,
    items: Vec<ProjectItem>,
    droppable: bool,
}

impl ListView {
    /// Builds a view bound to `status` and subscribes it to the store.
    ///
    /// # Contract
    /// - The registered listener filters each snapshot down to this view's
    ///   status, preserving order, then re-renders all items.
    /// - Attaching before any project exists is fine; the view stays empty
    ///   until the first notification.
    pub fn attach(store: &SharedProjectStore, status: ProjectStatus) -> SharedListView {
        let view = Rc::new(RefCell::new(ListView {
            status,
            store: Rc::clone(store),
            assigned: Vec::new(),
            items: Vec::new(),
            droppable: false,
        }));

        // Explicit closure capture instead of any handler-rebinding trick:
        // the listener owns its own handle to the view it updates.
        let handle = Rc::clone(&view);
        store.borrow_mut().add_listener(move |snapshot| {
            let mut view = handle.borrow_mut();
            view.assigned = snapshot
                .into_iter()
                .filter(|project| project.status == status)
                .collect();
            view.render();
        });

        view
    }

    pub fn bound_status(&self) -> ProjectStatus {
        self.status
    }

    /// Uppercase list heading, e.g. `ACTIVE PROJECTS`.
    pub fn title(&self) -> String {
        format!("{} PROJECTS", self.status.as_str().to_uppercase())
    }

    pub fn assigned(&self) -> &[Project] {
        &self.assigned
    }

    pub fn items(&self) -> &[ProjectItem] {
        &self.items
    }

    /// Item headings in render order; convenient for assertions and hosts.
    pub fn rendered_titles(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.heading()).collect()
    }

    pub fn is_droppable(&self) -> bool {
        self.droppable
    }

    /// Hands out the drag payload for the item at `index`, if any.
    pub fn drag_item(&self, index: usize) -> Option<&ProjectItem> {
        self.items.get(index)
    }

    fn set_droppable(&mut self, on: bool) {
        self.droppable = on;
    }
}

impl Renderable for ListView {
    fn render(&mut self) {
        // Destroy-all-then-recreate; with two short lists diffing would buy
        // nothing.
        self.items.clear();
        self.items
            .extend(self.assigned.iter().cloned().map(ProjectItem::new));
    }
}

/// Drop-target capability lives on the shared handle so accepting a drop
/// can release the view borrow before the store mutation re-enters the
/// view through its own listener.
impl DropTarget for SharedListView {
    fn drag_over(&mut self, payload: &DragPayload) -> DragResponse {
        if payload.is_plain_text() {
            self.borrow_mut().set_droppable(true);
            DragResponse::Accept
        } else {
            // Foreign payload: leave the view untouched, the host's default
            // disallow stands.
            DragResponse::Ignore
        }
    }

    fn drag_leave(&mut self) {
        self.borrow_mut().set_droppable(false);
    }

    fn accept_drop(&mut self, payload: &DragPayload) {
        let (store, status) = {
            let mut view = self.borrow_mut();
            view.set_droppable(false);
            (Rc::clone(&view.store), view.status)
        };

        let Ok(id) = Uuid::parse_str(payload.data()) else {
            warn!(
                "event=drop_ignored module=view status=bad_token bucket={}",
                status.as_str()
            );
            return;
        };
        store.borrow_mut().move_project(id, status);
    }
}

/// Starts a gesture from the item at `index` of `view`.
///
/// Small helper so hosts do not need to keep the view borrowed while the
/// gesture is in flight.
pub fn payload_for_item(
    view: &SharedListView,
    index: usize,
) -> Option<(DragPayload, DropEffect)> {
    view.borrow().drag_item(index).map(|item| item.drag_start())
}
