//! Project store and listener fan-out.
//!
//! # Responsibility
//! - Hold the authoritative ordered project sequence.
//! - Apply add/move mutations and notify listeners once per change.
//!
//! # Invariants
//! - Insertion order is preserved across mutations.
//! - Each listener call receives its own independent snapshot copy.
//! - A mutation that changes nothing triggers zero notifications.
//!
//! The store is built once at startup and handed to every view as a
//! `SharedProjectStore`; there is no hidden lazy global.

use crate::model::project::{Project, ProjectId, ProjectStatus};
use log::{debug, info, warn};
use std::cell::RefCell;
use std::rc::Rc;

/// Callback invoked with a full snapshot after every effective mutation.
///
/// The snapshot is an owned copy; mutating it has no effect on the store.
pub type Listener = Box<dyn FnMut(Vec<Project>)>;

/// Shared single-owner handle views keep to reach the store.
///
/// The whole system runs on one thread (UI-event driven), so `Rc<RefCell<_>>`
/// is the right sharing primitive here, not `Arc<Mutex<_>>`.
pub type SharedProjectStore = Rc<RefCell<ProjectStore>>;

/// Single source of truth for all projects.
#[derive(Default)]
pub struct ProjectStore {
    projects: Vec<Project>,
    listeners: Vec<Listener>,
}

impl ProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the process-wide store handle.
    ///
    /// Call this exactly once at startup and clone the handle into every
    /// view that needs it.
    pub fn shared() -> SharedProjectStore {
        Rc::new(RefCell::new(Self::new()))
    }

    /// Registers a snapshot listener.
    ///
    /// # Contract
    /// - No de-duplication; registering twice means being called twice.
    /// - There is no unregister operation; listeners live as long as the
    ///   store (page-lifetime semantics).
    /// - Notification order equals registration order.
    pub fn add_listener<F>(&mut self, listener: F)
    where
        F: FnMut(Vec<Project>) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Creates a project and appends it to the end of the sequence.
    ///
    /// # Contract
    /// - The new project gets a fresh unique ID and status `Active`.
    /// - Always succeeds; input validation is the form's responsibility.
    /// - Every listener is notified exactly once.
    pub fn add_project(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        number_of_people: u8,
    ) -> ProjectId {
        let project = Project::new(title, description, number_of_people);
        let id = project.id;
        // Metadata only; project titles are user text and stay out of logs.
        info!(
            "event=project_added module=store status=ok id={} people={} total={}",
            id,
            project.number_of_people,
            self.projects.len() + 1
        );
        self.projects.push(project);
        self.notify_listeners();
        id
    }

    /// Moves a project to another status bucket.
    ///
    /// # Contract
    /// - Unknown `id`: no-op, zero notifications, one warn log line.
    /// - `new_status` equals the current status: no-op, zero notifications.
    /// - Otherwise: status is updated in place, identity fields untouched,
    ///   listeners notified exactly once.
    pub fn move_project(&mut self, id: ProjectId, new_status: ProjectStatus) {
        let Some(project) = self.projects.iter_mut().find(|p| p.id == id) else {
            warn!("event=project_move_ignored module=store status=not_found id={id}");
            return;
        };
        if project.status == new_status {
            debug!(
                "event=project_move_skipped module=store status=unchanged id={id} bucket={}",
                new_status.as_str()
            );
            return;
        }
        let previous = project.status;
        project.status = new_status;
        info!(
            "event=project_moved module=store status=ok id={id} from={} to={}",
            previous.as_str(),
            new_status.as_str()
        );
        self.notify_listeners();
    }

    /// Returns an independent copy of the current sequence.
    pub fn snapshot(&self) -> Vec<Project> {
        self.projects.clone()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    fn notify_listeners(&mut self) {
        // The clone happens before iteration so a listener can never reach
        // the live sequence, only its own copy.
        let projects = self.projects.clone();
        for listener in &mut self.listeners {
            listener(projects.clone());
        }
    }
}
