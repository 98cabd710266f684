//! Drag-and-drop handshake contracts.
//!
//! # Responsibility
//! - Define the payload and effect carried by one drag gesture.
//! - Define the source/target capability traits views implement.
//! - Drive one gesture through its state machine
//!   (`Idle -> Dragging -> Dropped | Cancelled -> Idle`).
//!
//! # Invariants
//! - A gesture carries exactly one payload, captured at drag start.
//! - Targets only accept payloads tagged with the plain-text media type.
//! - The droppable affordance is cleared on leave, drop and cancel alike.

use crate::model::project::ProjectId;

/// Media type a project-id payload is tagged with.
///
/// Targets reject everything else; an `image/png` payload must never gain
/// the droppable affordance.
pub const PLAIN_TEXT: &str = "text/plain";

/// Transfer effect a source declares for the gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropEffect {
    /// The dragged entity moves; the only effect project items declare.
    Move,
    Copy,
}

/// Target's answer to a drag-over probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragResponse {
    /// Payload type matched; the host must suppress its default
    /// disallow-drop behavior and the target shows its affordance.
    Accept,
    /// Payload type did not match; the host's default disallow stands.
    Ignore,
}

/// Opaque payload carried by one gesture: a media type tag plus one
/// string token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragPayload {
    media_type: String,
    data: String,
}

impl DragPayload {
    /// Builds a payload with an arbitrary media type.
    ///
    /// Used by hosts forwarding foreign drags (images, files) so targets
    /// can exercise their rejection path.
    pub fn new(media_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            media_type: media_type.into(),
            data: data.into(),
        }
    }

    /// Builds the canonical project payload: plain text, id token.
    pub fn project_id(id: ProjectId) -> Self {
        Self::new(PLAIN_TEXT, id.to_string())
    }

    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    pub fn data(&self) -> &str {
        &self.data
    }

    pub fn is_plain_text(&self) -> bool {
        self.media_type == PLAIN_TEXT
    }
}

/// Capability of a view that can initiate a drag gesture.
pub trait DragSource {
    /// Produces the payload and declared effect for a starting gesture.
    ///
    /// Fired once per gesture.
    fn drag_start(&self) -> (DragPayload, DropEffect);

    /// Gesture finished, regardless of outcome.
    fn drag_end(&mut self) {}
}

/// Capability of a view that can receive a drop.
pub trait DropTarget {
    /// Probes whether the incoming payload would be accepted here.
    ///
    /// # Contract
    /// - `Accept` only when the payload's media type matches `PLAIN_TEXT`;
    ///   the target applies its droppable affordance as a side effect.
    /// - `Ignore` for anything else; the target stays untouched.
    fn drag_over(&mut self, payload: &DragPayload) -> DragResponse;

    /// Clears the droppable affordance unconditionally.
    fn drag_leave(&mut self);

    /// Consumes the payload: resolves the id token and applies the move.
    ///
    /// Also clears the droppable affordance (symmetry with `drag_leave`).
    /// Must work even without a preceding compatible `drag_over`; over and
    /// drop arrive as independent host events.
    fn accept_drop(&mut self, payload: &DragPayload);
}

/// State machine over one user gesture.
///
/// The host front end owns one of these per pointer and forwards its raw
/// drag events; the gesture keeps the payload between start and drop so
/// sources and targets never talk to each other directly.
#[derive(Default)]
pub struct DragGesture {
    carrying: Option<(DragPayload, DropEffect)>,
}

impl DragGesture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.carrying.is_some()
    }

    /// Enters `Dragging`, capturing the source's payload and effect.
    ///
    /// Starting a new gesture while one is in flight replaces it; hosts
    /// deliver at most one drag per pointer anyway.
    pub fn begin(&mut self, source: &impl DragSource) {
        self.carrying = Some(source.drag_start());
    }

    /// Enters `Dragging` with a payload the host already extracted, e.g. a
    /// foreign drag entering from outside the board.
    pub fn begin_with(&mut self, payload: DragPayload, effect: DropEffect) {
        self.carrying = Some((payload, effect));
    }

    /// Forwards a drag-over probe to the target.
    ///
    /// Returns `Ignore` when no gesture is in flight.
    pub fn over(&mut self, target: &mut impl DropTarget) -> DragResponse {
        match &self.carrying {
            Some((payload, _)) => target.drag_over(payload),
            None => DragResponse::Ignore,
        }
    }

    /// Forwards a drag-leave to the target; the gesture stays in flight.
    pub fn leave(&mut self, target: &mut impl DropTarget) {
        target.drag_leave();
    }

    /// Completes the gesture on `target`, returning to `Idle`.
    ///
    /// A drop with no gesture in flight is a no-op.
    pub fn drop_on(&mut self, target: &mut impl DropTarget) {
        if let Some((payload, _)) = self.carrying.take() {
            target.accept_drop(&payload);
        }
    }

    /// Abandons the gesture, clearing the target's affordance.
    pub fn cancel(&mut self, target: &mut impl DropTarget) {
        self.carrying = None;
        target.drag_leave();
    }
}
