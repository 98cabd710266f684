//! Headless view layer.
//!
//! # Responsibility
//! - Project store snapshots into renderable list/item state.
//! - Implement the drag source and drop target capabilities.
//!
//! # Invariants
//! - A list view only ever holds projects matching its bound status.
//! - Re-rendering is destroy-all-then-recreate; no diffing.
//!
//! The actual widget toolkit (DOM, TUI, whatever hosts this core) is an
//! external collaborator; these views hold the state it paints from.

pub mod list_view;
pub mod project_item;
pub mod widget;
