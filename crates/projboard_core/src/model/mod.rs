//! Domain model for tracked projects.
//!
//! # Responsibility
//! - Define the canonical project record shared by store and views.
//! - Keep status a closed two-state enumeration.
//!
//! # Invariants
//! - Every project is identified by a stable `ProjectId`.
//! - Status transitions happen only inside the store's move operation.

pub mod project;
