//! Observable project state.
//!
//! # Responsibility
//! - Own the single authoritative project sequence.
//! - Fan out copy-on-notify snapshots to registered listeners.
//!
//! # Invariants
//! - Listeners never observe the store's internal sequence directly.
//! - Every notification happens strictly after the mutation is applied.

pub mod project_store;
