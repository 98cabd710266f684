//! View capability contracts.

/// Capability of a view that can rebuild its rendered state.
///
/// Kept as a small trait instead of an inheritance-style base view: each
/// view implements the hook it needs, wiring (listener registration, event
/// hookup) happens at attach time via explicit closures.
pub trait Renderable {
    /// Rebuilds rendered state from current inputs.
    fn render(&mut self);
}
