//! State observer port
//!
//! Called on every UI state transition so a front end can redraw.

use mcq_domain::UiState;

/// Callback for UI state transitions
///
/// Implementations live in the presentation layer.
pub trait StateObserver: Send + Sync {
    fn on_transition(&self, state: &UiState);
}

/// No-op observer for when nothing needs to be drawn
pub struct NoObserver;

impl StateObserver for NoObserver {
    fn on_transition(&self, _state: &UiState) {}
}
