//! Mouse interaction state for the org chart canvas.

/// State related to ongoing pointer interactions.
///
/// Responsibilities:
/// - Tracking drag/pan operations across frames
#[derive(Debug, Clone, Default)]
pub struct InteractionState {
    /// Whether the user is currently dragging to pan
    is_dragging: bool,
}

impl InteractionState {
    /// Creates a new interaction state with no active interactions.
    pub fn new() -> Self {
        Self { is_dragging: false }
    }

    /// Returns true if a drag operation is in progress.
    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    /// Marks a drag as started or stopped.
    pub fn set_dragging(&mut self, dragging: bool) {
        self.is_dragging = dragging;
    }
}
