//! Project details modal state.

/// State related to the details modal.
///
/// Responsibilities:
/// - Tracking which project (catalog index) is open, if any
/// - Remembering the card that opened the modal so focus can be restored
///   when it closes
#[derive(Debug, Clone, Default)]
pub struct ModalState {
    open_project: Option<usize>,
    last_focused: Option<egui::Id>,
}

impl ModalState {
    /// Creates a modal state with nothing open.
    pub fn new() -> Self {
        Self::default()
    }

    // ===== Queries =====

    /// Returns the open project's catalog index, if a modal is showing.
    pub fn open_project(&self) -> Option<usize> {
        self.open_project
    }

    /// Returns true if the modal is showing.
    pub fn is_open(&self) -> bool {
        self.open_project.is_some()
    }

    // ===== Mutations =====

    /// Opens the modal for a project, remembering the card to refocus later.
    pub fn open(&mut self, project_index: usize, focused_card: Option<egui::Id>) {
        self.open_project = Some(project_index);
        self.last_focused = focused_card;
    }

    /// Closes the modal; returns the card id to restore focus to.
    pub fn close(&mut self) -> Option<egui::Id> {
        self.open_project = None;
        self.last_focused.take()
    }
}
