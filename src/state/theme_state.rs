//! Theme and styling state management.

use orgview::ThemeManager;

/// State related to visual theme and styling.
///
/// Responsibilities:
/// - Managing theme instances
/// - Tracking current theme selection
pub struct ThemeState {
    /// Theme manager instance
    theme_manager: ThemeManager,
    /// Name of currently selected theme
    current_theme_name: String,
}

impl std::fmt::Debug for ThemeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeState")
            .field("current_theme_name", &self.current_theme_name)
            .finish_non_exhaustive()
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeState {
    /// Creates a new theme state with the default theme.
    pub fn new() -> Self {
        Self {
            theme_manager: ThemeManager::new(),
            current_theme_name: "Light".to_string(),
        }
    }

    /// Creates a new theme state with a specific theme.
    pub fn with_theme(theme_name: String) -> Self {
        Self {
            theme_manager: ThemeManager::new(),
            current_theme_name: theme_name,
        }
    }

    /// Returns a reference to the theme manager.
    pub fn theme_manager(&self) -> &ThemeManager {
        &self.theme_manager
    }

    /// Returns the name of the current theme.
    pub fn current_theme_name(&self) -> &str {
        &self.current_theme_name
    }

    /// Sets the current theme by name.
    pub fn set_theme(&mut self, theme_name: String) {
        self.current_theme_name = theme_name;
    }
}
