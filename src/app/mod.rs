//! Application state management and coordination.

mod app_state;
mod theme_coordinator;
mod settings_coordinator;

pub use app_state::AppState;
pub use theme_coordinator::ThemeCoordinator;
pub use settings_coordinator::SettingsCoordinator;
