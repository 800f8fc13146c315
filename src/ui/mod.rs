//! UI panel rendering and input handling.

pub mod header;
pub mod org_panel;
pub mod projects_panel;
pub mod chart_panel;
pub mod details_modal;
pub mod status_bar;
pub mod panel_manager;
pub mod input;
