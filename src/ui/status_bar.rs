//! Status bar UI rendering.
//!
//! Bottom strip with memory usage, org chart stats, and the current filter.

use eframe::egui;
use egui::RichText;

use crate::app::AppState;
use crate::utils::{format_memory_mb, get_current_memory_mb};
use orgview::project_catalog;

/// Renders the status panel at the bottom of the window.
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState) {
    ui.horizontal(|ui| {
        let memory_text = format_memory_mb(get_current_memory_mb());
        ui.label(RichText::new(&memory_text).strong());

        ui.label(RichText::new("|").strong());
        ui.label(format!(
            "Org chart: {} roles | Zoom: {:.0}%",
            state.org.node_count(),
            state.viewport.scale() * 100.0
        ));

        ui.label(RichText::new("|").strong());
        let shown = state.filter.visible_projects().len();
        ui.label(format!(
            "Projects: {}/{} ({})",
            shown,
            project_catalog().len(),
            state.filter.active().label()
        ));

        if let Some(error) = &state.error_message {
            ui.label(RichText::new("|").strong());
            ui.colored_label(ui.visuals().error_fg_color, error);
        }
    });
}
