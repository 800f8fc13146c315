//! Header panel UI rendering.
//!
//! Top bar with the app title, the category dropdown, zoom controls for
//! the org chart, the theme selector, and the motion toggle.

use eframe::egui;
use orgview::{Category, CategoryFilter};

use crate::app::AppState;

/// Renders the application header.
///
/// The zoom controls are optional in spirit (the canvas works without
/// them); they mutate the viewport directly like the rest of the bar.
pub fn render_header(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("OrgView").heading().strong());
        ui.separator();

        // Category dropdown, the site's "Projects" nav menu
        let mut selected = state.filter.active();
        egui::ComboBox::from_id_salt("category_nav")
            .selected_text(format!("Projects: {}", selected.label()))
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut selected, CategoryFilter::All, "All");
                for cat in Category::ALL {
                    ui.selectable_value(&mut selected, CategoryFilter::Only(cat), cat.label());
                }
            });
        if selected != state.filter.active() {
            state.filter.set_active(selected);
        }

        ui.separator();

        // Zoom controls
        let viewport_size = state.org.canvas_size();
        let bbox = state.org.bbox();
        if ui.button("🔍+").clicked() {
            state.viewport.zoom_in(viewport_size, bbox);
        }
        if ui.button("🔍-").clicked() {
            state.viewport.zoom_out(viewport_size, bbox);
        }
        if ui.button("⛶ Reset").clicked() {
            state.viewport.reset(viewport_size, bbox);
        }
        ui.label(format!("Zoom: {:.0}%", state.viewport.scale() * 100.0));

        ui.separator();

        if ui.button("▶ Replay chart").clicked() {
            state.chart.replay();
        }
        ui.checkbox(&mut state.reduced_motion, "Reduce motion");

        // Theme selector on the far right
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let current = state.theme.current_theme_name().to_string();
            let mut chosen = current.clone();
            egui::ComboBox::from_id_salt("theme_selector")
                .selected_text(current.as_str())
                .show_ui(ui, |ui| {
                    for name in state.theme.theme_manager().list_themes() {
                        ui.selectable_value(&mut chosen, name.to_string(), name);
                    }
                });
            if chosen != current {
                state.theme.set_theme(chosen);
            }
        });
    });
}
