//! Project details modal.
//!
//! Shows the clicked project's name and blurb over a dimmed backdrop.
//! Closes on the close button, a backdrop click, or Escape; focus returns
//! to the card that opened it.

use eframe::egui;
use orgview::project_catalog;

use crate::app::AppState;

/// Renders the details modal if one is open.
pub fn render_details_modal(ctx: &egui::Context, state: &mut AppState) {
    let Some(index) = state.modal.open_project() else {
        return;
    };
    let project = &project_catalog()[index];

    let modal = egui::Modal::new(egui::Id::new("project_details")).show(ctx, |ui| {
        ui.set_width(380.0);
        ui.heading(project.name);
        ui.add_space(8.0);
        ui.label(project.blurb);
        ui.add_space(12.0);

        let mut close_clicked = false;
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Close").clicked() {
                close_clicked = true;
            }
        });
        close_clicked
    });

    // should_close covers the backdrop click and Escape
    if modal.should_close() || modal.inner {
        if let Some(card_id) = state.modal.close() {
            ctx.memory_mut(|mem| mem.request_focus(card_id));
        }
    }
}
