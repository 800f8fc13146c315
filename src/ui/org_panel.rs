//! Org chart panel UI.
//!
//! Hosts the pan/zoom canvas: allocates the drawing area, routes input to
//! the viewport, and delegates drawing to the org renderer.

use eframe::egui;
use orgview::ThemeColors;

use crate::app::AppState;
use crate::rendering::org_renderer;
use crate::ui::input::org_input_handler;

/// Renders the org chart canvas panel.
pub fn render_org_panel(
    ui: &mut egui::Ui,
    ctx: &egui::Context,
    state: &mut AppState,
    theme_colors: &ThemeColors,
) {
    let canvas_rect = ui.available_rect_before_wrap();
    let canvas_response = ui.interact(
        canvas_rect,
        ui.id().with("org_canvas"),
        egui::Sense::drag(),
    );

    // First frame with a real size: center the chart
    if state.org.update_canvas_rect(canvas_rect) {
        state.viewport.reset(canvas_rect.size(), state.org.bbox());
    }

    let bbox = state.org.bbox();
    let mut is_dragging = state.interaction.is_dragging();
    let input_result = org_input_handler::handle_org_input(
        ctx,
        canvas_rect,
        &canvas_response,
        &mut state.viewport,
        bbox,
        &mut is_dragging,
    );
    state.interaction.set_dragging(is_dragging);

    // Keep animating while the viewport is moving
    if matches!(input_result, org_input_handler::OrgInputResult::ViewportUpdated) {
        ctx.request_repaint();
    }

    org_renderer::render_org_chart(ui, canvas_rect, state.org.root(), &state.viewport, theme_colors);

    // Grab cursor while panning
    if state.interaction.is_dragging() {
        ctx.set_cursor_icon(egui::CursorIcon::Grabbing);
    } else if canvas_response.hovered() {
        ctx.set_cursor_icon(egui::CursorIcon::Grab);
    }
}
