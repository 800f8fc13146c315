//! Turnover chart panel UI.
//!
//! Bottom panel with the annual turnover bar chart. The chart reveals by
//! growing its bars the first time it is drawn; the animation is primed
//! with a zero frame, then eased toward full height. Reduced motion skips
//! straight to the final state.

use eframe::egui;
use orgview::chart::ChartGeometry;
use orgview::{turnover_series, ThemeColors};

use crate::app::AppState;
use crate::rendering::chart_renderer;

const REVEAL_SECONDS: f32 = 0.9;

/// Renders the turnover chart panel.
pub fn render_chart_panel(ui: &mut egui::Ui, state: &mut AppState, theme_colors: &ThemeColors) {
    ui.horizontal(|ui| {
        ui.heading("Annual Turnover");
        ui.label(
            egui::RichText::new("million naira")
                .small()
                .color(theme_colors.text_dim),
        );
    });
    ui.separator();

    let rect = ui.available_rect_before_wrap();
    if rect.width() <= 0.0 || rect.height() <= 0.0 {
        return;
    }

    let series = turnover_series();
    let geometry = ChartGeometry::compute(rect.width(), rect.height(), &series);

    let reveal = if state.reduced_motion {
        1.0
    } else {
        reveal_factor(ui.ctx(), state)
    };

    chart_renderer::render_turnover_chart(ui, rect, &geometry, reveal, theme_colors);
}

/// Eased [0, 1] factor for the reveal animation.
fn reveal_factor(ctx: &egui::Context, state: &mut AppState) -> f32 {
    let id = egui::Id::new("turnover_reveal");
    if !state.chart.reveal_primed() {
        // Zero frame so the animation starts from the baseline
        ctx.animate_bool_with_time(id, false, 0.0);
        state.chart.set_primed();
    }
    ctx.animate_bool_with_time(id, true, REVEAL_SECONDS)
}
