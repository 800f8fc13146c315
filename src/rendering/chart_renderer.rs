//! Turnover bar chart rendering.
//!
//! Paints the geometry computed by [`orgview::chart`]: dashed gridlines
//! with tick labels, then the bars (scaled by the reveal factor) with year
//! labels underneath and a value tooltip on hover.

use eframe::egui;
use orgview::chart::{self, ChartGeometry};
use orgview::{format_amount, ThemeColors};

/// Renders the bar chart into `rect`.
///
/// `reveal` is the animation factor in [0, 1]; bar heights grow from the
/// baseline as it approaches 1.
pub fn render_turnover_chart(
    ui: &mut egui::Ui,
    rect: egui::Rect,
    geometry: &ChartGeometry,
    reveal: f32,
    colors: &ThemeColors,
) {
    let painter = ui.painter().with_clip_rect(rect);
    let origin = rect.min + egui::vec2(chart::MARGIN_LEFT, chart::MARGIN_TOP);

    // Gridlines and tick labels
    let tick_font = egui::FontId::proportional(11.0);
    for gridline in &geometry.gridlines {
        let y = origin.y + gridline.y;
        painter.add(egui::Shape::dashed_line(
            &[
                egui::pos2(origin.x, y),
                egui::pos2(origin.x + geometry.inner_width, y),
            ],
            egui::Stroke::new(1.0, colors.grid),
            4.0,
            6.0,
        ));
        painter.text(
            egui::pos2(origin.x - 10.0, y - 2.0),
            egui::Align2::RIGHT_CENTER,
            format_amount(gridline.value as i64),
            tick_font.clone(),
            colors.text_dim,
        );
    }

    // Bars, bottom-anchored while revealing
    let reveal = reveal.clamp(0.0, 1.0);
    let year_font = egui::FontId::proportional(12.0);
    for bar in &geometry.bars {
        let height = bar.height * reveal;
        let bar_rect = egui::Rect::from_min_size(
            egui::pos2(origin.x + bar.x, origin.y + geometry.inner_height - height),
            egui::vec2(bar.width, height),
        );

        let radius = egui::CornerRadius {
            nw: chart::BAR_RADIUS as u8,
            ne: chart::BAR_RADIUS as u8,
            sw: 0,
            se: 0,
        };
        painter.rect_filled(bar_rect, radius, colors.accent_blue);
        // Cyan cap echoes the site's bar gradient
        let cap = egui::Rect::from_min_size(
            bar_rect.min,
            egui::vec2(bar_rect.width(), (height * 0.25).min(24.0)),
        );
        painter.rect_filled(cap, radius, orgview::with_alpha(colors.accent_cyan, 90));

        // Value tooltip on hover
        let bar_id = ui.id().with(("turnover_bar", bar.point.year));
        let response = ui.interact(bar_rect, bar_id, egui::Sense::hover());
        response.on_hover_text(format!(
            "{}: {}M",
            bar.point.year,
            format_amount(bar.point.value as i64)
        ));

        painter.text(
            egui::pos2(
                origin.x + bar.x + bar.width / 2.0,
                origin.y + geometry.inner_height + 22.0,
            ),
            egui::Align2::CENTER_CENTER,
            bar.point.year.to_string(),
            year_font.clone(),
            colors.text,
        );
    }
}
