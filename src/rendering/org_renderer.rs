//! Org chart rendering.
//!
//! Draws the laid-out tree onto the canvas through the viewport transform:
//! a faint background grid, then all connectors (painter's algorithm, so
//! node boxes layer above them), then the node boxes in pre-order.

use eframe::egui;
use orgview::{connectors, OrgNode, ThemeColors, ViewportState, NODE_HEIGHT, NODE_WIDTH};

use crate::rendering::text_utils::truncate_to_width;

/// Background grid spacing in screen pixels (fixed, not transformed).
const GRID_STEP: f32 = 40.0;

/// Node box corner radius in layout units.
const NODE_CORNER_RADIUS: f32 = 10.0;

/// Renders the complete org chart into `canvas_rect`.
pub fn render_org_chart(
    ui: &egui::Ui,
    canvas_rect: egui::Rect,
    root: &OrgNode,
    viewport: &ViewportState,
    colors: &ThemeColors,
) {
    let painter = ui.painter().with_clip_rect(canvas_rect);
    let scale = viewport.scale();
    let to_screen =
        |p: egui::Pos2| -> egui::Pos2 { canvas_rect.min + viewport.to_screen(p).to_vec2() };

    draw_background_grid(&painter, canvas_rect, colors);

    // Connectors first
    let link_stroke = egui::Stroke::new(2.0 * scale, colors.link);
    for edge in connectors(root) {
        let from = to_screen(edge.from);
        let to = to_screen(edge.to);
        let elbow_y = to_screen(egui::pos2(0.0, edge.elbow_y)).y;

        painter.line_segment([from, egui::pos2(from.x, elbow_y)], link_stroke);
        painter.line_segment(
            [egui::pos2(from.x, elbow_y), egui::pos2(to.x, elbow_y)],
            link_stroke,
        );
        painter.line_segment([egui::pos2(to.x, elbow_y), to], link_stroke);
    }

    // Then node boxes, pre-order
    root.visit(&mut |node| draw_node(&painter, node, viewport, canvas_rect, colors));
}

fn draw_background_grid(painter: &egui::Painter, rect: egui::Rect, colors: &ThemeColors) {
    let stroke = egui::Stroke::new(1.0, colors.grid);

    let mut x = rect.min.x;
    while x <= rect.max.x {
        painter.line_segment([egui::pos2(x, rect.min.y), egui::pos2(x, rect.max.y)], stroke);
        x += GRID_STEP;
    }
    let mut y = rect.min.y;
    while y <= rect.max.y {
        painter.line_segment([egui::pos2(rect.min.x, y), egui::pos2(rect.max.x, y)], stroke);
        y += GRID_STEP;
    }
}

fn draw_node(
    painter: &egui::Painter,
    node: &OrgNode,
    viewport: &ViewportState,
    canvas_rect: egui::Rect,
    colors: &ThemeColors,
) {
    let scale = viewport.scale();
    let layout_rect = egui::Rect::from_min_size(
        egui::pos2(node.x, node.y),
        egui::vec2(NODE_WIDTH, NODE_HEIGHT),
    );
    let rect = viewport
        .rect_to_screen(layout_rect)
        .translate(canvas_rect.min.to_vec2());

    // Skip boxes entirely outside the canvas
    if !rect.intersects(canvas_rect) {
        return;
    }

    let radius = NODE_CORNER_RADIUS * scale;
    painter.rect_filled(rect, radius, colors.node_fill);
    painter.rect_stroke(
        rect,
        radius,
        egui::Stroke::new(1.5 * scale, colors.node_stroke),
        egui::StrokeKind::Inside,
    );

    let font_id = egui::FontId::proportional(14.0 * scale);
    let label = truncate_to_width(&node.label, rect.width() - 8.0 * scale, &font_id, painter);
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        label,
        font_id,
        colors.text_strong,
    );
}
