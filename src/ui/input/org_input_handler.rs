//! Org chart input handling for panning and zooming.
//!
//! This module handles pointer input for the org chart canvas:
//! - Drag panning (pointer down + move, raw deltas)
//! - Scroll wheel zoom (one notch per event, recentred)
//!
//! Escape/reset is handled at the application level because it competes
//! with the details modal.

use eframe::egui;
use orgview::ViewportState;

/// Result of org chart input handling.
pub enum OrgInputResult {
    /// No interaction occurred
    None,
    /// Viewport was updated (pan or zoom)
    ViewportUpdated,
}

/// Handles pointer input over the org chart canvas and updates the
/// viewport accordingly.
pub fn handle_org_input(
    ctx: &egui::Context,
    canvas_rect: egui::Rect,
    canvas_response: &egui::Response,
    viewport: &mut ViewportState,
    bbox: egui::Rect,
    is_dragging: &mut bool,
) -> OrgInputResult {
    let mut result = OrgInputResult::None;

    // Drag panning: raw pointer deltas go straight into the translation,
    // independent of the current scale
    if canvas_response.dragged() {
        *is_dragging = true;
        let delta = canvas_response.drag_delta();
        if delta != egui::Vec2::ZERO {
            viewport.pan_by(delta);
            result = OrgInputResult::ViewportUpdated;
        }
    } else if *is_dragging {
        // Pointer released; egui drops the implicit pointer capture here
        *is_dragging = false;
    }

    // Wheel zoom when hovering the canvas; the chart stays centered
    // rather than zooming toward the cursor
    let hovering = ctx
        .input(|i| i.pointer.hover_pos())
        .is_some_and(|pos| canvas_rect.contains(pos));
    if hovering {
        let scroll_y = ctx.input(|i| {
            if i.raw_scroll_delta.y != 0.0 {
                i.raw_scroll_delta.y
            } else {
                i.smooth_scroll_delta.y
            }
        });
        if scroll_y != 0.0 {
            viewport.wheel_zoom(scroll_y > 0.0, canvas_rect.size(), bbox);
            result = OrgInputResult::ViewportUpdated;
        }
    }

    result
}
