//! Org chart state: the laid-out tree and its derived geometry.

use orgview::{bounding_box, company_org_chart, run_layout, OrgNode, CANVAS_HEIGHT, CANVAS_WIDTH};

/// State related to the org chart itself.
///
/// The tree is built and laid out once at startup; only the canvas rect
/// (needed for recentring) changes afterwards.
#[derive(Debug)]
pub struct OrgChartState {
    /// Root of the laid-out tree
    root: OrgNode,
    /// Bounding box of all node boxes in layout space
    bbox: egui::Rect,
    /// Canvas rect from the most recent frame, for zoom recentring
    canvas_rect: egui::Rect,
    /// Whether the initial centering has been applied
    centered_once: bool,
}

impl Default for OrgChartState {
    fn default() -> Self {
        Self::new()
    }
}

impl OrgChartState {
    /// Builds and lays out the company org chart.
    pub fn new() -> Self {
        let mut root = company_org_chart();
        run_layout(&mut root);
        let bbox = bounding_box(&root);
        Self {
            root,
            bbox,
            canvas_rect: egui::Rect::ZERO,
            centered_once: false,
        }
    }

    // ===== Queries =====

    /// Returns the laid-out tree.
    pub fn root(&self) -> &OrgNode {
        &self.root
    }

    /// Returns the chart's bounding box in layout space.
    pub fn bbox(&self) -> egui::Rect {
        self.bbox
    }

    /// Returns the last known canvas rect.
    pub fn canvas_rect(&self) -> egui::Rect {
        self.canvas_rect
    }

    /// Returns the last known canvas size, falling back to the logical
    /// canvas before the first frame so zoom recentring stays sensible.
    pub fn canvas_size(&self) -> egui::Vec2 {
        let size = self.canvas_rect.size();
        if size.x > 0.0 && size.y > 0.0 {
            size
        } else {
            egui::vec2(CANVAS_WIDTH, CANVAS_HEIGHT)
        }
    }

    /// Total number of nodes in the chart.
    pub fn node_count(&self) -> usize {
        self.root.count()
    }

    // ===== Mutations =====

    /// Records the canvas rect for this frame.
    ///
    /// Returns true the first time a non-empty rect is seen, signalling
    /// that the viewport should be centered initially.
    pub fn update_canvas_rect(&mut self, rect: egui::Rect) -> bool {
        self.canvas_rect = rect;
        if !self.centered_once && rect.width() > 0.0 && rect.height() > 0.0 {
            self.centered_once = true;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canvas_size_falls_back_to_logical_canvas() {
        let mut state = OrgChartState::new();
        assert_eq!(state.canvas_size(), egui::vec2(CANVAS_WIDTH, CANVAS_HEIGHT));

        let rect = egui::Rect::from_min_size(egui::pos2(0.0, 24.0), egui::vec2(800.0, 500.0));
        assert!(state.update_canvas_rect(rect));
        assert_eq!(state.canvas_size(), egui::vec2(800.0, 500.0));
    }

    #[test]
    fn first_real_rect_triggers_initial_centering_once() {
        let mut state = OrgChartState::new();
        assert!(!state.update_canvas_rect(egui::Rect::ZERO));

        let rect = egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(640.0, 480.0));
        assert!(state.update_canvas_rect(rect));
        assert!(!state.update_canvas_rect(rect));
    }
}
