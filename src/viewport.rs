//! Viewport and zoom state for the org chart canvas.
//!
//! This module encapsulates the pan/zoom transform applied when mapping
//! layout coordinates to screen coordinates: a uniform scale plus a
//! translation, mutated by zoom controls, wheel input, and drag panning.

/// Lower bound for the zoom scale.
pub const MIN_SCALE: f32 = 0.4;
/// Upper bound for the zoom scale.
pub const MAX_SCALE: f32 = 2.5;

/// Multiplicative step applied by the zoom-in/zoom-out controls.
const BUTTON_ZOOM_FACTOR: f32 = 1.2;
/// Multiplicative step applied per wheel notch.
const WHEEL_ZOOM_FACTOR: f32 = 1.1;

/// The pan/zoom transform for the org chart canvas.
///
/// Responsibilities:
/// - Clamping the zoom scale to [`MIN_SCALE`, `MAX_SCALE`]
/// - Recentring the chart's bounding box after any scale change
/// - Accumulating raw pointer deltas while panning
#[derive(Debug, Clone)]
pub struct ViewportState {
    /// Current zoom scale (1.0 = native layout size)
    scale: f32,
    /// Screen-space translation, X
    translate_x: f32,
    /// Screen-space translation, Y
    translate_y: f32,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewportState {
    /// Creates an identity transform.
    pub fn new() -> Self {
        Self {
            scale: 1.0,
            translate_x: 0.0,
            translate_y: 0.0,
        }
    }

    // ===== Queries =====

    /// Returns the current zoom scale.
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Returns the current translation.
    pub fn translation(&self) -> egui::Vec2 {
        egui::vec2(self.translate_x, self.translate_y)
    }

    /// Maps a layout-space point into viewport space.
    pub fn to_screen(&self, p: egui::Pos2) -> egui::Pos2 {
        egui::pos2(
            p.x * self.scale + self.translate_x,
            p.y * self.scale + self.translate_y,
        )
    }

    /// Maps a layout-space rectangle into viewport space.
    pub fn rect_to_screen(&self, rect: egui::Rect) -> egui::Rect {
        egui::Rect::from_min_max(self.to_screen(rect.min), self.to_screen(rect.max))
    }

    // ===== Mutations =====

    /// Zoom-in control: scale up by the button factor and recentre.
    pub fn zoom_in(&mut self, viewport: egui::Vec2, bbox: egui::Rect) {
        self.set_scale(self.scale * BUTTON_ZOOM_FACTOR, viewport, bbox);
    }

    /// Zoom-out control: scale down by the button factor and recentre.
    pub fn zoom_out(&mut self, viewport: egui::Vec2, bbox: egui::Rect) {
        self.set_scale(self.scale / BUTTON_ZOOM_FACTOR, viewport, bbox);
    }

    /// Wheel zoom: one notch in (`scroll_up`) or out, then recentre.
    ///
    /// The chart stays centered rather than anchoring under the cursor.
    pub fn wheel_zoom(&mut self, scroll_up: bool, viewport: egui::Vec2, bbox: egui::Rect) {
        let factor = if scroll_up {
            WHEEL_ZOOM_FACTOR
        } else {
            1.0 / WHEEL_ZOOM_FACTOR
        };
        self.set_scale(self.scale * factor, viewport, bbox);
    }

    /// Adds a raw pointer delta to the translation, independent of scale.
    pub fn pan_by(&mut self, delta: egui::Vec2) {
        self.translate_x += delta.x;
        self.translate_y += delta.y;
    }

    /// Resets to scale 1 with the chart centered in the viewport.
    pub fn reset(&mut self, viewport: egui::Vec2, bbox: egui::Rect) {
        self.set_scale(1.0, viewport, bbox);
    }

    /// Recomputes the translation so `bbox` sits centered in the viewport
    /// at the current scale.
    ///
    /// A zero-size viewport degenerates to the bounding box's negative
    /// origin, which is harmless.
    pub fn center(&mut self, viewport: egui::Vec2, bbox: egui::Rect) {
        self.translate_x = (viewport.x - bbox.width() * self.scale) / 2.0 - bbox.min.x * self.scale;
        self.translate_y = (viewport.y - bbox.height() * self.scale) / 2.0 - bbox.min.y * self.scale;
    }

    fn set_scale(&mut self, scale: f32, viewport: egui::Vec2, bbox: egui::Rect) {
        self.scale = scale.clamp(MIN_SCALE, MAX_SCALE);
        self.center(viewport, bbox);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bbox() -> egui::Rect {
        egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(520.0, 212.0))
    }

    const VIEWPORT: egui::Vec2 = egui::vec2(1600.0, 900.0);

    #[test]
    fn scale_stays_clamped() {
        let mut vp = ViewportState::new();
        for _ in 0..50 {
            vp.zoom_in(VIEWPORT, bbox());
        }
        assert_eq!(vp.scale(), MAX_SCALE);

        for _ in 0..100 {
            vp.wheel_zoom(false, VIEWPORT, bbox());
        }
        assert_eq!(vp.scale(), MIN_SCALE);
    }

    #[test]
    fn reset_centers_bounding_box() {
        let mut vp = ViewportState::new();
        vp.pan_by(egui::vec2(333.0, -97.0));
        vp.zoom_in(VIEWPORT, bbox());
        vp.reset(VIEWPORT, bbox());

        assert_eq!(vp.scale(), 1.0);
        let t = vp.translation();
        assert_eq!(t.x, (VIEWPORT.x - 520.0) / 2.0);
        assert_eq!(t.y, (VIEWPORT.y - 212.0) / 2.0);
    }

    #[test]
    fn recenter_accounts_for_bbox_origin() {
        let shifted = egui::Rect::from_min_size(egui::pos2(40.0, 10.0), egui::vec2(100.0, 50.0));
        let mut vp = ViewportState::new();
        vp.center(VIEWPORT, shifted);

        // The bbox center ends up at the viewport center
        let center = vp.to_screen(shifted.center());
        assert_eq!(center, egui::pos2(VIEWPORT.x / 2.0, VIEWPORT.y / 2.0));
    }

    #[test]
    fn drag_moves_translation_by_raw_delta() {
        let mut vp = ViewportState::new();
        vp.zoom_in(VIEWPORT, bbox()); // scale change must not affect later pans
        let before = vp.translation();
        vp.pan_by(egui::vec2(12.5, -3.0));
        let after = vp.translation();
        assert_eq!(after - before, egui::vec2(12.5, -3.0));
    }

    #[test]
    fn zero_size_viewport_degenerates_harmlessly() {
        let mut vp = ViewportState::new();
        vp.center(egui::Vec2::ZERO, bbox());
        assert_eq!(vp.translation(), egui::vec2(-260.0, -106.0));
    }

    #[test]
    fn button_and_wheel_factors() {
        let mut vp = ViewportState::new();
        vp.zoom_in(VIEWPORT, bbox());
        assert!((vp.scale() - 1.2).abs() < 1e-6);
        vp.wheel_zoom(true, VIEWPORT, bbox());
        assert!((vp.scale() - 1.32).abs() < 1e-5);
        vp.zoom_out(VIEWPORT, bbox());
        assert!((vp.scale() - 1.1).abs() < 1e-6);
    }
}
