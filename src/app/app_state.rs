//! Centralized application state for the OrgView GUI.
//!
//! This module implements the State pattern by composing focused state
//! components that each manage a specific aspect of the application's
//! state. This approach:
//! - Keeps invariants local within each component
//! - Allows borrow-checker friendly access to different state aspects
//! - Provides intent-revealing methods for state mutations

use crate::cache::ThumbnailCache;
use crate::state::{
    ChartState, FilterState, InteractionState, ModalState, OrgChartState, ThemeState,
};
use orgview::{CategoryFilter, ViewportState};

/// Main application state composed of focused state components.
pub struct AppState {
    // ===== Focused State Components =====
    /// The laid-out org chart and its geometry
    pub org: OrgChartState,

    /// Pan/zoom transform for the org chart canvas
    pub viewport: ViewportState,

    /// Pointer interaction state (drag panning)
    pub interaction: InteractionState,

    /// Active project filter chip
    pub filter: FilterState,

    /// Project details modal
    pub modal: ModalState,

    /// Turnover chart reveal animation
    pub chart: ChartState,

    /// Theme and styling state
    pub theme: ThemeState,

    // ===== Top-Level State =====
    /// Suppresses the chart reveal animation when set
    pub reduced_motion: bool,

    /// Current error message to display (if any)
    pub error_message: Option<String>,

    /// Placeholder thumbnail texture cache
    pub thumbnails: ThumbnailCache,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates a new application state with default values.
    pub fn new() -> Self {
        Self {
            org: OrgChartState::new(),
            viewport: ViewportState::new(),
            interaction: InteractionState::new(),
            filter: FilterState::new(),
            modal: ModalState::new(),
            chart: ChartState::new(),
            theme: ThemeState::new(),
            reduced_motion: false,
            error_message: None,
            thumbnails: ThumbnailCache::new(),
        }
    }

    /// Creates an AppState with settings loaded from storage plus an
    /// optional preselected filter chip.
    pub fn with_settings(
        theme_name: String,
        filter: CategoryFilter,
        reduced_motion: bool,
    ) -> Self {
        Self {
            theme: ThemeState::with_theme(theme_name),
            filter: FilterState::with_filter(filter),
            reduced_motion,
            ..Self::new()
        }
    }

    // ===== High-Level Coordination Methods =====

    /// Resets the org chart viewport to the canonical centered state.
    pub fn reset_viewport(&mut self) {
        self.viewport.reset(self.org.canvas_size(), self.org.bbox());
    }
}
