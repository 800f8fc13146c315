//! OrgView GUI application.
//!
//! Interactive viewer for a construction company's profile, built with the
//! egui framework. The viewer features:
//! - An org chart canvas with tidy tree layout, drag panning, and zoom
//! - A projects panel with filter chips, generated placeholder thumbnails,
//!   and a details modal
//! - An annual turnover bar chart with a reveal animation
//! - Multiple theme support with persistent preferences
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state management and coordination
//! - `state/` - One-concern state structs (viewport lives in the library)
//! - `ui/` - UI panel rendering, interaction, and input handling
//! - `rendering/` - Low-level painter code for the charts
//! - `cache/` - Generated texture caching
//! - `utils/` - Formatting helpers

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;
use std::fs;
use std::path::Path;

use anyhow::{Context as _, Result};
use orgview::{encode_placeholder, render_placeholder, CategoryFilter, PlaceholderSpec};

mod app;
mod cache;
mod rendering;
mod state;
mod ui;
mod utils;

use app::{AppState, SettingsCoordinator, ThemeCoordinator};
use ui::panel_manager::{PanelInteraction, PanelManager};

const FILTER_KEY: &str = "active_filter";
const REDUCED_MOTION_KEY: &str = "reduced_motion";

/// Main application entry point that initializes and launches the viewer.
fn main() -> eframe::Result {
    // Optional initial category (the site preselects from a ?cat= hash)
    let initial_filter = std::env::args().nth(1).map(|arg| CategoryFilter::parse(&arg));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_title("OrgView"),
        ..Default::default()
    };

    eframe::run_native(
        "OrgView",
        options,
        Box::new(move |cc| Ok(Box::new(OrgViewApp::new(cc, initial_filter)))),
    )
}

/// The main OrgView application.
///
/// Delegates panel layout to `PanelManager` and persistence to the theme
/// and settings coordinators; interaction results come back as
/// `PanelInteraction` values handled here.
struct OrgViewApp {
    /// Centralized application state
    state: AppState,
}

impl OrgViewApp {
    /// Creates a new viewer with preferences loaded from persistent
    /// storage. A command-line category, when given, overrides the
    /// persisted filter chip.
    fn new(cc: &eframe::CreationContext, initial_filter: Option<CategoryFilter>) -> Self {
        let theme_name = ThemeCoordinator::load_theme_from_storage(cc.storage);
        let stored_filter: CategoryFilter =
            SettingsCoordinator::load_setting(cc.storage, FILTER_KEY);
        let reduced_motion: bool =
            SettingsCoordinator::load_setting(cc.storage, REDUCED_MOTION_KEY);

        let filter = initial_filter.unwrap_or(stored_filter);
        Self {
            state: AppState::with_settings(theme_name, filter, reduced_motion),
        }
    }

    /// Handles panel interactions returned by the PanelManager.
    fn handle_panel_interaction(&mut self, interaction: PanelInteraction, ctx: &egui::Context) {
        match interaction {
            PanelInteraction::ProjectClicked { index, card_id } => {
                self.state.modal.open(index, Some(card_id));
                // Drop keyboard focus so the modal owns Escape
                ctx.memory_mut(|mem| mem.surrender_focus(card_id));
            }
            PanelInteraction::ExportRequested { index, path } => {
                match export_placeholder(index, &path) {
                    Ok(written) => {
                        self.state.error_message = Some(format!("Exported {}", written.display()));
                    }
                    Err(err) => {
                        self.state.error_message = Some(format!("Export failed: {err:#}"));
                    }
                }
            }
        }
    }
}

impl eframe::App for OrgViewApp {
    /// Called when the app is being shut down - ensures preferences are saved.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        ThemeCoordinator::save_theme_to_storage(storage, self.state.theme.current_theme_name());
        SettingsCoordinator::save_setting(storage, FILTER_KEY, &self.state.filter.active());
        SettingsCoordinator::save_setting(storage, REDUCED_MOTION_KEY, &self.state.reduced_motion);
    }

    /// Main update loop that renders all UI panels and handles state.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ThemeCoordinator::apply_current_theme(ctx, &self.state);

        // Escape resets the chart viewport; the modal takes precedence
        // (it consumes Escape through its own close handling)
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) && !self.state.modal.is_open() {
            self.state.reset_viewport();
        }

        if let Some(interaction) = PanelManager::render_all_panels(ctx, &mut self.state) {
            self.handle_panel_interaction(interaction, ctx);
        }
    }
}

/// Renders and writes a full-size placeholder for a project.
///
/// WebP is attempted first; if the fallback encoding kicks in, the file
/// extension is corrected to match what was actually written.
fn export_placeholder(index: usize, path: &Path) -> Result<std::path::PathBuf> {
    let spec = PlaceholderSpec {
        width: 640,
        height: 360,
        seed: index as u64,
    };
    let img = render_placeholder(&spec);
    let (bytes, format) = encode_placeholder(&img)?;

    let path = path.with_extension(format.extension());
    fs::write(&path, bytes).with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}
