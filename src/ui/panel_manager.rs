//! Panel orchestration and layout management.
//!
//! Coordinates all UI panels (header, org chart, projects, chart, status)
//! and manages their layout and interaction coordination.

use crate::app::AppState;
use crate::ui::{chart_panel, details_modal, header, org_panel, projects_panel, status_bar};

/// Result of panel interactions that need to be handled by the application.
pub enum PanelInteraction {
    /// A project card was clicked
    ProjectClicked {
        index: usize,
        card_id: egui::Id,
    },
    /// A placeholder export destination was picked
    ExportRequested {
        index: usize,
        path: std::path::PathBuf,
    },
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// This is the main entry point for rendering the entire UI, called
    /// from the eframe::App::update() implementation.
    pub fn render_all_panels(ctx: &egui::Context, state: &mut AppState) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;

        let theme_colors = state
            .theme
            .theme_manager()
            .get_theme(state.theme.current_theme_name())
            .unwrap_or_else(|| state.theme.theme_manager().current_theme())
            .colors
            .clone();

        // Header at the top
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            header::render_header(ui, state);
        });

        // Status strip at the very bottom
        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            status_bar::render_status_bar(ui, state);
        });

        // Turnover chart above the status strip
        egui::TopBottomPanel::bottom("chart_panel")
            .default_height(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                egui::Frame::default().inner_margin(4.0).show(ui, |ui| {
                    chart_panel::render_chart_panel(ui, state, &theme_colors);
                });
            });

        // Right panel: projects
        let projects_frame = egui::Frame::default()
            .inner_margin(egui::Margin::same(6))
            .fill(ctx.style().visuals.panel_fill);

        egui::SidePanel::right("projects_panel")
            .default_width(340.0)
            .resizable(true)
            .frame(projects_frame)
            .show(ctx, |ui| {
                if let Some(projects_interaction) =
                    projects_panel::render_projects_panel(ui, ctx, state, &theme_colors)
                {
                    interaction = Some(match projects_interaction {
                        projects_panel::ProjectsPanelInteraction::ProjectClicked {
                            index,
                            card_id,
                        } => PanelInteraction::ProjectClicked { index, card_id },
                        projects_panel::ProjectsPanelInteraction::ExportRequested {
                            index,
                            path,
                        } => PanelInteraction::ExportRequested { index, path },
                    });
                }
            });

        // Central panel: org chart canvas
        let canvas_frame = egui::Frame::default()
            .inner_margin(egui::Margin::same(0))
            .fill(ctx.style().visuals.extreme_bg_color);

        egui::CentralPanel::default()
            .frame(canvas_frame)
            .show(ctx, |ui| {
                org_panel::render_org_panel(ui, ctx, state, &theme_colors);
            });

        // Details modal over everything
        details_modal::render_details_modal(ctx, state);

        interaction
    }
}
