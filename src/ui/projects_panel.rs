//! Projects panel UI rendering.
//!
//! Side panel with the filter chip row and the filtered project cards.
//! Each card shows its generated placeholder thumbnail with the caption
//! drawn over the band, the project name and blurb, and an export action.
//! Clicking a card opens the details modal.

use eframe::egui;
use std::path::PathBuf;

use orgview::{project_catalog, Category, CategoryFilter, ThemeColors};

use crate::app::AppState;

/// Height of the caption band baked into the placeholder raster, scaled to
/// the thumbnail's on-screen size.
const CAPTION_BAND_FRACTION: f32 = 48.0 / 360.0;

/// Result of projects panel interactions that need to be handled by the
/// application.
pub enum ProjectsPanelInteraction {
    /// A project card was clicked; open the details modal
    ProjectClicked {
        index: usize,
        card_id: egui::Id,
    },
    /// The user picked a destination for a full-size placeholder export
    ExportRequested {
        index: usize,
        path: PathBuf,
    },
}

/// Renders the complete projects panel.
pub fn render_projects_panel(
    ui: &mut egui::Ui,
    ctx: &egui::Context,
    state: &mut AppState,
    theme_colors: &ThemeColors,
) -> Option<ProjectsPanelInteraction> {
    let mut interaction = None;

    ui.heading("Projects");
    ui.separator();

    render_filter_chips(ui, state);
    ui.add_space(4.0);

    let visible = state.filter.visible_projects();
    if visible.is_empty() {
        ui.label("No projects in this category.");
        return None;
    }

    egui::ScrollArea::vertical()
        .id_salt("projects_scroll")
        .show(ui, |ui| {
            for index in visible {
                if let Some(card_interaction) =
                    render_project_card(ui, ctx, state, index, theme_colors)
                {
                    interaction = Some(card_interaction);
                }
                ui.add_space(8.0);
            }
        });

    interaction
}

/// Renders the chip row; exactly one chip is pressed at a time.
fn render_filter_chips(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal_wrapped(|ui| {
        let mut chips = vec![CategoryFilter::All];
        chips.extend(Category::ALL.map(CategoryFilter::Only));

        for chip in chips {
            let active = state.filter.active() == chip;
            if ui.selectable_label(active, chip.label()).clicked() {
                state.filter.set_active(chip);
            }
        }
    });
}

fn render_project_card(
    ui: &mut egui::Ui,
    ctx: &egui::Context,
    state: &mut AppState,
    index: usize,
    theme_colors: &ThemeColors,
) -> Option<ProjectsPanelInteraction> {
    let project = &project_catalog()[index];
    let mut interaction = None;
    let card_id = ui.id().with(("project_card", index));

    let frame_response = egui::Frame::group(ui.style())
        .fill(theme_colors.extreme_background)
        .stroke(egui::Stroke::new(1.0, theme_colors.border))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());

            // Thumbnail with caption over the band
            let texture = state.thumbnails.get_or_create(ctx, index);
            let thumb_width = ui.available_width();
            let thumb_size = egui::vec2(thumb_width, thumb_width * 9.0 / 16.0);
            let image_response = ui.add(
                egui::Image::new(&texture)
                    .fit_to_exact_size(thumb_size)
                    .corner_radius(4.0),
            );
            let band_height = thumb_size.y * CAPTION_BAND_FRACTION;
            ui.painter().text(
                image_response.rect.center_bottom() - egui::vec2(0.0, band_height / 2.0),
                egui::Align2::CENTER_CENTER,
                project.caption,
                egui::FontId::proportional(14.0),
                egui::Color32::from_rgb(230, 241, 255),
            );

            ui.add_space(4.0);
            ui.label(egui::RichText::new(project.name).strong());
            ui.label(
                egui::RichText::new(project.blurb)
                    .small()
                    .color(theme_colors.text_dim),
            );

            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(project.category.label())
                        .small()
                        .color(theme_colors.accent_blue),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button("Export image…").clicked() {
                        let dialog = rfd::FileDialog::new()
                            .set_file_name(format!("{}.webp", slugify(project.name)))
                            .add_filter("Images", &["webp", "png"]);
                        if let Some(path) = dialog.save_file() {
                            interaction =
                                Some(ProjectsPanelInteraction::ExportRequested { index, path });
                        }
                    }
                });
            });
        });

    // The whole card opens the modal, like the site's clickable cards
    let card_response = ui.interact(frame_response.response.rect, card_id, egui::Sense::click());
    if card_response.clicked() && interaction.is_none() {
        interaction = Some(ProjectsPanelInteraction::ProjectClicked { index, card_id });
    }

    interaction
}

/// Lowercase-hyphen file stem from a project name.
fn slugify(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}
