//! Theme support module for the OrgView GUI.
//!
//! Provides color schemes for the profile viewer: panel and text colors
//! plus the org-chart canvas palette (node boxes, connectors, background
//! grid) and the cyan/blue accent pair used by chips, bars, and gradients.
//!
//! # Examples
//!
//! ```
//! use orgview::theme::ThemeManager;
//!
//! let manager = ThemeManager::new();
//! let light = manager.get_theme("Light").unwrap();
//! println!("Light canvas grid: {:?}", light.colors.grid);
//! ```

use egui::Color32;
use std::collections::HashMap;

/// Complete color palette for a theme, covering all UI elements
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Background colors
    pub panel_background: Color32,
    pub extreme_background: Color32,

    // Foreground colors
    pub text: Color32,
    pub text_dim: Color32,
    pub text_strong: Color32,

    // Interactive colors
    pub selection: Color32,
    pub hover: Color32,
    pub border: Color32,

    // Accent pair (chips, chart bars, placeholder gradient echo)
    pub accent_cyan: Color32,
    pub accent_blue: Color32,

    // Org chart canvas
    pub node_fill: Color32,
    pub node_stroke: Color32,
    pub link: Color32,
    pub grid: Color32,
}

/// A complete theme definition with metadata and color palette
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub description: String,
    pub colors: ThemeColors,
}

/// Centralized theme manager providing access to all available themes
pub struct ThemeManager {
    themes: HashMap<String, Theme>,
    current_theme_name: String,
}

impl ThemeManager {
    /// Creates a new ThemeManager initialized with all built-in themes
    pub fn new() -> Self {
        let mut themes = HashMap::new();

        themes.insert("Light".to_string(), light_theme());
        themes.insert("Dark".to_string(), dark_theme());
        themes.insert("Blueprint".to_string(), blueprint_theme());

        Self {
            themes,
            current_theme_name: "Light".to_string(),
        }
    }

    /// Retrieves a theme by name
    pub fn get_theme(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    /// Returns a list of all available theme names
    pub fn list_themes(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.themes.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }

    /// Gets the currently selected theme
    pub fn current_theme(&self) -> &Theme {
        self.themes.get(&self.current_theme_name).unwrap()
    }

    /// Sets the current theme by name
    pub fn set_current_theme(&mut self, name: &str) -> Result<(), String> {
        if self.themes.contains_key(name) {
            self.current_theme_name = name.to_string();
            Ok(())
        } else {
            Err(format!("Theme '{}' not found", name))
        }
    }

    /// Applies a theme's colors to egui visuals
    pub fn apply_theme(&self, theme: &Theme, visuals: &mut egui::Visuals) {
        let colors = &theme.colors;

        // Override background colors
        visuals.panel_fill = colors.panel_background;
        visuals.extreme_bg_color = colors.extreme_background;
        visuals.faint_bg_color = colors.hover;

        // Override text colors
        visuals.override_text_color = Some(colors.text);

        // Override selection
        visuals.selection.bg_fill = colors.selection;
        visuals.selection.stroke.color = colors.accent_blue;

        // Override widget colors
        visuals.widgets.noninteractive.bg_fill = colors.panel_background;
        visuals.widgets.inactive.bg_fill = colors.hover;
        visuals.widgets.hovered.bg_fill = colors.hover;
        visuals.widgets.active.bg_fill = colors.selection;

        // Override hyperlink
        visuals.hyperlink_color = colors.accent_cyan;
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates the Light theme, matching the profile site's palette
fn light_theme() -> Theme {
    Theme {
        name: "Light".to_string(),
        description: "Light theme matching the company site".to_string(),
        colors: ThemeColors {
            panel_background: Color32::from_rgb(248, 250, 252),
            extreme_background: Color32::WHITE,

            text: hex_to_color32("#0c1220"),
            text_dim: Color32::from_rgb(110, 120, 135),
            text_strong: hex_to_color32("#0c1220"),

            selection: Color32::from_rgb(185, 215, 255),
            hover: Color32::from_rgb(225, 232, 240),
            border: Color32::from_rgb(170, 180, 195),

            accent_cyan: Color32::from_rgb(0, 234, 255),
            accent_blue: Color32::from_rgb(0, 163, 255),

            node_fill: Color32::WHITE,
            node_stroke: Color32::from_rgba_unmultiplied(0, 119, 255, 115),
            link: Color32::from_rgba_unmultiplied(15, 23, 42, 102),
            grid: Color32::from_rgba_unmultiplied(15, 23, 42, 38),
        },
    }
}

/// Creates the Dark theme
fn dark_theme() -> Theme {
    Theme {
        name: "Dark".to_string(),
        description: "Dark theme with the same accent pair".to_string(),
        colors: ThemeColors {
            panel_background: Color32::from_rgb(24, 27, 33),
            extreme_background: Color32::from_rgb(13, 15, 19),

            text: Color32::from_rgb(230, 241, 255),
            text_dim: Color32::from_rgb(140, 150, 165),
            text_strong: Color32::WHITE,

            selection: Color32::from_rgb(45, 75, 115),
            hover: Color32::from_rgb(45, 50, 60),
            border: Color32::from_rgb(90, 100, 115),

            accent_cyan: Color32::from_rgb(0, 234, 255),
            accent_blue: Color32::from_rgb(0, 163, 255),

            node_fill: Color32::from_rgb(32, 37, 46),
            node_stroke: Color32::from_rgba_unmultiplied(0, 163, 255, 140),
            link: Color32::from_rgba_unmultiplied(200, 215, 235, 110),
            grid: Color32::from_rgba_unmultiplied(200, 215, 235, 28),
        },
    }
}

/// Creates the Blueprint theme, a drafting-table look for the org chart
fn blueprint_theme() -> Theme {
    Theme {
        name: "Blueprint".to_string(),
        description: "Blueprint-paper look with chalk lines".to_string(),
        colors: ThemeColors {
            panel_background: hex_to_color32("#0d2b52"),
            extreme_background: hex_to_color32("#09203d"),

            text: hex_to_color32("#dce9f7"),
            text_dim: hex_to_color32("#7d9cc0"),
            text_strong: Color32::WHITE,

            selection: hex_to_color32("#1c4d8f"),
            hover: hex_to_color32("#123a6d"),
            border: hex_to_color32("#3d6ca3"),

            accent_cyan: hex_to_color32("#35e0ff"),
            accent_blue: hex_to_color32("#6db3ff"),

            node_fill: hex_to_color32("#102f5e"),
            node_stroke: with_alpha(Color32::WHITE, 150),
            link: with_alpha(Color32::WHITE, 120),
            grid: with_alpha(Color32::WHITE, 26),
        },
    }
}

/// Converts a hex color string (like "#0c1220") to Color32
pub fn hex_to_color32(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');

    if hex.len() == 6 {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color32::from_rgb(r, g, b)
    } else {
        Color32::from_rgb(0, 0, 0) // Fallback to black
    }
}

/// Sets the alpha channel of a color
pub fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_premultiplied(color.r(), color.g(), color.b(), alpha)
}
