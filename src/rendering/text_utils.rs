//! Text rendering utilities.

use eframe::egui;

/// Shortens `text` so it fits within `max_width`, appending ".." when
/// anything was cut. Uses galley measurement, so the result is correct for
/// proportional fonts.
pub fn truncate_to_width(
    text: &str,
    max_width: f32,
    font_id: &egui::FontId,
    painter: &egui::Painter,
) -> String {
    let measure = |s: &str| {
        painter
            .layout_no_wrap(s.to_string(), font_id.clone(), egui::Color32::WHITE)
            .size()
            .x
    };

    if max_width <= 0.0 {
        return String::new();
    }
    if measure(text) <= max_width {
        return text.to_string();
    }

    let ellipsis = "..";
    let budget = max_width - measure(ellipsis);
    if budget <= 0.0 {
        return String::new();
    }

    // Binary search over the char count for the longest prefix that fits
    let chars: Vec<char> = text.chars().collect();
    let (mut low, mut high) = (0usize, chars.len());
    while low < high {
        let mid = (low + high + 1) / 2;
        let prefix: String = chars[..mid].iter().collect();
        if measure(&prefix) <= budget {
            low = mid;
        } else {
            high = mid - 1;
        }
    }

    let mut result: String = chars[..low].iter().collect();
    result.push_str(ellipsis);
    result
}
