// DocuChat - ui/theme.rs
//
// Colour scheme and layout constants.
// No dependencies on app state or business logic.

use egui::Color32;

/// Accent colour of the upload panel.
pub const UPLOAD_ACCENT: Color32 = Color32::from_rgb(96, 165, 250); // Blue 400

/// Accent colour of the query panel.
pub const QUERY_ACCENT: Color32 = Color32::from_rgb(74, 222, 128); // Green 400

/// Accent colour of the theme panel.
pub const THEME_ACCENT: Color32 = Color32::from_rgb(192, 132, 252); // Purple 400

/// Error text (theme error lines, failed upload status).
pub const ERROR_TEXT: Color32 = Color32::from_rgb(248, 113, 113); // Red 400

/// Success text (upload status line).
pub const SUCCESS_TEXT: Color32 = Color32::from_rgb(74, 222, 128); // Green 400

/// Dim hint text.
pub const HINT_TEXT: Color32 = Color32::from_rgb(156, 163, 175); // Gray 400

/// Vertical spacing between the stacked panels.
pub const PANEL_SPACING: f32 = 12.0;

/// Section heading in a panel's accent colour.
pub fn section_heading(text: &str, accent: Color32) -> egui::RichText {
    egui::RichText::new(text).heading().color(accent)
}

/// Apply the configured body font size to the egui context, scaling the
/// derived text styles with it.
pub fn apply_font_size(ctx: &egui::Context, size: f32) {
    let mut style = (*ctx.style()).clone();
    for (text_style, font) in style.text_styles.iter_mut() {
        font.size = match text_style {
            egui::TextStyle::Heading => size + 4.0,
            egui::TextStyle::Small => (size - 2.5).max(8.0),
            _ => size,
        };
    }
    ctx.set_style(style);
}
