// DocuChat - ui/panels/themes.rs
//
// Theme panel: free-text prompt input and the synthesized theme summary
// from the most recent request. Linebreaks in the summary are preserved
// (egui labels render embedded newlines as separate lines).
//
// This panel writes `state.request_submit`; gui.rs consumes it each
// frame and dispatches the actual request. No direct network access.

use crate::app::state::ThemePanelState;
use crate::ui::theme;

/// Render the theme panel. `awaiting` disables the submit control while a
/// request is in flight.
pub fn render(ui: &mut egui::Ui, state: &mut ThemePanelState, awaiting: bool) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.label(theme::section_heading("Summarize Themes", theme::THEME_ACCENT));
        ui.add_space(4.0);

        let input = ui.add(
            egui::TextEdit::singleline(&mut state.query_text)
                .hint_text("Ask to summarize themes\u{2026}")
                .desired_width(f32::INFINITY),
        );
        let pressed_enter = input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if pressed_enter && !awaiting {
            state.request_submit = true;
        }

        ui.add_space(4.0);
        ui.horizontal(|ui| {
            if ui
                .add_enabled(!awaiting, egui::Button::new("Summarize"))
                .clicked()
            {
                state.request_submit = true;
            }
            if awaiting {
                ui.spinner();
                ui.label(egui::RichText::new("Summarizing\u{2026}").color(theme::HINT_TEXT));
            }
        });

        if !state.summary.is_empty() {
            ui.add_space(6.0);
            if state.is_error {
                ui.label(egui::RichText::new(&state.summary).color(theme::ERROR_TEXT));
            } else {
                ui.label(&state.summary);
            }
        }
    });
}
