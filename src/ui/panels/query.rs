// DocuChat - ui/panels/query.rs
//
// Query panel: free-text question input and the list of answer fragments
// from the most recent query, in response order.
//
// This panel writes `state.request_submit`; gui.rs consumes it each
// frame and dispatches the actual request. No direct network access.

use crate::app::state::QueryPanelState;
use crate::ui::theme;

/// Render the query panel. `awaiting` disables the submit control while a
/// request is in flight.
pub fn render(ui: &mut egui::Ui, state: &mut QueryPanelState, awaiting: bool) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.label(theme::section_heading("Ask a Question", theme::QUERY_ACCENT));
        ui.add_space(4.0);

        let input = ui.add(
            egui::TextEdit::singleline(&mut state.query_text)
                .hint_text("Type your question\u{2026}")
                .desired_width(f32::INFINITY),
        );
        // Commit on Enter as well as via the button. Empty queries are
        // allowed; the backend decides what they mean.
        let pressed_enter = input.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if pressed_enter && !awaiting {
            state.request_submit = true;
        }

        ui.add_space(4.0);
        ui.horizontal(|ui| {
            if ui.add_enabled(!awaiting, egui::Button::new("Ask")).clicked() {
                state.request_submit = true;
            }
            if awaiting {
                ui.spinner();
                ui.label(egui::RichText::new("Searching\u{2026}").color(theme::HINT_TEXT));
            }
        });

        if !state.answers.is_empty() {
            ui.add_space(6.0);
            for answer in &state.answers {
                ui.horizontal_top(|ui| {
                    ui.label(egui::RichText::new("\u{2022}").color(theme::QUERY_ACCENT));
                    ui.label(&answer.content);
                });
            }
        }
    });
}
