// DocuChat - ui/panels/upload.rs
//
// Upload panel: pick a local document, submit it, show the chunk-count
// status line (or the opaque failure line) beneath the controls.
//
// This panel writes `state.request_submit`; gui.rs consumes it each
// frame and dispatches the actual request. No direct network access.

use crate::app::state::UploadPanelState;
use crate::core::model::SelectedFile;
use crate::ui::theme;

/// Render the upload panel. `awaiting` is true while an upload request is
/// in flight; the controls are disabled and a spinner shown for the
/// duration.
pub fn render(ui: &mut egui::Ui, state: &mut UploadPanelState, awaiting: bool) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.label(theme::section_heading("Upload Document", theme::UPLOAD_ACCENT));
        ui.add_space(4.0);

        ui.horizontal(|ui| {
            if ui
                .add_enabled(!awaiting, egui::Button::new("Choose File\u{2026}"))
                .on_hover_text("Select a document to upload (PDF, image, or text)")
                .clicked()
            {
                if let Some(path) = rfd::FileDialog::new().pick_file() {
                    state.selected = Some(SelectedFile::from_path(path));
                }
            }
            match &state.selected {
                Some(file) => {
                    ui.label(egui::RichText::new(&file.name))
                        .on_hover_text(file.path.display().to_string());
                }
                None => {
                    ui.label(egui::RichText::new("No file selected.").color(theme::HINT_TEXT));
                }
            }
        });

        ui.add_space(4.0);
        ui.horizontal(|ui| {
            // Submitting without a selection is a no-op; the disabled
            // button makes that unreachable from the UI.
            let can_submit = state.selected.is_some() && !awaiting;
            if ui.add_enabled(can_submit, egui::Button::new("Upload")).clicked() {
                state.request_submit = true;
            }
            if awaiting {
                ui.spinner();
                ui.label(egui::RichText::new("Uploading\u{2026}").color(theme::HINT_TEXT));
            }
        });

        if let Some(status) = &state.status {
            ui.add_space(4.0);
            let colour = if status.ok {
                theme::SUCCESS_TEXT
            } else {
                theme::ERROR_TEXT
            };
            ui.label(egui::RichText::new(&status.text).color(colour));
        }
    });
}
