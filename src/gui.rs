// DocuChat - gui.rs
//
// Top-level eframe::App implementation.
// Wires together the three panels and pumps each request lifecycle:
// poll completed requests, apply them to state, then dispatch any
// submissions the panels flagged during the previous frame.

use std::sync::Arc;

use crate::app::request::RequestManager;
use crate::app::state::AppState;
use crate::core::backend::BackendClient;
use crate::core::model::{Answer, UploadReceipt};
use crate::ui;
use crate::util::constants;
use crate::util::error::BackendError;

/// The DocuChat application.
pub struct DocuChatApp {
    pub state: AppState,
    upload_requests: RequestManager<Result<UploadReceipt, BackendError>>,
    query_requests: RequestManager<Result<Vec<Answer>, BackendError>>,
    theme_requests: RequestManager<Result<String, BackendError>>,
}

impl DocuChatApp {
    /// Create a new application instance with the given state and backend.
    pub fn new(state: AppState, client: Arc<BackendClient>) -> Self {
        Self {
            state,
            upload_requests: RequestManager::new(Arc::clone(&client)),
            query_requests: RequestManager::new(Arc::clone(&client)),
            theme_requests: RequestManager::new(client),
        }
    }
}

impl eframe::App for DocuChatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Apply completed requests ----
        if let Some(result) = self.upload_requests.poll() {
            self.state.status_message = match &result {
                Ok(receipt) => format!("Upload complete: {} chunks stored.", receipt.chunks),
                Err(_) => "Upload failed.".to_string(),
            };
            self.state.apply_upload(result);
        }
        if let Some(result) = self.query_requests.poll() {
            self.state.status_message = match &result {
                Ok(answers) => format!("Received {} answer(s).", answers.len()),
                Err(_) => "Query failed.".to_string(),
            };
            self.state.apply_query(result);
        }
        if let Some(result) = self.theme_requests.poll() {
            self.state.status_message = match &result {
                Ok(_) => "Theme summary ready.".to_string(),
                Err(_) => "Theme request failed.".to_string(),
            };
            self.state.apply_theme(result);
        }

        // ---- Dispatch submissions flagged by the panels ----
        if std::mem::take(&mut self.state.upload.request_submit) {
            // Submitting with no selection is a no-op (the button is
            // disabled, but a stale flag must not panic).
            if let Some(file) = self.state.upload.selected.clone() {
                self.state.status_message = format!("Uploading '{}'\u{2026}", file.name);
                self.upload_requests
                    .submit(move |client| client.upload(&file));
            }
        }
        if std::mem::take(&mut self.state.query.request_submit) {
            let text = self.state.query.query_text.clone();
            self.state.status_message = "Waiting for answers\u{2026}".to_string();
            self.query_requests.submit(move |client| client.query(&text));
        }
        if std::mem::take(&mut self.state.theme.request_submit) {
            let text = self.state.theme.query_text.clone();
            self.state.status_message = "Summarizing themes\u{2026}".to_string();
            self.theme_requests.submit(move |client| client.themes(&text));
        }

        let any_awaiting = self.upload_requests.awaiting()
            || self.query_requests.awaiting()
            || self.theme_requests.awaiting();

        // Header
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.vertical_centered(|ui| {
                ui.heading(constants::APP_NAME);
                ui.label(
                    egui::RichText::new("Document question answering")
                        .small()
                        .color(ui::theme::HINT_TEXT),
                );
            });
            ui.add_space(6.0);
        });

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if any_awaiting {
                    ui.spinner();
                }
                ui.label(&self.state.status_message);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(&self.state.backend_label)
                            .small()
                            .color(ui::theme::HINT_TEXT),
                    );
                });
            });
        });

        // Central panel: the three request panels, stacked.
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    ui.add_space(ui::theme::PANEL_SPACING);
                    ui::panels::upload::render(
                        ui,
                        &mut self.state.upload,
                        self.upload_requests.awaiting(),
                    );
                    ui.add_space(ui::theme::PANEL_SPACING);
                    ui::panels::query::render(
                        ui,
                        &mut self.state.query,
                        self.query_requests.awaiting(),
                    );
                    ui.add_space(ui::theme::PANEL_SPACING);
                    ui::panels::themes::render(
                        ui,
                        &mut self.state.theme,
                        self.theme_requests.awaiting(),
                    );
                });
        });

        // Keep repainting while requests are in flight so completions
        // sent from worker threads are applied promptly.
        if any_awaiting {
            ctx.request_repaint_after(std::time::Duration::from_millis(
                constants::REQUEST_POLL_INTERVAL_MS,
            ));
        }
    }
}
