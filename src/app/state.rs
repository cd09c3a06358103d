// DocuChat - app/state.rs
//
// Application state management. One state struct per panel plus the
// shared status bar text. Owned by the eframe::App implementation.
//
// Panels write their `request_submit` flags; gui.rs consumes them each
// frame and dispatches through the request managers. The `apply_*`
// methods are the single place where backend results become displayed
// state, so the response contracts live here and nowhere else:
//   - a new applied response fully replaces the previous result
//   - every failure is converted to its fixed user-visible form and
//     logged once; nothing propagates past this boundary

use crate::core::model::{Answer, SelectedFile, UploadReceipt};
use crate::util::constants;
use crate::util::error::BackendError;

/// Upload panel status line with its success/failure colouring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadStatus {
    pub text: String,
    pub ok: bool,
}

/// State owned by the upload panel.
#[derive(Debug, Default)]
pub struct UploadPanelState {
    /// Currently selected file (replaced on each selection).
    pub selected: Option<SelectedFile>,

    /// Status line from the most recent completed upload.
    pub status: Option<UploadStatus>,

    /// Set by the panel when the upload button is clicked.
    pub request_submit: bool,
}

/// State owned by the query panel.
#[derive(Debug, Default)]
pub struct QueryPanelState {
    /// Pending question text; never reset automatically.
    pub query_text: String,

    /// Answer fragments from the most recent query, in response order.
    pub answers: Vec<Answer>,

    /// Set by the panel when the ask button is clicked (or Enter pressed).
    pub request_submit: bool,
}

/// State owned by the theme panel.
#[derive(Debug, Default)]
pub struct ThemePanelState {
    /// Pending prompt text; never reset automatically.
    pub query_text: String,

    /// Summary (or error line) from the most recent request. Linebreaks
    /// are preserved through to rendering.
    pub summary: String,

    /// True when `summary` is an error line rather than backend output.
    pub is_error: bool,

    /// Set by the panel when the summarize button is clicked (or Enter pressed).
    pub request_submit: bool,
}

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    pub upload: UploadPanelState,
    pub query: QueryPanelState,
    pub theme: ThemePanelState,

    /// Status message for the status bar.
    pub status_message: String,

    /// Backend base URL, shown in the status bar.
    pub backend_label: String,
}

impl AppState {
    pub fn new(backend_label: String) -> Self {
        Self {
            upload: UploadPanelState::default(),
            query: QueryPanelState::default(),
            theme: ThemePanelState::default(),
            status_message: "Ready.".to_string(),
            backend_label,
        }
    }

    /// Apply an upload result: the exact chunk-count line on success, the
    /// fixed opaque line on any failure.
    pub fn apply_upload(&mut self, result: Result<UploadReceipt, BackendError>) {
        self.upload.status = Some(match result {
            Ok(receipt) => {
                tracing::info!(chunks = receipt.chunks, "Upload accepted");
                UploadStatus {
                    text: receipt.status_line(),
                    ok: true,
                }
            }
            Err(error) => {
                tracing::warn!(error = %error, "Upload failed");
                UploadStatus {
                    text: constants::STATUS_UPLOAD_FAILED.to_string(),
                    ok: false,
                }
            }
        });
    }

    /// Apply a query result: the answer list is replaced wholesale; a
    /// failure becomes a single synthetic entry.
    pub fn apply_query(&mut self, result: Result<Vec<Answer>, BackendError>) {
        self.query.answers = match result {
            Ok(answers) => {
                tracing::info!(answers = answers.len(), "Query answered");
                answers
            }
            Err(error) => {
                tracing::warn!(error = %error, "Query failed");
                vec![Answer::failure_marker()]
            }
        };
    }

    /// Apply a theme result: the summary verbatim on success; on failure
    /// the backend's structured error message when present, otherwise the
    /// fixed fallback. Only this flow surfaces error bodies.
    pub fn apply_theme(&mut self, result: Result<String, BackendError>) {
        match result {
            Ok(summary) => {
                tracing::info!(chars = summary.len(), "Theme summary received");
                self.theme.summary = summary;
                self.theme.is_error = false;
            }
            Err(error) => {
                tracing::warn!(error = %error, "Theme request failed");
                let detail = error
                    .surfaced_message()
                    .unwrap_or(constants::THEME_ERROR_FALLBACK);
                self.theme.summary = format!("Error: {detail}");
                self.theme.is_error = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState::new("http://localhost:8000".to_string())
    }

    fn status_error(error: Option<&str>) -> BackendError {
        BackendError::Status {
            endpoint: "/theme",
            status: 500,
            error: error.map(str::to_string),
        }
    }

    #[test]
    fn upload_success_formats_chunk_count() {
        let mut state = state();
        state.apply_upload(Ok(UploadReceipt { chunks: 5 }));
        let status = state.upload.status.unwrap();
        assert_eq!(status.text, "Uploaded successfully: 5 chunks");
        assert!(status.ok);
    }

    #[test]
    fn upload_failure_is_opaque() {
        let mut state = state();
        // Even a failure carrying a backend message collapses to the fixed line.
        state.apply_upload(Err(status_error(Some("disk full"))));
        let status = state.upload.status.unwrap();
        assert_eq!(status.text, "Upload failed");
        assert!(!status.ok);
    }

    #[test]
    fn query_failure_yields_single_synthetic_entry() {
        let mut state = state();
        state.query.answers = vec![Answer::failure_marker(), Answer::failure_marker()];
        state.apply_query(Err(status_error(None)));
        assert_eq!(state.query.answers.len(), 1);
        assert_eq!(state.query.answers[0].content, "Query failed");
        assert!(state.query.answers[0].meta.is_empty());
    }

    #[test]
    fn query_success_replaces_previous_answers_wholesale() {
        let mut state = state();
        state.apply_query(Err(status_error(None)));
        state.apply_query(Ok(vec![]));
        assert!(state.query.answers.is_empty());
    }

    #[test]
    fn theme_error_surfaces_structured_message() {
        let mut state = state();
        state.apply_theme(Err(status_error(Some("bad request"))));
        assert_eq!(state.theme.summary, "Error: bad request");
        assert!(state.theme.is_error);
    }

    #[test]
    fn theme_error_without_message_uses_fallback() {
        let mut state = state();
        state.apply_theme(Err(status_error(None)));
        assert_eq!(state.theme.summary, "Error: An unexpected error occurred.");
        assert!(state.theme.is_error);
    }

    #[test]
    fn theme_success_clears_error_flag() {
        let mut state = state();
        state.apply_theme(Err(status_error(None)));
        state.apply_theme(Ok("Line1\nLine2".to_string()));
        assert_eq!(state.theme.summary, "Line1\nLine2");
        assert!(!state.theme.is_error);
    }
}
