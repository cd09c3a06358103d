// DocuChat - core/model.rs
//
// Core data model types. Pure data definitions with no I/O and no UI.
//
// The wire shapes mirror the backend contract exactly: `answers` and
// `themes` are defaulted so a success response missing the field renders
// as "no results" instead of failing, while `chunks` is required and an
// upload response without it counts as a failure.

use serde::Deserialize;
use std::path::PathBuf;

use crate::util::constants;

// =============================================================================
// Selected file
// =============================================================================

/// Handle to the user-chosen local file for the upload panel.
///
/// Only the path and display name are held; the binary content is read on
/// the worker thread at submit time, so a file that changes on disk
/// between selection and submission is uploaded as-is at submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub path: PathBuf,
    pub name: String,
}

impl SelectedFile {
    pub fn from_path(path: PathBuf) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "file".to_string());
        Self { path, name }
    }
}

/// Best-effort media type for the multipart upload part, from the file
/// extension. The backend decides what it actually accepts; unknown
/// extensions are sent as an opaque byte stream.
pub fn media_type_for(name: &str) -> &'static str {
    let extension = name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match extension.as_str() {
        "pdf" => "application/pdf",
        "txt" => "text/plain",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "tif" | "tiff" => "image/tiff",
        "bmp" => "image/bmp",
        _ => "application/octet-stream",
    }
}

// =============================================================================
// Wire shapes
// =============================================================================

/// Success body of the upload endpoint. `chunks` is the number of text
/// chunks the backend extracted and stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct UploadReceipt {
    pub chunks: u64,
}

impl UploadReceipt {
    /// The exact status line shown beneath the upload control.
    pub fn status_line(&self) -> String {
        format!("Uploaded successfully: {} chunks", self.chunks)
    }
}

/// One answer fragment returned by the query endpoint. `meta` is accepted
/// and kept (response order matters for display) but never rendered.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Answer {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub meta: serde_json::Map<String, serde_json::Value>,
}

impl Answer {
    /// The single synthetic entry shown when a query fails.
    pub fn failure_marker() -> Self {
        Self {
            content: constants::STATUS_QUERY_FAILED.to_string(),
            meta: serde_json::Map::new(),
        }
    }
}

/// Success body of the query endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct QueryResponse {
    #[serde(default)]
    pub answers: Vec<Answer>,
}

/// Success body of the theme endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct ThemeResponse {
    #[serde(default)]
    pub themes: String,
}

/// Error body shape any endpoint may return. Only the theme flow surfaces
/// the message; the other panels log it.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_type_covers_backend_supported_formats() {
        assert_eq!(media_type_for("report.pdf"), "application/pdf");
        assert_eq!(media_type_for("notes.TXT"), "text/plain");
        assert_eq!(media_type_for("scan.jpeg"), "image/jpeg");
        assert_eq!(media_type_for("scan.tif"), "image/tiff");
        assert_eq!(media_type_for("archive.tar.gz"), "application/octet-stream");
        assert_eq!(media_type_for("no_extension"), "application/octet-stream");
    }

    #[test]
    fn selected_file_uses_final_path_component() {
        let file = SelectedFile::from_path(PathBuf::from("/tmp/docs/report.pdf"));
        assert_eq!(file.name, "report.pdf");
    }

    #[test]
    fn answer_fields_default_when_missing() {
        let answer: Answer = serde_json::from_str(r#"{"content":"A"}"#).unwrap();
        assert_eq!(answer.content, "A");
        assert!(answer.meta.is_empty());

        let bare: Answer = serde_json::from_str("{}").unwrap();
        assert_eq!(bare.content, "");
    }

    #[test]
    fn query_response_missing_answers_is_empty() {
        let response: QueryResponse = serde_json::from_str("{}").unwrap();
        assert!(response.answers.is_empty());
    }

    #[test]
    fn theme_response_missing_themes_is_empty_string() {
        let response: ThemeResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response.themes, "");
    }

    #[test]
    fn upload_receipt_requires_chunks() {
        assert!(serde_json::from_str::<UploadReceipt>("{}").is_err());
        let receipt: UploadReceipt =
            serde_json::from_str(r#"{"status":"uploaded","chunks":12}"#).unwrap();
        assert_eq!(receipt.status_line(), "Uploaded successfully: 12 chunks");
    }

    #[test]
    fn answers_preserve_response_order_and_duplicates() {
        let response: QueryResponse = serde_json::from_str(
            r#"{"answers":[{"content":"B","meta":{}},{"content":"A","meta":{}},{"content":"B","meta":{}}]}"#,
        )
        .unwrap();
        let contents: Vec<_> = response.answers.iter().map(|a| a.content.as_str()).collect();
        assert_eq!(contents, vec!["B", "A", "B"]);
    }
}
