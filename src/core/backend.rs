// DocuChat - core/backend.rs
//
// Blocking HTTP client for the document-QA backend. One method per
// endpoint; all three share the same status/decode handling.
//
// Calls run on background worker threads (app/request.rs), never on the
// UI thread. Free-text input is attached through reqwest's query builder
// so it is always percent-encoded.

use std::time::Duration;

use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::{Client, Response};
use serde::de::DeserializeOwned;

use crate::core::model::{
    media_type_for, Answer, ErrorBody, QueryResponse, SelectedFile, ThemeResponse, UploadReceipt,
};
use crate::util::constants;
use crate::util::error::BackendError;

/// Client for the upload/query/theme endpoints, configured once at startup.
#[derive(Debug)]
pub struct BackendClient {
    http: Client,
    base_url: String,
}

impl BackendClient {
    /// Build a client for `base_url` with a per-request `timeout`.
    ///
    /// The URL is validated here so a bad configuration fails at startup
    /// rather than on the first submission.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, BackendError> {
        let parsed = reqwest::Url::parse(base_url).map_err(|e| BackendError::InvalidUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(BackendError::InvalidUrl {
                url: base_url.to_string(),
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|source| BackendError::Client { source })?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// The configured base URL (no trailing slash), for display.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POST the selected file as a multipart form under the `file` field.
    pub fn upload(&self, file: &SelectedFile) -> Result<UploadReceipt, BackendError> {
        let bytes = std::fs::read(&file.path).map_err(|source| BackendError::FileRead {
            path: file.path.clone(),
            source,
        })?;
        tracing::debug!(file = %file.path.display(), bytes = bytes.len(), "Uploading document");

        let part = Part::bytes(bytes)
            .file_name(file.name.clone())
            .mime_str(media_type_for(&file.name))
            .map_err(|source| BackendError::Client { source })?;
        let form = Form::new().part(constants::UPLOAD_FIELD, part);

        let response = self
            .http
            .post(self.endpoint(constants::UPLOAD_PATH))
            .multipart(form)
            .send()
            .map_err(|source| BackendError::Transport {
                endpoint: constants::UPLOAD_PATH,
                source,
            })?;

        self.decode(response, constants::UPLOAD_PATH)
    }

    /// GET the query endpoint; returns the answer fragments in response order.
    pub fn query(&self, text: &str) -> Result<Vec<Answer>, BackendError> {
        tracing::debug!(chars = text.len(), "Submitting query");
        let response = self
            .http
            .get(self.endpoint(constants::QUERY_PATH))
            .query(&[(constants::QUERY_PARAM, text)])
            .send()
            .map_err(|source| BackendError::Transport {
                endpoint: constants::QUERY_PATH,
                source,
            })?;

        let body: QueryResponse = self.decode(response, constants::QUERY_PATH)?;
        Ok(body.answers)
    }

    /// GET the theme endpoint; returns the synthesized summary verbatim.
    pub fn themes(&self, text: &str) -> Result<String, BackendError> {
        tracing::debug!(chars = text.len(), "Requesting theme summary");
        let response = self
            .http
            .get(self.endpoint(constants::THEME_PATH))
            .query(&[(constants::QUERY_PARAM, text)])
            .send()
            .map_err(|source| BackendError::Transport {
                endpoint: constants::THEME_PATH,
                source,
            })?;

        let body: ThemeResponse = self.decode(response, constants::THEME_PATH)?;
        Ok(body.themes)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Shared success-check and body decoding. On a non-success status the
    /// body is probed for a structured `error` message so the caller can
    /// choose whether to surface it.
    fn decode<T: DeserializeOwned>(
        &self,
        response: Response,
        endpoint: &'static str,
    ) -> Result<T, BackendError> {
        let status = response.status();
        if !status.is_success() {
            let error = response
                .json::<ErrorBody>()
                .ok()
                .and_then(|body| body.error);
            return Err(BackendError::Status {
                endpoint,
                status: status.as_u16(),
                error,
            });
        }
        response
            .json::<T>()
            .map_err(|source| BackendError::Body { endpoint, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_unparseable_base_url() {
        let result = BackendClient::new("not a url", Duration::from_secs(1));
        assert!(
            matches!(result, Err(BackendError::InvalidUrl { .. })),
            "expected InvalidUrl, got {result:?}"
        );
    }

    #[test]
    fn rejects_non_http_scheme() {
        let result = BackendClient::new("ftp://localhost:8000", Duration::from_secs(1));
        assert!(
            matches!(result, Err(BackendError::InvalidUrl { .. })),
            "expected InvalidUrl, got {result:?}"
        );
    }

    #[test]
    fn trailing_slash_is_normalised() {
        let client = BackendClient::new("http://localhost:8000/", Duration::from_secs(1)).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(client.endpoint("/query"), "http://localhost:8000/query");
    }
}
