// DocuChat - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// No string-based error propagation; all errors preserve the causal
// chain for diagnostic logging.
//
// Every backend failure is caught at the panel boundary and converted to
// a fixed user-visible string; these types exist so the log line carries
// the real cause while the UI stays deliberately terse.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all DocuChat operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum DocuChatError {
    /// Backend request construction or round trip failed.
    Backend(BackendError),

    /// Configuration loading or validation failed.
    Config(ConfigError),
}

impl fmt::Display for DocuChatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Backend(e) => write!(f, "Backend error: {e}"),
            Self::Config(e) => write!(f, "Configuration error: {e}"),
        }
    }
}

impl std::error::Error for DocuChatError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Backend(e) => Some(e),
            Self::Config(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Backend errors
// ---------------------------------------------------------------------------

/// Errors from the backend client.
///
/// `endpoint` is the request path (`/upload/`, `/query`, `/theme`) so a
/// single log line identifies the failing call.
#[derive(Debug)]
pub enum BackendError {
    /// The configured base URL is not a usable http(s) URL.
    InvalidUrl { url: String, reason: String },

    /// The HTTP client itself could not be constructed or a request part
    /// could not be built.
    Client { source: reqwest::Error },

    /// The selected file could not be read for upload.
    FileRead { path: PathBuf, source: io::Error },

    /// The request never completed: connect failure, DNS, timeout.
    Transport {
        endpoint: &'static str,
        source: reqwest::Error,
    },

    /// The backend answered with a non-success status. `error` carries the
    /// decoded `error` field of the response body when one was present.
    Status {
        endpoint: &'static str,
        status: u16,
        error: Option<String>,
    },

    /// Success status but the body was not the expected shape.
    Body {
        endpoint: &'static str,
        source: reqwest::Error,
    },
}

impl BackendError {
    /// The backend-supplied error message, when the response body carried
    /// one. Only the theme flow surfaces this to the user; the other
    /// panels log it and show their fixed failure string.
    pub fn surfaced_message(&self) -> Option<&str> {
        match self {
            Self::Status {
                error: Some(message),
                ..
            } => Some(message),
            _ => None,
        }
    }
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidUrl { url, reason } => {
                write!(f, "Invalid backend URL '{url}': {reason}")
            }
            Self::Client { source } => {
                write!(f, "Failed to construct HTTP client: {source}")
            }
            Self::FileRead { path, source } => {
                write!(f, "Cannot read '{}': {source}", path.display())
            }
            Self::Transport { endpoint, source } => {
                write!(f, "Request to '{endpoint}' failed: {source}")
            }
            Self::Status {
                endpoint,
                status,
                error: Some(message),
            } => write!(f, "'{endpoint}' returned HTTP {status}: {message}"),
            Self::Status {
                endpoint,
                status,
                error: None,
            } => write!(f, "'{endpoint}' returned HTTP {status}"),
            Self::Body { endpoint, source } => {
                write!(f, "Unexpected response body from '{endpoint}': {source}")
            }
        }
    }
}

impl std::error::Error for BackendError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Client { source } => Some(source),
            Self::FileRead { source, .. } => Some(source),
            Self::Transport { source, .. } => Some(source),
            Self::Body { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<BackendError> for DocuChatError {
    fn from(e: BackendError) -> Self {
        Self::Backend(e)
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading and validation.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A config value is out of the allowed range.
    ValueOutOfRange {
        field: String,
        value: String,
        expected: String,
    },

    /// I/O error reading the config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::ValueOutOfRange {
                field,
                value,
                expected,
            } => write!(
                f,
                "Config '{field}' = '{value}' is out of range. Expected: {expected}"
            ),
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ConfigError> for DocuChatError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surfaced_message_only_from_status_with_body() {
        let with_message = BackendError::Status {
            endpoint: "/theme",
            status: 500,
            error: Some("bad request".to_string()),
        };
        assert_eq!(with_message.surfaced_message(), Some("bad request"));

        let without_message = BackendError::Status {
            endpoint: "/theme",
            status: 500,
            error: None,
        };
        assert_eq!(without_message.surfaced_message(), None);

        let invalid = BackendError::InvalidUrl {
            url: "not a url".to_string(),
            reason: "relative URL without a base".to_string(),
        };
        assert_eq!(invalid.surfaced_message(), None);
    }

    #[test]
    fn display_includes_endpoint_and_status() {
        let err = BackendError::Status {
            endpoint: "/query",
            status: 503,
            error: None,
        };
        let text = err.to_string();
        assert!(text.contains("/query"), "missing endpoint in: {text}");
        assert!(text.contains("503"), "missing status in: {text}");
    }
}
