// DocuChat - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "DocuChat";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "DocuChat";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Backend endpoints
// =============================================================================

/// Default backend base URL when neither CLI, environment, nor config
/// provide one. Matches the reference backend's local development address.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Environment variable consulted for the backend base URL.
pub const BACKEND_URL_ENV: &str = "DOCUCHAT_BACKEND_URL";

/// Document upload endpoint. The trailing slash is part of the contract.
pub const UPLOAD_PATH: &str = "/upload/";

/// Question query endpoint.
pub const QUERY_PATH: &str = "/query";

/// Theme summarization endpoint.
pub const THEME_PATH: &str = "/theme";

/// Multipart form field name carrying the uploaded file.
pub const UPLOAD_FIELD: &str = "file";

/// Name of the query-string parameter carrying free-text input.
pub const QUERY_PARAM: &str = "q";

// =============================================================================
// Request limits
// =============================================================================

/// Default per-request timeout in seconds. Bounds how long a panel can sit
/// in its awaiting state when the backend hangs.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Minimum configurable request timeout (seconds).
pub const MIN_TIMEOUT_SECS: u64 = 1;

/// Maximum configurable request timeout (seconds).
pub const MAX_TIMEOUT_SECS: u64 = 600;

/// How often the UI repaints while a request is in flight (ms), so a
/// completion sent from a worker thread is picked up promptly.
pub const REQUEST_POLL_INTERVAL_MS: u64 = 100;

// =============================================================================
// Panel display strings (wire-contract literals)
// =============================================================================

/// Upload panel status on any failure. The specific error is logged, not shown.
pub const STATUS_UPLOAD_FAILED: &str = "Upload failed";

/// Content of the synthetic answer entry shown when a query fails.
pub const STATUS_QUERY_FAILED: &str = "Query failed";

/// Theme panel error detail when the backend supplies no structured message.
pub const THEME_ERROR_FALLBACK: &str = "An unexpected error occurred.";

// =============================================================================
// UI defaults
// =============================================================================

/// Default UI body font size in points.
pub const DEFAULT_FONT_SIZE: f32 = 14.5;

/// Minimum user-configurable UI font size (points).
pub const MIN_FONT_SIZE: f32 = 10.0;

/// Maximum user-configurable UI font size (points).
pub const MAX_FONT_SIZE: f32 = 24.0;

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Log levels accepted in config.toml.
pub const ALLOWED_LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";
