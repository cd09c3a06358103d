// DocuChat - platform/config.rs
//
// Platform-specific configuration directory resolution and config.toml
// loading with startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Resolved platform paths for DocuChat data and configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/docuchat/ or %APPDATA%\DocuChat\)
    pub config_dir: PathBuf,

    /// Data directory (unused today; resolved for forward compatibility).
    pub data_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to the current directory if platform dirs cannot be
    /// determined, so the application always launches.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            let data_dir = proj_dirs.data_dir().to_path_buf();

            tracing::debug!(
                config = %config_dir.display(),
                data = %data_dir.display(),
                "Platform paths resolved"
            );

            Self {
                config_dir,
                data_dir,
            }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            let fallback = PathBuf::from(".");
            Self {
                config_dir: fallback.clone(),
                data_dir: fallback,
            }
        }
    }

    /// Full path of the config file.
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(constants::CONFIG_FILE_NAME)
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility -- a newer
/// config file can be used with an older binary without crashing.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[backend]` section.
    pub backend: BackendSection,
    /// `[ui]` section.
    pub ui: UiSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[backend]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct BackendSection {
    /// Base URL of the upload/query/theme endpoints.
    pub base_url: Option<String>,
    /// Per-request timeout in seconds.
    pub timeout_secs: Option<u64>,
}

/// `[ui]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct UiSection {
    /// Body font size in points.
    pub font_size: Option<f32>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: trace, debug, info, warn, error.
    pub level: Option<String>,
}

/// Load config.toml from `path`. A missing file means defaults; a
/// malformed file is a startup error rather than a silent fallback.
pub fn load(path: &Path) -> Result<RawConfig, ConfigError> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "No config file, using defaults");
        return Ok(RawConfig::default());
    }

    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    toml::from_str(&content).map_err(|source| ConfigError::TomlParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Validated application configuration, after defaults are applied.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Backend base URL (URL syntax is validated by the backend client).
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// UI body font size in points.
    pub font_size: f32,
    /// Log level from config, if set.
    pub log_level: Option<String>,
}

impl AppConfig {
    /// Validate a raw config and fill in defaults.
    pub fn from_raw(raw: RawConfig) -> Result<Self, ConfigError> {
        let timeout_secs = raw
            .backend
            .timeout_secs
            .unwrap_or(constants::DEFAULT_TIMEOUT_SECS);
        if !(constants::MIN_TIMEOUT_SECS..=constants::MAX_TIMEOUT_SECS).contains(&timeout_secs) {
            return Err(ConfigError::ValueOutOfRange {
                field: "backend.timeout_secs".to_string(),
                value: timeout_secs.to_string(),
                expected: format!(
                    "{}..={}",
                    constants::MIN_TIMEOUT_SECS,
                    constants::MAX_TIMEOUT_SECS
                ),
            });
        }

        let font_size = raw.ui.font_size.unwrap_or(constants::DEFAULT_FONT_SIZE);
        if !(constants::MIN_FONT_SIZE..=constants::MAX_FONT_SIZE).contains(&font_size) {
            return Err(ConfigError::ValueOutOfRange {
                field: "ui.font_size".to_string(),
                value: font_size.to_string(),
                expected: format!("{}..={}", constants::MIN_FONT_SIZE, constants::MAX_FONT_SIZE),
            });
        }

        if let Some(ref level) = raw.logging.level {
            if !constants::ALLOWED_LOG_LEVELS.contains(&level.as_str()) {
                return Err(ConfigError::ValueOutOfRange {
                    field: "logging.level".to_string(),
                    value: level.clone(),
                    expected: constants::ALLOWED_LOG_LEVELS.join("|"),
                });
            }
        }

        Ok(Self {
            base_url: raw
                .backend
                .base_url
                .unwrap_or_else(|| constants::DEFAULT_BACKEND_URL.to_string()),
            timeout: Duration::from_secs(timeout_secs),
            font_size,
            log_level: raw.logging.level,
        })
    }
}
