// DocuChat - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Configuration loading (platform config.toml + CLI/env overrides)
// 3. Logging initialisation (debug mode support)
// 4. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` and other
// binary-side code can still use `crate::app::...`, `crate::core::...` etc.
pub use docuchat::app;
pub use docuchat::core;
pub use docuchat::platform;
pub use docuchat::ui;
pub use docuchat::util;

use std::sync::Arc;

use clap::Parser;

use crate::core::backend::BackendClient;
use crate::platform::config::{AppConfig, PlatformPaths};
use crate::util::error::DocuChatError;

/// DocuChat - desktop client for a document question-answering service.
///
/// Upload documents, ask questions against them, and request theme
/// summaries from a configured backend.
#[derive(Parser, Debug)]
#[command(name = "DocuChat", version, about)]
struct Cli {
    /// Backend base URL (overrides DOCUCHAT_BACKEND_URL and config.toml).
    #[arg(short = 'b', long = "backend-url")]
    backend_url: Option<String>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

/// Everything resolved before the GUI can launch.
struct Launch {
    config: AppConfig,
    client: Arc<BackendClient>,
}

/// Resolve configuration and build the backend client.
///
/// Base URL priority: CLI flag > DOCUCHAT_BACKEND_URL > config file > default.
fn bootstrap(cli: &Cli) -> Result<Launch, DocuChatError> {
    let paths = PlatformPaths::resolve();
    let raw = platform::config::load(&paths.config_file())?;
    let mut config = AppConfig::from_raw(raw)?;

    if let Some(url) = cli.backend_url.clone() {
        config.base_url = url;
    } else if let Ok(url) = std::env::var(util::constants::BACKEND_URL_ENV) {
        config.base_url = url;
    }

    let client = BackendClient::new(&config.base_url, config.timeout)?;
    Ok(Launch {
        config,
        client: Arc::new(client),
    })
}

fn main() {
    let cli = Cli::parse();

    // Config is loaded before logging init so the [logging] level can
    // apply; tracing calls made during loading itself are dropped.
    let launch = match bootstrap(&cli) {
        Ok(launch) => launch,
        Err(e) => {
            util::logging::init(cli.debug, None);
            tracing::error!(error = %e, "Startup failed");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    util::logging::init(cli.debug, launch.config.log_level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        backend = launch.client.base_url(),
        debug = cli.debug,
        "DocuChat starting"
    );

    let state = app::state::AppState::new(launch.client.base_url().to_string());
    let font_size = launch.config.font_size;
    let client = launch.client;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size([760.0, 900.0])
            .with_min_inner_size([480.0, 600.0]),
        ..Default::default()
    };

    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |cc| {
            ui::theme::apply_font_size(&cc.egui_ctx, font_size);
            Ok(Box::new(gui::DocuChatApp::new(state, client)))
        }),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch {}: {e}", util::constants::APP_NAME);
        std::process::exit(1);
    }
}
