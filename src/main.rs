// PicSeek - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Configuration loading
// 3. Logging initialisation (debug mode support)
// 4. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` can use
// `crate::app::...`, `crate::core::...` etc.
pub use picseek::app;
pub use picseek::core;
pub use picseek::platform;
pub use picseek::ui;
pub use picseek::util;

use clap::Parser;
use std::path::PathBuf;

/// PicSeek - visual image search client.
///
/// Pick an image (or pass one on the command line) and PicSeek uploads it
/// to the configured image-search backend, then shows the matching images
/// in a compact grid or an expanded scroll strip.
#[derive(Parser, Debug)]
#[command(name = "PicSeek", version, about)]
struct Cli {
    /// Image file to search for immediately at startup.
    image: Option<PathBuf>,

    /// Image-search backend endpoint (overrides config.toml).
    #[arg(short = 'e', long = "endpoint")]
    endpoint: Option<String>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Resolve platform paths and load config before logging init so the
    // [logging] level from config.toml can take effect; config warnings are
    // re-logged below once the subscriber exists.
    let platform_paths = platform::config::PlatformPaths::resolve();
    let (config, config_warnings) = platform::config::load_config(&platform_paths.config_dir);

    util::logging::init(cli.debug, config.log_level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "PicSeek starting"
    );

    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Config validation warning");
    }

    // Endpoint priority: CLI override > config.toml > built-in default.
    let endpoint = cli
        .endpoint
        .unwrap_or_else(|| config.endpoint.clone());
    tracing::info!(endpoint = %endpoint, "Using search backend");

    // Create session state; a CLI-provided image becomes the first upload.
    let mut state = app::state::SessionState::new();
    if let Some(image) = cli.image {
        state.pending_upload = Some(image);
    }

    let client = match core::transport::SearchClient::new(endpoint) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!(error = %e, "Failed to construct HTTP client");
            eprintln!("Error: Failed to construct HTTP client: {e}");
            std::process::exit(1);
        }
    };

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    let light_mode = config.light_mode;
    let thumb_height = config.thumb_height;

    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(if light_mode {
                egui::Visuals::light()
            } else {
                egui::Visuals::dark()
            });
            Ok(Box::new(gui::PicSeekApp::new(state, client, thumb_height)))
        }),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch PicSeek GUI: {e}");
        std::process::exit(1);
    }
}
