// PicSeek - platform/config.rs
//
// Platform-specific configuration directory resolution and config.toml
// loading with startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::util::constants;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for PicSeek configuration and data.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/picseek/ or %APPDATA%\PicSeek\)
    pub config_dir: PathBuf,

    /// Data directory for caches etc.
    pub data_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to the current directory if platform dirs cannot be
    /// determined.
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
    /// Image-search backend endpoint, e.g. "http://127.0.0.1:8085".
    pub endpoint: Option<String>,
}

/// `[ui]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct UiSection {
    /// Theme: "dark" or "light".
    pub theme: Option<String>,
    /// Compact-mode thumbnail height in points.
    pub thumb_height: Option<f32>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// Validated application configuration derived from `config.toml`.
///
/// All values are validated against named constants at load time. Invalid
/// values produce actionable warnings and fall back to defaults.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Image-search backend endpoint.
    pub endpoint: String,

    /// Light mode (true) or dark mode (false). The original page chrome is
    /// light, so light is the default.
    pub light_mode: bool,

    /// Compact-mode thumbnail height in points.
    pub thumb_height: f32,

    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: constants::DEFAULT_ENDPOINT.to_string(),
            light_mode: true,
            thumb_height: constants::DEFAULT_THUMB_HEIGHT,
            log_level: None,
        }
    }
}

/// Load and validate `config.toml` from the given config directory.
///
/// Returns `AppConfig` with validated values and a list of non-fatal
/// warnings. If the file does not exist, returns defaults with no warnings
/// (first-run). If the file is unparseable, returns defaults with an error
/// warning -- the application still starts but the user is informed.
pub fn load_config(config_dir: &Path) -> (AppConfig, Vec<String>) {
    let config_path = config_dir.join(constants::CONFIG_FILE_NAME);

    let mut warnings: Vec<String> = Vec::new();

    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "No config.toml found; using defaults");
        return (AppConfig::default(), warnings);
    }

    let content = match std::fs::read_to_string(&config_path) {
        Ok(c) => c,
        Err(e) => {
            let msg = format!(
                "Could not read config file '{}': {e}. Using defaults.",
                config_path.display()
            );
            tracing::warn!("{}", msg);
            warnings.push(msg);
            return (AppConfig::default(), warnings);
        }
    };

    let raw: RawConfig = match toml::from_str(&content) {
        Ok(r) => r,
        Err(e) => {
            let msg = format!(
                "Failed to parse config file '{}': {e}. Using defaults.",
                config_path.display()
            );
            tracing::warn!("{}", msg);
            warnings.push(msg);
            return (AppConfig::default(), warnings);
        }
    };

    tracing::info!(path = %config_path.display(), "Loaded config.toml");

    let mut config = AppConfig::default();
    apply_raw(&raw, &mut config, &mut warnings);

    if !warnings.is_empty() {
        tracing::warn!(count = warnings.len(), "Config validation produced warnings");
    }

    (config, warnings)
}

/// Validate each raw field and fold the good ones into `config`,
/// accumulating a warning per rejected value.
fn apply_raw(raw: &RawConfig, config: &mut AppConfig, warnings: &mut Vec<String>) {
    // -- Backend: endpoint --
    if let Some(ref endpoint) = raw.backend.endpoint {
        if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
            config.endpoint = endpoint.trim_end_matches('/').to_string();
        } else {
            warnings.push(format!(
                "[backend] endpoint = \"{endpoint}\" must start with http:// or https://. \
                 Using default ({}).",
                constants::DEFAULT_ENDPOINT,
            ));
        }
    }

    // -- UI: theme --
    if let Some(ref theme) = raw.ui.theme {
        match theme.to_lowercase().as_str() {
            "light" => config.light_mode = true,
            "dark" => config.light_mode = false,
            other => {
                warnings.push(format!(
                    "[ui] theme = \"{other}\" is not recognised. Expected \"light\" or \"dark\". \
                     Using default (light).",
                ));
            }
        }
    }

    // -- UI: thumb_height --
    if let Some(height) = raw.ui.thumb_height {
        if (constants::MIN_THUMB_HEIGHT..=constants::MAX_THUMB_HEIGHT).contains(&height) {
            config.thumb_height = height;
        } else {
            warnings.push(format!(
                "[ui] thumb_height = {height} is out of range ({}-{}). Using default ({}).",
                constants::MIN_THUMB_HEIGHT,
                constants::MAX_THUMB_HEIGHT,
                constants::DEFAULT_THUMB_HEIGHT,
            ));
        }
    }

    // -- Logging: level --
    if let Some(ref level) = raw.logging.level {
        let valid = ["error", "warn", "info", "debug", "trace"];
        if valid.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.clone());
        } else {
            warnings.push(format!(
                "[logging] level = \"{level}\" is not recognised. \
                 Valid values: error, warn, info, debug, trace. Using default (info).",
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(toml_str: &str) -> (AppConfig, Vec<String>) {
        let raw: RawConfig = toml::from_str(toml_str).unwrap();
        let mut config = AppConfig::default();
        let mut warnings = Vec::new();
        apply_raw(&raw, &mut config, &mut warnings);
        (config, warnings)
    }

    #[test]
    fn valid_endpoint_is_applied_and_normalised() {
        let (config, warnings) = parse("[backend]\nendpoint = \"http://search.local:9000/\"");
        assert!(warnings.is_empty());
        assert_eq!(config.endpoint, "http://search.local:9000");
    }

    #[test]
    fn non_http_endpoint_warns_and_falls_back() {
        let (config, warnings) = parse("[backend]\nendpoint = \"ftp://nope\"");
        assert_eq!(warnings.len(), 1);
        assert_eq!(config.endpoint, constants::DEFAULT_ENDPOINT);
    }

    #[test]
    fn out_of_range_thumb_height_warns() {
        let (config, warnings) = parse("[ui]\nthumb_height = 5000.0");
        assert_eq!(warnings.len(), 1);
        assert_eq!(config.thumb_height, constants::DEFAULT_THUMB_HEIGHT);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let (_, warnings) = parse("[future_section]\nshiny = true");
        assert!(warnings.is_empty());
    }

    #[test]
    fn missing_config_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let (config, warnings) = load_config(dir.path());
        assert!(warnings.is_empty());
        assert_eq!(config.endpoint, constants::DEFAULT_ENDPOINT);
        assert!(config.light_mode);
    }

    #[test]
    fn unparseable_config_file_warns_and_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(constants::CONFIG_FILE_NAME), "not = [valid").unwrap();
        let (config, warnings) = load_config(dir.path());
        assert_eq!(warnings.len(), 1);
        assert_eq!(config.endpoint, constants::DEFAULT_ENDPOINT);
    }
}
