// PicSeek - util/logging.rs
//
// tracing subscriber setup. The effective level is resolved once at
// startup from, in order of precedence: the RUST_LOG environment variable,
// the --debug CLI switch, the validated [logging] level from config.toml,
// and finally the built-in default. Output goes to stderr; uploaded image
// bytes and decoded payloads are never logged at any level.

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// `debug_flag` mirrors --debug on the CLI; `config_level` is the already
/// validated level string from config.toml, if one was set.
pub fn init(debug_flag: bool, config_level: Option<&str>) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if debug_flag {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new(config_level.unwrap_or(super::constants::DEFAULT_LOG_LEVEL))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .compact()
        .init();

    tracing::debug!(
        app = super::constants::APP_NAME,
        version = super::constants::APP_VERSION,
        "Logging initialised"
    );
}
