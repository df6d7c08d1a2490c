// PicSeek - util/constants.rs
//
// Single source of truth for named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "PicSeek";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "PicSeek";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Backend contract
// =============================================================================

/// Default backend endpoint when neither CLI nor config.toml set one.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8085";

/// Fixed backend route for image search uploads.
pub const SEARCH_ROUTE: &str = "/search/image";

// =============================================================================
// Layout
// =============================================================================

/// Diameter of the circular pick/reset affordances, in points.
pub const AFFORDANCE_DIAMETER: f32 = 200.0;

/// Stroke width of the affordance ring.
pub const AFFORDANCE_STROKE: f32 = 1.0;

/// Arrow glyph size inside the affordances.
pub const AFFORDANCE_ARROW_SIZE: f32 = 44.0;

/// Default thumbnail height in compact mode, in points.
pub const DEFAULT_THUMB_HEIGHT: f32 = 120.0;

/// Bounds for the configurable compact thumbnail height.
pub const MIN_THUMB_HEIGHT: f32 = 40.0;
pub const MAX_THUMB_HEIGHT: f32 = 400.0;

/// Gap between compact thumbnails, in points.
pub const THUMB_SPACING: f32 = 10.0;

/// Expanded-mode image height as a fraction of the results pane height.
pub const EXPANDED_HEIGHT_FRAC: f32 = 0.8;

/// Gap between expanded-mode images, in points.
pub const EXPANDED_SPACING: f32 = 24.0;

/// Duration of the query/results slide transition, in seconds.
pub const SLIDE_SECONDS: f32 = 0.35;

// =============================================================================
// Logging
// =============================================================================

/// Default log level when no override is present.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// =============================================================================
// Configuration
// =============================================================================

/// Name of the configuration file inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";
