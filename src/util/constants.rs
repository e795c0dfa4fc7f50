// StegoSight - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "StegoSight";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "StegoSight";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Main window title.
pub const WINDOW_TITLE: &str = "STEGOSIGHT - Stego & Anti-Stego Intelligent Guard";

// =============================================================================
// Window geometry
// =============================================================================

/// Initial inner size of the main window (logical points).
pub const WINDOW_DEFAULT_SIZE: [f32; 2] = [1400.0, 900.0];

/// Minimum inner size of the main window (logical points).
pub const WINDOW_MIN_SIZE: [f32; 2] = [1200.0, 800.0];

// =============================================================================
// Workflow simulation
// =============================================================================

/// Delay between pressing "Start embedding" and the simulated completion.
pub const DEFAULT_EMBED_PROCESSING_DELAY_MS: u64 = 1_500;

/// Minimum user-configurable processing delay (ms).
pub const MIN_EMBED_PROCESSING_DELAY_MS: u64 = 100;

/// Maximum user-configurable processing delay (ms).
pub const MAX_EMBED_PROCESSING_DELAY_MS: u64 = 10_000;

/// Share of the cover file size reported as hideable payload, in percent.
pub const CAPACITY_PERCENT: u64 = 15;

/// Sample risk score shown after a simulated embed.
pub const SAMPLE_EMBED_RISK_SCORE: u8 = 18;

/// Sample risk score shown after a simulated analysis.
pub const SAMPLE_ANALYSIS_RISK_SCORE: u8 = 62;

/// Upper bound of the "Low" risk band (inclusive).
pub const RISK_LOW_MAX: u8 = 33;

/// Upper bound of the "Medium" risk band (inclusive).
pub const RISK_MEDIUM_MAX: u8 = 66;

/// Maximum risk score.
pub const RISK_SCORE_MAX: u8 = 100;

/// Maximum number of lines kept in the analysis activity log.
pub const MAX_ACTIVITY_LOG_LINES: usize = 500;

// =============================================================================
// Preview
// =============================================================================

/// Longest edge, in pixels, of a decoded cover preview. Larger images are
/// downscaled before upload so the texture stays small.
pub const PREVIEW_MAX_DIMENSION: u32 = 1_024;

/// Minimum height of the preview area (points).
pub const PREVIEW_MIN_HEIGHT: f32 = 260.0;

// =============================================================================
// UI defaults
// =============================================================================

/// Default UI body font size in points.
pub const DEFAULT_FONT_SIZE: f32 = 14.5;

/// Minimum user-configurable UI font size (points).
pub const MIN_FONT_SIZE: f32 = 10.0;

/// Maximum user-configurable UI font size (points).
pub const MAX_FONT_SIZE: f32 = 24.0;

/// Default zoom factor applied on top of the native pixels-per-point.
pub const DEFAULT_ZOOM_FACTOR: f32 = 1.0;

/// Minimum user-configurable zoom factor.
pub const MIN_ZOOM_FACTOR: f32 = 0.5;

/// Maximum user-configurable zoom factor.
pub const MAX_ZOOM_FACTOR: f32 = 3.0;

/// Width of the control column in every tab (points).
pub const CONTROL_PANEL_WIDTH: f32 = 420.0;

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Log file name inside the log directory.
pub const LOG_FILE_NAME: &str = "app.log";

/// Log subdirectory of the platform data directory.
pub const LOG_DIR_NAME: &str = "logs";

/// Size at which the log file is rotated.
pub const LOG_MAX_BYTES: u64 = 1_000_000;

/// Number of rotated log files kept (`app.log.1` .. `app.log.N`).
pub const LOG_BACKUP_COUNT: usize = 3;

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Session persistence file name (stored in the platform data directory).
pub const SESSION_FILE_NAME: &str = "session.json";
