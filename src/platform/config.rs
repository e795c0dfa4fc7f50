// StegoSight - platform/config.rs
//
// Platform-specific configuration, data directory resolution, and config.toml
// loading with startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for StegoSight data and configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/stegosight/ or %APPDATA%\StegoSight\config\)
    pub config_dir: PathBuf,

    /// Data directory for the session file and logs.
    pub data_dir: PathBuf,

    /// Directory holding the rotating log files.
    pub log_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            let data_dir = proj_dirs.data_dir().to_path_buf();
            let log_dir = data_dir.join(constants::LOG_DIR_NAME);
            Self {
                config_dir,
                data_dir,
                log_dir,
            }
        } else {
            let fallback = PathBuf::from(".");
            Self {
                config_dir: fallback.clone(),
                log_dir: fallback.join(constants::LOG_DIR_NAME),
                data_dir: fallback,
            }
        }
    }

    /// Default rotating log file path.
    pub fn default_log_file(&self) -> PathBuf {
        self.log_dir.join(constants::LOG_FILE_NAME)
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[ui]` section.
    pub ui: UiSection,
    /// `[embed]` section.
    pub embed: EmbedSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[ui]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct UiSection {
    /// Theme: "light" or "dark".
    pub theme: Option<String>,
    /// Body font size in points.
    pub font_size: Option<f32>,
    /// Zoom factor on top of the native scale.
    pub zoom_factor: Option<f32>,
    /// Tab shown at startup: "embed", "extract" or "analyze".
    pub default_tab: Option<String>,
}

/// `[embed]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct EmbedSection {
    /// Simulated processing time in ms.
    pub processing_delay_ms: Option<u64>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
    /// Log file path. Empty string disables file logging.
    pub file: Option<String>,
}

/// Where the log file goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogFileSetting {
    /// `<data dir>/logs/app.log`.
    Default,
    /// A user-provided path.
    Custom(PathBuf),
    /// stderr only.
    Disabled,
}

/// Validated application configuration derived from `config.toml`.
///
/// Invalid values produce actionable warnings and fall back to defaults.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Dark mode (true) or light mode (false).
    pub dark_mode: bool,
    /// Body font size in points.
    pub font_size: f32,
    /// `[ui] theme` was set to a valid value. Explicit values beat the session.
    pub theme_explicit: bool,
    /// `[ui] font_size` was set to a valid value.
    pub font_size_explicit: bool,
    /// Zoom factor applied at startup.
    pub zoom_factor: f32,
    /// Startup tab key, validated by the app layer.
    pub default_tab: Option<String>,
    /// Simulated embed processing delay in ms.
    pub embed_processing_delay_ms: u64,
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
    /// Log file destination.
    pub log_file: LogFileSetting,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dark_mode: false,
            font_size: constants::DEFAULT_FONT_SIZE,
            theme_explicit: false,
            font_size_explicit: false,
            zoom_factor: constants::DEFAULT_ZOOM_FACTOR,
            default_tab: None,
            embed_processing_delay_ms: constants::DEFAULT_EMBED_PROCESSING_DELAY_MS,
            log_level: None,
            log_file: LogFileSetting::Default,
        }
    }
}

impl AppConfig {
    /// Resolve the log file path against the platform paths.
    pub fn log_file_path(&self, paths: &PlatformPaths) -> Option<PathBuf> {
        match &self.log_file {
            LogFileSetting::Default => Some(paths.default_log_file()),
            LogFileSetting::Custom(p) => Some(p.clone()),
            LogFileSetting::Disabled => None,
        }
    }
}

fn out_of_range(field: &str, value: impl ToString, expected: String) -> String {
    ConfigError::ValueOutOfRange {
        field: field.to_string(),
        value: value.to_string(),
        expected,
    }
    .to_string()
}

/// Load and validate `config.toml` from the given config directory.
///
/// Returns `AppConfig` with validated values and a list of non-fatal warnings.
/// If the file does not exist, returns defaults with no warnings (first-run).
/// If the file is unreadable or unparseable, returns defaults with a warning.
///
/// Logging is usually not initialised yet when this runs, so the caller is
/// responsible for reporting the warnings.
pub fn load_config(config_dir: &Path) -> (AppConfig, Vec<String>) {
    let config_path = config_dir.join(constants::CONFIG_FILE_NAME);
    let mut warnings: Vec<String> = Vec::new();

    if !config_path.exists() {
        return (AppConfig::default(), warnings);
    }

    let content = match std::fs::read_to_string(&config_path) {
        Ok(c) => c,
        Err(source) => {
            let e = ConfigError::Io {
                path: config_path.clone(),
                source,
            };
            warnings.push(format!("{e}. Using defaults."));
            return (AppConfig::default(), warnings);
        }
    };

    let (config, mut field_warnings) = parse_config(&content, &config_path);
    warnings.append(&mut field_warnings);
    (config, warnings)
}

/// Parse and validate config text. `path` is only used in messages.
pub fn parse_config(content: &str, path: &Path) -> (AppConfig, Vec<String>) {
    let mut warnings: Vec<String> = Vec::new();

    let raw: RawConfig = match toml::from_str(content) {
        Ok(r) => r,
        Err(source) => {
            let e = ConfigError::TomlParse {
                path: path.to_path_buf(),
                source,
            };
            warnings.push(format!("{e}. Using defaults."));
            return (AppConfig::default(), warnings);
        }
    };

    let mut config = AppConfig::default();

    // -- UI: theme --
    if let Some(ref theme) = raw.ui.theme {
        match theme.to_lowercase().as_str() {
            "dark" | "light" => {
                config.dark_mode = theme.eq_ignore_ascii_case("dark");
                config.theme_explicit = true;
            }
            other => warnings.push(format!(
                "[ui] theme = \"{other}\" is not recognised. Expected \"light\" or \"dark\". \
                 Using default (light)."
            )),
        }
    }

    // -- UI: font_size --
    if let Some(size) = raw.ui.font_size {
        if (constants::MIN_FONT_SIZE..=constants::MAX_FONT_SIZE).contains(&size) {
            config.font_size = size;
            config.font_size_explicit = true;
        } else {
            warnings.push(out_of_range(
                "[ui] font_size",
                size,
                format!(
                    "{}-{}, using default {}",
                    constants::MIN_FONT_SIZE,
                    constants::MAX_FONT_SIZE,
                    constants::DEFAULT_FONT_SIZE
                ),
            ));
        }
    }

    // -- UI: zoom_factor --
    if let Some(zoom) = raw.ui.zoom_factor {
        if (constants::MIN_ZOOM_FACTOR..=constants::MAX_ZOOM_FACTOR).contains(&zoom) {
            config.zoom_factor = zoom;
        } else {
            warnings.push(out_of_range(
                "[ui] zoom_factor",
                zoom,
                format!(
                    "{}-{}, using default {}",
                    constants::MIN_ZOOM_FACTOR,
                    constants::MAX_ZOOM_FACTOR,
                    constants::DEFAULT_ZOOM_FACTOR
                ),
            ));
        }
    }

    // -- UI: default_tab (validated by the app layer, which owns the tab set) --
    if let Some(ref tab) = raw.ui.default_tab {
        config.default_tab = Some(tab.to_lowercase());
    }

    // -- Embed: processing_delay_ms --
    if let Some(delay) = raw.embed.processing_delay_ms {
        if (constants::MIN_EMBED_PROCESSING_DELAY_MS..=constants::MAX_EMBED_PROCESSING_DELAY_MS)
            .contains(&delay)
        {
            config.embed_processing_delay_ms = delay;
        } else {
            warnings.push(out_of_range(
                "[embed] processing_delay_ms",
                delay,
                format!(
                    "{}-{}, using default {}",
                    constants::MIN_EMBED_PROCESSING_DELAY_MS,
                    constants::MAX_EMBED_PROCESSING_DELAY_MS,
                    constants::DEFAULT_EMBED_PROCESSING_DELAY_MS
                ),
            ));
        }
    }

    // -- Logging: level --
    if let Some(ref level) = raw.logging.level {
        let valid = ["error", "warn", "info", "debug", "trace"];
        if valid.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.to_lowercase());
        } else {
            warnings.push(format!(
                "[logging] level = \"{level}\" is not recognised. \
                 Valid values: error, warn, info, debug, trace. Using default (info).",
            ));
        }
    }

    // -- Logging: file --
    if let Some(ref file) = raw.logging.file {
        config.log_file = if file.trim().is_empty() {
            LogFileSetting::Disabled
        } else {
            LogFileSetting::Custom(PathBuf::from(file))
        };
    }

    (config, warnings)
}
