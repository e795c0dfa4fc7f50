// StegoSight - app/state.rs
//
// Application state management. Holds the three workflow states, the active
// tab and theme, and routes dropped or picked files to the right workflow.
// Owned by the eframe::App implementation.

use crate::app::analyze::AnalyzeWorkflow;
use crate::app::embed::EmbedWorkflow;
use crate::app::extract::ExtractWorkflow;
use crate::app::session::{self, PersistedMethod, SessionData, SESSION_VERSION};
use crate::core::selection::MethodSelection;
use crate::platform::config::AppConfig;
use crate::util::constants::{MAX_FONT_SIZE, MIN_FONT_SIZE};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Top-level tabs of the main window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    Embed,
    Extract,
    Analyze,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Self::Embed, Self::Extract, Self::Analyze]
    }

    pub fn key(self) -> &'static str {
        match self {
            Self::Embed => "embed",
            Self::Extract => "extract",
            Self::Analyze => "analyze",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Embed => "\u{1f512} Embed",
            Self::Extract => "\u{1f513} Extract",
            Self::Analyze => "\u{1f50d} Analyze",
        }
    }

    /// Case-insensitive lookup used for `--tab` and `ui.default_tab`.
    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.trim();
        Self::all()
            .iter()
            .copied()
            .find(|t| t.key().eq_ignore_ascii_case(key))
    }

    /// One-line description for the About dialog.
    pub fn summary(self) -> &'static str {
        match self {
            Self::Embed => "Hide text or a file inside an image, audio or video cover",
            Self::Extract => "Recover data hidden with a known or auto-detected technique",
            Self::Analyze => "Screen a file with statistical and structural checks",
        }
    }

    /// Drop zone that receives files dropped outside any zone on this tab.
    pub fn primary_drop_target(self) -> DropTarget {
        match self {
            Self::Embed => DropTarget::EmbedCover,
            Self::Extract => DropTarget::ExtractTarget,
            Self::Analyze => DropTarget::AnalyzeTarget,
        }
    }
}

/// Every drop zone in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DropTarget {
    EmbedCover,
    EmbedSecret,
    ExtractTarget,
    AnalyzeTarget,
}

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    pub active_tab: Tab,

    pub embed: EmbedWorkflow,
    pub extract: ExtractWorkflow,
    pub analyze: AnalyzeWorkflow,

    /// Dark (true) or light (false) palette.
    pub dark_mode: bool,

    /// Body font size in points.
    pub font_size: f32,

    /// Zoom factor applied once at startup.
    pub zoom_factor: f32,

    /// Status message for the status bar.
    pub status_message: String,

    /// Whether to show the About dialog.
    pub show_about: bool,

    /// Whether debug mode is enabled.
    pub debug_mode: bool,

    /// Where the session is saved. `None` disables persistence (tests).
    pub session_path: Option<PathBuf>,

    /// config.toml location, shown in the About dialog.
    pub config_path: Option<PathBuf>,

    /// Active log file; `None` when logging to stderr only.
    pub log_path: Option<PathBuf>,
}

impl AppState {
    /// Create initial state from the validated configuration.
    pub fn new(config: &AppConfig, debug_mode: bool) -> Self {
        Self {
            active_tab: Tab::Embed,
            embed: EmbedWorkflow::new(Duration::from_millis(config.embed_processing_delay_ms)),
            extract: ExtractWorkflow::new(),
            analyze: AnalyzeWorkflow::new(),
            dark_mode: config.dark_mode,
            font_size: config.font_size,
            zoom_factor: config.zoom_factor,
            status_message: "Ready. Drop a file or choose one to begin.".to_string(),
            show_about: false,
            debug_mode,
            session_path: None,
            config_path: None,
            log_path: None,
        }
    }

    pub fn select_tab(&mut self, tab: Tab) {
        if self.active_tab != tab {
            tracing::debug!(tab = tab.key(), "Tab changed");
            self.active_tab = tab;
        }
    }

    pub fn toggle_theme(&mut self) {
        self.dark_mode = !self.dark_mode;
        tracing::info!(dark_mode = self.dark_mode, "Theme changed");
    }

    pub fn set_font_size(&mut self, size: f32) {
        self.font_size = size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
    }

    /// Hand a file to a specific drop zone.
    pub fn route_file(&mut self, target: DropTarget, path: PathBuf) {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        match target {
            DropTarget::EmbedCover => {
                self.status_message = match self.embed.select_cover(path) {
                    Ok(()) => format!("Cover file: {name}"),
                    Err(e) => e.to_string(),
                };
            }
            DropTarget::EmbedSecret => {
                self.embed.select_secret_file(path);
                self.status_message = format!("Secret file: {name}");
            }
            DropTarget::ExtractTarget => {
                self.extract.select_target(path);
                self.status_message = format!("File to extract from: {name}");
            }
            DropTarget::AnalyzeTarget => {
                self.analyze.select_target(path);
                self.status_message = format!("File to analyse: {name}");
            }
        }
    }

    /// Hand a file to the active tab's primary drop zone.
    pub fn open_file(&mut self, path: PathBuf) {
        self.route_file(self.active_tab.primary_drop_target(), path);
    }

    pub fn start_embed(&mut self, now: Instant) {
        match self.embed.start(now) {
            Ok(()) if self.embed.is_processing() => {
                self.status_message = "Embedding...".to_string();
            }
            Ok(()) => {}
            Err(e) => self.status_message = e.to_string(),
        }
    }

    pub fn start_extract(&mut self) {
        self.status_message = match self.extract.start() {
            Ok(()) => "Extraction complete.".to_string(),
            Err(e) => e.to_string(),
        };
    }

    pub fn start_analyze(&mut self) {
        self.status_message = match self.analyze.start() {
            Ok(()) => "Analysis complete.".to_string(),
            Err(e) => e.to_string(),
        };
    }

    /// Advance time-driven state. Returns how long until the next poll is
    /// needed, or `None` when nothing is pending.
    pub fn tick(&mut self, now: Instant) -> Option<Duration> {
        if self.embed.poll(now) {
            self.status_message = "Embedding complete.".to_string();
        }
        self.embed.time_until_completion(now)
    }

    /// Apply a restored session snapshot.
    ///
    /// Theme and font size set explicitly in `config.toml` win over the
    /// values remembered from the last run.
    pub fn restore_session(&mut self, data: &SessionData, config: &AppConfig) {
        self.active_tab = data.active_tab;
        if !config.theme_explicit {
            self.dark_mode = data.dark_mode;
        }
        if let (Some(size), false) = (data.font_size, config.font_size_explicit) {
            self.set_font_size(size);
        }
        if let Some(m) = &data.embed_method {
            restore_method(&mut self.embed.methods, m);
        }
        if let Some(m) = &data.extract_method {
            restore_method(&mut self.extract.methods, m);
        }
    }

    /// Snapshot of the persistable state.
    pub fn session_snapshot(&self) -> SessionData {
        SessionData {
            version: SESSION_VERSION,
            active_tab: self.active_tab,
            dark_mode: self.dark_mode,
            font_size: Some(self.font_size),
            embed_method: Some(persist_method(&self.embed.methods)),
            extract_method: Some(persist_method(&self.extract.methods)),
        }
    }

    /// Save the session if persistence is enabled. Failures are logged only.
    pub fn save_session(&self) {
        let Some(path) = &self.session_path else {
            return;
        };
        if let Err(e) = session::save(&self.session_snapshot(), path) {
            tracing::warn!(error = %e, "Failed to save session");
        }
    }
}

fn persist_method(selection: &MethodSelection) -> PersistedMethod {
    PersistedMethod {
        media: selection.media_type(),
        key: selection.selected_key().to_string(),
    }
}

fn restore_method(selection: &mut MethodSelection, persisted: &PersistedMethod) {
    selection.set_media_type(persisted.media);
    if !selection.select_key(&persisted.key) {
        tracing::debug!(key = %persisted.key, "Persisted method no longer offered");
    }
}
