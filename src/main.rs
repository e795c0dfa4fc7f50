// StegoSight - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. config.toml loading and logging initialisation
// 3. Session restore and startup file/tab selection
// 4. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` and other
// binary-side code can still use `crate::app::...`, `crate::core::...` etc.
pub use stegosight::app;

pub use stegosight::core;
pub use stegosight::platform;
pub use stegosight::ui;
pub use stegosight::util;

use clap::Parser;
use std::path::PathBuf;

const ICON_SIZE: u32 = 64;

/// Draw the window icon: a blue disc with a white ring and pupil.
fn build_icon() -> egui::IconData {
    let c = (ICON_SIZE as f32 - 1.0) / 2.0;
    let img = image::RgbaImage::from_fn(ICON_SIZE, ICON_SIZE, |x, y| {
        let d = ((x as f32 - c).powi(2) + (y as f32 - c).powi(2)).sqrt();
        let r = c + 0.5;
        if d > r {
            image::Rgba([0, 0, 0, 0])
        } else if d < r * 0.22 || (d > r * 0.45 && d < r * 0.62) {
            image::Rgba([255, 255, 255, 255])
        } else {
            image::Rgba([0x1e, 0x88, 0xe5, 255])
        }
    });
    egui::IconData {
        width: img.width(),
        height: img.height(),
        rgba: img.into_raw(),
    }
}

/// Configure fonts for the egui context.
///
/// On Windows, loads Segoe UI and Segoe UI Emoji from the system font
/// directory ahead of the egui built-ins so the emoji used in tab and card
/// titles render. The built-in fonts stay as final fallbacks.
///
/// On non-Windows platforms the egui defaults are used unchanged.
fn configure_fonts(ctx: &egui::Context) {
    #[cfg(target_os = "windows")]
    {
        let mut fonts = egui::FontDefinitions::default();

        let candidates: &[(&str, &str)] = &[
            ("Segoe UI", r"C:\Windows\Fonts\segoeui.ttf"),
            ("Segoe UI Emoji", r"C:\Windows\Fonts\seguiemj.ttf"),
        ];

        let mut loaded_names: Vec<&str> = Vec::new();
        for (name, path) in candidates {
            match std::fs::read(path) {
                Ok(data) => {
                    fonts
                        .font_data
                        .insert((*name).to_owned(), egui::FontData::from_owned(data).into());
                    loaded_names.push(name);
                    tracing::debug!(font = name, "Loaded Windows system font");
                }
                Err(e) => {
                    tracing::warn!(
                        font = name,
                        error = %e,
                        "Failed to load Windows system font; some symbols may render as squares"
                    );
                }
            }
        }

        if !loaded_names.is_empty() {
            if let Some(proportional) = fonts.families.get_mut(&egui::FontFamily::Proportional) {
                for (i, name) in loaded_names.iter().enumerate() {
                    proportional.insert(i, (*name).to_owned());
                }
            }
            ctx.set_fonts(fonts);
            tracing::info!(fonts = ?loaded_names, "Windows system fonts configured");
        }
    }

    #[cfg(not(target_os = "windows"))]
    let _ = ctx;
}

/// StegoSight - Steganography and steganalysis workstation.
///
/// Hide data in media files, recover it, and screen files for signs of
/// concealed content.
#[derive(Parser, Debug)]
#[command(name = "StegoSight", version, about)]
struct Cli {
    /// File to open in the starting tab.
    file: Option<PathBuf>,

    /// Tab to open at startup: embed, extract or analyze.
    #[arg(short = 't', long = "tab")]
    tab: Option<String>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    let platform_paths = platform::config::PlatformPaths::resolve();

    // config.toml is read before logging exists; its warnings are replayed
    // once the subscriber is installed.
    let (config, config_warnings) = platform::config::load_config(&platform_paths.config_dir);
    let log_file = config.log_file_path(&platform_paths);
    util::logging::init(cli.debug, config.log_level.as_deref(), log_file.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        config_dir = %platform_paths.config_dir.display(),
        "StegoSight starting"
    );
    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Configuration warning");
    }

    let mut state = app::state::AppState::new(&config, cli.debug);
    let session_path = app::session::session_path(&platform_paths.data_dir);
    if let Some(data) = app::session::load(&session_path) {
        state.restore_session(&data, &config);
    }
    state.session_path = Some(session_path);
    state.config_path = Some(platform_paths.config_dir.join(util::constants::CONFIG_FILE_NAME));
    state.log_path = log_file;

    // Tab precedence: --tab > ui.default_tab > restored session > Embed.
    let requested_tabs = [
        ("ui.default_tab", config.default_tab.as_deref()),
        ("--tab", cli.tab.as_deref()),
    ];
    for (source, key) in requested_tabs {
        let Some(key) = key else { continue };
        match app::state::Tab::from_key(key) {
            Some(tab) => state.select_tab(tab),
            None => tracing::warn!(source, tab = key, "Unknown tab name; ignoring"),
        }
    }

    if let Some(path) = cli.file {
        state.open_file(path);
    }

    if !config_warnings.is_empty() {
        state.status_message = format!(
            "{} configuration warning(s); see the log for details.",
            config_warnings.len()
        );
    }

    tracing::info!(tab = state.active_tab.key(), "Ready to launch GUI");

    let zoom_factor = state.zoom_factor;
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(util::constants::WINDOW_TITLE)
            .with_inner_size(util::constants::WINDOW_DEFAULT_SIZE)
            .with_min_inner_size(util::constants::WINDOW_MIN_SIZE)
            .with_drag_and_drop(true)
            .with_icon(build_icon()),
        ..Default::default()
    };

    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |cc| {
            configure_fonts(&cc.egui_ctx);
            cc.egui_ctx.set_zoom_factor(zoom_factor);
            Ok(Box::new(gui::StegoSightApp::new(state)))
        }),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch StegoSight GUI: {e}");
        std::process::exit(1);
    }
}
