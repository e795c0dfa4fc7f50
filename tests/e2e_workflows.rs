// StegoSight - tests/e2e_workflows.rs
//
// End-to-end tests for the three workflows driven through `AppState`, the
// same entry point the GUI uses.
//
// These tests exercise the real filesystem, real image decoding, real
// config parsing and real session files in a temporary directory.

use stegosight::app::analyze::{AnalyzeStatus, LogTag};
use stegosight::app::embed::{CoverPreview, EmbedStage};
use stegosight::app::extract::ExtractStage;
use stegosight::app::session;
use stegosight::app::state::{AppState, DropTarget, Tab};
use stegosight::core::media::MediaType;
use stegosight::platform::config::{load_config, AppConfig};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tempfile::TempDir;

// =============================================================================
// Helpers
// =============================================================================

fn write_png(path: &Path, w: u32, h: u32) {
    image::RgbaImage::from_pixel(w, h, image::Rgba([200, 40, 40, 255]))
        .save_with_format(path, image::ImageFormat::Png)
        .unwrap();
}

fn new_state() -> AppState {
    AppState::new(&AppConfig::default(), false)
}

// =============================================================================
// Embed E2E
// =============================================================================

#[test]
fn e2e_embed_image_cover_to_success() {
    let dir = TempDir::new().unwrap();
    let cover = dir.path().join("sample.PNG");
    write_png(&cover, 32, 16);

    let mut state = new_state();
    state.embed.set_media_type(MediaType::Video);
    state.route_file(DropTarget::EmbedCover, cover.clone());

    assert_eq!(state.embed.stage, EmbedStage::FileSelected);
    assert_eq!(state.embed.media_type(), MediaType::Image);
    assert_eq!(state.embed.methods.methods().len(), 5);
    match &state.embed.preview {
        CoverPreview::Image(img) => assert_eq!((img.width, img.height), (32, 16)),
        other => panic!("expected an image preview, got {other:?}"),
    }
    let info = state.embed.cover.as_ref().unwrap();
    assert_eq!(info.extension, ".png");
    assert!(info.capacity_text().starts_with('~'));

    let t0 = Instant::now();
    state.start_embed(t0);
    assert_eq!(state.embed.stage, EmbedStage::Processing);

    let delay = Duration::from_millis(AppConfig::default().embed_processing_delay_ms);
    assert!(state.tick(t0 + delay / 2).is_some());
    assert_eq!(state.embed.stage, EmbedStage::Processing);

    assert!(state.tick(t0 + delay).is_none());
    assert_eq!(state.embed.stage, EmbedStage::Success);
    assert!(!state.embed.risk.as_ref().unwrap().label().is_empty());
}

#[test]
fn e2e_embed_configured_delay_is_honoured() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        "[embed]\nprocessing_delay_ms = 200\n",
    )
    .unwrap();
    let (config, warnings) = load_config(dir.path());
    assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");

    let mut state = AppState::new(&config, false);
    state.open_file(PathBuf::from("cover.wav"));
    let t0 = Instant::now();
    state.start_embed(t0);
    state.tick(t0 + Duration::from_millis(200));
    assert_eq!(state.embed.stage, EmbedStage::Success);
}

#[test]
fn e2e_embed_non_image_cover_shows_file_summary() {
    let dir = TempDir::new().unwrap();
    let cover = dir.path().join("clip.mkv");
    std::fs::write(&cover, vec![0u8; 2048]).unwrap();

    let mut state = new_state();
    state.open_file(cover);
    assert_eq!(state.embed.media_type(), MediaType::Video);
    assert_eq!(
        state.embed.preview,
        CoverPreview::Message("File: clip.mkv\nType: .mkv".to_string())
    );
    assert_eq!(state.embed.cover.as_ref().unwrap().size_text(), "2.00 KB");
}

// =============================================================================
// Extract E2E
// =============================================================================

#[test]
fn e2e_extract_flow() {
    let mut state = new_state();
    state.select_tab(Tab::Extract);

    state.start_extract();
    assert_eq!(state.extract.stage, ExtractStage::Idle);

    state.open_file(PathBuf::from("stego.flac"));
    assert_eq!(state.extract.media_type(), MediaType::Audio);
    state.start_extract();
    assert_eq!(state.extract.stage, ExtractStage::Result);
    assert_eq!(
        state.extract.result.as_ref().unwrap().file_name,
        "secret_document.txt"
    );
}

// =============================================================================
// Analyze E2E
// =============================================================================

#[test]
fn e2e_analyze_without_file_leaves_results_unchanged() {
    let mut state = new_state();
    state.select_tab(Tab::Analyze);
    state.start_analyze();

    assert_eq!(state.analyze.status, AnalyzeStatus::Warning);
    assert!(state.analyze.report.is_none());
    let tags: Vec<LogTag> = state.analyze.log_lines().map(|l| l.tag).collect();
    assert_eq!(tags, vec![LogTag::Warn]);
}

#[test]
fn e2e_analyze_existing_file() {
    let dir = TempDir::new().unwrap();
    let suspect = dir.path().join("suspect.jpg");
    std::fs::write(&suspect, b"not really a jpeg").unwrap();

    let mut state = new_state();
    state.select_tab(Tab::Analyze);
    state.open_file(suspect);
    state.start_analyze();

    assert_eq!(state.analyze.status, AnalyzeStatus::Complete);
    let report = state.analyze.report.as_ref().unwrap();
    assert_eq!(report.risk.label(), "Risk Score: 62 (Medium)");
    assert_eq!(report.findings.len(), 3);
}

// =============================================================================
// Session E2E
// =============================================================================

#[test]
fn e2e_session_survives_restart() {
    let dir = TempDir::new().unwrap();
    let path = session::session_path(dir.path());

    let mut first = new_state();
    first.session_path = Some(path.clone());
    first.select_tab(Tab::Analyze);
    first.toggle_theme();
    first.extract.select_method(2);
    first.save_session();

    let mut second = new_state();
    second.restore_session(&session::load(&path).unwrap(), &AppConfig::default());
    assert_eq!(second.active_tab, Tab::Analyze);
    assert!(second.dark_mode);
    assert_eq!(second.extract.methods.selected_key(), "pvd");

    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(!raw.contains("password"));
}
