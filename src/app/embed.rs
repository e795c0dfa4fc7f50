// StegoSight - app/embed.rs
//
// Embed workflow state: cover file, secret data, security options, technique
// selection, and the simulated Idle -> FileSelected -> Processing -> Success
// lifecycle.
//
// Architecture:
//   - The UI thread owns `EmbedWorkflow`; there are no background threads.
//   - "Processing" is a one-shot deadline checked by `poll()` every frame.
//     Once scheduled it always fires exactly once; it cannot be cancelled.

use crate::core::catalog::Workflow;
use crate::core::file_info::{estimate_capacity, format_file_size};
use crate::core::media::{dotted_extension, infer_media_type, is_previewable_image, MediaType};
use crate::core::risk::{sample_embed_risk, RiskResult};
use crate::core::selection::MethodSelection;
use crate::platform::fs::{self, PreviewImage};
use crate::util::error::WorkflowError;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Which column the Embed context panel shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbedStage {
    Idle,
    FileSelected,
    Processing,
    Success,
}

/// Where the secret payload comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecretSource {
    Text,
    File,
}

/// Encryption toggle and passwords. Never used cryptographically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecurityOptions {
    pub encrypt: bool,
    pub password: String,
    pub confirm_password: String,
}

impl Default for SecurityOptions {
    fn default() -> Self {
        Self {
            encrypt: true,
            password: String::new(),
            confirm_password: String::new(),
        }
    }
}

impl SecurityOptions {
    /// False only when encryption is on and both fields are filled but differ.
    pub fn passwords_match(&self) -> bool {
        !self.encrypt
            || self.confirm_password.is_empty()
            || self.password == self.confirm_password
    }
}

/// File facts shown in the info card under the preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverInfo {
    pub path: PathBuf,
    pub file_name: String,
    pub size: u64,
    /// Dotted extension, or `"unknown"`.
    pub extension: String,
}

impl CoverInfo {
    fn new(path: PathBuf, size: u64) -> Self {
        let file_name = display_name(&path);
        let extension = match dotted_extension(&path) {
            e if e.is_empty() => "unknown".to_string(),
            e => e,
        };
        Self {
            path,
            file_name,
            size,
            extension,
        }
    }

    pub fn size_text(&self) -> String {
        format_file_size(self.size)
    }

    pub fn capacity_text(&self) -> String {
        estimate_capacity(self.size)
    }
}

/// What the preview area renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoverPreview {
    Empty,
    Image(Arc<PreviewImage>),
    Message(String),
}

/// One-shot deadline used to simulate processing latency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OneShot {
    due: Instant,
}

impl OneShot {
    pub fn after(now: Instant, delay: Duration) -> Self {
        Self { due: now + delay }
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.due
    }

    pub fn remaining(&self, now: Instant) -> Duration {
        self.due.saturating_duration_since(now)
    }
}

/// Complete Embed tab state.
#[derive(Debug)]
pub struct EmbedWorkflow {
    pub cover: Option<CoverInfo>,
    pub preview: CoverPreview,
    /// Bumped on every cover selection so the UI knows to re-upload textures.
    pub preview_generation: u64,
    pub secret_source: SecretSource,
    pub secret_text: String,
    pub secret_file: Option<PathBuf>,
    pub security: SecurityOptions,
    pub methods: MethodSelection,
    pub stage: EmbedStage,
    pub risk: Option<RiskResult>,
    /// Inline warning from the last refused Start.
    pub warning: Option<WorkflowError>,
    processing_delay: Duration,
    pending: Option<OneShot>,
}

impl EmbedWorkflow {
    pub fn new(processing_delay: Duration) -> Self {
        Self {
            cover: None,
            preview: CoverPreview::Empty,
            preview_generation: 0,
            secret_source: SecretSource::Text,
            secret_text: String::new(),
            secret_file: None,
            security: SecurityOptions::default(),
            methods: MethodSelection::new(Workflow::Embed, MediaType::Image),
            stage: EmbedStage::Idle,
            risk: None,
            warning: None,
            processing_delay,
            pending: None,
        }
    }

    pub fn media_type(&self) -> MediaType {
        self.methods.media_type()
    }

    /// Prompt for the cover drop zone, following the current media type.
    pub fn cover_prompt(&self) -> &'static str {
        self.media_type().drop_prompt()
    }

    pub fn is_processing(&self) -> bool {
        self.pending.is_some()
    }

    /// Switch the technique catalog (media-type buttons or file inference).
    pub fn set_media_type(&mut self, media: MediaType) {
        if self.methods.set_media_type(media) {
            tracing::debug!(media = media.key(), "Embed media type changed");
        }
    }

    /// Handle a click on technique card `index`.
    pub fn select_method(&mut self, index: usize) {
        if self.methods.select_index(index) {
            tracing::info!(method = self.methods.selected_key(), "Embed method selected");
        }
    }

    /// A cover file was dropped or chosen. Refused while processing.
    pub fn select_cover(&mut self, path: PathBuf) -> Result<(), WorkflowError> {
        if self.is_processing() {
            tracing::debug!(path = %path.display(), "Cover change refused while embedding");
            return Err(WorkflowError::EmbedInProgress);
        }
        tracing::info!(path = %path.display(), "Cover file selected");

        if let Some(media) = infer_media_type(&path) {
            self.set_media_type(media);
        }

        let probe = fs::probe_file(&path);
        self.preview = build_preview(&path, probe.exists);
        self.preview_generation += 1;
        self.cover = Some(CoverInfo::new(path, probe.size));
        self.warning = None;
        self.stage = EmbedStage::FileSelected;
        Ok(())
    }

    /// A secret payload file was dropped or chosen.
    pub fn select_secret_file(&mut self, path: PathBuf) {
        tracing::info!(path = %path.display(), "Secret file selected");
        self.secret_file = Some(path);
        self.secret_source = SecretSource::File;
    }

    /// Begin the simulated embedding.
    ///
    /// Refused without a cover file. A second Start while processing is
    /// ignored so only one completion is ever scheduled.
    pub fn start(&mut self, now: Instant) -> Result<(), WorkflowError> {
        if self.is_processing() {
            tracing::debug!("Embed already processing; ignoring start");
            return Ok(());
        }
        if self.cover.is_none() {
            let e = WorkflowError::NoFileSelected {
                workflow: "embedding",
            };
            tracing::warn!(error = %e, "Embed start refused");
            self.warning = Some(e.clone());
            return Err(e);
        }

        tracing::info!(
            method = self.methods.selected_key(),
            media = self.media_type().key(),
            encrypt = self.security.encrypt,
            "Embedding started"
        );
        tracing::debug!(password_len = self.security.password.len(), "Embedding password");
        self.warning = None;
        self.risk = None;
        self.stage = EmbedStage::Processing;
        self.pending = Some(OneShot::after(now, self.processing_delay));
        Ok(())
    }

    /// Fire the pending completion if its deadline has passed.
    /// Returns true on the frame the workflow reaches `Success`.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.pending {
            Some(timer) if timer.is_due(now) => {
                self.pending = None;
                let risk = sample_embed_risk();
                tracing::info!(risk = %risk.label(), "Embedding complete");
                self.risk = Some(risk);
                self.stage = EmbedStage::Success;
                true
            }
            _ => false,
        }
    }

    /// Time left before the pending completion fires.
    pub fn time_until_completion(&self, now: Instant) -> Option<Duration> {
        self.pending.map(|t| t.remaining(now))
    }

    pub fn save_stego_file(&self) {
        tracing::info!("Save stego file requested");
    }

    pub fn request_deep_analysis(&self) {
        tracing::info!("Deep analysis requested");
    }
}

fn build_preview(path: &Path, exists: bool) -> CoverPreview {
    if exists && is_previewable_image(path) {
        match fs::load_preview_image(path) {
            Ok(img) => CoverPreview::Image(Arc::new(img)),
            Err(e) => {
                tracing::warn!(error = %e, "Cover preview unavailable");
                CoverPreview::Message("Unable to preview this file".to_string())
            }
        }
    } else {
        let ext = match dotted_extension(path) {
            e if e.is_empty() => "unknown".to_string(),
            e => e,
        };
        CoverPreview::Message(format!("File: {}\nType: {ext}", display_name(path)))
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const DELAY: Duration = Duration::from_millis(1_500);

    fn write_png(path: &Path) {
        image::RgbaImage::from_pixel(4, 4, image::Rgba([0, 0, 0, 255]))
            .save_with_format(path, image::ImageFormat::Png)
            .unwrap();
    }

    #[test]
    fn test_initial_state() {
        let w = EmbedWorkflow::new(DELAY);
        assert_eq!(w.stage, EmbedStage::Idle);
        assert_eq!(w.media_type(), MediaType::Image);
        assert_eq!(w.methods.selected_key(), "content_adaptive");
        assert!(w.security.encrypt);
        assert_eq!(w.preview, CoverPreview::Empty);
    }

    #[test]
    fn test_select_image_cover_builds_preview_and_info() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cover.png");
        write_png(&path);
        let size = std::fs::metadata(&path).unwrap().len();

        let mut w = EmbedWorkflow::new(DELAY);
        w.set_media_type(MediaType::Audio);
        w.select_cover(path.clone()).unwrap();

        assert_eq!(w.stage, EmbedStage::FileSelected);
        assert_eq!(w.media_type(), MediaType::Image);
        assert!(matches!(w.preview, CoverPreview::Image(_)));
        assert_eq!(w.preview_generation, 1);
        let info = w.cover.as_ref().unwrap();
        assert_eq!(info.file_name, "cover.png");
        assert_eq!(info.size, size);
        assert_eq!(info.extension, ".png");
    }

    #[test]
    fn test_select_missing_cover_shows_fallback_message() {
        let mut w = EmbedWorkflow::new(DELAY);
        w.select_cover(PathBuf::from("/definitely/not/here/song.mp3")).unwrap();

        assert_eq!(w.stage, EmbedStage::FileSelected);
        assert_eq!(w.media_type(), MediaType::Audio);
        assert_eq!(
            w.preview,
            CoverPreview::Message("File: song.mp3\nType: .mp3".to_string())
        );
        let info = w.cover.as_ref().unwrap();
        assert_eq!(info.size_text(), "0.00 B");
        assert_eq!(info.capacity_text(), "~0.00 B of secret data");
    }

    #[test]
    fn test_corrupt_image_shows_decode_message() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.jpg");
        std::fs::write(&path, b"garbage").unwrap();

        let mut w = EmbedWorkflow::new(DELAY);
        w.select_cover(path).unwrap();
        assert_eq!(
            w.preview,
            CoverPreview::Message("Unable to preview this file".to_string())
        );
    }

    #[test]
    fn test_unknown_extension_keeps_media_type() {
        let mut w = EmbedWorkflow::new(DELAY);
        w.set_media_type(MediaType::Video);
        w.select_cover(PathBuf::from("notes")).unwrap();
        assert_eq!(w.media_type(), MediaType::Video);
        assert_eq!(w.cover.as_ref().unwrap().extension, "unknown");
    }

    #[test]
    fn test_start_without_cover_is_refused() {
        let mut w = EmbedWorkflow::new(DELAY);
        let err = w.start(Instant::now()).unwrap_err();
        assert_eq!(
            err,
            WorkflowError::NoFileSelected {
                workflow: "embedding"
            }
        );
        assert_eq!(w.stage, EmbedStage::Idle);
        assert!(w.warning.is_some());
        assert!(!w.is_processing());
    }

    #[test]
    fn test_processing_completes_once_after_delay() {
        let mut w = EmbedWorkflow::new(DELAY);
        w.select_cover(PathBuf::from("cover.bmp")).unwrap();

        let t0 = Instant::now();
        w.start(t0).unwrap();
        assert_eq!(w.stage, EmbedStage::Processing);
        assert_eq!(w.time_until_completion(t0), Some(DELAY));

        assert!(!w.poll(t0 + Duration::from_millis(1_499)));
        assert_eq!(w.stage, EmbedStage::Processing);

        assert!(w.poll(t0 + DELAY));
        assert_eq!(w.stage, EmbedStage::Success);
        assert_eq!(w.risk.as_ref().unwrap().label(), "Risk Score: 18 (Low)");

        // Fired exactly once.
        assert!(!w.poll(t0 + DELAY * 2));
        assert_eq!(w.time_until_completion(t0), None);
    }

    #[test]
    fn test_second_start_while_processing_is_ignored() {
        let mut w = EmbedWorkflow::new(DELAY);
        w.select_cover(PathBuf::from("cover.png")).unwrap();
        let t0 = Instant::now();
        w.start(t0).unwrap();
        w.start(t0 + Duration::from_millis(1_000)).unwrap();
        // The original deadline still applies.
        assert!(w.poll(t0 + DELAY));
    }

    #[test]
    fn test_cover_change_while_processing_is_refused() {
        let mut w = EmbedWorkflow::new(DELAY);
        w.select_cover(PathBuf::from("first.png")).unwrap();
        let t0 = Instant::now();
        w.start(t0).unwrap();

        let err = w.select_cover(PathBuf::from("second.wav")).unwrap_err();
        assert_eq!(err, WorkflowError::EmbedInProgress);
        assert_eq!(w.stage, EmbedStage::Processing);
        assert_eq!(w.cover.as_ref().unwrap().file_name, "first.png");
        assert_eq!(w.media_type(), MediaType::Image);
        assert_eq!(w.preview_generation, 1);

        assert!(w.poll(t0 + DELAY));
        assert_eq!(w.stage, EmbedStage::Success);
        w.select_cover(PathBuf::from("second.wav")).unwrap();
        assert_eq!(w.stage, EmbedStage::FileSelected);
    }

    #[test]
    fn test_password_mismatch_detection() {
        let mut s = SecurityOptions::default();
        assert!(s.passwords_match());
        s.password = "hunter2".into();
        s.confirm_password = "hunter3".into();
        assert!(!s.passwords_match());
        s.encrypt = false;
        assert!(s.passwords_match());
    }

    #[test]
    fn test_secret_file_switches_source() {
        let mut w = EmbedWorkflow::new(DELAY);
        w.select_secret_file(PathBuf::from("payload.txt"));
        assert_eq!(w.secret_source, SecretSource::File);
        assert_eq!(w.secret_file.as_deref(), Some(Path::new("payload.txt")));
    }
}
