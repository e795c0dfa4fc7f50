// StegoSight - app/extract.rs
//
// Extract workflow state: target file, decryption options, technique
// selection, and the immediate simulated result.

use crate::core::catalog::Workflow;
use crate::core::media::{infer_media_type, MediaType};
use crate::core::selection::MethodSelection;
use crate::util::error::WorkflowError;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractStage {
    Idle,
    Result,
}

/// Sub-tab of the result view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractResultTab {
    Text,
    File,
}

/// Placeholder output of an extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedData {
    pub text: String,
    pub file_name: String,
    pub file_size: String,
}

impl ExtractedData {
    fn sample() -> Self {
        Self {
            text: "Sample result:\nA hidden message was found and decoded successfully".to_string(),
            file_name: "secret_document.txt".to_string(),
            file_size: "4.2 KB".to_string(),
        }
    }
}

/// Complete Extract tab state.
#[derive(Debug)]
pub struct ExtractWorkflow {
    pub target: Option<PathBuf>,
    pub methods: MethodSelection,
    pub maybe_encrypted: bool,
    pub password: String,
    pub stage: ExtractStage,
    pub result: Option<ExtractedData>,
    pub result_tab: ExtractResultTab,
    pub warning: Option<WorkflowError>,
}

impl Default for ExtractWorkflow {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractWorkflow {
    pub fn new() -> Self {
        Self {
            target: None,
            methods: MethodSelection::new(Workflow::Extract, MediaType::Image),
            maybe_encrypted: false,
            password: String::new(),
            stage: ExtractStage::Idle,
            result: None,
            result_tab: ExtractResultTab::Text,
            warning: None,
        }
    }

    pub fn media_type(&self) -> MediaType {
        self.methods.media_type()
    }

    /// A suspected stego file was dropped or chosen.
    pub fn select_target(&mut self, path: PathBuf) {
        tracing::info!(path = %path.display(), "Extract target selected");
        if let Some(media) = infer_media_type(&path) {
            if self.methods.set_media_type(media) {
                tracing::debug!(media = media.key(), "Extract media type changed");
            }
        }
        self.target = Some(path);
        self.warning = None;
    }

    pub fn select_method(&mut self, index: usize) {
        if self.methods.select_index(index) {
            tracing::info!(method = self.methods.selected_key(), "Extract method selected");
        }
    }

    /// Run the simulated extraction. The result is available immediately.
    pub fn start(&mut self) -> Result<(), WorkflowError> {
        if self.target.is_none() {
            let e = WorkflowError::NoFileSelected {
                workflow: "extraction",
            };
            tracing::warn!(error = %e, "Extract start refused");
            self.warning = Some(e.clone());
            return Err(e);
        }

        tracing::info!(
            method = self.methods.selected_key(),
            maybe_encrypted = self.maybe_encrypted,
            "Extraction started"
        );
        tracing::debug!(password_len = self.password.len(), "Extraction password");
        self.warning = None;
        self.result = Some(ExtractedData::sample());
        self.stage = ExtractStage::Result;
        tracing::info!("Extraction complete");
        Ok(())
    }

    pub fn save_extracted_file(&self) {
        tracing::info!("Save extracted file requested");
    }
}
