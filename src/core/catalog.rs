// StegoSight - core/catalog.rs
//
// Static technique catalog per workflow and media type. Keys are stable
// identifiers persisted in the session file; titles and descriptions are
// display text only.

use crate::core::media::MediaType;
use serde::{Deserialize, Serialize};

/// Which workflow a catalog belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Workflow {
    Embed,
    Extract,
}

/// One selectable technique card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MethodInfo {
    pub key: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

const fn method(key: &'static str, title: &'static str, description: &'static str) -> MethodInfo {
    MethodInfo {
        key,
        title,
        description,
    }
}

const EMBED_IMAGE: &[MethodInfo] = &[
    method(
        "content_adaptive",
        "\u{2728} Content-Adaptive (recommended)",
        "Analyses edges and texture to pick the least noticeable regions to embed in",
    ),
    method(
        "lsb",
        "\u{1f539} LSB Matching",
        "Adjusts least significant bits to minimise statistical anomalies (best for PNG/BMP)",
    ),
    method(
        "pvd",
        "\u{1f538} Pixel Value Differencing",
        "Chooses bits per pixel pair from their difference, raising payload capacity",
    ),
    method(
        "dct",
        "\u{1f4ca} Discrete Cosine Transform",
        "Embeds in JPEG DCT coefficients so the payload survives recompression",
    ),
    method(
        "append",
        "\u{1f4ce} Tail Append",
        "Appends the payload after the end of the cover file (best for PNG/BMP)",
    ),
];

const EMBED_AUDIO: &[MethodInfo] = &[
    method(
        "audio_adaptive",
        "\u{2728} Adaptive Audio",
        "Analyses signal dynamics to choose inconspicuous embedding positions",
    ),
    method(
        "audio_lsb",
        "\u{1f3a7} Audio LSB",
        "Hides data in the least significant bits of samples for WAV/MP3/FLAC",
    ),
    method(
        "audio_metadata",
        "\u{1f3f7} Metadata Tagging",
        "Stores the payload in ID3/FLAC metadata tags",
    ),
];

const EMBED_VIDEO: &[MethodInfo] = &[
    method(
        "video_adaptive",
        "\u{2728} Adaptive Video",
        "Scores frames and picks regions that are hard to notice",
    ),
    method(
        "video_lsb",
        "\u{1f39e} Frame LSB",
        "Hides data frame by frame using LSB (MP4/AVI/MKV/MOV)",
    ),
    method(
        "video_metadata",
        "\u{1f3f7} Metadata Tagging",
        "Stores the payload in container metadata (MP4/MKV/MOV)",
    ),
];

const EXTRACT_IMAGE: &[MethodInfo] = &[
    method(
        "adaptive",
        "\u{2728} Auto-detect (recommended)",
        "Tries several techniques such as LSB, PVD, DCT and Tail Append",
    ),
    method(
        "lsb",
        "\u{1f539} LSB Matching",
        "Recovers data embedded with LSB (best for PNG/BMP)",
    ),
    method(
        "pvd",
        "\u{1f538} Pixel Value Differencing",
        "Reads hidden bits from pixel pair differences",
    ),
    method(
        "dct",
        "\u{1f4ca} Discrete Cosine Transform",
        "Recovers data hidden in JPEG DCT coefficients",
    ),
    method(
        "append",
        "\u{1f4ce} Tail Append",
        "Checks for data appended after the end of the file",
    ),
];

const EXTRACT_AUDIO: &[MethodInfo] = &[
    method(
        "audio_adaptive",
        "\u{2728} Auto-detect",
        "Tries LSB and the audio-specific techniques",
    ),
    method(
        "audio_lsb",
        "\u{1f3a7} Audio LSB",
        "Recovers data from the least significant bits of PCM samples",
    ),
];

const EXTRACT_VIDEO: &[MethodInfo] = &[
    method(
        "video_adaptive",
        "\u{2728} Auto-detect",
        "Attempts automatic recovery from video frames",
    ),
    method(
        "video_lsb",
        "\u{1f39e} Frame LSB",
        "Recovers data from the least significant bit of each frame pixel",
    ),
];

/// Techniques offered for `workflow` on `media`, in display order.
pub fn methods(workflow: Workflow, media: MediaType) -> &'static [MethodInfo] {
    match (workflow, media) {
        (Workflow::Embed, MediaType::Image) => EMBED_IMAGE,
        (Workflow::Embed, MediaType::Audio) => EMBED_AUDIO,
        (Workflow::Embed, MediaType::Video) => EMBED_VIDEO,
        (Workflow::Extract, MediaType::Image) => EXTRACT_IMAGE,
        (Workflow::Extract, MediaType::Audio) => EXTRACT_AUDIO,
        (Workflow::Extract, MediaType::Video) => EXTRACT_VIDEO,
    }
}

impl Workflow {
    /// Method key pre-selected when the workflow opens.
    pub fn default_method(self) -> &'static str {
        match self {
            Self::Embed => "content_adaptive",
            Self::Extract => "adaptive",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_catalog_is_non_empty_with_unique_keys() {
        for workflow in [Workflow::Embed, Workflow::Extract] {
            for media in MediaType::all() {
                let list = methods(workflow, *media);
                assert!(!list.is_empty(), "{workflow:?}/{media:?} is empty");
                let keys: HashSet<_> = list.iter().map(|m| m.key).collect();
                assert_eq!(keys.len(), list.len(), "duplicate key in {workflow:?}/{media:?}");
            }
        }
    }

    #[test]
    fn test_default_methods_exist_in_image_catalog() {
        for workflow in [Workflow::Embed, Workflow::Extract] {
            let default = workflow.default_method();
            assert!(methods(workflow, MediaType::Image).iter().any(|m| m.key == default));
        }
    }

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(methods(Workflow::Embed, MediaType::Image).len(), 5);
        assert_eq!(methods(Workflow::Embed, MediaType::Audio).len(), 3);
        assert_eq!(methods(Workflow::Embed, MediaType::Video).len(), 3);
        assert_eq!(methods(Workflow::Extract, MediaType::Image).len(), 5);
        assert_eq!(methods(Workflow::Extract, MediaType::Audio).len(), 2);
        assert_eq!(methods(Workflow::Extract, MediaType::Video).len(), 2);
    }

    #[test]
    fn test_audio_catalog_uses_audio_keys() {
        let keys: Vec<_> = methods(Workflow::Embed, MediaType::Audio)
            .iter()
            .map(|m| m.key)
            .collect();
        assert!(!keys.contains(&"lsb"));
        assert!(keys.contains(&"audio_lsb"));
    }
}
