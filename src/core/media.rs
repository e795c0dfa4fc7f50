// StegoSight - core/media.rs
//
// Media-type inference from file extensions and the per-media display text
// used by the drop zones and method panels.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Extensions (lower-case, with leading dot) recognised as images.
pub const IMAGE_EXTENSIONS: &[&str] = &[".png", ".jpg", ".jpeg", ".bmp", ".tif", ".tiff"];

/// Extensions recognised as audio.
pub const AUDIO_EXTENSIONS: &[&str] = &[".wav", ".mp3", ".flac", ".aac", ".ogg", ".wma"];

/// Extensions recognised as video.
pub const VIDEO_EXTENSIONS: &[&str] = &[
    ".avi", ".mp4", ".mkv", ".mov", ".ogv", ".wmv", ".m4v", ".mpeg", ".mpg",
];

/// Image extensions the preview pane can decode.
pub const PREVIEWABLE_EXTENSIONS: &[&str] = &[".png", ".jpg", ".jpeg", ".bmp"];

/// Kind of cover/stego media. Drives which technique catalog is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Audio,
    Video,
}

impl MediaType {
    /// All media types in display order.
    pub fn all() -> &'static [MediaType] {
        &[MediaType::Image, MediaType::Audio, MediaType::Video]
    }

    /// Stable lower-case key (`"image"`, `"audio"`, `"video"`).
    pub fn key(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Audio => "audio",
            Self::Video => "video",
        }
    }

    /// Button label for the media-type selector.
    pub fn label(self) -> &'static str {
        match self {
            Self::Image => "\u{1f5bc} Image",
            Self::Audio => "\u{1f3a7} Audio",
            Self::Video => "\u{1f39e} Video",
        }
    }

    /// Prompt shown inside the embed cover drop zone.
    pub fn drop_prompt(self) -> &'static str {
        match self {
            Self::Image => "\u{1f5bc} Drop an image here, or click to choose a file",
            Self::Audio => "\u{1f3a7} Drop an audio file here, or click to choose a file",
            Self::Video => "\u{1f39e} Drop a video file here, or click to choose a file",
        }
    }

    /// One-line list of supported cover formats.
    pub fn supported_formats(self) -> &'static str {
        match self {
            Self::Image => "Supported images: PNG, JPEG, JPG, BMP",
            Self::Audio => "Supported audio: WAV, MP3, FLAC",
            Self::Video => "Supported video: AVI, MP4, MKV, MOV, OGG, WMA, AAC",
        }
    }

    /// Summary of the embedding techniques offered for this media type.
    pub fn method_summary(self) -> &'static str {
        match self {
            Self::Image => {
                "Techniques suited to images, such as Content-Adaptive, LSB Matching, PVD and DCT"
            }
            Self::Audio => {
                "Techniques designed for audio: Adaptive Audio, LSB and Metadata tagging"
            }
            Self::Video => {
                "Techniques for video covering adaptive frame selection, LSB and Metadata"
            }
        }
    }
}

/// Map a file suffix (with leading dot, any case) to its media type.
///
/// Returns `None` for unrecognised or empty suffixes.
pub fn infer_media_type_from_suffix(suffix: &str) -> Option<MediaType> {
    let suffix = suffix.to_ascii_lowercase();
    let suffix = suffix.as_str();
    if IMAGE_EXTENSIONS.contains(&suffix) {
        Some(MediaType::Image)
    } else if AUDIO_EXTENSIONS.contains(&suffix) {
        Some(MediaType::Audio)
    } else if VIDEO_EXTENSIONS.contains(&suffix) {
        Some(MediaType::Video)
    } else {
        None
    }
}

/// Infer the media type of a path from its extension.
pub fn infer_media_type(path: &Path) -> Option<MediaType> {
    infer_media_type_from_suffix(&dotted_extension(path))
}

/// Whether the preview pane should try to decode `path` as an image.
pub fn is_previewable_image(path: &Path) -> bool {
    let ext = dotted_extension(path).to_ascii_lowercase();
    PREVIEWABLE_EXTENSIONS.contains(&ext.as_str())
}

/// The extension of `path` with its leading dot (`".png"`), or an empty
/// string when the path has none.
pub fn dotted_extension(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{e}"))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_extensions_resolve_to_image() {
        for ext in IMAGE_EXTENSIONS {
            assert_eq!(
                infer_media_type_from_suffix(ext),
                Some(MediaType::Image),
                "{ext}"
            );
        }
    }

    #[test]
    fn test_audio_extensions_resolve_to_audio() {
        for ext in AUDIO_EXTENSIONS {
            assert_eq!(
                infer_media_type_from_suffix(ext),
                Some(MediaType::Audio),
                "{ext}"
            );
        }
    }

    #[test]
    fn test_video_extensions_resolve_to_video() {
        for ext in VIDEO_EXTENSIONS {
            assert_eq!(
                infer_media_type_from_suffix(ext),
                Some(MediaType::Video),
                "{ext}"
            );
        }
    }

    #[test]
    fn test_inference_is_case_insensitive() {
        assert_eq!(infer_media_type_from_suffix(".PNG"), Some(MediaType::Image));
        assert_eq!(infer_media_type_from_suffix(".Mp3"), Some(MediaType::Audio));
        assert_eq!(infer_media_type_from_suffix(".MKV"), Some(MediaType::Video));
    }

    #[test]
    fn test_unknown_suffixes_return_none() {
        assert_eq!(infer_media_type_from_suffix(".txt"), None);
        assert_eq!(infer_media_type_from_suffix(""), None);
        // The suffix must carry its dot.
        assert_eq!(infer_media_type_from_suffix("png"), None);
    }

    #[test]
    fn test_infer_from_path_uses_extension() {
        assert_eq!(
            infer_media_type(Path::new("/tmp/sample.PNG")),
            Some(MediaType::Image)
        );
        assert_eq!(
            infer_media_type(Path::new("clip.final.mov")),
            Some(MediaType::Video)
        );
        assert_eq!(infer_media_type(Path::new("README")), None);
    }

    #[test]
    fn test_previewable_excludes_tiff() {
        assert!(is_previewable_image(Path::new("a.JPG")));
        assert!(is_previewable_image(Path::new("a.bmp")));
        assert!(!is_previewable_image(Path::new("a.tiff")));
        assert!(!is_previewable_image(Path::new("a.wav")));
    }
}
