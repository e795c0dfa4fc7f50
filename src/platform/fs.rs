// StegoSight - platform/fs.rs
//
// Read-only filesystem access for user-selected files: existence/size
// probing and cover preview decoding. Nothing here writes to disk.

use crate::core::media::is_previewable_image;
use crate::util::constants::PREVIEW_MAX_DIMENSION;
use crate::util::error::PreviewError;
use std::path::Path;

/// Existence and size of a selected file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileProbe {
    pub exists: bool,
    /// Size in bytes; 0 when the file is missing or unreadable.
    pub size: u64,
}

/// Check whether `path` exists and how large it is.
pub fn probe_file(path: &Path) -> FileProbe {
    match std::fs::metadata(path) {
        Ok(meta) => FileProbe {
            exists: true,
            size: if meta.is_file() { meta.len() } else { 0 },
        },
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "File probe failed");
            FileProbe {
                exists: false,
                size: 0,
            }
        }
    }
}

/// A decoded, possibly downscaled, RGBA8 preview.
#[derive(Clone, PartialEq, Eq)]
pub struct PreviewImage {
    pub width: u32,
    pub height: u32,
    /// Row-major, unpremultiplied RGBA8 pixels.
    pub rgba: Vec<u8>,
}

impl std::fmt::Debug for PreviewImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreviewImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.rgba.len())
            .finish()
    }
}

/// Decode `path` for the preview pane.
///
/// The format is sniffed from content, so a mislabelled extension still
/// decodes if the bytes are a supported image. Images larger than
/// `PREVIEW_MAX_DIMENSION` on either edge are downscaled, keeping aspect ratio.
pub fn load_preview_image(path: &Path) -> Result<PreviewImage, PreviewError> {
    if !path.exists() {
        return Err(PreviewError::NotFound {
            path: path.to_path_buf(),
        });
    }
    if !is_previewable_image(path) {
        return Err(PreviewError::Unsupported {
            path: path.to_path_buf(),
        });
    }

    let reader = image::ImageReader::open(path)
        .and_then(|r| r.with_guessed_format())
        .map_err(|source| PreviewError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    let mut img = reader.decode().map_err(|source| PreviewError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    if img.width() > PREVIEW_MAX_DIMENSION || img.height() > PREVIEW_MAX_DIMENSION {
        img = img.thumbnail(PREVIEW_MAX_DIMENSION, PREVIEW_MAX_DIMENSION);
    }

    let rgba = img.into_rgba8();
    let (width, height) = rgba.dimensions();
    tracing::debug!(path = %path.display(), width, height, "Preview decoded");
    Ok(PreviewImage {
        width,
        height,
        rgba: rgba.into_raw(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_png(path: &Path, w: u32, h: u32) {
        image::RgbaImage::from_pixel(w, h, image::Rgba([30, 136, 229, 255]))
            .save_with_format(path, image::ImageFormat::Png)
            .unwrap();
    }

    #[test]
    fn test_probe_existing_and_missing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cover.bin");
        std::fs::write(&path, vec![0u8; 1536]).unwrap();

        assert_eq!(
            probe_file(&path),
            FileProbe {
                exists: true,
                size: 1536
            }
        );
        assert_eq!(
            probe_file(&dir.path().join("missing.bin")),
            FileProbe {
                exists: false,
                size: 0
            }
        );
    }

    #[test]
    fn test_preview_decodes_uppercase_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sample.PNG");
        write_png(&path, 8, 4);

        let preview = load_preview_image(&path).unwrap();
        assert_eq!((preview.width, preview.height), (8, 4));
        assert_eq!(preview.rgba.len(), 8 * 4 * 4);
        assert_eq!(&preview.rgba[..4], &[30, 136, 229, 255]);
    }

    #[test]
    fn test_preview_downscales_large_images() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("wide.png");
        write_png(&path, PREVIEW_MAX_DIMENSION * 2, 16);

        let preview = load_preview_image(&path).unwrap();
        assert!(preview.width <= PREVIEW_MAX_DIMENSION);
        assert!(preview.height <= 16);
    }

    #[test]
    fn test_preview_rejects_corrupt_image() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"definitely not a png").unwrap();

        assert!(matches!(
            load_preview_image(&path),
            Err(PreviewError::Decode { .. })
        ));
    }

    #[test]
    fn test_preview_rejects_missing_and_unsupported() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            load_preview_image(&dir.path().join("nope.png")),
            Err(PreviewError::NotFound { .. })
        ));

        let wav = dir.path().join("tone.wav");
        std::fs::write(&wav, b"RIFF").unwrap();
        assert!(matches!(
            load_preview_image(&wav),
            Err(PreviewError::Unsupported { .. })
        ));
    }
}
