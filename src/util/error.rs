// StegoSight - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// All errors preserve the causal chain for diagnostic logging.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Error type for operations that write to disk.
///
/// Workflow, preview and config problems are never fatal and are reported
/// through their own types below.
#[derive(Debug)]
pub enum StegoSightError {
    /// I/O error with path context.
    Io {
        path: PathBuf,
        operation: &'static str,
        source: io::Error,
    },
}

impl fmt::Display for StegoSightError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io {
                path,
                operation,
                source,
            } => write!(
                f,
                "I/O error during {operation} on '{}': {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for StegoSightError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
        }
    }
}

// ---------------------------------------------------------------------------
// Workflow errors
// ---------------------------------------------------------------------------

/// Reasons a Start action is refused. None of these are fatal; the UI shows
/// them inline and stays in its current state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowError {
    /// The workflow's primary file has not been chosen.
    NoFileSelected { workflow: &'static str },

    /// The chosen file no longer exists on disk.
    FileNotFound { path: PathBuf },

    /// Every analysis technique checkbox is cleared.
    NoTechniqueSelected,

    /// The cover cannot change while an embed is pending.
    EmbedInProgress,
}

impl fmt::Display for WorkflowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoFileSelected { workflow } => {
                write!(f, "No file selected for {workflow}")
            }
            Self::FileNotFound { path } => {
                write!(f, "File '{}' not found", path.display())
            }
            Self::NoTechniqueSelected => {
                write!(f, "Select at least one analysis technique")
            }
            Self::EmbedInProgress => {
                write!(f, "Embedding in progress; wait for it to finish")
            }
        }
    }
}

impl std::error::Error for WorkflowError {}

// ---------------------------------------------------------------------------
// Preview errors
// ---------------------------------------------------------------------------

/// Errors produced while decoding a cover file for the preview pane.
#[derive(Debug)]
pub enum PreviewError {
    /// The path does not exist.
    NotFound { path: PathBuf },

    /// The extension is not one of the previewable image types.
    Unsupported { path: PathBuf },

    /// The image decoder rejected the file.
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },

    /// The file could not be opened.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for PreviewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { path } => {
                write!(f, "'{}' does not exist", path.display())
            }
            Self::Unsupported { path } => {
                write!(f, "'{}' is not a previewable image", path.display())
            }
            Self::Decode { path, source } => {
                write!(f, "Cannot decode '{}': {source}", path.display())
            }
            Self::Io { path, source } => {
                write!(f, "Cannot open '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for PreviewError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Decode { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A config value is out of the allowed range.
    ValueOutOfRange {
        field: String,
        value: String,
        expected: String,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { path, source } => {
                write!(f, "Config parse error '{}': {source}", path.display())
            }
            Self::ValueOutOfRange {
                field,
                value,
                expected,
            } => write!(
                f,
                "Config '{field}' = '{value}' is out of range. Expected: {expected}"
            ),
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for StegoSight results.
pub type Result<T> = std::result::Result<T, StegoSightError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_workflow_error_display_names_workflow() {
        let e = WorkflowError::NoFileSelected {
            workflow: "analysis",
        };
        assert_eq!(e.to_string(), "No file selected for analysis");
    }

    #[test]
    fn test_io_error_names_operation_and_keeps_source() {
        let e = StegoSightError::Io {
            path: PathBuf::from("session.json"),
            operation: "write session temp file",
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(
            e.to_string(),
            "I/O error during write session temp file on 'session.json': denied"
        );
        assert!(e.source().is_some());
    }

    #[test]
    fn test_preview_io_error_keeps_source() {
        let e = PreviewError::Io {
            path: PathBuf::from("cover.png"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert!(e.to_string().starts_with("Cannot open 'cover.png'"));
        assert!(e.source().is_some(), "io error should be chained");
    }
}
