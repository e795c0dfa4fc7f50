// StegoSight - app/session.rs
//
// Session persistence: save and restore the active tab, theme choice and
// technique selections between application restarts.
//
// Design principles:
// - Session is saved atomically (write -> temp, rename -> final) so a crash
//   during save never corrupts the previous good session.
// - Load errors are discarded; a corrupt or incompatible session starts the
//   app fresh.
// - File paths, secret text and passwords are never persisted.

use crate::app::state::Tab;
use crate::core::media::MediaType;
use crate::util::constants::SESSION_FILE_NAME;
use crate::util::error::{Result, StegoSightError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Version stamp for forward-compatibility checks.
///
/// Increment whenever `SessionData` changes in a breaking way. Version
/// mismatches silently discard the session.
pub const SESSION_VERSION: u32 = 1;

/// Persisted technique choice for one workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedMethod {
    pub media: MediaType,
    pub key: String,
}

/// Complete persistent session snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionData {
    /// Schema version; must equal `SESSION_VERSION` to be accepted.
    pub version: u32,

    pub active_tab: Tab,

    #[serde(default)]
    pub dark_mode: bool,

    /// Body font size chosen from the View menu.
    #[serde(default)]
    pub font_size: Option<f32>,

    #[serde(default)]
    pub embed_method: Option<PersistedMethod>,

    #[serde(default)]
    pub extract_method: Option<PersistedMethod>,
}

/// Resolve the session file path from the platform data directory.
pub fn session_path(data_dir: &Path) -> PathBuf {
    data_dir.join(SESSION_FILE_NAME)
}

/// Save `data` to `path` atomically (write temp, then rename).
///
/// Creates parent directories as needed. Callers log failures and carry on.
pub fn save(data: &SessionData, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(io_context(parent, "create session directory"))?;
    }

    let json = serde_json::to_string_pretty(data)
        .map_err(|e| io_context(path, "serialise session")(std::io::Error::other(e)))?;

    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, json.as_bytes()).map_err(io_context(&tmp, "write session temp file"))?;

    std::fs::rename(&tmp, path).map_err(|e| {
        let _ = std::fs::remove_file(&tmp);
        io_context(path, "finalise session file")(e)
    })?;

    tracing::debug!(path = %path.display(), "Session saved");
    Ok(())
}

fn io_context(
    path: &Path,
    operation: &'static str,
) -> impl FnOnce(std::io::Error) -> StegoSightError {
    let path = path.to_path_buf();
    move |source| StegoSightError::Io {
        path,
        operation,
        source,
    }
}

/// Load and validate a `SessionData` from `path`.
///
/// Returns `None` on any error (missing file, bad JSON, version mismatch).
pub fn load(path: &Path) -> Option<SessionData> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::debug!(path = %path.display(), error = %e, "Cannot read session file");
            }
        })
        .ok()?;

    let data: SessionData = serde_json::from_str(&content)
        .map_err(|e| {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "Session file is malformed, starting fresh"
            );
        })
        .ok()?;

    if data.version != SESSION_VERSION {
        tracing::warn!(
            found = data.version,
            expected = SESSION_VERSION,
            "Session file version mismatch, starting fresh"
        );
        return None;
    }

    tracing::info!(path = %path.display(), "Session file loaded");
    Some(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_data() -> SessionData {
        SessionData {
            version: SESSION_VERSION,
            active_tab: Tab::Analyze,
            dark_mode: true,
            font_size: Some(16.0),
            embed_method: Some(PersistedMethod {
                media: MediaType::Audio,
                key: "audio_metadata".to_string(),
            }),
            extract_method: Some(PersistedMethod {
                media: MediaType::Image,
                key: "dct".to_string(),
            }),
        }
    }

    #[test]
    fn test_session_save_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = session_path(dir.path());
        let original = sample_data();

        save(&original, &path).expect("save should succeed");
        let loaded = load(&path).expect("load should return Some after valid save");
        assert_eq!(loaded, original);
    }

    #[test]
    fn test_session_load_missing_file_returns_none() {
        let dir = TempDir::new().unwrap();
        assert!(load(&dir.path().join("nonexistent.json")).is_none());
    }

    #[test]
    fn test_session_load_malformed_json_returns_none() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, b"not valid json {{{{").unwrap();
        assert!(load(&path).is_none());
    }

    #[test]
    fn test_session_load_wrong_version_returns_none() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        let mut data = sample_data();
        data.version = 99;
        save(&data, &path).unwrap();
        assert!(load(&path).is_none());
    }

    #[test]
    fn test_session_tolerates_missing_optional_fields() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, br#"{"version":1,"active_tab":"extract"}"#).unwrap();

        let loaded = load(&path).unwrap();
        assert_eq!(loaded.active_tab, Tab::Extract);
        assert!(!loaded.dark_mode);
        assert!(loaded.embed_method.is_none());
    }

    #[test]
    fn test_session_save_reports_io_context() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"file, not a directory").unwrap();

        let err = save(&sample_data(), &blocker.join("session.json")).unwrap_err();
        assert!(matches!(
            err,
            StegoSightError::Io {
                operation: "create session directory",
                ..
            }
        ));
    }

    #[test]
    fn test_session_save_creates_parent_and_ignores_stale_temp() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("session.json");

        save(&sample_data(), &path).unwrap();
        std::fs::write(path.with_extension("json.tmp"), b"garbage").unwrap();

        let mut updated = sample_data();
        updated.dark_mode = false;
        save(&updated, &path).unwrap();

        assert!(!load(&path).unwrap().dark_mode);
    }
}
