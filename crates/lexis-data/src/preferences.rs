//! JSON-file preference store.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use lexis_core::{CoreError, PreferenceStore};

use crate::error::PreferenceError;

/// Preferences persisted as a flat JSON object of strings.
///
/// A missing file reads as empty; the file and its parent directories are
/// created on the first write.
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, PreferenceError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                return Ok(BTreeMap::new());
            }
            Err(error) => return Err(self.io_error(error)),
        };

        if contents.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&contents).map_err(|error| PreferenceError::Json {
            path: self.path.display().to_string(),
            source: error,
        })
    }

    fn write_all(&self, values: &BTreeMap<String, String>) -> Result<(), PreferenceError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|error| self.io_error(error))?;
        }
        let json = serde_json::to_string_pretty(values).map_err(|error| PreferenceError::Json {
            path: self.path.display().to_string(),
            source: error,
        })?;
        std::fs::write(&self.path, json).map_err(|error| self.io_error(error))
    }

    fn io_error(&self, error: std::io::Error) -> PreferenceError {
        PreferenceError::Io {
            path: self.path.display().to_string(),
            source: error,
        }
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CoreError> {
        let mut values = self.read_all()?;
        values.insert(key.to_string(), value.to_string());
        self.write_all(&values)?;
        tracing::debug!(path = %self.path.display(), key, "preference saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexis_core::theme::{Theme, load_theme, toggle_theme};
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_file_reads_as_default_theme() {
        let dir = tempfile::tempdir().expect("temp dir");
        let store = FilePreferenceStore::new(dir.path().join("prefs.json"));
        assert_eq!(load_theme(&store).expect("load"), Theme::Dark);
        assert!(!store.path().exists());
    }

    #[test]
    fn toggle_persists_across_instances() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("nested").join("prefs.json");

        let first = FilePreferenceStore::new(&path);
        assert_eq!(toggle_theme(&first).expect("toggle"), Theme::Light);

        let second = FilePreferenceStore::new(&path);
        assert_eq!(load_theme(&second).expect("load"), Theme::Light);

        let raw = std::fs::read_to_string(&path).expect("read");
        let parsed: serde_json::Value = serde_json::from_str(&raw).expect("json");
        assert_eq!(parsed["theme"], "light");
    }

    #[test]
    fn unrelated_keys_survive_writes() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, r#"{"font": "serif"}"#).expect("seed");

        let store = FilePreferenceStore::new(&path);
        store.set("theme", "light").expect("set");

        assert_eq!(store.get("font").expect("get").as_deref(), Some("serif"));
        assert_eq!(store.get("theme").expect("get").as_deref(), Some("light"));
    }

    #[test]
    fn corrupt_file_is_reported() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "[1, 2, 3]").expect("seed");

        let store = FilePreferenceStore::new(&path);
        let err = store.get("theme").expect_err("not an object");
        assert!(matches!(err, CoreError::Preference(_)));
    }
}
