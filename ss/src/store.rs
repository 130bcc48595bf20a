//! Core SessionStore implementation

use eyre::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Key naming a stored session document
pub type SessionKey = String;

/// The main session store
pub struct SessionStore {
    /// Base path for storage
    base_path: PathBuf,
}

impl SessionStore {
    /// Open or create a session store at the given path
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let base_path = path.as_ref().to_path_buf();
        fs::create_dir_all(&base_path).context("Failed to create store directory")?;
        debug!(?base_path, "Opened session store");
        Ok(Self { base_path })
    }

    /// Path of the file backing a key
    pub fn file_path(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.base_path.join(format!("{}.{}", key, crate::SESSION_FILE_EXT)))
    }

    /// Store a JSON document under a key, replacing any previous value
    pub fn put(&self, key: &str, value: &serde_json::Value) -> Result<()> {
        let path = self.file_path(key)?;
        let content = serde_json::to_string_pretty(value)?;
        fs::write(&path, content).context(format!("Failed to write session file: {}", path.display()))?;
        debug!(key, "Stored session document");
        Ok(())
    }

    /// Fetch the document stored under a key, if any
    pub fn get(&self, key: &str) -> Result<Option<serde_json::Value>> {
        let path = self.file_path(key)?;
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path).context(format!("Failed to read session file: {}", path.display()))?;
        let value = serde_json::from_str(&content).context(format!("Corrupt session file: {}", path.display()))?;
        Ok(Some(value))
    }

    /// Delete the document stored under a key; returns true if one existed
    pub fn delete(&self, key: &str) -> Result<bool> {
        let path = self.file_path(key)?;
        if path.exists() {
            fs::remove_file(&path)?;
            info!(key, "Deleted session document");
            return Ok(true);
        }
        Ok(false)
    }

    /// List all stored keys, sorted
    pub fn list(&self) -> Result<Vec<SessionKey>> {
        let mut keys = Vec::new();

        for entry in fs::read_dir(&self.base_path)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().map(|e| e == crate::SESSION_FILE_EXT).unwrap_or(false)
                && let Some(stem) = path.file_stem().and_then(|s| s.to_str())
            {
                keys.push(stem.to_string());
            }
        }

        keys.sort();
        Ok(keys)
    }
}

/// Keys become file names, so empties and path separators are rejected
fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(eyre::eyre!("Session key must not be empty"));
    }
    if key.contains('/') || key.contains('\\') || key.contains("..") {
        return Err(eyre::eyre!("Invalid session key: {}", key));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_put_and_get() {
        let temp = TempDir::new().unwrap();
        let store = SessionStore::open(temp.path()).unwrap();

        let doc = json!({"ProjectName": "Acme", "ProjectDescription": "Widget tracker"});
        store.put("projectData", &doc).unwrap();

        let loaded = store.get("projectData").unwrap();
        assert_eq!(loaded, Some(doc));
    }

    #[test]
    fn test_get_missing_returns_none() {
        let temp = TempDir::new().unwrap();
        let store = SessionStore::open(temp.path()).unwrap();

        assert_eq!(store.get("projectData").unwrap(), None);
    }

    #[test]
    fn test_put_replaces_previous_value() {
        let temp = TempDir::new().unwrap();
        let store = SessionStore::open(temp.path()).unwrap();

        store.put("projectData", &json!({"ProjectName": "First"})).unwrap();
        store.put("projectData", &json!({"ProjectName": "Second"})).unwrap();

        let loaded = store.get("projectData").unwrap().unwrap();
        assert_eq!(loaded["ProjectName"], "Second");
    }

    #[test]
    fn test_delete() {
        let temp = TempDir::new().unwrap();
        let store = SessionStore::open(temp.path()).unwrap();

        store.put("projectDraft", &json!({})).unwrap();
        assert!(store.delete("projectDraft").unwrap());
        assert!(!store.delete("projectDraft").unwrap());
        assert_eq!(store.get("projectDraft").unwrap(), None);
    }

    #[test]
    fn test_list_is_sorted() {
        let temp = TempDir::new().unwrap();
        let store = SessionStore::open(temp.path()).unwrap();

        store.put("prdDocument", &json!({})).unwrap();
        store.put("projectData", &json!({})).unwrap();
        store.put("projectDraft", &json!({})).unwrap();

        let keys = store.list().unwrap();
        assert_eq!(keys, vec!["prdDocument", "projectData", "projectDraft"]);
    }

    #[test]
    fn test_rejects_path_traversal_keys() {
        let temp = TempDir::new().unwrap();
        let store = SessionStore::open(temp.path()).unwrap();

        assert!(store.put("", &json!({})).is_err());
        assert!(store.put("../escape", &json!({})).is_err());
        assert!(store.put("a/b", &json!({})).is_err());
    }
}
