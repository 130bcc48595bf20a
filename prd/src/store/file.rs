//! File-backed session store adapter
//!
//! Wraps [`sessionstore::SessionStore`] so the rest of the pipeline only
//! ever sees [`SessionPort`]. Documents land as pretty JSON under the
//! configured session directory, one file per key.

use std::path::Path;

use sessionstore::SessionStore;
use tracing::debug;

use crate::domain::{Generation, ProjectRecord};

use super::{DRAFT_KEY, GENERATION_KEY, RECORD_KEY, SessionError, SessionPort};

/// Session port backed by JSON files on disk
pub struct FileSessionStore {
    store: SessionStore,
}

impl FileSessionStore {
    /// Open (creating if needed) the session directory
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SessionError> {
        let path = path.as_ref();
        debug!(?path, "FileSessionStore::open: called");
        let store = SessionStore::open(path).map_err(|e| SessionError::Store(e.to_string()))?;
        Ok(Self { store })
    }

    fn put<T: serde::Serialize>(&self, key: &str, value: &T) -> Result<(), SessionError> {
        debug!(%key, "FileSessionStore::put: called");
        let value = serde_json::to_value(value).map_err(|e| SessionError::Store(e.to_string()))?;
        self.store
            .put(key, &value)
            .map_err(|e| SessionError::Store(e.to_string()))
    }

    fn get<T: serde::de::DeserializeOwned>(&self, key: &str) -> Result<Option<T>, SessionError> {
        debug!(%key, "FileSessionStore::get: called");
        let value = self
            .store
            .get(key)
            .map_err(|e| SessionError::Store(e.to_string()))?;
        match value {
            Some(value) => serde_json::from_value(value)
                .map(Some)
                .map_err(|e| SessionError::Corrupt(e.to_string())),
            None => Ok(None),
        }
    }

    fn remove(&self, key: &str) -> Result<(), SessionError> {
        debug!(%key, "FileSessionStore::remove: called");
        self.store
            .delete(key)
            .map_err(|e| SessionError::Store(e.to_string()))?;
        Ok(())
    }
}

impl SessionPort for FileSessionStore {
    fn save_draft(&self, record: &ProjectRecord) -> Result<(), SessionError> {
        self.put(DRAFT_KEY, record)
    }

    fn load_draft(&self) -> Result<Option<ProjectRecord>, SessionError> {
        self.get(DRAFT_KEY)
    }

    fn save_record(&self, record: &ProjectRecord) -> Result<(), SessionError> {
        self.put(RECORD_KEY, record)
    }

    fn load_record(&self) -> Result<Option<ProjectRecord>, SessionError> {
        self.get(RECORD_KEY)
    }

    fn save_generation(&self, generation: &Generation) -> Result<(), SessionError> {
        self.put(GENERATION_KEY, generation)
    }

    fn load_generation(&self) -> Result<Option<Generation>, SessionError> {
        self.get(GENERATION_KEY)
    }

    fn clear(&self) -> Result<(), SessionError> {
        debug!("FileSessionStore::clear: called");
        for key in [DRAFT_KEY, RECORD_KEY, GENERATION_KEY] {
            self.remove(key)?;
        }
        Ok(())
    }
}
