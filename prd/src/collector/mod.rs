//! Form collection
//!
//! Builds a [`ProjectRecord`] one field at a time against the session
//! store. Updates go through [`Field::apply`], so the stored draft is
//! replaced wholesale and a failed parse leaves it untouched. Submission
//! validates and persists the record under the fixed record key only when
//! validation passes.

use std::path::Path;

use thiserror::Error;
use tracing::{debug, info};

use crate::domain::{Field, FieldError, ProjectRecord, ValidationError};
use crate::store::{SessionError, SessionPort};

/// Error from the form collector
#[derive(Debug, Error)]
pub enum CollectError {
    /// No draft to operate on
    #[error("No draft in progress. Run 'prd new' first")]
    NoDraft,

    /// A field update failed to parse
    #[error(transparent)]
    Field(#[from] FieldError),

    /// The submitted record failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The session store failed
    #[error(transparent)]
    Session(#[from] SessionError),

    /// A draft file could not be read or parsed
    #[error("Failed to load draft file: {0}")]
    File(String),
}

/// Collects project fields into a draft and submits it
pub struct FormCollector<'a> {
    store: &'a dyn SessionPort,
}

impl<'a> FormCollector<'a> {
    /// Create a collector over the given store
    pub fn new(store: &'a dyn SessionPort) -> Self {
        debug!("FormCollector::new: called");
        Self { store }
    }

    /// Start a fresh draft, replacing any existing one
    pub fn start(&self) -> Result<ProjectRecord, CollectError> {
        debug!("FormCollector::start: called");
        let record = ProjectRecord::new();
        self.store.save_draft(&record)?;
        info!("Started new project draft");
        Ok(record)
    }

    /// The current draft, if one exists
    pub fn current(&self) -> Result<Option<ProjectRecord>, CollectError> {
        debug!("FormCollector::current: called");
        Ok(self.store.load_draft()?)
    }

    /// Apply one field update to the draft
    pub fn update(&self, field: Field, value: &str) -> Result<ProjectRecord, CollectError> {
        debug!(%field, %value, "FormCollector::update: called");
        let draft = self.store.load_draft()?.ok_or(CollectError::NoDraft)?;
        let updated = field.apply(&draft, value)?;
        self.store.save_draft(&updated)?;
        Ok(updated)
    }

    /// Load a whole draft from a YAML file, replacing any existing draft
    pub fn load_file(&self, path: &Path) -> Result<ProjectRecord, CollectError> {
        debug!(?path, "FormCollector::load_file: called");
        let content = std::fs::read_to_string(path)
            .map_err(|e| CollectError::File(format!("{}: {}", path.display(), e)))?;
        let record: ProjectRecord = serde_yaml::from_str(&content)
            .map_err(|e| CollectError::File(format!("{}: {}", path.display(), e)))?;
        self.store.save_draft(&record)?;
        info!("Loaded project draft from {}", path.display());
        Ok(record)
    }

    /// Validate the draft and persist it as the submitted record
    ///
    /// On validation failure nothing is persisted; a previously submitted
    /// record (if any) stays as it was.
    pub fn submit(&self) -> Result<ProjectRecord, CollectError> {
        debug!("FormCollector::submit: called");
        let draft = self.store.load_draft()?.ok_or(CollectError::NoDraft)?;
        draft.validate()?;
        self.store.save_record(&draft)?;
        info!(project_name = %draft.project_name, "Submitted project record");
        Ok(draft)
    }
}
