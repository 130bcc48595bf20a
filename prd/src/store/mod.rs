//! Session persistence for the PRD pipeline
//!
//! The pipeline keeps three documents in the session store: the in-progress
//! draft, the submitted record, and the last generation. [`SessionPort`] is
//! the abstraction the collector and compiler work against, so neither ever
//! touches the filesystem directly; [`FileSessionStore`] adapts the
//! sessionstore crate to it.

use thiserror::Error;

use crate::domain::{Generation, ProjectRecord};

mod file;

pub use file::FileSessionStore;

/// Session key for the in-progress draft
pub const DRAFT_KEY: &str = "projectDraft";

/// Session key for the submitted record
pub const RECORD_KEY: &str = "projectData";

/// Session key for the last generation
pub const GENERATION_KEY: &str = "prdDocument";

/// Error from the session store
#[derive(Debug, Error)]
pub enum SessionError {
    /// The backing store failed to read or write
    #[error("session store error: {0}")]
    Store(String),

    /// A stored document did not match the expected shape
    #[error("corrupt session document: {0}")]
    Corrupt(String),
}

/// Persistence port for the pipeline's session documents
///
/// Saving under a key replaces whatever was there; loading a key that was
/// never written returns `Ok(None)`.
pub trait SessionPort: Send + Sync {
    /// Save the in-progress draft
    fn save_draft(&self, record: &ProjectRecord) -> Result<(), SessionError>;

    /// Load the in-progress draft
    fn load_draft(&self) -> Result<Option<ProjectRecord>, SessionError>;

    /// Save the submitted record under the fixed record key
    fn save_record(&self, record: &ProjectRecord) -> Result<(), SessionError>;

    /// Load the submitted record
    fn load_record(&self) -> Result<Option<ProjectRecord>, SessionError>;

    /// Save the last generation
    fn save_generation(&self, generation: &Generation) -> Result<(), SessionError>;

    /// Load the last generation
    fn load_generation(&self) -> Result<Option<Generation>, SessionError>;

    /// Remove every session document
    fn clear(&self) -> Result<(), SessionError>;
}
