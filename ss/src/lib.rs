//! SessionStore - file-backed JSON session state
//!
//! Holds the session documents the prd pipeline passes between stages
//! (draft record, submitted record, generation result), one pretty-printed
//! JSON file per key.
//!
//! # Architecture
//!
//! ```text
//! session/
//! ├── projectDraft.json    # in-progress form record
//! ├── projectData.json     # submitted record
//! └── prdDocument.json     # generation result
//! ```
//!
//! # Example
//!
//! ```ignore
//! use sessionstore::SessionStore;
//!
//! let store = SessionStore::open("session")?;
//! store.put("projectData", &serde_json::json!({"ProjectName": "Acme"}))?;
//! let record = store.get("projectData")?;
//! ```

pub mod cli;
pub mod config;
mod store;

pub use store::{SessionKey, SessionStore};

/// File extension for stored documents
pub const SESSION_FILE_EXT: &str = "json";
