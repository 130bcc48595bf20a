//! Generation domain type
//!
//! Records the outcome of one provider call: the document text exactly as it
//! will be displayed and exported, plus how it was obtained.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::now_ms;

/// How a generation completed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GenerationStatus {
    /// The provider returned a completion
    #[default]
    Generated,
    /// The provider call failed and the fixed fallback text was stored
    Fallback,
}

impl std::fmt::Display for GenerationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        debug!(?self, "GenerationStatus::fmt: called");
        match self {
            Self::Generated => {
                debug!("GenerationStatus::fmt: Generated branch");
                write!(f, "generated")
            }
            Self::Fallback => {
                debug!("GenerationStatus::fmt: Fallback branch");
                write!(f, "fallback")
            }
        }
    }
}

/// A generated document with its provenance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Generation {
    /// Outcome of the provider call
    pub status: GenerationStatus,

    /// Document text, verbatim as displayed
    pub document: String,

    /// Model the call was made with
    pub model: String,

    /// When the generation was recorded (Unix milliseconds)
    pub created_at: i64,
}

impl Generation {
    /// Record a successful generation
    pub fn generated(document: impl Into<String>, model: impl Into<String>) -> Self {
        let model = model.into();
        debug!(%model, "Generation::generated: called");
        Self {
            status: GenerationStatus::Generated,
            document: document.into(),
            model,
            created_at: now_ms(),
        }
    }

    /// Record a fallback after a provider error
    pub fn fallback(document: impl Into<String>, model: impl Into<String>) -> Self {
        let model = model.into();
        debug!(%model, "Generation::fallback: called");
        Self {
            status: GenerationStatus::Fallback,
            document: document.into(),
            model,
            created_at: now_ms(),
        }
    }
}
