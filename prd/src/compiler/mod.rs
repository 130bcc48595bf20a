//! Prompt compilation and document generation
//!
//! Turns a submitted record into the generation prompt, makes the single
//! provider call, and records the outcome. Compiling is pure: the same
//! record always produces the same prompt bytes. Provider failures never
//! surface as errors here; they become a fallback generation instead.

use std::path::Path;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::domain::{Generation, ProjectRecord};
use crate::llm::{CompletionClient, CompletionRequest};
use crate::prompts::{PRD_TEMPLATE, PromptContext, PromptLoader};
use crate::store::{SessionError, SessionPort};

/// Document stored when the provider call fails
pub const FALLBACK_DOCUMENT: &str = "Error generating PRD. Please try again later.";

/// Document stored when the provider answers without content
pub const EMPTY_COMPLETION: &str = "No response";

/// Error from compiling or running a generation
#[derive(Debug, Error)]
pub enum CompileError {
    /// No submitted record to compile from
    #[error("No submitted project record found. Run 'prd submit' first")]
    RecordNotFound,

    /// Template loading or rendering failed
    #[error("Template error: {0}")]
    Template(String),

    /// The session store failed
    #[error(transparent)]
    Session(#[from] SessionError),
}

/// Compiles records into prompts
pub struct PromptCompiler {
    loader: PromptLoader,
}

impl PromptCompiler {
    /// Create a compiler loading templates relative to the given directory
    pub fn new(workdir: impl AsRef<Path>) -> Self {
        debug!("PromptCompiler::new: called");
        Self {
            loader: PromptLoader::new(workdir),
        }
    }

    /// Create a compiler that only uses the embedded template
    pub fn embedded_only() -> Self {
        debug!("PromptCompiler::embedded_only: called");
        Self {
            loader: PromptLoader::embedded_only(),
        }
    }

    /// Compile a record into the generation prompt
    pub fn compile(&self, record: &ProjectRecord) -> Result<String, CompileError> {
        debug!(project_name = %record.project_name, "PromptCompiler::compile: called");
        let context = PromptContext::from_record(record)
            .map_err(|e| CompileError::Template(e.to_string()))?;
        self.loader
            .render(PRD_TEMPLATE, &context)
            .map_err(|e| CompileError::Template(e.to_string()))
    }
}

/// Make the one-shot provider call for an already-compiled prompt
///
/// Never fails: a provider error produces a fallback generation, and a
/// completion without content produces the fixed "No response" document.
pub async fn generate_document(
    client: &dyn CompletionClient,
    model: &str,
    prompt: String,
) -> Generation {
    debug!(%model, prompt_len = prompt.len(), "generate_document: called");
    match client.complete(CompletionRequest::user(prompt)).await {
        Ok(response) => {
            debug!("generate_document: provider call succeeded");
            let document = response
                .content
                .unwrap_or_else(|| EMPTY_COMPLETION.to_string());
            Generation::generated(document, model)
        }
        Err(e) => {
            warn!(error = %e, "generate_document: provider call failed, using fallback");
            Generation::fallback(FALLBACK_DOCUMENT, model)
        }
    }
}

/// Run the full generation pipeline
///
/// Loads the submitted record, compiles the prompt, calls the provider, and
/// persists the outcome so a later export can pick it up.
pub async fn run_generation(
    store: &dyn SessionPort,
    compiler: &PromptCompiler,
    client: &dyn CompletionClient,
    model: &str,
) -> Result<Generation, CompileError> {
    debug!(%model, "run_generation: called");
    let record = store.load_record()?.ok_or(CompileError::RecordNotFound)?;

    let prompt = compiler.compile(&record)?;
    let generation = generate_document(client, model, prompt).await;

    store.save_generation(&generation)?;
    info!(status = %generation.status, "run_generation: generation stored");
    Ok(generation)
}
