//! prdgen - Project Requirements Document generator
//!
//! prdgen collects structured project details through a small CLI form,
//! compiles them into a deterministic prompt, asks an LLM provider for a
//! full PRD document, and optionally exports the result as a PDF. All
//! state lives in a file-backed session store, so every step can run in
//! a separate process invocation.
//!
//! # Core Concepts
//!
//! - **Draft then record**: fields accumulate on a mutable draft; `submit`
//!   validates and freezes it into the project record
//! - **Deterministic prompts**: the same record always compiles to the
//!   same prompt bytes
//! - **Fallback, not failure**: provider errors produce a fixed fallback
//!   document instead of surfacing an error to the caller
//! - **State in files**: drafts, records, and generated documents persist
//!   as JSON session documents, not process memory
//!
//! # Modules
//!
//! - [`domain`] - Project record, field catalog, and generation types
//! - [`collector`] - Form collector building the record from field updates
//! - [`compiler`] - Prompt compiler and the generation pipeline
//! - [`llm`] - Completion client trait and chat-completions implementation
//! - [`store`] - Session persistence port and file-backed adapter
//! - [`prompts`] - Prompt template loading and rendering
//! - [`export`] - PDF export of the generated document
//! - [`config`] - Configuration types and loading
//! - [`cli`] - Command-line interface

pub mod cli;
pub mod collector;
pub mod compiler;
pub mod config;
pub mod domain;
pub mod export;
pub mod llm;
pub mod prompts;
pub mod store;

// Re-export commonly used types
pub use cli::{Cli, Command, OutputFormat};
pub use collector::{CollectError, FormCollector};
pub use compiler::{
    CompileError, EMPTY_COMPLETION, FALLBACK_DOCUMENT, PromptCompiler, generate_document,
    run_generation,
};
pub use config::{Config, DEFAULT_MODEL, LlmConfig, ResolvedLlmConfig};
pub use domain::{Field, FieldError, Generation, GenerationStatus, ProjectRecord, ValidationError};
pub use export::{DEFAULT_FILENAME, PdfExporter};
pub use llm::{
    ChatCompletionsClient, CompletionClient, CompletionRequest, CompletionResponse, LlmError,
    Message, create_client, create_client_from_resolved,
};
pub use prompts::{PRD_TEMPLATE, PromptContext, PromptLoader};
pub use store::{
    DRAFT_KEY, FileSessionStore, GENERATION_KEY, RECORD_KEY, SessionError, SessionPort,
};
