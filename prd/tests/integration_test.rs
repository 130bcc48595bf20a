//! Integration tests for prdgen
//!
//! These tests run the full pipeline against a real file-backed session
//! store: collect fields, submit, generate through a scripted client, and
//! export. Only the LLM provider is substituted; everything else is the
//! production wiring.

use std::sync::Mutex;

use async_trait::async_trait;
use prdgen::collector::FormCollector;
use prdgen::compiler::{
    CompileError, EMPTY_COMPLETION, FALLBACK_DOCUMENT, PromptCompiler, run_generation,
};
use prdgen::domain::{Field, GenerationStatus};
use prdgen::export::PdfExporter;
use prdgen::llm::{CompletionClient, CompletionRequest, CompletionResponse, LlmError};
use prdgen::store::{FileSessionStore, SessionPort};
use tempfile::TempDir;

/// Scripted stand-in for the provider
///
/// Returns a fixed reply (or failure) and records every prompt it was
/// asked to complete.
struct ScriptedClient {
    reply: Option<String>,
    fail: bool,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedClient {
    fn replying(text: &str) -> Self {
        Self {
            reply: Some(text.to_string()),
            fail: false,
            prompts: Mutex::new(Vec::new()),
        }
    }

    fn empty() -> Self {
        Self {
            reply: None,
            fail: false,
            prompts: Mutex::new(Vec::new()),
        }
    }

    fn failing() -> Self {
        Self {
            reply: None,
            fail: true,
            prompts: Mutex::new(Vec::new()),
        }
    }

    fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionClient for ScriptedClient {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, LlmError> {
        if let Some(message) = request.messages.first() {
            self.prompts.lock().unwrap().push(message.content.clone());
        }
        if self.fail {
            return Err(LlmError::ApiError {
                status: 500,
                message: "scripted failure".to_string(),
            });
        }
        Ok(CompletionResponse {
            content: self.reply.clone(),
        })
    }
}

fn open_store(temp_dir: &TempDir) -> FileSessionStore {
    FileSessionStore::open(temp_dir.path()).expect("Failed to open session store")
}

fn collect_and_submit(store: &dyn SessionPort) {
    let collector = FormCollector::new(store);
    collector.start().expect("Failed to start draft");
    collector
        .update(Field::Name, "Acme")
        .expect("Failed to set name");
    collector
        .update(Field::Description, "Widget tracker")
        .expect("Failed to set description");
    collector
        .update(Field::Designers, "1")
        .expect("Failed to set designer count");
    collector.submit().expect("Failed to submit record");
}

// =============================================================================
// Pipeline Tests
// =============================================================================

#[tokio::test]
async fn test_full_pipeline_collect_submit_generate() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = open_store(&temp_dir);
    collect_and_submit(&store);

    let client = ScriptedClient::replying("PRD TEXT");
    let compiler = PromptCompiler::embedded_only();

    let generation = run_generation(&store, &compiler, &client, "llama3-8b-8192")
        .await
        .expect("Generation should succeed");

    assert_eq!(generation.document, "PRD TEXT");
    assert_eq!(generation.status, GenerationStatus::Generated);
    assert_eq!(generation.model, "llama3-8b-8192");

    // Exactly one provider call, carrying the submitted fields.
    let prompts = client.prompts();
    assert_eq!(prompts.len(), 1, "Should make exactly one provider call");
    assert!(prompts[0].contains("Acme"), "Prompt should carry the name");
    assert!(
        prompts[0].contains("Widget tracker"),
        "Prompt should carry the description"
    );

    // The generation is persisted for a later export.
    let stored = store
        .load_generation()
        .expect("Failed to load generation")
        .expect("Generation should be stored");
    assert_eq!(stored.document, "PRD TEXT");
}

#[tokio::test]
async fn test_generate_without_record_is_not_found() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = open_store(&temp_dir);

    let client = ScriptedClient::replying("PRD TEXT");
    let compiler = PromptCompiler::embedded_only();

    let err = run_generation(&store, &compiler, &client, "llama3-8b-8192")
        .await
        .expect_err("Generation without a record should fail");

    assert!(matches!(err, CompileError::RecordNotFound));
    assert!(
        client.prompts().is_empty(),
        "Provider should never be called without a record"
    );
}

#[tokio::test]
async fn test_provider_failure_stores_fallback() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = open_store(&temp_dir);
    collect_and_submit(&store);

    let client = ScriptedClient::failing();
    let compiler = PromptCompiler::embedded_only();

    let generation = run_generation(&store, &compiler, &client, "llama3-8b-8192")
        .await
        .expect("A provider failure should not error the pipeline");

    assert_eq!(generation.document, FALLBACK_DOCUMENT);
    assert_eq!(generation.status, GenerationStatus::Fallback);

    let stored = store
        .load_generation()
        .expect("Failed to load generation")
        .expect("Fallback should be stored");
    assert_eq!(stored.document, FALLBACK_DOCUMENT);
}

#[tokio::test]
async fn test_missing_content_yields_no_response() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = open_store(&temp_dir);
    collect_and_submit(&store);

    let client = ScriptedClient::empty();
    let compiler = PromptCompiler::embedded_only();

    let generation = run_generation(&store, &compiler, &client, "llama3-8b-8192")
        .await
        .expect("Missing content should not error the pipeline");

    assert_eq!(generation.document, EMPTY_COMPLETION);
    assert_eq!(generation.status, GenerationStatus::Generated);
}

// =============================================================================
// Submission Tests
// =============================================================================

#[test]
fn test_rejected_submission_persists_nothing() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = open_store(&temp_dir);

    let collector = FormCollector::new(&store);
    collector.start().expect("Failed to start draft");
    collector
        .update(Field::Name, "Acme")
        .expect("Failed to set name");

    // Description missing: submission is rejected.
    collector
        .submit()
        .expect_err("Submission without a description should fail");

    assert!(
        store
            .load_record()
            .expect("Failed to load record")
            .is_none(),
        "Rejected submission should leave no record behind"
    );
}

#[test]
fn test_draft_survives_submission_for_reedit() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = open_store(&temp_dir);
    collect_and_submit(&store);

    let collector = FormCollector::new(&store);
    let draft = collector
        .current()
        .expect("Failed to load draft")
        .expect("Draft should survive submission");
    assert_eq!(draft.project_name, "Acme");

    // Re-edit and re-submit replaces the record.
    collector
        .update(Field::Description, "Gadget tracker")
        .expect("Failed to update description");
    collector.submit().expect("Failed to re-submit");

    let record = store
        .load_record()
        .expect("Failed to load record")
        .expect("Record should exist");
    assert_eq!(record.project_description, "Gadget tracker");
}

// =============================================================================
// Export Tests
// =============================================================================

#[tokio::test]
async fn test_export_writes_pdf() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = open_store(&temp_dir);
    collect_and_submit(&store);

    let client = ScriptedClient::replying("Section 1\n\nThe product does things.");
    let compiler = PromptCompiler::embedded_only();
    run_generation(&store, &compiler, &client, "llama3-8b-8192")
        .await
        .expect("Generation should succeed");

    let generation = store
        .load_generation()
        .expect("Failed to load generation")
        .expect("Generation should be stored");

    let output = temp_dir.path().join("generated_prd.pdf");
    PdfExporter::new()
        .export(&generation.document, &output)
        .expect("Failed to export PDF");

    let bytes = std::fs::read(&output).expect("Failed to read exported file");
    assert!(bytes.starts_with(b"%PDF"), "Output should be a PDF file");
}
