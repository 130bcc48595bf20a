//! Prompt template system
//!
//! Loads templates from files or falls back to embedded defaults:
//! 1. User override: `.prdgen/prompts/{name}.pmt`
//! 2. Repo default: `prompts/{name}.pmt`
//! 3. Embedded (compiled into the binary)

pub mod embedded;
mod loader;

pub use loader::{PRD_TEMPLATE, PromptContext, PromptLoader};
