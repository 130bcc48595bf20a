//! Domain types for the PRD pipeline
//!
//! A single [`ProjectRecord`] flows through the whole system: the form
//! collector builds it field by field, the prompt compiler renders it into a
//! prompt, and a [`Generation`] records what came back from the provider.

mod field;
mod generation;
mod record;

pub use field::{Field, FieldError};
pub use generation::{Generation, GenerationStatus};
pub use record::{DependencyStack, PerformanceMetrics, ProjectRecord, TeamRoster, ValidationError};

/// Current wall-clock time in Unix milliseconds
pub fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
