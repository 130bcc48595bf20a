//! ProjectRecord domain type
//!
//! The project description collected by the form and consumed by the prompt
//! compiler. Wire names follow the PascalCase convention of the persisted
//! JSON documents, so records written by earlier versions load unchanged.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Validation failure for a submitted record
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("required field missing: {}", .missing.join(", "))]
pub struct ValidationError {
    /// Wire names of the required fields that were empty
    pub missing: Vec<&'static str>,
}

/// Team member counts by role
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase", default)]
pub struct TeamRoster {
    /// Number of designers
    pub designer: u32,

    /// Number of security analysts
    pub security_analyst: u32,

    /// Number of backend developers
    pub backend_developers: u32,

    /// Number of frontend developers
    pub frontend_developers: u32,

    /// Free text for members outside the fixed roles
    pub others: String,
}

/// Technology choices by layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase", default)]
pub struct DependencyStack {
    /// Frontend technology
    pub frontend: String,

    /// Backend technology
    pub backend: String,

    /// Database technology
    pub database: String,
}

/// Expected performance targets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct PerformanceMetrics {
    /// Expected response time (e.g. "200ms")
    pub response_time: String,

    /// Expected load (e.g. "10k concurrent users")
    pub load_handling: String,
}

/// Everything the form collects about a project
///
/// Every field defaults, so a draft can be persisted at any stage of
/// completion. Only [`ProjectRecord::validate`] decides whether the record
/// is complete enough to submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase", default)]
pub struct ProjectRecord {
    /// Project name (required for submission)
    pub project_name: String,

    /// Project description (required for submission)
    pub project_description: String,

    /// Project scale (e.g. "small", "enterprise")
    pub project_scale: String,

    /// Expected time frame (e.g. "3 months")
    pub project_time_frame: String,

    /// Whether the team is allowed to grow
    pub can_have_more_members: bool,

    /// Upper bound on team size
    pub maximum_member_limit: u32,

    /// Team member counts by role
    pub project_members: TeamRoster,

    /// Regulations the project must comply with
    pub project_regulations: Vec<String>,

    /// Project type (e.g. "web app")
    pub project_type: String,

    /// Technology choices by layer
    pub dependencies: DependencyStack,

    /// Key features to deliver
    pub key_features: Vec<String>,

    /// Who the project is for
    pub target_audience: String,

    /// Security requirements
    pub security_requirements: Vec<String>,

    /// User flow steps, in order
    pub user_flow: Vec<String>,

    /// Expected performance targets
    pub performance_metrics: PerformanceMetrics,

    /// External systems to integrate with
    pub integration_needs: Vec<String>,

    /// Platforms to support (e.g. "web, iOS")
    pub platform_support: String,

    /// Non-functional requirements
    pub non_functional_requirements: Vec<String>,

    /// Anything else worth telling the generator
    pub additional_information: String,
}

impl ProjectRecord {
    /// Create an empty record with every field defaulted
    pub fn new() -> Self {
        debug!("ProjectRecord::new: called");
        Self::default()
    }

    /// Check that the required fields are present
    ///
    /// Presence means a non-empty string. Only the name and description are
    /// required; every other field may stay at its default.
    pub fn validate(&self) -> Result<(), ValidationError> {
        debug!("ProjectRecord::validate: called");
        let mut missing = Vec::new();
        if self.project_name.is_empty() {
            debug!("ProjectRecord::validate: ProjectName empty");
            missing.push("ProjectName");
        }
        if self.project_description.is_empty() {
            debug!("ProjectRecord::validate: ProjectDescription empty");
            missing.push("ProjectDescription");
        }
        if missing.is_empty() {
            debug!("ProjectRecord::validate: record valid");
            Ok(())
        } else {
            debug!(?missing, "ProjectRecord::validate: record invalid");
            Err(ValidationError { missing })
        }
    }
}
