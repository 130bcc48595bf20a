//! Prompt Loader
//!
//! Loads prompt templates from files or falls back to embedded defaults,
//! and pre-renders project records into the strings the template expects.

use std::path::{Path, PathBuf};

use eyre::{Result, eyre};
use handlebars::Handlebars;
use serde::Serialize;
use tracing::{debug, info};

use super::embedded;
use crate::domain::ProjectRecord;

/// Name of the PRD generation template
pub const PRD_TEMPLATE: &str = "prd";

/// Context for rendering the PRD template
///
/// Every value is pre-rendered to the exact string the template
/// interpolates, so rendering the same record always produces the same
/// prompt byte for byte.
#[derive(Debug, Clone, Serialize)]
pub struct PromptContext {
    pub project_name: String,
    pub project_description: String,
    pub project_scale: String,
    pub time_frame: String,
    pub can_have_more_members: bool,
    pub maximum_member_limit: u32,
    /// Team roster as a pretty JSON block
    pub team_members: String,
    pub project_regulations: String,
    pub project_type: String,
    /// Dependency stack as a pretty JSON block
    pub dependencies: String,
    pub key_features: String,
    pub target_audience: String,
    pub security_requirements: String,
    /// Flow steps joined as a "login -> dashboard" chain
    pub user_flow: String,
    /// Performance targets as a pretty JSON block
    pub performance_metrics: String,
    pub integration_needs: String,
    pub platform_support: String,
    pub non_functional_requirements: String,
    pub additional_information: String,
}

impl PromptContext {
    /// Pre-render a record's fields into template-ready strings
    pub fn from_record(record: &ProjectRecord) -> Result<Self> {
        debug!(project_name = %record.project_name, "PromptContext::from_record: called");
        Ok(Self {
            project_name: record.project_name.clone(),
            project_description: record.project_description.clone(),
            project_scale: record.project_scale.clone(),
            time_frame: record.project_time_frame.clone(),
            can_have_more_members: record.can_have_more_members,
            maximum_member_limit: record.maximum_member_limit,
            team_members: serde_json::to_string_pretty(&record.project_members)?,
            project_regulations: record.project_regulations.join(", "),
            project_type: record.project_type.clone(),
            dependencies: serde_json::to_string_pretty(&record.dependencies)?,
            key_features: record.key_features.join(", "),
            target_audience: record.target_audience.clone(),
            security_requirements: record.security_requirements.join(", "),
            user_flow: record.user_flow.join(" -> "),
            performance_metrics: serde_json::to_string_pretty(&record.performance_metrics)?,
            integration_needs: record.integration_needs.join(", "),
            platform_support: record.platform_support.clone(),
            non_functional_requirements: record.non_functional_requirements.join(","),
            additional_information: record.additional_information.clone(),
        })
    }
}

/// Resolves and renders prompt templates
pub struct PromptLoader {
    /// Handlebars engine with escaping disabled
    hbs: Handlebars<'static>,
    /// User override directory (e.g., `.prdgen/prompts/`)
    user_dir: Option<PathBuf>,
    /// Repo default directory (e.g., `prompts/`)
    repo_dir: Option<PathBuf>,
}

impl PromptLoader {
    fn hbs() -> Handlebars<'static> {
        let mut hbs = Handlebars::new();
        // Prompts are plain text, not HTML
        hbs.register_escape_fn(handlebars::no_escape);
        hbs
    }

    /// Create a loader rooted at `workdir`, picking up `.prdgen/prompts/`
    /// and `prompts/` if they exist there.
    pub fn new(workdir: impl AsRef<Path>) -> Self {
        let workdir = workdir.as_ref();
        debug!(?workdir, "PromptLoader::new: called");
        let user_dir = workdir.join(".prdgen/prompts");
        let repo_dir = workdir.join("prompts");

        let user_dir_exists = user_dir.exists();
        let repo_dir_exists = repo_dir.exists();
        debug!(
            ?user_dir,
            %user_dir_exists,
            ?repo_dir,
            %repo_dir_exists,
            "PromptLoader::new: checking directories"
        );

        Self {
            hbs: Self::hbs(),
            user_dir: if user_dir_exists { Some(user_dir) } else { None },
            repo_dir: if repo_dir_exists { Some(repo_dir) } else { None },
        }
    }

    /// Create a loader that resolves templates from the embedded set only.
    pub fn embedded_only() -> Self {
        debug!("PromptLoader::embedded_only: called");
        Self {
            hbs: Self::hbs(),
            user_dir: None,
            repo_dir: None,
        }
    }

    /// Resolve a template by name. User overrides in `.prdgen/prompts/`
    /// win over repo defaults in `prompts/`, which win over the embedded
    /// copy compiled into the binary.
    fn load_template(&self, name: &str) -> Result<String> {
        debug!(%name, "PromptLoader::load_template: called");
        // User override wins
        if let Some(ref user_dir) = self.user_dir {
            debug!("PromptLoader::load_template: checking user override directory");
            let path = user_dir.join(format!("{}.pmt", name));
            if path.exists() {
                debug!(?path, "PromptLoader::load_template: found in user override");
                return std::fs::read_to_string(&path)
                    .map_err(|e| eyre!("Failed to read user prompt {}: {}", path.display(), e));
            } else {
                debug!(?path, "PromptLoader::load_template: not found in user override");
            }
        } else {
            debug!("PromptLoader::load_template: no user override directory configured");
        }

        // Then the repo default
        if let Some(ref repo_dir) = self.repo_dir {
            debug!("PromptLoader::load_template: checking repo directory");
            let path = repo_dir.join(format!("{}.pmt", name));
            if path.exists() {
                debug!(?path, "PromptLoader::load_template: found in repo");
                return std::fs::read_to_string(&path)
                    .map_err(|e| eyre!("Failed to read repo prompt {}: {}", path.display(), e));
            } else {
                debug!(?path, "PromptLoader::load_template: not found in repo");
            }
        } else {
            debug!("PromptLoader::load_template: no repo directory configured");
        }

        // Embedded copy is the last resort
        debug!("PromptLoader::load_template: trying embedded fallback");
        if let Some(content) = embedded::get_embedded(name) {
            debug!(%name, "PromptLoader::load_template: found in embedded");
            return Ok(content.to_string());
        }

        debug!(%name, "PromptLoader::load_template: not found anywhere");
        Err(eyre!("Prompt template not found: {}", name))
    }

    /// Render the named template against a [`PromptContext`].
    pub fn render(&self, template_name: &str, context: &PromptContext) -> Result<String> {
        debug!(%template_name, project_name = %context.project_name, "PromptLoader::render: called");
        let template = self.load_template(template_name)?;
        info!("Rendering template '{}'", template_name);

        debug!("PromptLoader::render: rendering template with handlebars");
        self.hbs
            .render_template(&template, context)
            .map_err(|e| eyre!("Failed to render template {}: {}", template_name, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TeamRoster;

    fn sample_record() -> ProjectRecord {
        ProjectRecord {
            project_name: "Acme".to_string(),
            project_description: "Widget tracker".to_string(),
            key_features: vec!["search".to_string(), "export".to_string()],
            user_flow: vec!["login".to_string(), "dashboard".to_string()],
            project_members: TeamRoster {
                designer: 2,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_context_joins_lists() {
        let ctx = PromptContext::from_record(&sample_record()).unwrap();
        assert_eq!(ctx.key_features, "search, export");
        assert_eq!(ctx.user_flow, "login -> dashboard");
    }

    #[test]
    fn test_context_renders_nested_json() {
        let ctx = PromptContext::from_record(&sample_record()).unwrap();
        assert!(ctx.team_members.contains("\"Designer\": 2"));
        assert!(ctx.dependencies.contains("\"Frontend\""));
        assert!(ctx.performance_metrics.contains("\"responseTime\""));
    }

    #[test]
    fn test_render_embedded_prd() {
        let loader = PromptLoader::embedded_only();
        let ctx = PromptContext::from_record(&sample_record()).unwrap();

        let prompt = loader.render(PRD_TEMPLATE, &ctx).unwrap();
        assert!(prompt.contains("- Project Name: Acme"));
        assert!(prompt.contains("- Project Description: Widget tracker"));
        assert!(prompt.contains("- Key Features: search, export"));
        assert!(prompt.contains("- User Flow: login -> dashboard"));
        assert!(prompt.contains("Product Requirements Document"));
        // No placeholder left behind
        assert!(!prompt.contains("{{"));
    }

    #[test]
    fn test_render_does_not_escape_text() {
        let loader = PromptLoader::embedded_only();
        let mut record = sample_record();
        record.project_name = "R&D <Tools>".to_string();
        let ctx = PromptContext::from_record(&record).unwrap();

        let prompt = loader.render(PRD_TEMPLATE, &ctx).unwrap();
        assert!(prompt.contains("- Project Name: R&D <Tools>"));
        // JSON blocks keep their quotes
        assert!(prompt.contains("\"Designer\": 2"));
    }

    #[test]
    fn test_user_override_takes_precedence() {
        let temp = tempfile::TempDir::new().unwrap();
        let override_dir = temp.path().join(".prdgen/prompts");
        std::fs::create_dir_all(&override_dir).unwrap();
        std::fs::write(override_dir.join("prd.pmt"), "OVERRIDE for {{project_name}}").unwrap();

        let loader = PromptLoader::new(temp.path());
        let ctx = PromptContext::from_record(&sample_record()).unwrap();

        let prompt = loader.render(PRD_TEMPLATE, &ctx).unwrap();
        assert_eq!(prompt, "OVERRIDE for Acme");
    }

    #[test]
    fn test_unknown_template_errors() {
        let loader = PromptLoader::embedded_only();
        let result = loader.load_template("nonexistent-template");
        assert!(result.is_err());
    }
}
