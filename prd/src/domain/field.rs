//! Settable form fields
//!
//! Maps CLI field names onto [`ProjectRecord`] slots. Applying a field never
//! mutates the input record; it returns an updated copy, so a failed parse
//! leaves the draft untouched.

use thiserror::Error;
use tracing::debug;

use super::record::ProjectRecord;

/// Error applying a field update
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// The field name did not match any known field
    #[error("unknown field: '{0}'. Run 'prd fields' to list valid names")]
    Unknown(String),

    /// A numeric field received a non-numeric value
    #[error("invalid count for {field}: '{value}'")]
    InvalidCount { field: String, value: String },

    /// A boolean field received an unrecognized value
    #[error("invalid boolean for {field}: '{value}' (expected true/false)")]
    InvalidBool { field: String, value: String },
}

/// One settable slot of a [`ProjectRecord`]
///
/// Dotted names group the nested structures: `members.*` for the team
/// roster, `stack.*` for dependencies, `metrics.*` for performance targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Project name (required)
    Name,
    /// Project description (required)
    Description,
    /// Project scale
    Scale,
    /// Expected time frame
    TimeFrame,
    /// Whether the team can grow
    CanHaveMoreMembers,
    /// Maximum team size
    MaxMembers,
    /// Number of designers
    Designers,
    /// Number of security analysts
    SecurityAnalysts,
    /// Number of backend developers
    BackendDevelopers,
    /// Number of frontend developers
    FrontendDevelopers,
    /// Other team members, free text
    OtherMembers,
    /// Regulations, comma-separated
    Regulations,
    /// Project type
    ProjectType,
    /// Frontend technology
    FrontendStack,
    /// Backend technology
    BackendStack,
    /// Database technology
    Database,
    /// Key features, comma-separated
    KeyFeatures,
    /// Target audience
    Audience,
    /// Security requirements, comma-separated
    SecurityRequirements,
    /// User flow steps, comma-separated
    UserFlow,
    /// Expected response time
    ResponseTime,
    /// Expected load
    LoadHandling,
    /// Integration needs, comma-separated
    Integrations,
    /// Platform support
    Platform,
    /// Non-functional requirements, comma-separated
    Nfr,
    /// Additional information, free text
    Notes,
}

impl Field {
    /// Every settable field, in display order
    pub fn all() -> &'static [Field] {
        &[
            Field::Name,
            Field::Description,
            Field::Scale,
            Field::TimeFrame,
            Field::CanHaveMoreMembers,
            Field::MaxMembers,
            Field::Designers,
            Field::SecurityAnalysts,
            Field::BackendDevelopers,
            Field::FrontendDevelopers,
            Field::OtherMembers,
            Field::Regulations,
            Field::ProjectType,
            Field::FrontendStack,
            Field::BackendStack,
            Field::Database,
            Field::KeyFeatures,
            Field::Audience,
            Field::SecurityRequirements,
            Field::UserFlow,
            Field::ResponseTime,
            Field::LoadHandling,
            Field::Integrations,
            Field::Platform,
            Field::Nfr,
            Field::Notes,
        ]
    }

    /// CLI name of the field
    pub fn name(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Description => "description",
            Self::Scale => "scale",
            Self::TimeFrame => "time-frame",
            Self::CanHaveMoreMembers => "can-have-more-members",
            Self::MaxMembers => "max-members",
            Self::Designers => "members.designers",
            Self::SecurityAnalysts => "members.security-analysts",
            Self::BackendDevelopers => "members.backend",
            Self::FrontendDevelopers => "members.frontend",
            Self::OtherMembers => "members.others",
            Self::Regulations => "regulations",
            Self::ProjectType => "type",
            Self::FrontendStack => "stack.frontend",
            Self::BackendStack => "stack.backend",
            Self::Database => "stack.database",
            Self::KeyFeatures => "features",
            Self::Audience => "audience",
            Self::SecurityRequirements => "security",
            Self::UserFlow => "user-flow",
            Self::ResponseTime => "metrics.response-time",
            Self::LoadHandling => "metrics.load-handling",
            Self::Integrations => "integrations",
            Self::Platform => "platform",
            Self::Nfr => "nfr",
            Self::Notes => "notes",
        }
    }

    /// Short help line for the field listing
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Name => "Project name (required)",
            Self::Description => "Project description (required)",
            Self::Scale => "Project scale, e.g. small, medium, enterprise",
            Self::TimeFrame => "Expected time frame, e.g. 3 months",
            Self::CanHaveMoreMembers => "Whether the team can grow (true/false)",
            Self::MaxMembers => "Maximum team size",
            Self::Designers => "Number of designers",
            Self::SecurityAnalysts => "Number of security analysts",
            Self::BackendDevelopers => "Number of backend developers",
            Self::FrontendDevelopers => "Number of frontend developers",
            Self::OtherMembers => "Other team members, free text",
            Self::Regulations => "Regulations, comma-separated",
            Self::ProjectType => "Project type, e.g. web app",
            Self::FrontendStack => "Frontend technology",
            Self::BackendStack => "Backend technology",
            Self::Database => "Database technology",
            Self::KeyFeatures => "Key features, comma-separated",
            Self::Audience => "Target audience",
            Self::SecurityRequirements => "Security requirements, comma-separated",
            Self::UserFlow => "User flow steps, comma-separated, kept in order",
            Self::ResponseTime => "Expected response time, e.g. 200ms",
            Self::LoadHandling => "Expected load, e.g. 10k concurrent users",
            Self::Integrations => "Integration needs, comma-separated",
            Self::Platform => "Platform support, e.g. web, iOS, Android",
            Self::Nfr => "Non-functional requirements, comma-separated",
            Self::Notes => "Additional information, free text",
        }
    }

    /// Apply a raw value to a record, returning the updated copy
    pub fn apply(&self, record: &ProjectRecord, value: &str) -> Result<ProjectRecord, FieldError> {
        debug!(%self, %value, "Field::apply: called");
        let mut next = record.clone();
        match self {
            Self::Name => next.project_name = value.to_string(),
            Self::Description => next.project_description = value.to_string(),
            Self::Scale => next.project_scale = value.to_string(),
            Self::TimeFrame => next.project_time_frame = value.to_string(),
            Self::CanHaveMoreMembers => next.can_have_more_members = parse_bool(self, value)?,
            Self::MaxMembers => next.maximum_member_limit = parse_count(self, value)?,
            Self::Designers => next.project_members.designer = parse_count(self, value)?,
            Self::SecurityAnalysts => {
                next.project_members.security_analyst = parse_count(self, value)?;
            }
            Self::BackendDevelopers => {
                next.project_members.backend_developers = parse_count(self, value)?;
            }
            Self::FrontendDevelopers => {
                next.project_members.frontend_developers = parse_count(self, value)?;
            }
            Self::OtherMembers => next.project_members.others = value.to_string(),
            Self::Regulations => next.project_regulations = parse_list(value),
            Self::ProjectType => next.project_type = value.to_string(),
            Self::FrontendStack => next.dependencies.frontend = value.to_string(),
            Self::BackendStack => next.dependencies.backend = value.to_string(),
            Self::Database => next.dependencies.database = value.to_string(),
            Self::KeyFeatures => next.key_features = parse_list(value),
            Self::Audience => next.target_audience = value.to_string(),
            Self::SecurityRequirements => next.security_requirements = parse_list(value),
            Self::UserFlow => next.user_flow = parse_list(value),
            Self::ResponseTime => next.performance_metrics.response_time = value.to_string(),
            Self::LoadHandling => next.performance_metrics.load_handling = value.to_string(),
            Self::Integrations => next.integration_needs = parse_list(value),
            Self::Platform => next.platform_support = value.to_string(),
            Self::Nfr => next.non_functional_requirements = parse_list(value),
            Self::Notes => next.additional_information = value.to_string(),
        }
        Ok(next)
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for Field {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        debug!(%s, "Field::from_str: called");
        let field = match s {
            "name" => Self::Name,
            "description" => Self::Description,
            "scale" => Self::Scale,
            "time-frame" => Self::TimeFrame,
            "can-have-more-members" => Self::CanHaveMoreMembers,
            "max-members" => Self::MaxMembers,
            "members.designers" => Self::Designers,
            "members.security-analysts" => Self::SecurityAnalysts,
            "members.backend" => Self::BackendDevelopers,
            "members.frontend" => Self::FrontendDevelopers,
            "members.others" => Self::OtherMembers,
            "regulations" => Self::Regulations,
            "type" => Self::ProjectType,
            "stack.frontend" => Self::FrontendStack,
            "stack.backend" => Self::BackendStack,
            "stack.database" => Self::Database,
            "features" => Self::KeyFeatures,
            "audience" => Self::Audience,
            "security" => Self::SecurityRequirements,
            "user-flow" => Self::UserFlow,
            "metrics.response-time" => Self::ResponseTime,
            "metrics.load-handling" => Self::LoadHandling,
            "integrations" => Self::Integrations,
            "platform" => Self::Platform,
            "nfr" => Self::Nfr,
            "notes" => Self::Notes,
            _ => {
                debug!(%s, "Field::from_str: unknown field");
                return Err(FieldError::Unknown(s.to_string()));
            }
        };
        Ok(field)
    }
}

/// Split a comma-separated value into trimmed, non-empty items
fn parse_list(value: &str) -> Vec<String> {
    debug!(%value, "parse_list: called");
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_count(field: &Field, value: &str) -> Result<u32, FieldError> {
    debug!(%field, %value, "parse_count: called");
    value.trim().parse().map_err(|_| FieldError::InvalidCount {
        field: field.name().to_string(),
        value: value.to_string(),
    })
}

fn parse_bool(field: &Field, value: &str) -> Result<bool, FieldError> {
    debug!(%field, %value, "parse_bool: called");
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err(FieldError::InvalidBool {
            field: field.name().to_string(),
            value: value.to_string(),
        }),
    }
}
