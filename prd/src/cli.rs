//! CLI command definitions and subcommands

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;

/// prdgen - project requirements document generator
#[derive(Parser)]
#[command(
    name = "prd",
    about = "Collects project details and generates a PRD document",
    version = env!("GIT_DESCRIBE"),
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to config file")]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(
        short = 'l',
        long = "log-level",
        global = true,
        help = "Log level (TRACE, DEBUG, INFO, WARN, ERROR)"
    )]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Start a new project draft
    New {
        /// Seed the draft from a YAML file instead of starting empty
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Set one field on the draft
    Set {
        /// Field name (see `prd fields`)
        field: String,

        /// Value to set
        value: String,
    },

    /// Show the current draft
    Show {
        /// Output format
        #[arg(short, long, default_value = "yaml")]
        format: OutputFormat,
    },

    /// List settable fields
    Fields,

    /// Validate the draft and submit it for generation
    Submit,

    /// Generate the PRD document from the submitted record
    Generate {
        /// Print the compiled prompt instead of calling the provider
        #[arg(long)]
        show_prompt: bool,
    },

    /// Export the generated document as a PDF
    Export {
        /// Output file (defaults to generated_prd.pdf)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Remove the draft, submitted record, and generated document
    Clear,
}

/// Output format for the show command
#[derive(Clone, Debug, Default)]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        debug!(%s, "OutputFormat::from_str: called");
        match s.to_lowercase().as_str() {
            "yaml" | "yml" => {
                debug!("OutputFormat::from_str: matched Yaml");
                Ok(Self::Yaml)
            }
            "json" => {
                debug!("OutputFormat::from_str: matched Json");
                Ok(Self::Json)
            }
            _ => {
                debug!(%s, "OutputFormat::from_str: unknown format");
                Err(format!("Unknown format: {}. Use: yaml or json", s))
            }
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        debug!(?self, "OutputFormat::fmt: called");
        match self {
            Self::Yaml => {
                debug!("OutputFormat::fmt: writing yaml");
                write!(f, "yaml")
            }
            Self::Json => {
                debug!("OutputFormat::fmt: writing json");
                write!(f, "json")
            }
        }
    }
}
