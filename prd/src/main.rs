//! prdgen - project requirements document generator
//!
//! CLI entry point for collecting project details, generating the PRD
//! through an LLM provider, and exporting it as a PDF.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use colored::Colorize;
use eyre::{Context, Result, eyre};
use tracing::{debug, info};

use prdgen::cli::{Cli, Command, OutputFormat};
use prdgen::collector::FormCollector;
use prdgen::compiler::{CompileError, PromptCompiler, run_generation};
use prdgen::config::Config;
use prdgen::domain::Field;
use prdgen::export::PdfExporter;
use prdgen::llm::create_client_from_resolved;
use prdgen::store::{FileSessionStore, SessionPort};

fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Result<()> {
    // Nothing can be logged until the subscriber below is installed
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("prdgen")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    // CLI flag beats config file, INFO when neither is set
    let level_str = cli_log_level.or(config_log_level);
    let level = if let Some(s) = level_str {
        debug!(level_str = %s, "setup_logging: level_str is Some");
        match s.to_uppercase().as_str() {
            "TRACE" => {
                debug!("setup_logging: matched TRACE level");
                tracing::Level::TRACE
            }
            "DEBUG" => {
                debug!("setup_logging: matched DEBUG level");
                tracing::Level::DEBUG
            }
            "INFO" => {
                debug!("setup_logging: matched INFO level");
                tracing::Level::INFO
            }
            "WARN" | "WARNING" => {
                debug!("setup_logging: matched WARN level");
                tracing::Level::WARN
            }
            "ERROR" => {
                debug!("setup_logging: matched ERROR level");
                tracing::Level::ERROR
            }
            _ => {
                debug!(level = %s, "setup_logging: unknown level, defaulting to INFO");
                eprintln!("Warning: Unknown log-level '{}', defaulting to INFO", s);
                tracing::Level::INFO
            }
        }
    } else {
        debug!("setup_logging: level_str is None, defaulting to INFO");
        tracing::Level::INFO
    };

    let log_file = fs::File::create(log_dir.join("prd.log")).context("Failed to create log file")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized (level: {:?})", level);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Peek at the config's log level before the full config parse
    let config_log_level = Config::load_log_level(cli.config.as_ref());

    setup_logging(cli.log_level.as_deref(), config_log_level.as_deref())
        .context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    info!("prdgen loaded config: provider={}", config.llm.provider);

    debug!(command = ?cli.command, "main: dispatching command");
    match cli.command {
        Command::New { file } => {
            debug!(?file, "main: matched New command");
            cmd_new(&config, file.as_deref())
        }
        Command::Set { field, value } => {
            debug!(%field, %value, "main: matched Set command");
            cmd_set(&config, &field, &value)
        }
        Command::Show { format } => {
            debug!(?format, "main: matched Show command");
            cmd_show(&config, format)
        }
        Command::Fields => {
            debug!("main: matched Fields command");
            cmd_fields()
        }
        Command::Submit => {
            debug!("main: matched Submit command");
            cmd_submit(&config)
        }
        Command::Generate { show_prompt } => {
            debug!(show_prompt, "main: matched Generate command");
            cmd_generate(&config, show_prompt).await
        }
        Command::Export { output } => {
            debug!(?output, "main: matched Export command");
            cmd_export(&config, output)
        }
        Command::Clear => {
            debug!("main: matched Clear command");
            cmd_clear(&config)
        }
    }
}

fn open_store(config: &Config) -> Result<FileSessionStore> {
    debug!("open_store: called");
    Ok(FileSessionStore::open(&config.storage.session_dir)?)
}

/// Start a new draft, optionally seeded from a YAML file
fn cmd_new(config: &Config, file: Option<&Path>) -> Result<()> {
    debug!(?file, "cmd_new: called");
    let store = open_store(config)?;
    let collector = FormCollector::new(&store);

    match file {
        Some(path) => {
            debug!(?path, "cmd_new: seeding draft from file");
            collector.load_file(path)?;
            println!("{} Draft loaded from {}", "✓".green(), path.display());
        }
        None => {
            debug!("cmd_new: starting empty draft");
            collector.start()?;
            println!("{} Started new project draft", "✓".green());
        }
    }
    println!("Set fields with 'prd set <field> <value>', then 'prd submit'");
    Ok(())
}

/// Set one field on the draft
fn cmd_set(config: &Config, field: &str, value: &str) -> Result<()> {
    debug!(%field, %value, "cmd_set: called");
    let store = open_store(config)?;
    let collector = FormCollector::new(&store);

    let field: Field = field.parse()?;
    collector.update(field, value)?;
    println!("{} Set {}", "✓".green(), field.name().cyan());
    Ok(())
}

/// Show the current draft
fn cmd_show(config: &Config, format: OutputFormat) -> Result<()> {
    debug!(?format, "cmd_show: called");
    let store = open_store(config)?;
    let collector = FormCollector::new(&store);

    match collector.current()? {
        Some(draft) => match format {
            OutputFormat::Yaml => {
                debug!("cmd_show: yaml output");
                print!("{}", serde_yaml::to_string(&draft)?);
            }
            OutputFormat::Json => {
                debug!("cmd_show: json output");
                println!("{}", serde_json::to_string_pretty(&draft)?);
            }
        },
        None => {
            debug!("cmd_show: no draft");
            println!("No draft in progress. Run 'prd new' first");
        }
    }
    Ok(())
}

/// List settable fields
fn cmd_fields() -> Result<()> {
    debug!("cmd_fields: called");
    println!("Settable fields:");
    for field in Field::all() {
        println!(
            "  {} {}",
            format!("{:<24}", field.name()).cyan(),
            field.describe()
        );
    }
    Ok(())
}

/// Validate and submit the draft
fn cmd_submit(config: &Config) -> Result<()> {
    debug!("cmd_submit: called");
    let store = open_store(config)?;
    let collector = FormCollector::new(&store);

    let record = collector.submit()?;
    println!(
        "{} Submitted project record: {}",
        "✓".green(),
        record.project_name
    );
    println!("Run 'prd generate' to create the PRD document");
    Ok(())
}

/// Generate the PRD document from the submitted record
async fn cmd_generate(config: &Config, show_prompt: bool) -> Result<()> {
    debug!(show_prompt, "cmd_generate: called");
    let store = open_store(config)?;
    let workdir = std::env::current_dir().context("Failed to resolve working directory")?;
    let compiler = PromptCompiler::new(&workdir);

    if show_prompt {
        debug!("cmd_generate: printing compiled prompt only");
        let record = store.load_record()?.ok_or(CompileError::RecordNotFound)?;
        let prompt = compiler.compile(&record)?;
        println!("{}", prompt);
        return Ok(());
    }

    let resolved = config.llm.resolve()?;
    let client = create_client_from_resolved(&resolved)?;

    println!("Generating PRD with {}...", resolved.model);
    let generation = run_generation(&store, &compiler, client.as_ref(), &resolved.model).await?;

    println!("{}", generation.document);
    Ok(())
}

/// Export the generated document as a PDF
fn cmd_export(config: &Config, output: Option<PathBuf>) -> Result<()> {
    debug!(?output, "cmd_export: called");
    let store = open_store(config)?;

    let generation = store
        .load_generation()?
        .ok_or_else(|| eyre!("No generated document found. Run 'prd generate' first"))?;

    let output = output.unwrap_or_else(|| config.export.filename.clone());
    PdfExporter::new().export(&generation.document, &output)?;
    println!("{} Exported PRD to {}", "✓".green(), output.display());
    Ok(())
}

/// Remove the draft, submitted record, and generated document
fn cmd_clear(config: &Config) -> Result<()> {
    debug!("cmd_clear: called");
    let store = open_store(config)?;
    store.clear()?;
    println!("{} Cleared session data", "✓".green());
    Ok(())
}
