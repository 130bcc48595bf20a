//! Configuration for prdgen
//!
//! Loaded from YAML with every field optional; anything unset falls back to
//! a per-provider or built-in default, so an empty file (or no file at all)
//! is a valid configuration.

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Model used when neither config nor provider defaults name one
pub const DEFAULT_MODEL: &str = "llama3-8b-8192";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// LLM provider settings
    #[serde(default)]
    pub llm: LlmConfig,

    /// Session storage settings
    #[serde(default)]
    pub storage: StorageConfig,

    /// PDF export settings
    #[serde(default)]
    pub export: ExportConfig,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default)]
    pub log_level: Option<String>,
}

/// LLM provider settings, before defaults are applied
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Provider name ("groq" or "openai")
    #[serde(default = "default_provider")]
    pub provider: String,

    /// Model override; falls back to the provider default
    #[serde(default)]
    pub model: Option<String>,

    /// Base URL override; falls back to the provider endpoint
    #[serde(default)]
    pub base_url: Option<String>,

    /// Environment variable holding the API key
    #[serde(default)]
    pub api_key_env: Option<String>,
}

fn default_provider() -> String {
    "groq".to_string()
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            model: None,
            base_url: None,
            api_key_env: None,
        }
    }
}

/// Built-in defaults for a known provider
struct ProviderDefaults {
    model: &'static str,
    base_url: &'static str,
    api_key_env: &'static str,
}

impl ProviderDefaults {
    fn for_provider(provider: &str) -> Option<Self> {
        debug!(%provider, "ProviderDefaults::for_provider: called");
        match provider {
            "groq" => Some(Self {
                model: DEFAULT_MODEL,
                base_url: "https://api.groq.com/openai",
                api_key_env: "GROQ_API_KEY",
            }),
            "openai" => Some(Self {
                model: "gpt-4o-mini",
                base_url: "https://api.openai.com",
                api_key_env: "OPENAI_API_KEY",
            }),
            _ => None,
        }
    }
}

impl LlmConfig {
    /// Fill provider defaults into any unset field
    pub fn resolve(&self) -> Result<ResolvedLlmConfig> {
        debug!(provider = %self.provider, "LlmConfig::resolve: called");
        let defaults = ProviderDefaults::for_provider(&self.provider).ok_or_else(|| {
            eyre::eyre!(
                "Unknown LLM provider: '{}'. Supported: groq, openai",
                self.provider
            )
        })?;
        Ok(ResolvedLlmConfig {
            provider: self.provider.clone(),
            model: self
                .model
                .clone()
                .unwrap_or_else(|| defaults.model.to_string()),
            base_url: self
                .base_url
                .clone()
                .unwrap_or_else(|| defaults.base_url.to_string()),
            api_key_env: self
                .api_key_env
                .clone()
                .unwrap_or_else(|| defaults.api_key_env.to_string()),
        })
    }
}

/// LLM settings with every default applied
#[derive(Debug, Clone)]
pub struct ResolvedLlmConfig {
    pub provider: String,
    pub model: String,
    pub base_url: String,
    pub api_key_env: String,
}

impl ResolvedLlmConfig {
    /// Read the API key from the configured environment variable
    ///
    /// Keys never live in the config file, only in the environment.
    pub fn get_api_key(&self) -> Result<String> {
        debug!(var = %self.api_key_env, "ResolvedLlmConfig::get_api_key: called");
        std::env::var(&self.api_key_env)
            .context(format!("Environment variable {} not set", self.api_key_env))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the session documents
    #[serde(default = "default_session_dir")]
    pub session_dir: PathBuf,
}

fn default_session_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("prdgen")
        .join("session")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            session_dir: default_session_dir(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Default output file for PDF export
    #[serde(default = "default_export_filename")]
    pub filename: PathBuf,
}

fn default_export_filename() -> PathBuf {
    PathBuf::from(crate::export::DEFAULT_FILENAME)
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            filename: default_export_filename(),
        }
    }
}

impl Config {
    /// Load config from an explicit path, a default location, or built-in defaults
    pub fn load(path: Option<&PathBuf>) -> Result<Self> {
        debug!(?path, "Config::load: called");
        if let Some(config_path) = path {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_yaml::from_str(&content)?;
            return Ok(config);
        }

        // Fall through the default locations
        let default_paths = [
            dirs::config_dir().map(|p| p.join("prdgen").join("config.yml")),
            Some(PathBuf::from("prdgen.yml")),
        ];

        for path in default_paths.iter().flatten() {
            if path.exists() {
                debug!(?path, "Config::load: found config file");
                let content = std::fs::read_to_string(path)?;
                let config: Config = serde_yaml::from_str(&content)?;
                return Ok(config);
            }
        }

        debug!("Config::load: no config file, using defaults");
        Ok(Config::default())
    }

    /// Peek at the configured log level before the full startup
    ///
    /// Logging comes up before everything else, so this reads only the log
    /// level through the same lookup chain as [`Config::load`].
    pub fn load_log_level(path: Option<&PathBuf>) -> Option<String> {
        let config = Config::load(path).ok()?;
        config.log_level
    }

    /// Write the config back out as YAML
    pub fn save(&self, path: &Path) -> Result<()> {
        debug!(?path, "Config::save: called");
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_default_config_resolves_to_groq() {
        let config = Config::default();
        assert_eq!(config.llm.provider, "groq");

        let resolved = config.llm.resolve().unwrap();
        assert_eq!(resolved.model, DEFAULT_MODEL);
        assert_eq!(resolved.base_url, "https://api.groq.com/openai");
        assert_eq!(resolved.api_key_env, "GROQ_API_KEY");
    }

    #[test]
    fn test_openai_provider_defaults() {
        let llm = LlmConfig {
            provider: "openai".to_string(),
            ..Default::default()
        };
        let resolved = llm.resolve().unwrap();
        assert_eq!(resolved.base_url, "https://api.openai.com");
        assert_eq!(resolved.api_key_env, "OPENAI_API_KEY");
    }

    #[test]
    fn test_unknown_provider_errors() {
        let llm = LlmConfig {
            provider: "mystery".to_string(),
            ..Default::default()
        };
        let err = llm.resolve().unwrap_err();
        assert!(err.to_string().contains("mystery"));
        assert!(err.to_string().contains("groq, openai"));
    }

    #[test]
    fn test_overrides_survive_resolve() {
        let llm = LlmConfig {
            provider: "groq".to_string(),
            model: Some("llama-3.1-70b-versatile".to_string()),
            base_url: Some("http://localhost:8080".to_string()),
            api_key_env: Some("MY_KEY".to_string()),
        };
        let resolved = llm.resolve().unwrap();
        assert_eq!(resolved.model, "llama-3.1-70b-versatile");
        assert_eq!(resolved.base_url, "http://localhost:8080");
        assert_eq!(resolved.api_key_env, "MY_KEY");
    }

    #[test]
    fn test_load_from_yaml_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let config_path = temp.path().join("config.yml");
        std::fs::write(
            &config_path,
            "llm:\n  model: mixtral-8x7b-32768\nstorage:\n  session_dir: /tmp/prd-session\nlog_level: debug\n",
        )
        .unwrap();

        let config = Config::load(Some(&config_path)).unwrap();
        assert_eq!(config.llm.model.as_deref(), Some("mixtral-8x7b-32768"));
        assert_eq!(config.llm.provider, "groq");
        assert_eq!(config.storage.session_dir, PathBuf::from("/tmp/prd-session"));
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_save_round_trip() {
        let temp = tempfile::TempDir::new().unwrap();
        let config_path = temp.path().join("config.yml");

        let mut config = Config::default();
        config.llm.provider = "openai".to_string();
        config.save(&config_path).unwrap();

        let loaded = Config::load(Some(&config_path)).unwrap();
        assert_eq!(loaded.llm.provider, "openai");
    }

    #[test]
    #[serial]
    fn test_get_api_key_reads_env() {
        let resolved = ResolvedLlmConfig {
            provider: "groq".to_string(),
            model: DEFAULT_MODEL.to_string(),
            base_url: "https://api.groq.com/openai".to_string(),
            api_key_env: "PRDGEN_TEST_KEY".to_string(),
        };

        unsafe { std::env::set_var("PRDGEN_TEST_KEY", "secret") };
        assert_eq!(resolved.get_api_key().unwrap(), "secret");

        unsafe { std::env::remove_var("PRDGEN_TEST_KEY") };
        let err = resolved.get_api_key().unwrap_err();
        assert!(err.to_string().contains("PRDGEN_TEST_KEY"));
    }
}
