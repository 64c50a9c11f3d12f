//! Configuration management for the CLI.

use crate::cli::Cli;
use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tenderdiff_analyzer::AnalyzerConfig;

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Pipeline settings handed to the analyzer
    #[serde(default)]
    pub analyzer: AnalyzerConfig,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON format
    Json,
}

impl Config {
    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".tenderdiff").join("config.toml"))
    }

    /// Load configuration from an explicit `path`, or from the default location.
    ///
    /// Only a missing default file yields the defaults; a missing explicit
    /// file or a malformed one is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) if !path.exists() => Err(CliError::Config(format!(
                "Config file '{}' does not exist",
                path.display()
            ))),
            Some(path) => Self::read(path),
            None => {
                let path = Self::path()?;
                if path.exists() {
                    Self::read(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn read(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Apply command-line overrides, then validate the analyzer settings.
    pub fn apply_overrides(&mut self, cli: &Cli) -> Result<()> {
        if let Some(model) = &cli.model {
            self.analyzer.model = model.clone();
        }
        if let Some(endpoint) = &cli.endpoint {
            self.analyzer.endpoint = endpoint.clone();
        }
        if let Some(templates) = cli.templates {
            self.analyzer.templates = templates.into();
        }
        if let Some(format) = cli.format {
            self.settings.format = format.into();
        }
        if cli.no_color {
            self.settings.color = false;
        }

        self.analyzer.validate().map_err(CliError::Config)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Text,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Text
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;
    use tenderdiff_analyzer::TemplateSet;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.analyzer.model, "mistral");
        assert!(config.settings.color);
        assert_eq!(config.settings.format, OutputFormat::Text);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let result = Config::load(Some(&dir.path().join("absent.toml")));
        assert!(matches!(result, Err(CliError::Config(msg)) if msg.contains("absent.toml")));
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "").unwrap();

        let config = Config::load(Some(&path)).unwrap();

        assert_eq!(config.analyzer, AnalyzerConfig::default());
        assert!(config.settings.color);
    }

    #[test]
    fn test_load_sections() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let contents = concat!(
            "[analyzer]\nmodel = \"qwen2\"\nanswer_char_budget = 2000\n\n",
            "[settings]\ncolor = false\nformat = \"json\"\n",
        );
        fs::write(&path, contents).unwrap();

        let config = Config::load(Some(&path)).unwrap();

        assert_eq!(config.analyzer.model, "qwen2");
        assert_eq!(config.analyzer.answer_char_budget, 2000);
        assert_eq!(config.analyzer.summary_char_budget, 5000);
        assert!(!config.settings.color);
        assert_eq!(config.settings.format, OutputFormat::Json);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[analyzer\nmodel = ").unwrap();
        assert!(matches!(Config::load(Some(&path)), Err(CliError::Toml(_))));
    }

    #[test]
    fn test_flags_override_file() {
        let cli = Cli::parse_from([
            "tenderdiff",
            "--model",
            "llama3",
            "--templates",
            "plain",
            "--no-color",
            "extract",
            "a.txt",
        ]);
        let mut config = Config::default();

        config.apply_overrides(&cli).unwrap();

        assert_eq!(config.analyzer.model, "llama3");
        assert_eq!(config.analyzer.templates, TemplateSet::Plain);
        assert!(!config.settings.color);
    }

    #[test]
    fn test_invalid_override_is_rejected() {
        let cli = Cli::parse_from(["tenderdiff", "--model", " ", "extract", "a.txt"]);
        let mut config = Config::default();
        assert!(matches!(config.apply_overrides(&cli), Err(CliError::Config(_))));
    }
}
