//! Configuration handling for the scheduler
//!
//! Configuration is read from `<config dir>/config.toml` (global) and the
//! nearest `sched.toml` above the current directory (project). Project
//! settings win over global ones.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::UrgencyPolicy;

/// File name of the project-level configuration
pub const PROJECT_CONFIG_FILE: &str = "sched.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Output format for commands
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}

/// Global user configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct GlobalConfig {
    /// Default output format (text or json)
    pub default_format: OutputFormat,

    /// Urgency weights applied when the project does not set any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scoring: Option<UrgencyPolicy>,
}

/// Project-level configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ProjectConfig {
    /// Overrides the global output format
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_format: Option<OutputFormat>,

    /// Urgency weights for this project
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scoring: Option<UrgencyPolicy>,
}

/// Combined configuration (global + project)
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub project: ProjectConfig,
    pub global: GlobalConfig,
    pub project_path: Option<PathBuf>,
}

impl Config {
    /// Loads configuration from default locations, or from `explicit` for the
    /// project layer when given
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let global = Self::load_global()?;

        let project_path = match explicit {
            Some(path) => {
                if !path.is_file() {
                    return Err(ConfigError::Invalid(format!(
                        "config file not found: {}",
                        path.display()
                    ))
                    .into());
                }
                Some(path.to_path_buf())
            }
            None => Self::find_project_config(),
        };

        let project = match &project_path {
            Some(path) => Self::load_project_config(path)?,
            None => ProjectConfig::default(),
        };

        Ok(Self {
            project,
            global,
            project_path,
        })
    }

    /// Returns the global config directory
    pub fn global_config_dir() -> Option<PathBuf> {
        ProjectDirs::from("dev", "smart-scheduler", "sched")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Returns the global config file path, if it exists
    pub fn global_config_path() -> Option<PathBuf> {
        Self::global_config_dir()
            .map(|dir| dir.join("config.toml"))
            .filter(|path| path.is_file())
    }

    /// Loads global configuration
    fn load_global() -> Result<GlobalConfig> {
        let config_path = match Self::global_config_path() {
            Some(path) => path,
            None => return Ok(GlobalConfig::default()),
        };

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read global config: {}", config_path.display()))?;

        let config: GlobalConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(e.to_string()))
            .context("Failed to parse global config")?;

        if let Some(scoring) = &config.scoring {
            validate_policy(scoring)?;
        }

        Ok(config)
    }

    /// Loads project configuration from a file
    fn load_project_config(config_path: &Path) -> Result<ProjectConfig> {
        let content = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read project config: {}", config_path.display()))?;

        let config: ProjectConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(e.to_string()))
            .context("Failed to parse project config")?;

        if let Some(scoring) = &config.scoring {
            validate_policy(scoring)?;
        }

        Ok(config)
    }

    /// Finds the nearest `sched.toml` in the current directory or a parent
    pub fn find_project_config() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;
        Self::find_project_config_from(&current)
    }

    /// Finds the nearest `sched.toml` starting at `start`
    pub fn find_project_config_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();

        loop {
            let candidate = current.join(PROJECT_CONFIG_FILE);
            if candidate.is_file() {
                return Some(candidate);
            }

            if !current.pop() {
                return None;
            }
        }
    }

    /// Returns the urgency weights in effect
    pub fn policy(&self) -> UrgencyPolicy {
        self.project
            .scoring
            .or(self.global.scoring)
            .unwrap_or_default()
    }

    /// Returns the output format in effect when none is given on the command line
    pub fn format(&self) -> OutputFormat {
        self.project
            .default_format
            .unwrap_or(self.global.default_format)
    }
}

/// Rejects weights that would invert the meaning of the score
fn validate_policy(policy: &UrgencyPolicy) -> Result<(), ConfigError> {
    if policy.day_weight < 0 || policy.effort_weight < 0 || policy.undated_penalty < 0 {
        return Err(ConfigError::Invalid(
            "scoring weights must not be negative".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config() {
        let config = Config::default();

        assert_eq!(config.policy(), UrgencyPolicy::default());
        assert_eq!(config.format(), OutputFormat::Text);
        assert!(config.project_path.is_none());
    }

    #[test]
    fn parse_project_config() {
        let toml = r#"
default_format = "json"

[scoring]
undated_penalty = 500
"#;

        let config: ProjectConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.default_format, Some(OutputFormat::Json));

        let scoring = config.scoring.unwrap();
        assert_eq!(scoring.undated_penalty, 500);
        assert_eq!(scoring.day_weight, 10);
        assert_eq!(scoring.effort_weight, 5);
    }

    #[test]
    fn parse_global_config() {
        let toml = r#"
default_format = "json"
"#;

        let config: GlobalConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.default_format, OutputFormat::Json);
        assert!(config.scoring.is_none());
    }

    #[test]
    fn project_wins_over_global() {
        let config = Config {
            project: ProjectConfig {
                default_format: None,
                scoring: Some(UrgencyPolicy {
                    day_weight: 1,
                    ..UrgencyPolicy::default()
                }),
            },
            global: GlobalConfig {
                default_format: OutputFormat::Json,
                scoring: Some(UrgencyPolicy {
                    day_weight: 2,
                    ..UrgencyPolicy::default()
                }),
            },
            project_path: None,
        };

        assert_eq!(config.policy().day_weight, 1);
        assert_eq!(config.format(), OutputFormat::Json);
    }

    #[test]
    fn find_project_config_walks_up() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(PROJECT_CONFIG_FILE), "").unwrap();

        let sub_dir = dir.path().join("sub").join("dir");
        fs::create_dir_all(&sub_dir).unwrap();

        let found = Config::find_project_config_from(&sub_dir);
        assert_eq!(found, Some(dir.path().join(PROJECT_CONFIG_FILE)));
    }

    #[test]
    fn explicit_config_is_loaded() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(&path, "[scoring]\neffort_weight = 0\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.project_path.as_deref(), Some(path.as_path()));
        assert_eq!(config.policy().effort_weight, 0);
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let dir = TempDir::new().unwrap();
        let result = Config::load(Some(&dir.path().join("nope.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn negative_weights_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(PROJECT_CONFIG_FILE);
        fs::write(&path, "[scoring]\nday_weight = -1\n").unwrap();

        let err = Config::load(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("must not be negative"));
    }

    #[test]
    fn malformed_config_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(PROJECT_CONFIG_FILE);
        fs::write(&path, "scoring = [[[").unwrap();

        let err = Config::load(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("Failed to parse project config"));
    }
}
