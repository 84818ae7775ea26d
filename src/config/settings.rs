//! Configuration settings for the pattern search tool.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub search: SearchConfig,
    pub solver: SolverConfig,
    pub output: OutputConfig,
}

/// Geometry of the search region and the basic constraints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Width of the search region, border included.
    pub width: i32,
    /// Height of the search region, border included.
    pub height: i32,
    /// Require at least one live cell in every generation, so the empty
    /// field is not reported as a solution.
    pub require_activity: bool,
}

/// External SAT solver invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Solver executable name, looked up on PATH when `path` is unset.
    pub name: String,
    /// Explicit path to the solver binary.
    pub path: Option<PathBuf>,
}

impl SolverConfig {
    /// The program to execute.
    pub fn program(&self) -> PathBuf {
        self.path.clone().unwrap_or_else(|| PathBuf::from(&self.name))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub output_directory: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            search: SearchConfig {
                width: 8,
                height: 8,
                require_activity: true,
            },
            solver: SolverConfig {
                name: "kissat".to_string(),
                path: None,
            },
            output: OutputConfig {
                format: OutputFormat::Text,
                output_directory: PathBuf::from("output/solutions"),
            },
        }
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Settings::default().solver
    }
}

impl Settings {
    /// Load settings from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read config file {}", path.as_ref().display()))?;
        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse config file {}", path.as_ref().display()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file.
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_yaml::to_string(self).context("failed to serialize settings")?;
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }
        std::fs::write(&path, content)
            .with_context(|| format!("failed to write config file {}", path.as_ref().display()))?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.search.width < 3 || self.search.height < 3 {
            anyhow::bail!(
                "search region must be at least 3x3, got {}x{}",
                self.search.width,
                self.search.height
            );
        }
        if self.solver.name.is_empty() && self.solver.path.is_none() {
            anyhow::bail!("no solver configured");
        }
        Ok(())
    }

    /// Apply command line overrides on top of the file settings.
    pub fn merge_with_cli(&mut self, overrides: &CliOverrides) {
        if let Some(width) = overrides.width {
            self.search.width = width;
        }
        if let Some(height) = overrides.height {
            self.search.height = height;
        }
        if let Some(ref solver) = overrides.solver {
            self.solver.name = solver.clone();
            self.solver.path = None;
        }
        if let Some(ref output_dir) = overrides.output_dir {
            self.output.output_directory = output_dir.clone();
        }
        if let Some(require_activity) = overrides.require_activity {
            self.search.require_activity = require_activity;
        }
    }
}

/// Command line overrides for settings.
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub solver: Option<String>,
    pub output_dir: Option<PathBuf>,
    pub require_activity: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_validate() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_tiny_region() {
        let mut settings = Settings::default();
        settings.search.width = 2;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_yaml_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config/settings.yaml");
        let mut settings = Settings::default();
        settings.search.width = 12;
        settings.solver.name = "cadical".to_string();
        settings.output.format = OutputFormat::Json;
        settings.to_file(&path).unwrap();

        let loaded = Settings::from_file(&path).unwrap();
        assert_eq!(loaded.search.width, 12);
        assert_eq!(loaded.solver.name, "cadical");
        assert_eq!(loaded.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_cli_overrides() {
        let mut settings = Settings::default();
        let overrides = CliOverrides {
            width: Some(10),
            solver: Some("minisat".to_string()),
            require_activity: Some(false),
            ..Default::default()
        };
        settings.merge_with_cli(&overrides);
        assert_eq!(settings.search.width, 10);
        assert_eq!(settings.search.height, 8);
        assert_eq!(settings.solver.name, "minisat");
        assert!(!settings.search.require_activity);
    }

    #[test]
    fn test_solver_program_resolution() {
        let mut config = SolverConfig::default();
        assert_eq!(config.program(), PathBuf::from("kissat"));
        config.path = Some(PathBuf::from("/opt/solvers/kissat"));
        assert_eq!(config.program(), PathBuf::from("/opt/solvers/kissat"));
    }
}
