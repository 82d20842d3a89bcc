//! Configuration settings for the Sudoku MIP solver

use crate::error::SolveError;
use crate::mip::MAX_RANK;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub puzzle: PuzzleConfig,
    pub solver: SolverConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PuzzleConfig {
    /// Sub-grid dimension; classic Sudoku is rank 3 (9x9 board)
    pub rank: usize,
    pub givens_file: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolverConfig {
    pub backend: SolverBackend,
}

/// External MIP backend used to solve the 0/1 exact-cover program
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SolverBackend {
    Microlp,
    Highs,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub save_results: bool,
    pub output_directory: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
    Pretty,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            puzzle: PuzzleConfig {
                rank: 3,
                givens_file: PathBuf::from("input/puzzles/escargot.txt"),
            },
            solver: SolverConfig {
                backend: SolverBackend::Microlp,
            },
            output: OutputConfig {
                format: OutputFormat::Text,
                save_results: false,
                output_directory: PathBuf::from("output/solutions"),
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &PathBuf) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.puzzle.rank == 0 {
            anyhow::bail!("Puzzle rank must be positive");
        }

        if self.puzzle.rank > MAX_RANK {
            anyhow::bail!(
                "Puzzle rank {} exceeds the maximum of {} (the symbol alphabet has 36 entries)",
                self.puzzle.rank,
                MAX_RANK
            );
        }

        if self.puzzle.givens_file.as_os_str().is_empty() {
            anyhow::bail!("Givens file path must not be empty");
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(rank) = cli_overrides.rank {
            self.puzzle.rank = rank;
        }
        if let Some(ref givens_file) = cli_overrides.givens_file {
            self.puzzle.givens_file = givens_file.clone();
        }
        if let Some(backend) = cli_overrides.backend {
            self.solver.backend = backend;
        }
        if let Some(ref output_dir) = cli_overrides.output_dir {
            self.output.output_directory = output_dir.clone();
        }
    }
}

impl FromStr for SolverBackend {
    type Err = SolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "microlp" => Ok(SolverBackend::Microlp),
            "highs" => Ok(SolverBackend::Highs),
            other => Err(SolveError::Config(format!(
                "unknown solver backend '{other}' (expected 'microlp' or 'highs')"
            ))),
        }
    }
}

impl std::fmt::Display for SolverBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolverBackend::Microlp => write!(f, "microlp"),
            SolverBackend::Highs => write!(f, "highs"),
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub rank: Option<usize>,
    pub givens_file: Option<PathBuf>,
    pub backend: Option<SolverBackend>,
    pub output_dir: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.puzzle.rank, 3);
        assert_eq!(settings.solver.backend, SolverBackend::Microlp);
    }

    #[test]
    fn test_rank_bounds() {
        let mut settings = Settings::default();

        settings.puzzle.rank = 0;
        assert!(settings.validate().is_err());

        settings.puzzle.rank = 7;
        assert!(settings.validate().is_err());

        settings.puzzle.rank = 6;
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_yaml_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");

        let mut settings = Settings::default();
        settings.puzzle.rank = 4;
        settings.solver.backend = SolverBackend::Highs;
        settings.to_file(&path).unwrap();

        let loaded = Settings::from_file(&path).unwrap();
        assert_eq!(loaded.puzzle.rank, 4);
        assert_eq!(loaded.solver.backend, SolverBackend::Highs);
    }

    #[test]
    fn test_backend_from_str() {
        assert_eq!("microlp".parse::<SolverBackend>().unwrap(), SolverBackend::Microlp);
        assert_eq!("HiGHS".parse::<SolverBackend>().unwrap(), SolverBackend::Highs);
        assert!("gurobi".parse::<SolverBackend>().is_err());
    }

    #[test]
    fn test_cli_override_merge() {
        let mut settings = Settings::default();
        let overrides = CliOverrides {
            rank: Some(4),
            givens_file: Some(PathBuf::from("puzzle.txt")),
            backend: Some(SolverBackend::Highs),
            output_dir: None,
        };

        settings.merge_with_cli(&overrides);
        assert_eq!(settings.puzzle.rank, 4);
        assert_eq!(settings.puzzle.givens_file, PathBuf::from("puzzle.txt"));
        assert_eq!(settings.solver.backend, SolverBackend::Highs);
        assert_eq!(settings.output.output_directory, PathBuf::from("output/solutions"));
    }
}
