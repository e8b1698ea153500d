//! Cofactor configuration file handling

use anyhow::{Context, Result};
use cofactor_core::MatchStrategy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::report::OutputFormat;

/// Name of the configuration file looked up inside a directory
pub const CONFIG_FILE: &str = "cofactor.toml";

/// Top-level Cofactor configuration (cofactor.toml)
#[derive(Debug, Deserialize, Serialize)]
pub struct CofactorConfig {
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub pairs: Vec<PairConfig>,
}

/// How pairs are analyzed
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct AnalysisConfig {
    /// Matching strategy ("greedy" or "by-count")
    #[serde(default)]
    pub strategy: MatchStrategy,
    /// Include the step-by-step narration
    #[serde(default)]
    pub steps: bool,
}

/// How results are printed
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// One operand pair to analyze
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct PairConfig {
    pub x: u64,
    pub y: u64,
}

impl CofactorConfig {
    /// Load configuration from a directory (looks for cofactor.toml) or a file
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = if path.is_file() {
            path.to_path_buf()
        } else {
            path.join(CONFIG_FILE)
        };

        if !config_path.exists() {
            anyhow::bail!(
                "No {} found in {}. Run `cofactor init` to create one.",
                CONFIG_FILE,
                path.display()
            );
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))
    }

    /// Parse and validate configuration text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: CofactorConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Configuration holding the classic 9 and 15 pair
    pub fn new() -> Self {
        Self {
            analysis: AnalysisConfig::default(),
            output: OutputConfig::default(),
            pairs: vec![PairConfig { x: 9, y: 15 }],
        }
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    fn validate(&self) -> Result<()> {
        if self.pairs.is_empty() {
            anyhow::bail!("No [[pairs]] entries to analyze");
        }
        for (i, pair) in self.pairs.iter().enumerate() {
            if pair.x == 0 || pair.y == 0 {
                anyhow::bail!(
                    "pairs[{}] = ({}, {}): operands must be positive integers",
                    i,
                    pair.x,
                    pair.y
                );
            }
        }
        Ok(())
    }
}

impl Default for CofactorConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Write a default cofactor.toml into `dir`, refusing to overwrite
pub fn write_default(dir: &Path) -> Result<std::path::PathBuf> {
    fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;
    let path = dir.join(CONFIG_FILE);
    if path.exists() {
        anyhow::bail!("{} already exists", path.display());
    }
    fs::write(&path, CofactorConfig::new().to_toml()?)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_sections() {
        let config = CofactorConfig::from_toml(
            r#"
            [[pairs]]
            x = 8
            y = 12
            "#,
        )
        .unwrap();
        assert_eq!(config.analysis.strategy, MatchStrategy::Greedy);
        assert!(!config.analysis.steps);
        assert_eq!(config.output.format, OutputFormat::Text);
        assert_eq!(config.pairs, vec![PairConfig { x: 8, y: 12 }]);
    }

    #[test]
    fn test_full_config() {
        let config = CofactorConfig::from_toml(
            r#"
            [analysis]
            strategy = "by-count"
            steps = true

            [output]
            format = "json"

            [[pairs]]
            x = 9
            y = 15

            [[pairs]]
            x = 81
            y = 27
            "#,
        )
        .unwrap();
        assert_eq!(config.analysis.strategy, MatchStrategy::ByCount);
        assert!(config.analysis.steps);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.pairs.len(), 2);
    }

    #[test]
    fn test_rejects_zero_and_empty() {
        assert!(CofactorConfig::from_toml("[[pairs]]\nx = 0\ny = 4\n").is_err());
        assert!(CofactorConfig::from_toml("[analysis]\nsteps = true\n").is_err());
        assert!(CofactorConfig::from_toml("[[pairs]]\nx = -3\ny = 4\n").is_err());
        assert!(CofactorConfig::from_toml("[analysis]\nstrategy = \"fastest\"\n[[pairs]]\nx = 1\ny = 2\n").is_err());
    }

    #[test]
    fn test_default_round_trips_through_toml() {
        let text = CofactorConfig::new().to_toml().unwrap();
        let config = CofactorConfig::from_toml(&text).unwrap();
        assert_eq!(config.pairs, vec![PairConfig { x: 9, y: 15 }]);
    }

    #[test]
    fn test_load_from_dir_and_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(CofactorConfig::load_from_dir(dir.path()).is_err());

        let path = write_default(dir.path()).unwrap();
        assert!(write_default(dir.path()).is_err());

        let from_dir = CofactorConfig::load_from_dir(dir.path()).unwrap();
        let from_file = CofactorConfig::load_from_dir(&path).unwrap();
        assert_eq!(from_dir.pairs, from_file.pairs);
    }
}
