//! Configuration management
//!
//! Thresholds, predicate letters and matrix shape used by the examples.
//! Every field has a default, so a missing or partial file is fine.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Numeric cut-offs for the filter examples
    #[serde(default)]
    pub thresholds: ThresholdsConfig,
    /// Letters used by the string predicate examples
    #[serde(default)]
    pub predicates: PredicatesConfig,
    /// Random matrix settings
    #[serde(default)]
    pub matrix: MatrixConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdsConfig {
    /// Cut-off for the flat number examples
    #[serde(default = "default_numbers_threshold")]
    pub numbers: i64,
    /// Cut-off for the flatten-and-filter example
    #[serde(default = "default_flatten_threshold")]
    pub flatten: i64,
}

fn default_numbers_threshold() -> i64 {
    5
}

fn default_flatten_threshold() -> i64 {
    3
}

impl Default for ThresholdsConfig {
    fn default() -> Self {
        Self {
            numbers: default_numbers_threshold(),
            flatten: default_flatten_threshold(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredicatesConfig {
    /// Names must start with this
    #[serde(default = "default_prefix")]
    pub prefix: String,
    /// Substring for the "contains" example
    #[serde(default = "default_needle")]
    pub needle: String,
    /// Extra substring required by the all-conditions example
    #[serde(default = "default_also_contains")]
    pub also_contains: String,
    /// Alternative suffix for the any-condition example
    #[serde(default = "default_suffix")]
    pub suffix: String,
}

fn default_prefix() -> String {
    "a".to_string()
}

fn default_needle() -> String {
    "ad".to_string()
}

fn default_also_contains() -> String {
    "s".to_string()
}

fn default_suffix() -> String {
    "e".to_string()
}

impl Default for PredicatesConfig {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
            needle: default_needle(),
            also_contains: default_also_contains(),
            suffix: default_suffix(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixConfig {
    #[serde(default = "default_rows")]
    pub rows: usize,
    #[serde(default = "default_cols")]
    pub cols: usize,
    /// Exclusive upper bound for entries
    #[serde(default = "default_upper")]
    pub upper: i64,
    /// Fixed seed; drawn from the OS when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

fn default_rows() -> usize {
    4
}

fn default_cols() -> usize {
    6
}

fn default_upper() -> i64 {
    100
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self {
            rows: default_rows(),
            cols: default_cols(),
            upper: default_upper(),
            seed: None,
        }
    }
}

impl Config {
    /// Load configuration from the default location, falling back to defaults
    pub fn load() -> Result<Self> {
        let config_path = config_path()?;
        Self::load_from(&config_path)
    }

    /// Load configuration from a specific file, falling back to defaults if it is missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<PathBuf> {
        let config_path = config_path()?;
        self.save_to(&config_path)?;
        Ok(config_path)
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .context("Failed to create config directory")?;
        }

        let contents = toml::to_string_pretty(self)
            .context("Failed to serialize config")?;

        std::fs::write(path, contents)
            .context("Failed to write config file")?;

        Ok(())
    }
}

/// Get the configuration file path
pub fn config_path() -> Result<PathBuf> {
    let base = directories::ProjectDirs::from("com", "listcomp-tour", "listcomp-tour")
        .context("Failed to get project directories")?;
    Ok(base.config_dir().join("config.toml"))
}

/// Show configuration
pub fn show_config<W: Write>(config: &Config, out: &mut W) -> Result<()> {
    writeln!(out, "Thresholds:")?;
    writeln!(out, "  numbers  > {}", config.thresholds.numbers)?;
    writeln!(out, "  flatten  > {}", config.thresholds.flatten)?;
    writeln!(out, "Predicates:")?;
    writeln!(out, "  prefix         {:?}", config.predicates.prefix)?;
    writeln!(out, "  needle         {:?}", config.predicates.needle)?;
    writeln!(out, "  also contains  {:?}", config.predicates.also_contains)?;
    writeln!(out, "  suffix         {:?}", config.predicates.suffix)?;
    writeln!(out, "Matrix:")?;
    writeln!(out, "  shape  {}x{}", config.matrix.rows, config.matrix.cols)?;
    writeln!(out, "  values 0..{}", config.matrix.upper)?;
    match config.matrix.seed {
        Some(seed) => writeln!(out, "  seed   {}", seed)?,
        None => writeln!(out, "  seed   (random)")?,
    }
    Ok(())
}
