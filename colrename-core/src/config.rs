use crate::mapping::{ColumnMapping, MappingTable};
use crate::scope::ModeKind;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_DIR: &str = ".colrename";
pub const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Target files, replacing the built-in list when non-empty
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<PathBuf>,

    /// Bare camelCase column names; each becomes `"name"` -> `snake_name`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub columns: Vec<String>,

    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Explicit old -> new pairs, applied before derived columns
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mappings: Vec<ColumnMapping>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DefaultsConfig {
    /// "unrestricted" or "delimited"
    #[serde(default)]
    pub mode: ModeKind,

    /// Block delimiter for delimited mode
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delimiter: Option<char>,

    /// Whether to use color output by default (None = auto-detect)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_color: Option<bool>,
}

impl Config {
    /// Load config from `.colrename/config.toml` under `dir` if it exists
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let config_path = dir.join(CONFIG_DIR).join(CONFIG_FILE);
        if config_path.exists() {
            return Self::load_from_path(&config_path);
        }

        Ok(Self::default())
    }

    /// Load config from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        Ok(config)
    }

    /// Save config to a specific path
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// The mapping table this config describes; the standard table when it
    /// names no mappings at all
    pub fn mapping_table(&self) -> Result<MappingTable> {
        if self.mappings.is_empty() && self.columns.is_empty() {
            return Ok(MappingTable::standard());
        }

        let mappings = self
            .mappings
            .iter()
            .cloned()
            .chain(self.columns.iter().map(|c| ColumnMapping::from_column(c)))
            .collect();
        MappingTable::new(mappings).context("Invalid column mappings in config")
    }
}
