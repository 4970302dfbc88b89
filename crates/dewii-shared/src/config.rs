//! Configuration management for DEWII tools.
//!
//! Loads settings from a TOML file or uses defaults. Lookup order:
//! explicit path, `$DEWII_CONFIG`, then `<config_dir>/dewii/config.toml`.

use crate::error::{DewiiError, Result};
use crate::progression::ProgressionEngine;
use crate::titles::{TitleTable, TitleTier};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Environment variable overriding the config path
pub const CONFIG_ENV: &str = "DEWII_CONFIG";

/// Title table settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TitlesConfig {
    /// Custom title table; the canonical bands apply when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tiers: Option<Vec<TitleTier>>,
}

/// Level display settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelsConfig {
    /// Rows printed by `dewiictl levels` when `--up-to` is not given
    #[serde(default = "default_table_rows")]
    pub table_rows: u32,
}

fn default_table_rows() -> u32 {
    20
}

impl Default for LevelsConfig {
    fn default() -> Self {
        Self {
            table_rows: default_table_rows(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DewiiConfig {
    #[serde(default)]
    pub titles: TitlesConfig,
    #[serde(default)]
    pub levels: LevelsConfig,
}

impl DewiiConfig {
    /// Default config location under the user's config directory
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("dewii").join("config.toml"))
    }

    /// Load config.
    ///
    /// An explicit path must exist and parse. Implicit locations fall back
    /// to defaults when missing or broken.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from_path(path);
        }

        let implicit = std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .or_else(Self::default_path);

        match implicit {
            Some(path) if path.exists() => Ok(Self::load_from_path(&path).unwrap_or_else(|e| {
                warn!("Ignoring config at {}: {}", path.display(), e);
                Self::default()
            })),
            Some(path) => {
                debug!("No config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            None => Ok(Self::default()),
        }
    }

    /// Load and validate config from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: DewiiConfig = toml::from_str(content)?;
        config.title_table()?;
        if config.levels.table_rows == 0 {
            return Err(DewiiError::Config("levels.table_rows must be at least 1".to_string()));
        }
        Ok(config)
    }

    pub fn title_table(&self) -> Result<TitleTable> {
        match &self.titles.tiers {
            Some(tiers) => TitleTable::new(tiers.clone()),
            None => Ok(TitleTable::default()),
        }
    }

    pub fn engine(&self) -> Result<ProgressionEngine> {
        Ok(ProgressionEngine::new(self.title_table()?))
    }
}
