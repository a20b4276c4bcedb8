//! Application configuration.
//!
//! A small TOML file configures where the seed documents live, where
//! the session store keeps its files, and how the mock submit gateway
//! behaves. Like the seed documents, configuration is fail-safe: an
//! absent or malformed file is logged and replaced by defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Seed document locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Path to the `{ "skills": [...], "categories": [...] }` document
    pub skills_path: PathBuf,
    /// Path to the `{ "users": [...] }` document
    pub accounts_path: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            skills_path: PathBuf::from("data/skills.json"),
            accounts_path: PathBuf::from("data/users.json"),
        }
    }
}

/// Session store location.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory the file-backed session store writes under
    pub dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        let dir = dirs::home_dir()
            .map(|home| home.join(".folio"))
            .unwrap_or_else(|| PathBuf::from(".folio"));
        Self { dir }
    }
}

/// Mock submit gateway tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// Simulated network delay in milliseconds
    pub delay_ms: u64,
    /// Probability in [0, 1] that a submission fails
    pub failure_rate: f64,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            delay_ms: 1000,
            failure_rate: 0.1,
        }
    }
}

/// Root configuration for the folio application.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    pub data: DataConfig,
    pub storage: StorageConfig,
    pub gateway: GatewayConfig,
}

impl FolioConfig {
    /// Loads configuration from a TOML file, falling back to defaults
    /// if the file is absent or malformed.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(raw) => match toml::from_str(&raw) {
                Ok(config) => {
                    debug!(?path, "configuration loaded");
                    config
                }
                Err(err) => {
                    warn!(?path, %err, "malformed configuration, using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                debug!(?path, "no configuration file, using defaults");
                Self::default()
            }
        }
    }
}
