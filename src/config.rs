//! Application configuration management.
//!
//! This module handles loading and saving the client configuration: the
//! auth backend base URL and the chain the app expects wallets to be
//! connected to.
//!
//! Configuration is stored at `~/.config/chaincred/config.json`.

use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Application name used for config directory paths
const APP_NAME: &str = "chaincred";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// Default auth backend base URL
const DEFAULT_BACKEND_URL: &str = "https://api.chaincred.xyz";

/// Default chain id (Sepolia testnet)
const DEFAULT_CHAIN_ID: u64 = 11155111;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub backend_url: String,
    pub chain_id: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            chain_id: DEFAULT_CHAIN_ID,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            Ok(serde_json::from_str(&contents)?)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }
}
