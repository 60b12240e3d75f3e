// src/config/config_load.rs
//
// loading of config.toml

use log::{debug, warn};
use serde::Deserialize;
use std::fs;

use super::config_types::{
    ControlsConfig, FibonacciConfig, OscConfig, StyleConfig, TilingConfig, ViewConfig,
    WindowConfig,
};
use crate::errors::Result;

pub const CONFIG_FILE: &str = "config.toml";

/// Every section may be left out of the file, it then takes its defaults
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub view: ViewConfig,
    pub tiling: TilingConfig,
    pub controls: ControlsConfig,
    pub style: StyleConfig,
    pub fibonacci: FibonacciConfig,
    pub osc: OscConfig,
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load() -> Result<Self> {
        // First try to load from the executable's directory
        if let Some(exe_config) = Self::load_from_exe_dir() {
            return Ok(exe_config);
        }

        // Fallback to loading from the current working directory
        Self::load_from_working_dir()
    }

    fn load_from_exe_dir() -> Option<Self> {
        let exe_path = std::env::current_exe().ok()?;
        let config_path = exe_path.parent()?.join(CONFIG_FILE);

        if !config_path.exists() {
            return None;
        }
        let content = fs::read_to_string(&config_path).ok()?;
        match Self::from_toml_str(&content) {
            Ok(config) => {
                debug!("loaded {}", config_path.display());
                Some(config)
            }
            Err(e) => {
                warn!("ignoring {}: {}", config_path.display(), e);
                None
            }
        }
    }

    fn load_from_working_dir() -> Result<Self> {
        let content = fs::read_to_string(CONFIG_FILE)?;
        Self::from_toml_str(&content)
    }
}
