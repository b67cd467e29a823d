// SPDX-FileCopyrightText: 2026 Strand Calendar contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, fs, path::PathBuf, str::FromStr};

use strandcal_core::{APP_NAME, Config as CoreConfig};

const CONFIG_ENV: &str = "STRANDCAL_CONFIG";

/// Resolve and parse the configuration.
///
/// Priority: the `--config` flag, then the `STRANDCAL_CONFIG` environment
/// variable, then `$XDG_CONFIG_HOME/strandcal/config.toml`. When no config
/// file exists at all, fall back to the default data directory so the tool
/// works out of the box.
pub fn parse_config(path: Option<PathBuf>) -> Result<(CoreConfig, Config), Box<dyn Error>> {
    let path = if let Some(path) = path {
        path
    } else if let Ok(env_path) = std::env::var(CONFIG_ENV) {
        PathBuf::from(env_path)
    } else {
        let config = get_config_dir()?.join(format!("{APP_NAME}/config.toml"));
        if !config.exists() {
            tracing::debug!(path = %config.display(), "no config found, using defaults");
            return Ok((default_core_config()?, Config {}));
        }
        config
    };

    fs::read_to_string(&path)
        .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?
        .parse::<ConfigRaw>()
        .map(|a| (a.core, Config {}))
}

/// CLI-level configuration. Currently empty, everything lives in `[core]`.
#[derive(Debug, Clone, Copy, serde::Deserialize)]
pub struct Config {}

#[derive(Debug, serde::Deserialize)]
struct ConfigRaw {
    core: CoreConfig,
}

impl FromStr for ConfigRaw {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

fn default_core_config() -> Result<CoreConfig, Box<dyn Error>> {
    Ok(CoreConfig::new(get_data_dir()?.join(APP_NAME)))
}

fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| "User-specific home directory not found".into())
}

fn get_data_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let data_dir = xdg::BaseDirectories::new().get_data_home();
    #[cfg(windows)]
    let data_dir = dirs::data_dir();
    data_dir.ok_or_else(|| "User-specific home directory not found".into())
}
