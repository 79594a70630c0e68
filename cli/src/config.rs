// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf};

use potluck_core::{APP_NAME, Config};
use tokio::fs;

const POTLUCK_CONFIG_ENV: &str = "POTLUCK_CONFIG";
const POTLUCK_DEV_ENV: &str = "POTLUCK_DEV";

const POTLUCK_DEV_VALID_TRUE: &[&str] = &["1", "true", "yes"];
const POTLUCK_DEV_VALID_FALSE: &[&str] = &["0", "false", "no"];

/// Loads the configuration from, in order: the given path, `$POTLUCK_CONFIG`,
/// or the per-user config directory.
#[tracing::instrument]
pub async fn parse_config(path: Option<PathBuf>) -> Result<Config, Box<dyn Error>> {
    let path = match path {
        Some(path) => path,
        None => match std::env::var(POTLUCK_CONFIG_ENV) {
            Ok(env_path) => PathBuf::from(env_path),
            Err(_) => default_config_path()?,
        },
    };

    tracing::debug!(path = %path.display(), "reading configuration");
    let content = fs::read_to_string(&path)
        .await
        .map_err(|e| format!("Failed to read config file at {}: {e}", path.display()))?;

    toml::from_str(&content)
        .map_err(|e| format!("Failed to parse config file at {}: {e}", path.display()).into())
}

fn default_config_path() -> Result<PathBuf, Box<dyn Error>> {
    if let Some(true) = is_dev_mode() {
        return Err(format!(
            "Development environment detected ({POTLUCK_DEV_ENV} is set): config must be explicitly specified via --config or {POTLUCK_CONFIG_ENV} environment variable",
        )
        .into());
    }

    let config = get_config_dir()?.join(APP_NAME).join("config.toml");
    if !config.exists() {
        return Err(format!("No config found at: {}", config.display()).into());
    }
    Ok(config)
}

fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(not(unix))]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| "User-specific config directory not found".into())
}

fn is_dev_mode() -> Option<bool> {
    let val = std::env::var(POTLUCK_DEV_ENV).ok()?;
    let lower = val.to_lowercase();
    if POTLUCK_DEV_VALID_TRUE.contains(&lower.as_str()) {
        Some(true)
    } else if POTLUCK_DEV_VALID_FALSE.contains(&lower.as_str()) {
        Some(false)
    } else {
        tracing::warn!(
            "Unrecognized value for {POTLUCK_DEV_ENV}: '{val}'. Expected one of true: {}, false: {}. Treating as unset.",
            POTLUCK_DEV_VALID_TRUE.join(", "),
            POTLUCK_DEV_VALID_FALSE.join(", "),
        );
        None
    }
}
