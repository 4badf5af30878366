//! Home directory resolution and `config.toml` loading.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::{AppConfig, AppError};

/// Overrides the home directory when set.
pub const HOME_ENV: &str = "PROMPT_ARCHITECT_HOME";
pub const HOME_DIR_NAME: &str = ".prompt-architect";
pub const CONFIG_FILE: &str = "config.toml";

/// Resolve the directory holding configuration, history and templates.
pub fn home_dir() -> Result<PathBuf, AppError> {
    if let Ok(home) = std::env::var(HOME_ENV)
        && !home.trim().is_empty()
    {
        return Ok(PathBuf::from(home));
    }

    dirs::home_dir()
        .map(|home| home.join(HOME_DIR_NAME))
        .ok_or_else(|| AppError::config_error("Could not determine the home directory"))
}

/// Load `config.toml` from `home`; a missing file yields the defaults.
pub fn load_config(home: &Path) -> Result<AppConfig, AppError> {
    let path = home.join(CONFIG_FILE);
    if !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok(AppConfig::default());
    }

    let content = fs::read_to_string(&path)?;
    parse_config_content(&content)
}

/// Parse and validate configuration text.
pub fn parse_config_content(content: &str) -> Result<AppConfig, AppError> {
    let config: AppConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
