pub mod settings;

pub use settings::{Config, DebugLogRotation, ModelSettings, ServerSettings};

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable holding the Gemini API key
pub const API_KEY_ENV: &str = "API_KEY";

/// Get the default configuration file path
pub fn config_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .context("Failed to get config directory")?
        .join("start341");

    Ok(config_dir.join("config.toml"))
}

/// Load configuration from `path`, or write the defaults there if it does not exist
pub fn load_or_create_config(path: &Path) -> Result<Config> {
    if path.exists() {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    } else {
        let config = Config::default();
        save_config(path, &config)?;

        println!("Created default config at: {}", path.display());

        Ok(config)
    }
}

/// Save configuration to `path`, creating parent directories as needed
pub fn save_config(path: &Path, config: &Config) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("Failed to create config directory")?;
    }
    let content = toml::to_string_pretty(config).context("Failed to serialize config")?;
    fs::write(path, content).context("Failed to write config file")?;
    Ok(())
}

/// Resolve the service credential from the process environment.
///
/// There is no degraded mode: a missing key must stop startup.
pub fn api_key_from_env() -> Result<String> {
    resolve_api_key(std::env::var(API_KEY_ENV).ok())
}

/// Validate a raw credential value
pub fn resolve_api_key(raw: Option<String>) -> Result<String> {
    match raw {
        Some(key) if !key.trim().is_empty() => Ok(key.trim().to_string()),
        _ => bail!(
            "API key not found. Please set the {} environment variable.",
            API_KEY_ENV
        ),
    }
}
