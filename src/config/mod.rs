mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::Path;

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    validate_config(&config)?;

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    // Try default locations
    let default_paths = [
        "./aniforge.toml",
        "./config.toml",
        "~/.config/aniforge/config.toml",
        "/etc/aniforge/config.toml",
    ];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            return load_config(path);
        }
    }

    Ok(Config::default())
}

/// Validate configuration
fn validate_config(config: &Config) -> Result<()> {
    if config.discovery.poll_frequency_secs == 0 {
        anyhow::bail!("Poll frequency cannot be 0");
    }

    if config.discovery.tag_namespace.is_empty() {
        anyhow::bail!("Tag namespace cannot be empty");
    }

    if config.animelist.username.is_empty() {
        tracing::warn!("No watch-list username configured; discovery will find nothing");
    }

    if config.downloads.url.is_empty() {
        anyhow::bail!("Download client URL cannot be empty");
    }

    Ok(())
}
