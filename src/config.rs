use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Target file paths for a release, relative to the working tree root.
///
/// Defaults cover the conventional layout (Cargo.toml, Cargo.lock, PKGBUILD,
/// CHANGELOG.md); a `relcut.toml` in the current directory may override any
/// of them.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_manifest")]
    pub manifest: String,

    #[serde(default = "default_lockfile")]
    pub lockfile: String,

    #[serde(default = "default_pkgbuild")]
    pub pkgbuild: String,

    #[serde(default = "default_changelog")]
    pub changelog: String,
}

fn default_manifest() -> String {
    "Cargo.toml".to_string()
}

fn default_lockfile() -> String {
    "Cargo.lock".to_string()
}

fn default_pkgbuild() -> String {
    "PKGBUILD".to_string()
}

fn default_changelog() -> String {
    "CHANGELOG.md".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            manifest: default_manifest(),
            lockfile: default_lockfile(),
            pkgbuild: default_pkgbuild(),
            changelog: default_changelog(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `relcut.toml` in current directory
/// 3. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config, Box<dyn std::error::Error>> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./relcut.toml").exists() {
        fs::read_to_string("./relcut.toml")?
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)?;
    Ok(config)
}
