use std::fs;
use std::path::{Path, PathBuf};

use crate::model::config::AppConfig;

/// Get the config file path, respecting XDG_CONFIG_HOME
pub fn config_path() -> PathBuf {
    let config_dir = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| dirs_home().join(".config"));
    config_dir.join("taskhub").join("config.toml")
}

/// Default task file location, respecting XDG_DATA_HOME
pub fn default_data_path() -> PathBuf {
    let data_dir = std::env::var("XDG_DATA_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| dirs_home().join(".local").join("share"));
    data_dir.join("taskhub").join("tasks.json")
}

/// Get the user's home directory
fn dirs_home() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/"))
}

/// Read the app config from a specific path.
/// A missing file means defaults; an unparseable file is reported on stderr
/// and also falls back to defaults rather than blocking the session.
pub fn read_config_from(path: &Path) -> AppConfig {
    if !path.exists() {
        return AppConfig::default();
    }

    match fs::read_to_string(path) {
        Ok(content) => match toml::from_str::<AppConfig>(&content) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("warning: could not parse {}: {}", path.display(), e);
                AppConfig::default()
            }
        },
        Err(_) => AppConfig::default(),
    }
}

/// Read the app config from the default location.
pub fn read_config() -> AppConfig {
    read_config_from(&config_path())
}

/// Resolve the task file path: command-line override, then config, then the
/// default data directory.
pub fn resolve_data_file(cli_override: Option<&str>, config: &AppConfig) -> PathBuf {
    if let Some(path) = cli_override {
        return PathBuf::from(path);
    }
    config
        .data_file
        .clone()
        .unwrap_or_else(default_data_path)
}
