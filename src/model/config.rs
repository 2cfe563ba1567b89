use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Configuration from `config.toml`. The file is optional and every key has a
/// default, so a missing or empty file means stock behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Where the JSON task store lives. Default: `$XDG_DATA_HOME/taskhub/tasks.json`.
    #[serde(default)]
    pub data_file: Option<PathBuf>,
    /// List used by commands that don't name one.
    #[serde(default = "super::task::default_list_name")]
    pub default_list: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            data_file: None,
            default_list: super::task::default_list_name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_is_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert!(config.data_file.is_none());
        assert_eq!(config.default_list, "Inbox");
    }

    #[test]
    fn config_overrides_defaults() {
        let config: AppConfig = toml::from_str(
            "data_file = \"/tmp/tasks.json\"\ndefault_list = \"Work\"\n",
        )
        .unwrap();
        assert_eq!(config.data_file, Some(PathBuf::from("/tmp/tasks.json")));
        assert_eq!(config.default_list, "Work");
    }
}
