//! CLI configuration read from the environment.
use std::env;
use std::path::PathBuf;

/// How the aggregation result is printed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::EnumString, strum::Display)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Clone, Debug)]
pub struct CliConfig {
    pub data_dir: PathBuf,
    /// Overrides `<data_dir>/loot.toml`.
    pub config_path: Option<PathBuf>,
    /// Overrides `<data_dir>/items.json`.
    pub item_catalog: Option<PathBuf>,
    /// Overrides the platform cache directory.
    pub log_dir: Option<PathBuf>,
    pub output: OutputFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            config_path: None,
            item_catalog: None,
            log_dir: None,
            output: OutputFormat::default(),
        }
    }
}

impl CliConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `LOOT_DATA_DIR` - Data directory (default: current directory)
    /// - `LOOT_CONFIG` - Path to the toggles TOML file
    /// - `LOOT_ITEM_CATALOG` - Path to the item catalog JSON file
    /// - `LOOT_LOG_DIR` - Directory for the log file
    /// - `LOOT_OUTPUT` - `text` or `json` (default: text)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(dir) = read_env::<PathBuf>("LOOT_DATA_DIR") {
            config.data_dir = dir;
        }
        config.config_path = read_env("LOOT_CONFIG");
        config.item_catalog = read_env("LOOT_ITEM_CATALOG");
        config.log_dir = read_env("LOOT_LOG_DIR");
        if let Some(output) = read_env::<OutputFormat>("LOOT_OUTPUT") {
            config.output = output;
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
