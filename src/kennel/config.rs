use crate::error::{KennelError, Result};
use crate::query::{Field, SortSpec};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_SORT: &str = "price";

/// Configuration for kennel, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KennelConfig {
    /// Field search results are ordered by when no sort is given.
    /// Empty means keep catalog order.
    #[serde(default = "default_sort")]
    pub sort: String,

    /// Direction for the default sort
    #[serde(default = "default_ascending")]
    pub ascending: bool,
}

fn default_sort() -> String {
    DEFAULT_SORT.to_string()
}

fn default_ascending() -> bool {
    true
}

impl Default for KennelConfig {
    fn default() -> Self {
        Self {
            sort: default_sort(),
            ascending: default_ascending(),
        }
    }
}

impl KennelConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(KennelError::Io)?;
        let config: KennelConfig =
            serde_json::from_str(&content).map_err(KennelError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(KennelError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(KennelError::Serialization)?;
        fs::write(config_path, content).map_err(KennelError::Io)?;
        Ok(())
    }

    /// The sort applied when the caller does not pick one.
    pub fn default_sort_spec(&self) -> SortSpec {
        SortSpec::parse(Some(&self.sort), self.ascending)
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "sort" => Some(self.sort.clone()),
            "order" => Some(if self.ascending { "asc" } else { "desc" }.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "sort" => {
                if !value.is_empty() && Field::from_key(value).is_none() {
                    return Err(format!(
                        "Unknown sort field: {} (expected one of name, sex, breed, age, weight, price)",
                        value
                    ));
                }
                self.sort = value.to_lowercase();
                Ok(())
            }
            "order" => {
                self.ascending = match value.to_lowercase().as_str() {
                    "asc" | "ascending" => true,
                    "desc" | "descending" => false,
                    _ => return Err(format!("Invalid order: {} (expected asc or desc)", value)),
                };
                Ok(())
            }
            _ => Err(format!("Unknown config key: {}", key)),
        }
    }

    pub fn keys() -> &'static [&'static str] {
        &["sort", "order"]
    }
}
