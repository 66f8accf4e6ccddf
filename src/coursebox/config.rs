use crate::error::{BoxError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_EXPORT_DIR: &str = "exports";
const DEFAULT_WRAP_WIDTH: usize = 100;

/// Settings stored as `config.json` in the data directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CourseboxConfig {
    /// Where `export` writes, relative to the data directory.
    #[serde(default = "default_export_dir")]
    pub export_dir: String,

    /// Column at which the CLI wraps output lines.
    #[serde(default = "default_wrap_width")]
    pub wrap_width: usize,

    /// Sort a collection by its natural order after every `add`.
    #[serde(default)]
    pub sort_on_add: bool,
}

fn default_export_dir() -> String {
    DEFAULT_EXPORT_DIR.to_string()
}

fn default_wrap_width() -> usize {
    DEFAULT_WRAP_WIDTH
}

impl Default for CourseboxConfig {
    fn default() -> Self {
        Self {
            export_dir: default_export_dir(),
            wrap_width: DEFAULT_WRAP_WIDTH,
            sort_on_add: false,
        }
    }
}

impl CourseboxConfig {
    pub const KEYS: [&'static str; 3] = ["export_dir", "wrap_width", "sort_on_add"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        fs::create_dir_all(config_dir)?;
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "export_dir" => Ok(self.export_dir.clone()),
            "wrap_width" => Ok(self.wrap_width.to_string()),
            "sort_on_add" => Ok(self.sort_on_add.to_string()),
            _ => Err(unknown_key(key)),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let value = value.trim();
        match key {
            "export_dir" => {
                if value.is_empty() {
                    return Err(BoxError::Validation(
                        "export_dir cannot be empty.".to_string(),
                    ));
                }
                self.export_dir = value.to_string();
            }
            "wrap_width" => {
                self.wrap_width = value
                    .parse()
                    .ok()
                    .filter(|w| *w >= 20)
                    .ok_or_else(|| {
                        BoxError::Validation("wrap_width must be a number of at least 20.".to_string())
                    })?;
            }
            "sort_on_add" => {
                self.sort_on_add = value.parse().map_err(|_| {
                    BoxError::Validation("sort_on_add must be true or false.".to_string())
                })?;
            }
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }
}

fn unknown_key(key: &str) -> BoxError {
    BoxError::NotFound(format!(
        "Unknown config key '{}'. Keys: {}",
        key,
        CourseboxConfig::KEYS.join(", ")
    ))
}
