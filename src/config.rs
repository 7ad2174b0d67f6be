use crate::alphabet::PAD_SYMBOL;
use crate::char_class::CharClass;
use crate::errors::UnknownClassError;
use serde::Deserialize;
use std::path::Path;

/// Settings for range splitting.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SplitSettings {
    /// Class name used as split marker
    pub split_on: Option<String>,
    /// Maximum number of split regions (0 = unlimited)
    pub max_splits: Option<u32>,
}

/// Settings for symbol indexing.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct IndexSettings {
    /// Value written for each consumed `=` pad
    pub pad_with: Option<u8>,
}

/// Settings for command output.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct OutputSettings {
    pub json: Option<bool>,
}

/// Layered configuration: built-in defaults, then user and local overrides.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub split: SplitSettings,
    pub index: IndexSettings,
    pub output: OutputSettings,
}

impl Settings {
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn load_default() -> Result<Self, Box<dyn std::error::Error>> {
        let content = include_str!("../defaults.toml");
        Ok(Self::from_toml(content)?)
    }

    /// Load configuration from custom file path
    pub fn load_from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_toml(&content)?)
    }

    /// Load configuration with user overrides from standard locations
    /// 1. Start with built-in settings
    /// 2. Override with ~/.config/vec64/config.toml if it exists
    /// 3. Override with ./vec64.toml if it exists in current directory
    pub fn load_with_overrides() -> Result<Self, Box<dyn std::error::Error>> {
        let mut config = Self::load_default()?;

        if let Some(config_dir) = dirs::config_dir() {
            let user_config_path = config_dir.join("vec64").join("config.toml");
            config.merge_optional(&user_config_path, "user");
        }

        config.merge_optional(Path::new("vec64.toml"), "local");

        Ok(config)
    }

    /// Merge a config file if it exists, warning (not failing) when it is broken.
    fn merge_optional(&mut self, path: &Path, origin: &str) {
        if !path.exists() {
            return;
        }

        match Self::load_from_file(path) {
            Ok(overrides) => {
                tracing::debug!(?path, origin, "loaded config overrides");
                self.merge(overrides);
            }
            Err(e) => {
                tracing::warn!("Failed to load {} config from {:?}: {}", origin, path, e);
            }
        }
    }

    /// Merge another config into this one; values set in `other` win.
    pub fn merge(&mut self, other: Settings) {
        if other.split.split_on.is_some() {
            self.split.split_on = other.split.split_on;
        }
        if other.split.max_splits.is_some() {
            self.split.max_splits = other.split.max_splits;
        }
        if other.index.pad_with.is_some() {
            self.index.pad_with = other.index.pad_with;
        }
        if other.output.json.is_some() {
            self.output.json = other.output.json;
        }
    }

    /// The configured split class, parsed.
    pub fn split_class(&self) -> Result<Option<CharClass>, UnknownClassError> {
        self.split
            .split_on
            .as_deref()
            .map(str::parse)
            .transpose()
    }

    pub fn max_splits(&self) -> u32 {
        self.split.max_splits.unwrap_or(0)
    }

    pub fn pad_with(&self) -> u8 {
        self.index.pad_with.unwrap_or(PAD_SYMBOL)
    }

    pub fn json(&self) -> bool {
        self.output.json.unwrap_or(false)
    }
}
