//! Showcase configuration.
//!
//! Every field has a default, so an empty TOML document (or no file at all)
//! reproduces the built-in fruit basket.

use crate::error::{Result, ShowcaseError};
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const DEFAULT_FRUITS: [&str; 8] = [
    "Apple", "Banana", "Kiwi", "Mango", "Orange", "Papaya", "Kiwi", "Apple",
];

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WalkConfig {
    pub anonymous_steps: i32,
    pub lambda_steps: i32,
    pub enabled: bool,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            anonymous_steps: 5,
            lambda_steps: 10,
            enabled: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShowcaseConfig {
    pub fruits: Vec<String>,
    pub basket: Vec<Vec<String>>,
    pub length_threshold: usize,
    pub take: usize,
    pub skip: usize,
    pub walk: WalkConfig,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            fruits: DEFAULT_FRUITS.iter().map(|f| f.to_string()).collect(),
            basket: vec![
                vec!["Apple".to_string(), "Banana".to_string()],
                vec!["Kiwi".to_string(), "Mango".to_string()],
            ],
            length_threshold: 5,
            take: 3,
            skip: 2,
            walk: WalkConfig::default(),
        }
    }
}

impl ShowcaseConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| ShowcaseError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(index) = self.fruits.iter().position(|f| f.trim().is_empty()) {
            return Err(ShowcaseError::invalid_config(
                format!("fruits[{index}]"),
                "fruit name must not be empty",
            ));
        }

        for (row, items) in self.basket.iter().enumerate() {
            if let Some(col) = items.iter().position(|f| f.trim().is_empty()) {
                return Err(ShowcaseError::invalid_config(
                    format!("basket[{row}][{col}]"),
                    "fruit name must not be empty",
                ));
            }
        }

        Ok(())
    }
}
