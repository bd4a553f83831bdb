/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Settings read from `.alphabet.toml` or `alphabet.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Initial value of `$Language`.
    #[serde(default = "default_language")]
    pub default_language: String,

    /// Read locale files from this directory instead of the embedded set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locales_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_language: default_language(),
            locales_dir: None,
        }
    }
}

pub const DEFAULT_LANGUAGE: &str = "English";

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Look for a config file in the working directory.
    pub fn load_from_project() -> Result<Option<Self>> {
        let config_paths = [Path::new(".alphabet.toml"), Path::new("alphabet.toml")];

        for path in &config_paths {
            if path.exists() {
                return Ok(Some(Self::load(path)?));
            }
        }

        Ok(None)
    }
}
