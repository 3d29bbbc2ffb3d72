use std::path::Path;

use serde::Deserialize;

/// Configuration for writing IDS documents.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "Versions")]
pub struct Config {
    /// Number of spaces per level of nesting in the written XML.
    pub indent: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            indent: default_indent(),
        }
    }
}

impl Config {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file: {e}"))?;
        let config =
            toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {e}"))?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }
}

const fn default_indent() -> usize {
    2
}

/// The serialized versions of the configuration.
#[derive(Debug, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default = "default_indent")]
        indent: usize,
    },
}

impl From<Versions> for Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 { indent } => Self { indent },
        }
    }
}
