use crate::manifest::{SchemaSelection, APP_PACKAGE_URI_BASE, MANIFEST_FILE_NAME};
use miette::{IntoDiagnostic, Result, WrapErr};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Configuration for reading manifest visual elements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Schema generation(s) to accept: auto, uap, win81
    pub schema: SchemaSelection,

    /// Manifest file name relative to the install directory
    pub manifest_file: String,

    /// Prefix for the logo URIs
    pub uri_base: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            schema: SchemaSelection::default(),
            manifest_file: MANIFEST_FILE_NAME.to_string(),
            uri_base: APP_PACKAGE_URI_BASE.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a file (YAML or TOML)
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to read config file: {}", path.display()))?;

        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");

        match extension {
            "yml" | "yaml" => serde_yaml::from_str(&contents)
                .into_diagnostic()
                .wrap_err("Failed to parse YAML config"),
            "toml" => toml::from_str(&contents)
                .into_diagnostic()
                .wrap_err("Failed to parse TOML config"),
            _ => {
                // Try YAML first, then TOML
                if let Ok(config) = serde_yaml::from_str(&contents) {
                    Ok(config)
                } else {
                    toml::from_str(&contents)
                        .into_diagnostic()
                        .wrap_err("Failed to parse config file")
                }
            }
        }
    }

    /// Try to load configuration from default locations in the install directory
    pub fn from_default_locations(install_dir: &Path) -> Result<Self> {
        let default_names = [
            ".appx-visuals.yml",
            ".appx-visuals.yaml",
            ".appx-visuals.toml",
            "appx-visuals.yml",
            "appx-visuals.yaml",
            "appx-visuals.toml",
        ];

        for name in &default_names {
            let path = install_dir.join(name);
            if path.exists() {
                debug!("Using config {}", path.display());
                return Self::from_file(&path);
            }
        }

        // No config file found, use defaults
        Ok(Self::default())
    }
}
