//! Manifest file parsing
//!
//! A manifest carries the packaging options plus an optional toolchain home:
//!
//! ```toml
//! [jpackage]
//! app_name = "Demo"
//! app_version = "1.0"
//! type = "app-image"
//! java_options = ["-Xmx2g"]
//!
//! [jpackage.windows]
//! menu = true
//!
//! [toolchain]
//! home = "/opt/jdk-21"
//! ```

use crate::config::PackagingConfig;
use crate::error::{JPackageError, JPackageResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Toolchain selection
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ToolchainConfig {
    /// Installation root containing `bin/jpackage`
    #[serde(default)]
    pub home: Option<PathBuf>,
}

/// Parsed manifest
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Manifest {
    /// Packaging options
    #[serde(default)]
    pub jpackage: PackagingConfig,

    /// Toolchain selection
    #[serde(default)]
    pub toolchain: ToolchainConfig,
}

impl Manifest {
    /// Load manifest from file, JSON for `.json` and TOML otherwise
    pub fn from_file(path: impl AsRef<Path>) -> JPackageResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            JPackageError::Config(format!(
                "Failed to read manifest file {}: {}",
                path.display(),
                e
            ))
        })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::parse_json(&content)
        } else {
            Self::parse(&content)
        }
    }

    /// Parse manifest from TOML string
    pub fn parse(content: &str) -> JPackageResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Parse manifest from JSON string
    pub fn parse_json(content: &str) -> JPackageResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Find manifest file in directory
    pub fn find_in_dir(dir: impl AsRef<Path>) -> Option<PathBuf> {
        let dir = dir.as_ref();
        let candidates = ["jpackage.toml", ".jpackage/config.toml", "jpackage.json"];

        for name in candidates {
            let path = dir.join(name);
            if path.exists() {
                return Some(path);
            }
        }
        None
    }

    /// Serialize to a TOML string
    pub fn to_toml(&self) -> JPackageResult<String> {
        toml::to_string_pretty(self)
            .map_err(|e| JPackageError::Config(format!("Failed to serialize manifest: {}", e)))
    }
}
