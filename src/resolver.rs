//! Location of the jpackage executable
//!
//! The toolchain home is preferred and verified on disk. The runtime home is a
//! fallback and is returned unverified: a missing binary there surfaces as a
//! spawn failure when the runner starts it.

use crate::common::HostOs;
use crate::error::{JPackageError, JPackageResult};
use std::fmt;
use std::path::{Path, PathBuf};

/// Environment variable consulted by the default runtime-home provider
pub const JAVA_HOME_ENV: &str = "JAVA_HOME";

/// Source of the runtime home used as fallback
pub type RuntimeHomeProvider = Box<dyn Fn() -> Option<PathBuf> + Send + Sync>;

/// Read the runtime home from `JAVA_HOME`, ignoring empty values
pub fn java_home_from_env() -> Option<PathBuf> {
    std::env::var_os(JAVA_HOME_ENV)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Build `<home>/bin/jpackage[.exe]`
pub fn executable_path(home: impl AsRef<Path>, host: HostOs) -> PathBuf {
    home.as_ref().join("bin").join(host.executable_name())
}

/// Resolves the jpackage executable from a toolchain or runtime home
pub struct Resolver {
    toolchain_home: Option<PathBuf>,
    runtime_home: RuntimeHomeProvider,
    host: HostOs,
}

impl Resolver {
    /// Create a resolver that falls back to `JAVA_HOME`
    pub fn new() -> Self {
        Self {
            toolchain_home: None,
            runtime_home: Box::new(java_home_from_env),
            host: HostOs::current(),
        }
    }

    /// Set the toolchain home supplied by the host build system
    pub fn with_toolchain_home(mut self, home: impl Into<PathBuf>) -> Self {
        self.toolchain_home = Some(home.into());
        self
    }

    /// Set the toolchain home if one is available
    pub fn with_toolchain_home_opt(mut self, home: Option<PathBuf>) -> Self {
        self.toolchain_home = home;
        self
    }

    /// Replace the runtime-home provider
    pub fn with_runtime_home<F>(mut self, provider: F) -> Self
    where
        F: Fn() -> Option<PathBuf> + Send + Sync + 'static,
    {
        self.runtime_home = Box::new(provider);
        self
    }

    /// Override the host used to pick the executable suffix
    pub fn with_host(mut self, host: HostOs) -> Self {
        self.host = host;
        self
    }

    /// Host used for the executable suffix
    pub fn host(&self) -> HostOs {
        self.host
    }

    /// Resolve the executable path
    pub fn resolve(&self) -> JPackageResult<PathBuf> {
        if let Some(executable) = self.from_toolchain() {
            return Ok(executable);
        }
        self.from_runtime_home()
    }

    fn from_toolchain(&self) -> Option<PathBuf> {
        tracing::info!("Looking for {} in toolchain", self.host.executable_name());

        let Some(home) = self
            .toolchain_home
            .as_ref()
            .filter(|home| !home.as_os_str().is_empty())
        else {
            tracing::warn!("Toolchain is not configured");
            return None;
        };

        let executable = executable_path(home, self.host);
        if executable.exists() {
            Some(executable)
        } else {
            tracing::warn!("File {} does not exist", executable.display());
            None
        }
    }

    fn from_runtime_home(&self) -> JPackageResult<PathBuf> {
        tracing::info!("Getting {} from runtime home", self.host.executable_name());

        let home = (self.runtime_home)().ok_or_else(|| {
            JPackageError::Resolution("no Java installation available".to_string())
        })?;

        Ok(executable_path(home, self.host))
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Resolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolver")
            .field("toolchain_home", &self.toolchain_home)
            .field("host", &self.host)
            .finish_non_exhaustive()
    }
}
