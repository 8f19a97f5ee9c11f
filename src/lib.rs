//! jpackage-task - Declarative driver for the JDK `jpackage` tool
//!
//! This crate locates the `jpackage` executable shipped with a JDK, turns a
//! typed configuration record into its command line and runs it, relaying the
//! tool's output as it is produced.
//!
//! # Features
//!
//! - **Toolchain first**: `<toolchain>/bin/jpackage` is used when it exists,
//!   otherwise the runtime home (`JAVA_HOME` by default)
//! - **Host-aware flags**: Windows, macOS and Linux options can all be set;
//!   only the group for the running host reaches the command line
//! - **Live output**: stdout and stderr are drained concurrently and relayed
//!   line by line
//! - **Manifest Support**: options can be loaded from `jpackage.toml`
//!
//! # Quick Start
//!
//! ```no_run
//! use jpackage_task::{execute, PackagingConfig, WindowsOptions};
//!
//! let config = PackagingConfig::new("Demo")
//!     .with_version("1.0")
//!     .with_main_jar("build/libs", "demo.jar")
//!     .with_windows(WindowsOptions {
//!         menu: true,
//!         ..Default::default()
//!     });
//!
//! execute(&config)?;
//! # Ok::<(), jpackage_task::JPackageError>(())
//! ```
//!
//! ## Manifest File (jpackage.toml)
//!
//! ```toml
//! [jpackage]
//! app_name = "Demo"
//! app_version = "1.0"
//! type = "deb"
//!
//! [jpackage.linux]
//! shortcut = true
//!
//! [toolchain]
//! home = "/opt/jdk-21"
//! ```

mod args;
mod common;
mod config;
mod error;
mod manifest;
pub mod progress;
mod resolver;
mod runner;
mod task;

pub use args::{build_arguments, escape, ArgumentList};
pub use common::{
    HostOs, ImageType, LinuxOptions, MacOptions, PlatformOptions, WindowsOptions, EXECUTABLE,
};
pub use config::PackagingConfig;
pub use error::{JPackageError, JPackageResult};
pub use manifest::{Manifest, ToolchainConfig};
pub use progress::{spinner, ProgressExt, ProgressStyles, SpinnerSink};
pub use resolver::{
    executable_path, java_home_from_env, Resolver, RuntimeHomeProvider, JAVA_HOME_ENV,
};
pub use runner::{OutputSink, ProcessResult, ProcessRunner, Stream, StdoutSink, TracingSink};
pub use task::{execute, JPackageTask};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
