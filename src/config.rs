//! Packaging configuration
//!
//! This module provides the flat configuration record that is translated into
//! jpackage arguments. Platform groups live in the `common` module.

use crate::common::{HostOs, ImageType, LinuxOptions, MacOptions, PlatformOptions, WindowsOptions};
use serde::{Deserialize, Serialize};

/// Options passed to jpackage
///
/// Every string field treats the empty string as "unset". All three platform
/// groups may be populated at once; only the group matching the host is used.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PackagingConfig {
    /// Print detailed jpackage output (`--verbose`)
    pub verbose: bool,

    /// Package type (`--type`)
    #[serde(rename = "type")]
    pub image_type: ImageType,

    /// Application name (`--name`)
    pub app_name: String,

    /// Application version (`--app-version`)
    pub app_version: String,

    /// Vendor (`--vendor`)
    pub vendor: String,

    /// Icon path (`--icon`)
    pub icon: String,

    /// Prebuilt runtime image (`--runtime-image`)
    pub runtime_image: String,

    /// Input directory with the files to package (`--input`)
    pub input: String,

    /// Installation directory (`--install-dir`)
    pub install_dir: String,

    /// Output directory (`--dest`)
    pub destination: String,

    /// Main module, optionally `module/class` (`--module`)
    pub module: String,

    /// Main class (`--main-class`)
    pub main_class: String,

    /// Main jar relative to the input directory (`--main-jar`)
    pub main_jar: String,

    /// Copyright (`--copyright`)
    pub copyright: String,

    /// Description (`--description`)
    pub app_description: String,

    /// Module path (`--module-path`)
    pub module_path: String,

    /// Options passed to the launched JVM, one `--java-options` each
    pub java_options: Vec<String>,

    /// Arguments passed to the main class, one `--arguments` each
    pub arguments: Vec<String>,

    /// Windows group
    pub windows: WindowsOptions,

    /// macOS group
    pub macos: MacOptions,

    /// Linux group
    pub linux: LinuxOptions,
}

impl PackagingConfig {
    /// Create a config for the named application
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            ..Default::default()
        }
    }

    /// Set the application version
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.app_version = version.into();
        self
    }

    /// Set the package type
    pub fn with_type(mut self, image_type: ImageType) -> Self {
        self.image_type = image_type;
        self
    }

    /// Set the output directory
    pub fn with_destination(mut self, destination: impl Into<String>) -> Self {
        self.destination = destination.into();
        self
    }

    /// Set the input directory and main jar
    pub fn with_main_jar(mut self, input: impl Into<String>, main_jar: impl Into<String>) -> Self {
        self.input = input.into();
        self.main_jar = main_jar.into();
        self
    }

    /// Enable verbose jpackage output
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Append a JVM option
    pub fn with_java_option(mut self, option: impl Into<String>) -> Self {
        self.java_options.push(option.into());
        self
    }

    /// Append an application argument
    pub fn with_argument(mut self, argument: impl Into<String>) -> Self {
        self.arguments.push(argument.into());
        self
    }

    /// Replace the Windows group
    pub fn with_windows(mut self, windows: WindowsOptions) -> Self {
        self.windows = windows;
        self
    }

    /// Replace the macOS group
    pub fn with_macos(mut self, macos: MacOptions) -> Self {
        self.macos = macos;
        self
    }

    /// Replace the Linux group
    pub fn with_linux(mut self, linux: LinuxOptions) -> Self {
        self.linux = linux;
        self
    }

    /// Select the platform group for `host`
    ///
    /// Returns `None` for hosts outside Windows, macOS and Linux.
    pub fn platform_options(&self, host: HostOs) -> Option<PlatformOptions<'_>> {
        match host {
            HostOs::Windows => Some(PlatformOptions::Windows(&self.windows)),
            HostOs::MacOS => Some(PlatformOptions::MacOS(&self.macos)),
            HostOs::Linux => Some(PlatformOptions::Linux(&self.linux)),
            HostOs::Other => None,
        }
    }
}
