//! Common types shared between the configuration record and the argument builder
//!
//! ## Configuration Hierarchy
//!
//! ```text
//! [jpackage]          - PackagingConfig: generic jpackage options
//! [jpackage.windows]  - WindowsOptions: emitted only on Windows hosts
//! [jpackage.macos]    - MacOptions: emitted only on macOS hosts
//! [jpackage.linux]    - LinuxOptions: emitted only on Linux hosts
//! [toolchain]         - ToolchainConfig: optional toolchain home
//! ```

use serde::{Deserialize, Serialize};

/// Name of the packaging executable inside `<home>/bin`
pub const EXECUTABLE: &str = "jpackage";

// ============================================================================
// Image Type
// ============================================================================

/// Packaging output format passed to `--type`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ImageType {
    /// Let jpackage pick the platform default (never emitted)
    #[default]
    Default,
    /// Self-contained application image
    AppImage,
    /// Windows executable installer
    Exe,
    /// Windows MSI installer
    Msi,
    /// macOS disk image
    Dmg,
    /// macOS installer package
    Pkg,
    /// Debian package
    Deb,
    /// RPM package
    Rpm,
}

impl ImageType {
    /// Value understood by `jpackage --type`
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageType::Default => "",
            ImageType::AppImage => "app-image",
            ImageType::Exe => "exe",
            ImageType::Msi => "msi",
            ImageType::Dmg => "dmg",
            ImageType::Pkg => "pkg",
            ImageType::Deb => "deb",
            ImageType::Rpm => "rpm",
        }
    }

    /// Check if an explicit type was requested
    pub fn is_specified(&self) -> bool {
        !matches!(self, ImageType::Default)
    }
}

// ============================================================================
// Host OS
// ============================================================================

/// Operating system the task executes on
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum HostOs {
    /// Windows
    Windows,
    /// macOS
    #[serde(rename = "macos")]
    MacOS,
    /// Linux
    Linux,
    /// Any other host; no platform-specific flags apply
    Other,
}

impl HostOs {
    /// Detect the host this crate was compiled for
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            HostOs::Windows
        } else if cfg!(target_os = "macos") {
            HostOs::MacOS
        } else if cfg!(target_os = "linux") {
            HostOs::Linux
        } else {
            HostOs::Other
        }
    }

    /// Get executable extension for this host
    pub fn exe_extension(&self) -> &'static str {
        match self {
            HostOs::Windows => ".exe",
            _ => "",
        }
    }

    /// Executable file name for this host (`jpackage` or `jpackage.exe`)
    pub fn executable_name(&self) -> String {
        format!("{}{}", EXECUTABLE, self.exe_extension())
    }
}

// ============================================================================
// Platform Options
// ============================================================================

/// Windows-specific jpackage options
///
/// Located at `[jpackage.windows]` in TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct WindowsOptions {
    /// Add the application to the Start menu (`--win-menu`)
    pub menu: bool,
    /// Let the user choose the install directory (`--win-dir-chooser`)
    pub dir_chooser: bool,
    /// Upgrade UUID (`--win-upgrade-uuid`)
    pub upgrade_uuid: String,
    /// Start menu group (`--win-menu-group`)
    pub menu_group: String,
    /// Create a desktop shortcut (`--win-shortcut`)
    pub shortcut: bool,
    /// Install per user instead of system-wide (`--win-per-user-install`)
    pub per_user_install: bool,
}

/// macOS-specific jpackage options
///
/// Located at `[jpackage.macos]` in TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct MacOptions {
    /// Bundle identifier (`--mac-package-identifier`)
    pub package_identifier: String,
    /// Name shown in the menu bar (`--mac-package-name`)
    pub package_name: String,
    /// Prefix for signed bundle components (`--mac-package-signing-prefix`)
    pub package_signing_prefix: String,
    /// Sign the bundle (`--mac-sign`)
    pub sign: bool,
    /// Keychain holding the signing identity (`--mac-signing-keychain`)
    pub signing_keychain: String,
    /// Signing identity user name (`--mac-signing-key-user-name`)
    pub signing_key_user_name: String,
}

/// Linux-specific jpackage options
///
/// Located at `[jpackage.linux]` in TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LinuxOptions {
    /// Package name (`--linux-package-name`)
    pub package_name: String,
    /// Debian maintainer (`--linux-deb-maintainer`)
    pub deb_maintainer: String,
    /// Menu group (`--linux-menu-group`)
    pub menu_group: String,
    /// RPM license type (`--linux-rpm-license-type`)
    pub rpm_license_type: String,
    /// Release value for the spec/control file (`--linux-app-release`)
    pub app_release: String,
    /// Application category (`--linux-app-category`)
    pub app_category: String,
    /// Create a desktop shortcut (`--linux-shortcut`)
    pub shortcut: bool,
}

/// The single platform group that applies to a given host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformOptions<'a> {
    /// Windows group
    Windows(&'a WindowsOptions),
    /// macOS group
    MacOS(&'a MacOptions),
    /// Linux group
    Linux(&'a LinuxOptions),
}

impl PlatformOptions<'_> {
    /// Host this group belongs to
    pub fn host(&self) -> HostOs {
        match self {
            PlatformOptions::Windows(_) => HostOs::Windows,
            PlatformOptions::MacOS(_) => HostOs::MacOS,
            PlatformOptions::Linux(_) => HostOs::Linux,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
