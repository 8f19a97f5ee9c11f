//! Translation of a `PackagingConfig` into a jpackage command line
//!
//! The builder is pure: given the same executable, config and host it always
//! produces the same tokens in the same order. Generic flags come first, the
//! host's platform group last.

use crate::common::{HostOs, LinuxOptions, MacOptions, PlatformOptions, WindowsOptions};
use crate::config::PackagingConfig;
use std::fmt;
use std::path::Path;

/// Wrap a value in double quotes if it contains a space
pub fn escape(value: &str) -> String {
    if value.contains(' ') {
        format!("\"{}\"", value)
    } else {
        value.to_string()
    }
}

/// Ordered command line; token 0 is the executable
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentList {
    tokens: Vec<String>,
}

impl ArgumentList {
    /// Start a list with the executable as token 0
    pub fn new(executable: impl AsRef<Path>) -> Self {
        let executable = executable.as_ref().to_string_lossy();
        Self {
            tokens: vec![escape(&executable)],
        }
    }

    /// Append `flag value` when `value` is non-empty
    pub fn push_value(&mut self, flag: &str, value: &str) -> &mut Self {
        if !value.is_empty() {
            self.tokens.push(flag.to_string());
            self.tokens.push(value.to_string());
        }
        self
    }

    /// Append a bare `flag` when `enabled`
    pub fn push_flag(&mut self, flag: &str, enabled: bool) -> &mut Self {
        if enabled {
            self.tokens.push(flag.to_string());
        }
        self
    }

    /// Append `flag <escaped entry>` for every non-empty entry
    pub fn push_each(&mut self, flag: &str, values: &[String]) -> &mut Self {
        for value in values {
            self.push_value(flag, &escape(value));
        }
        self
    }

    /// All tokens, executable included
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Program to spawn: token 0 without the display quotes
    pub fn program(&self) -> Option<&str> {
        self.tokens.first().map(|token| {
            token
                .strip_prefix('"')
                .and_then(|t| t.strip_suffix('"'))
                .unwrap_or(token)
        })
    }

    /// Tokens after the executable
    pub fn args(&self) -> &[String] {
        self.tokens.get(1..).unwrap_or_default()
    }

    /// Number of tokens
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if the list has no tokens at all
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterate over the tokens
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.tokens.iter()
    }

    /// Consume into the token vector
    pub fn into_vec(self) -> Vec<String> {
        self.tokens
    }
}

impl From<Vec<String>> for ArgumentList {
    fn from(tokens: Vec<String>) -> Self {
        Self { tokens }
    }
}

impl<'a> IntoIterator for &'a ArgumentList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl fmt::Display for ArgumentList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tokens.join(" "))
    }
}

/// Build the full jpackage command line for `host`
pub fn build_arguments(
    executable: impl AsRef<Path>,
    config: &PackagingConfig,
    host: HostOs,
) -> ArgumentList {
    let mut args = ArgumentList::new(executable);

    if config.image_type.is_specified() {
        args.push_value("--type", config.image_type.as_str());
    }

    args.push_flag("--verbose", config.verbose)
        .push_value("--name", &config.app_name)
        .push_value("--app-version", &config.app_version)
        .push_value("--dest", &config.destination)
        .push_value("--copyright", &config.copyright)
        .push_value("--description", &config.app_description)
        .push_value("--runtime-image", &config.runtime_image)
        .push_value("--input", &config.input)
        .push_value("--install-dir", &config.install_dir)
        .push_value("--vendor", &config.vendor)
        .push_value("--module", &config.module)
        .push_value("--main-class", &config.main_class)
        .push_value("--main-jar", &config.main_jar)
        .push_value("--module-path", &config.module_path)
        .push_value("--icon", &config.icon)
        .push_each("--java-options", &config.java_options)
        .push_each("--arguments", &config.arguments);

    match config.platform_options(host) {
        Some(PlatformOptions::MacOS(mac)) => push_mac(&mut args, mac),
        Some(PlatformOptions::Windows(win)) => push_windows(&mut args, win),
        Some(PlatformOptions::Linux(linux)) => push_linux(&mut args, linux),
        None => {}
    }

    args
}

fn push_mac(args: &mut ArgumentList, mac: &MacOptions) {
    args.push_value("--mac-package-identifier", &mac.package_identifier)
        .push_value("--mac-package-name", &mac.package_name)
        .push_value("--mac-package-signing-prefix", &mac.package_signing_prefix)
        .push_flag("--mac-sign", mac.sign)
        .push_value("--mac-signing-keychain", &mac.signing_keychain)
        .push_value("--mac-signing-key-user-name", &mac.signing_key_user_name);
}

fn push_windows(args: &mut ArgumentList, win: &WindowsOptions) {
    args.push_flag("--win-menu", win.menu)
        .push_flag("--win-dir-chooser", win.dir_chooser)
        .push_value("--win-upgrade-uuid", &win.upgrade_uuid)
        .push_value("--win-menu-group", &win.menu_group)
        .push_flag("--win-shortcut", win.shortcut)
        .push_flag("--win-per-user-install", win.per_user_install);
}

fn push_linux(args: &mut ArgumentList, linux: &LinuxOptions) {
    args.push_value("--linux-package-name", &linux.package_name)
        .push_value("--linux-deb-maintainer", &linux.deb_maintainer)
        .push_value("--linux-menu-group", &linux.menu_group)
        .push_value("--linux-rpm-license-type", &linux.rpm_license_type)
        .push_value("--linux-app-release", &linux.app_release)
        .push_value("--linux-app-category", &linux.app_category)
        .push_flag("--linux-shortcut", linux.shortcut);
}
