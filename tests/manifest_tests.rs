//! Tests for jpackage-task manifest module

use jpackage_task::{ImageType, JPackageError, Manifest, PackagingConfig, WindowsOptions};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_parse_minimal_manifest() {
    let toml = r#"
[jpackage]
app_name = "Demo"
app_version = "1.0"
"#;

    let manifest = Manifest::parse(toml).unwrap();
    assert_eq!(manifest.jpackage.app_name, "Demo");
    assert_eq!(manifest.jpackage.app_version, "1.0");
    assert_eq!(manifest.jpackage.image_type, ImageType::Default);
    assert!(manifest.toolchain.home.is_none());
}

#[test]
fn test_parse_full_manifest() {
    let toml = r#"
[jpackage]
app_name = "Demo"
type = "app-image"
verbose = true
java_options = ["-Xmx2g", "-Dfoo=bar baz"]
arguments = ["--mode", "gui"]

[jpackage.windows]
menu = true
menu_group = "Tools"

[jpackage.macos]
package_identifier = "org.example.demo"
sign = true

[jpackage.linux]
deb_maintainer = "dev@example.org"
shortcut = true

[toolchain]
home = "/opt/jdk-21"
"#;

    let manifest = Manifest::parse(toml).unwrap();
    let config = &manifest.jpackage;
    assert_eq!(config.image_type, ImageType::AppImage);
    assert!(config.verbose);
    assert_eq!(config.java_options.len(), 2);
    assert_eq!(config.arguments, vec!["--mode", "gui"]);
    assert!(config.windows.menu);
    assert_eq!(config.windows.menu_group, "Tools");
    assert!(!config.windows.shortcut);
    assert_eq!(config.macos.package_identifier, "org.example.demo");
    assert!(config.macos.sign);
    assert_eq!(config.linux.deb_maintainer, "dev@example.org");
    assert!(config.linux.shortcut);
    assert_eq!(manifest.toolchain.home, Some(PathBuf::from("/opt/jdk-21")));
}

#[test]
fn test_parse_invalid_manifest() {
    let err = Manifest::parse("[jpackage\napp_name = ").unwrap_err();
    assert!(matches!(err, JPackageError::TomlParse(_)));
}

#[test]
fn test_parse_unknown_type() {
    let err = Manifest::parse("[jpackage]\ntype = \"zip\"\n").unwrap_err();
    assert!(matches!(err, JPackageError::TomlParse(_)));
}

#[test]
fn test_from_file_toml_and_json() {
    let dir = TempDir::new().unwrap();

    let toml_path = dir.path().join("jpackage.toml");
    fs::write(&toml_path, "[jpackage]\napp_name = \"FromToml\"\n").unwrap();
    let manifest = Manifest::from_file(&toml_path).unwrap();
    assert_eq!(manifest.jpackage.app_name, "FromToml");

    let json_path = dir.path().join("jpackage.json");
    fs::write(
        &json_path,
        r#"{"jpackage": {"app_name": "FromJson", "type": "msi"}}"#,
    )
    .unwrap();
    let manifest = Manifest::from_file(&json_path).unwrap();
    assert_eq!(manifest.jpackage.app_name, "FromJson");
    assert_eq!(manifest.jpackage.image_type, ImageType::Msi);
}

#[test]
fn test_from_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = Manifest::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, JPackageError::Config(_)));
}

#[test]
fn test_find_in_dir() {
    let dir = TempDir::new().unwrap();
    assert!(Manifest::find_in_dir(dir.path()).is_none());

    fs::write(dir.path().join("jpackage.json"), "{}").unwrap();
    assert_eq!(
        Manifest::find_in_dir(dir.path()),
        Some(dir.path().join("jpackage.json"))
    );

    fs::create_dir_all(dir.path().join(".jpackage")).unwrap();
    fs::write(dir.path().join(".jpackage/config.toml"), "").unwrap();
    assert_eq!(
        Manifest::find_in_dir(dir.path()),
        Some(dir.path().join(".jpackage/config.toml"))
    );

    fs::write(dir.path().join("jpackage.toml"), "").unwrap();
    assert_eq!(
        Manifest::find_in_dir(dir.path()),
        Some(dir.path().join("jpackage.toml"))
    );
}

#[test]
fn test_toml_round_trip() {
    let manifest = Manifest {
        jpackage: PackagingConfig::new("Demo")
            .with_type(ImageType::Exe)
            .with_java_option("-Xmx2g")
            .with_windows(WindowsOptions {
                per_user_install: true,
                ..Default::default()
            }),
        ..Default::default()
    };

    let text = manifest.to_toml().unwrap();
    assert!(text.contains("type = \"exe\""));
    assert_eq!(Manifest::parse(&text).unwrap(), manifest);
}
