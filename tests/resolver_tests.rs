//! Tests for jpackage-task resolver module

use jpackage_task::{executable_path, HostOs, JPackageError, Resolver};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn install_jpackage(home: &Path, host: HostOs) -> PathBuf {
    let exe = executable_path(home, host);
    fs::create_dir_all(exe.parent().unwrap()).unwrap();
    fs::write(&exe, b"").unwrap();
    exe
}

#[test]
fn test_toolchain_home_with_executable() {
    let toolchain = TempDir::new().unwrap();
    let expected = install_jpackage(toolchain.path(), HostOs::Linux);

    let resolver = Resolver::new()
        .with_host(HostOs::Linux)
        .with_toolchain_home(toolchain.path())
        .with_runtime_home(|| Some(PathBuf::from("/runtime")));

    assert_eq!(resolver.resolve().unwrap(), expected);
}

#[test]
fn test_toolchain_uses_exe_suffix_on_windows() {
    let toolchain = TempDir::new().unwrap();
    let expected = install_jpackage(toolchain.path(), HostOs::Windows);

    let resolver = Resolver::new()
        .with_host(HostOs::Windows)
        .with_toolchain_home(toolchain.path())
        .with_runtime_home(|| None);

    let resolved = resolver.resolve().unwrap();
    assert_eq!(resolved, expected);
    assert!(resolved.to_string_lossy().ends_with("jpackage.exe"));
}

#[test]
fn test_missing_toolchain_executable_falls_back() {
    let toolchain = TempDir::new().unwrap();

    let resolver = Resolver::new()
        .with_host(HostOs::Linux)
        .with_toolchain_home(toolchain.path())
        .with_runtime_home(|| Some(PathBuf::from("/runtime")));

    assert_eq!(
        resolver.resolve().unwrap(),
        PathBuf::from("/runtime").join("bin").join("jpackage")
    );
}

#[test]
fn test_runtime_home_is_not_verified() {
    let runtime = TempDir::new().unwrap();
    let runtime_path = runtime.path().to_path_buf();

    let resolver = Resolver::new()
        .with_host(HostOs::MacOS)
        .with_runtime_home(move || Some(runtime_path.clone()));

    let resolved = resolver.resolve().unwrap();
    assert!(!resolved.exists());
    assert_eq!(resolved, runtime.path().join("bin").join("jpackage"));
}

#[test]
fn test_no_installation_available() {
    let toolchain = TempDir::new().unwrap();

    let resolver = Resolver::new()
        .with_toolchain_home(toolchain.path())
        .with_runtime_home(|| None);

    let err = resolver.resolve().unwrap_err();
    assert!(matches!(err, JPackageError::Resolution(_)));
    assert!(err.to_string().contains("no Java installation available"));
}

#[test]
fn test_empty_toolchain_home_falls_back() {
    let resolver = Resolver::new()
        .with_host(HostOs::Linux)
        .with_toolchain_home_opt(Some(PathBuf::new()))
        .with_runtime_home(|| Some(PathBuf::from("/jdk")));

    assert_eq!(
        resolver.resolve().unwrap(),
        PathBuf::from("/jdk").join("bin").join("jpackage")
    );
}

#[test]
fn test_toolchain_home_opt_none() {
    let resolver = Resolver::new()
        .with_host(HostOs::Linux)
        .with_toolchain_home_opt(None)
        .with_runtime_home(|| Some(PathBuf::from("/jre")));

    assert_eq!(
        resolver.resolve().unwrap(),
        PathBuf::from("/jre").join("bin").join("jpackage")
    );
}
