// nuke-launcher: Nuke / Hiero engine launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::software::{Product, SoftwareVersion, scan_template, split_template};
use super::version::NukeVersion;
use super::{LaunchMode, LaunchRequest, create_engine_launcher};
use crate::config::Config;
use crate::core::env::container::Env;
use crate::core::env::types::Platform;
use crate::error::LaunchError;
use std::fs;
use std::path::{Path, PathBuf};

fn touch(path: &Path) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, b"").unwrap();
}

fn linux_config(templates: &[String]) -> Config {
    let mut config = Config::default();
    config.engine.root = PathBuf::from("/repo");
    config.software.platform = Some(Platform::Linux);
    config.software.templates = templates.to_vec();
    config
}

#[test]
fn test_version_parse_and_display() {
    let v: NukeVersion = "10.0v5".parse().unwrap();
    assert_eq!((v.major(), v.minor(), v.patch()), (10, 0, 5));
    assert_eq!(v.major_minor(), "10.0");
    assert_eq!(v.to_string(), "10.0v5");
}

#[test]
fn test_version_parse_rejects_garbage() {
    for bad in ["", "10", "10.0", "10v5", "10.xv5", "v5", "10.0v", "-1.0v1"] {
        assert!(
            matches!(bad.parse::<NukeVersion>(), Err(LaunchError::InvalidVersion(_))),
            "{bad:?} should not parse"
        );
    }
}

#[test]
fn test_version_ordering() {
    let mut versions: Vec<NukeVersion> = ["11.1v1", "10.0v5", "10.5v2", "10.0v12"]
        .iter()
        .map(|v| v.parse().unwrap())
        .collect();
    versions.sort();
    let sorted: Vec<_> = versions.iter().map(ToString::to_string).collect();
    assert_eq!(sorted, ["10.0v5", "10.0v12", "10.5v2", "11.1v1"]);
}

#[test]
fn test_launch_mode_from_args() {
    assert_eq!(LaunchMode::from_args(&["arg1", "arg2"]), LaunchMode::Nuke);
    assert_eq!(LaunchMode::from_args(&["--hiero"]), LaunchMode::Hiero);
    assert_eq!(LaunchMode::from_args(&["-q", "--studio"]), LaunchMode::Hiero);
    assert_eq!(LaunchMode::from_args(&["--nukex"]), LaunchMode::Nuke);
    assert_eq!(LaunchMode::from_args::<&str>(&[]), LaunchMode::Nuke);
    assert_eq!(LaunchMode::Hiero.plugin_path_var(), "HIERO_PLUGIN_PATH");
}

#[test]
fn test_unknown_engine() {
    let config = Config::default();
    let err = create_engine_launcher(&config, "tk-maya", &["10.0v5"]).unwrap_err();
    assert!(matches!(err, LaunchError::UnknownEngine { .. }));
}

#[test]
fn test_invalid_requested_version() {
    let config = Config::default();
    let err = create_engine_launcher(&config, "tk-nuke", &["ten"]).unwrap_err();
    assert!(matches!(err, LaunchError::InvalidVersion(v) if v == "ten"));
}

#[test]
fn test_prepare_appends_file_to_open() {
    let config = linux_config(&[]);
    let launcher = create_engine_launcher(&config, "tk-nuke", &["10.0v5"])
        .unwrap()
        .with_environment(Env::new());

    let request = LaunchRequest::builder()
        .executable("/path/to/nuke")
        .args(vec!["--nukex".to_string()])
        .file_to_open("/shots/sh010/comp.nk")
        .build();
    let info = launcher.prepare(&request);

    assert_eq!(info.path, PathBuf::from("/path/to/nuke"));
    assert_eq!(info.args, ["--nukex", "/shots/sh010/comp.nk"]);
    assert_eq!(
        info.environment.get("NUKE_PATH").map(String::as_str),
        Some("/repo/plugins/basic")
    );
    assert_eq!(
        info.environment.get("SGTK_ENGINE").map(String::as_str),
        Some("tk-nuke")
    );
    assert!(!info.environment.contains_key("SGTK_CONTEXT"));
}

#[test]
fn test_prepare_exports_context() {
    let mut config = linux_config(&[]);
    config.engine.context = Some("shot:1234".to_string());
    let launcher = create_engine_launcher::<&str>(&config, "tk-nuke", &[])
        .unwrap()
        .with_environment(Env::new());

    let info = launcher.prepare_launch("/path/to/nuke", ["--studio"], None);

    assert_eq!(
        info.environment.get("SGTK_CONTEXT").map(String::as_str),
        Some("shot:1234")
    );
    assert!(!info.environment.contains_key("NUKE_PATH"));
}

#[test]
fn test_prepare_windows_separator() {
    let mut config = linux_config(&[]);
    config.software.platform = Some(Platform::Windows);
    let launcher = create_engine_launcher::<&str>(&config, "tk-nuke", &[])
        .unwrap()
        .with_environment([("NUKE_PATH", r"C:\gizmos")].into_iter().collect());

    let info = launcher.prepare_launch(r"C:\Nuke10.0v5\Nuke10.0.exe", Vec::<String>::new(), None);
    let expected = format!(r"C:\gizmos;{}", launcher.startup_path().display());

    assert_eq!(info.environment["NUKE_PATH"], expected);
}

#[test]
fn test_scan_template_linux_layout() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path();
    touch(&root.join("Nuke10.0v5/Nuke10.0"));
    touch(&root.join("Nuke11.3v1/Nuke11.3"));
    // Mismatched major/minor and a directory without the executable.
    touch(&root.join("Nuke12.0v1/Nuke11.0"));
    fs::create_dir_all(root.join("Nuke13.0v1")).unwrap();
    fs::create_dir_all(root.join("NukeStudio")).unwrap();

    let template = format!("{}/Nuke{{version}}/Nuke{{major_minor_version}}", root.display());
    let found = scan_template(&template, Platform::Linux).unwrap();

    let versions: Vec<_> = found.iter().map(|(_, v)| v.to_string()).collect();
    assert_eq!(versions, ["10.0v5", "11.3v1"]);
    assert_eq!(found[0].0, root.join("Nuke10.0v5").join("Nuke10.0"));
}

#[test]
fn test_scan_template_repeated_version_must_agree() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path();
    fs::create_dir_all(root.join("Nuke12.2v4/Nuke12.2v4.app")).unwrap();
    fs::create_dir_all(root.join("Nuke12.2v5/Nuke12.2v4.app")).unwrap();

    let template = format!("{}/Nuke{{version}}/Nuke{{version}}.app", root.display());
    let found = scan_template(&template, Platform::MacOs).unwrap();

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].1, NukeVersion::new(12, 2, 4));
}

#[test]
fn test_scan_template_missing_root() {
    let found = scan_template(
        "/definitely/not/here/Nuke{version}/Nuke{major_minor_version}",
        Platform::Linux,
    )
    .unwrap();
    assert!(found.is_empty());
}

#[test]
fn test_split_template_windows_drive_root() {
    let (root, components) = split_template(
        r"C:\Program Files\Nuke{version}\Nuke{major_minor_version}.exe",
        Platform::Windows,
    );
    assert_eq!(root, PathBuf::from(r"C:\"));
    assert_eq!(
        components,
        ["Program Files", "Nuke{version}", "Nuke{major_minor_version}.exe"]
    );
}

#[test]
fn test_split_template_windows_forward_slashes() {
    let (root, components) = split_template("d:/Apps/Nuke{version}/Nuke.exe", Platform::Windows);
    assert_eq!(root, PathBuf::from(r"d:\"));
    assert_eq!(components, ["Apps", "Nuke{version}", "Nuke.exe"]);
}

#[test]
fn test_split_template_unix_root() {
    let (root, components) = split_template(
        "/usr/local/Nuke{version}/Nuke{major_minor_version}",
        Platform::Linux,
    );
    assert_eq!(root, PathBuf::from(std::path::MAIN_SEPARATOR_STR));
    assert_eq!(
        components,
        ["usr", "local", "Nuke{version}", "Nuke{major_minor_version}"]
    );

    // A drive-like first component is only special on Windows.
    let (root, components) = split_template("C:/Nuke{version}", Platform::Linux);
    assert_eq!(root, PathBuf::new());
    assert_eq!(components, ["C:", "Nuke{version}"]);
}

#[test]
fn test_scan_template_requires_version_token() {
    let err = scan_template("/usr/local/Nuke{major_minor_version}", Platform::Linux).unwrap_err();
    assert!(matches!(err, LaunchError::InvalidTemplate { .. }));
}

#[test]
fn test_scan_software_filters_and_expands() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path();
    touch(&root.join("Nuke9.0v8/Nuke9.0"));
    touch(&root.join("Nuke10.0v5/Nuke10.0"));
    touch(&root.join("Nuke11.3v1/Nuke11.3"));

    let template = format!("{}/Nuke{{version}}/Nuke{{major_minor_version}}", root.display());
    let config = linux_config(&[template]);

    let all = create_engine_launcher::<&str>(&config, "tk-nuke", &[])
        .unwrap()
        .scan_software()
        .unwrap();
    // 9.0v8 is below the minimum; two installs x five products remain.
    assert_eq!(all.len(), 10);

    let limited = create_engine_launcher(&config, "tk-nuke", &["10.0v5"])
        .unwrap()
        .scan_software()
        .unwrap();
    let names: Vec<_> = limited.iter().map(SoftwareVersion::display_name).collect();
    insta::assert_snapshot!(names.join("\n"), @r"
    Nuke 10.0v5
    NukeX 10.0v5
    NukeAssist 10.0v5
    Nuke Studio 10.0v5
    Hiero 10.0v5
    ");

    let studio = limited
        .iter()
        .find(|s| s.product == Product::NukeStudio)
        .unwrap();
    assert_eq!(studio.args, ["--studio"]);
    assert_eq!(studio.path, root.join("Nuke10.0v5").join("Nuke10.0"));
}
