// nuke-launcher: Nuke / Hiero engine launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for configuration loading.
//!
//! Tests the Config module with realistic TOML configurations.

use std::fs;
use std::path::PathBuf;

use nuke_launcher::config::Config;
use nuke_launcher::config::loader::ConfigLoader;
use nuke_launcher::core::env::types::Platform;
use nuke_launcher::logging::{LogFormat, LogLevel};

// =============================================================================
// Loading from TOML strings
// =============================================================================

#[test]
fn config_parse_full() {
    let toml = r#"
[global]
output_log_level = 3
file_log_level = 5
log_format = "json"

[engine]
name = "tk-nuke"
root = "/pipeline/tk-nuke"
plugin_path = "/pipeline/tk-nuke/plugins/studio"

[software]
platform = "mac"
templates = ["/Volumes/apps/Nuke{version}/Nuke{version}.app"]
minimum_version = "11.0v1"
"#;
    let config = Config::parse(toml).unwrap();
    insta::assert_json_snapshot!(config, @r#"
    {
      "global": {
        "output_log_level": 3,
        "file_log_level": 5,
        "log_format": "json"
      },
      "engine": {
        "name": "tk-nuke",
        "root": "/pipeline/tk-nuke",
        "plugin_path": "/pipeline/tk-nuke/plugins/studio"
      },
      "software": {
        "platform": "mac",
        "templates": [
          "/Volumes/apps/Nuke{version}/Nuke{version}.app"
        ],
        "minimum_version": "11.0v1"
      }
    }
    "#);
}

#[test]
fn config_parse_platform_aliases() {
    for (name, expected) in [
        ("linux", Platform::Linux),
        ("macos", Platform::MacOs),
        ("darwin", Platform::MacOs),
        ("windows", Platform::Windows),
    ] {
        let config = Config::parse(&format!("[software]\nplatform = \"{name}\"\n")).unwrap();
        assert_eq!(config.platform(), expected, "{name}");
    }
}

#[test]
fn config_rejects_log_level_out_of_range() {
    assert!(Config::parse("[global]\noutput_log_level = 9\n").is_err());
}

#[test]
fn config_rejects_unknown_section() {
    assert!(Config::parse("[paths]\nprefix = '/build'\n").is_err());
}

// =============================================================================
// Layering
// =============================================================================

#[test]
fn config_later_files_override_earlier() {
    let dir = tempfile::tempdir().unwrap();
    let studio = dir.path().join("studio.toml");
    let show = dir.path().join("show.toml");
    fs::write(
        &studio,
        "[engine]\nroot = '/studio/tk-nuke'\ncontext = 'studio'\n\n[global]\noutput_log_level = 1\n",
    )
    .unwrap();
    fs::write(&show, "[engine]\ncontext = 'show'\n").unwrap();

    let loader = ConfigLoader::new()
        .add_toml_file(&studio)
        .add_toml_file(&show);
    let files = loader.format_loaded_files();
    assert_eq!(files.len(), 2);
    assert!(files[0].starts_with("1. [file] "));

    let config = loader.build().unwrap();
    assert_eq!(config.engine.root, PathBuf::from("/studio/tk-nuke"));
    assert_eq!(config.engine.context.as_deref(), Some("show"));
    assert_eq!(config.global.output_log_level, LogLevel::ERROR);
}

#[test]
fn config_missing_required_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let result = ConfigLoader::new()
        .add_toml_file(dir.path().join("missing.toml"))
        .build();
    assert!(result.is_err());
}

#[test]
fn config_missing_optional_file_is_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let loader = ConfigLoader::new().add_toml_file_optional(dir.path().join("nuke-launch.toml"));
    assert!(loader.format_loaded_files().is_empty());

    let config = loader.build().unwrap();
    assert_eq!(config.global.log_format, LogFormat::Text);
}

#[test]
fn config_relative_root_is_resolved() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("engine.toml");
    fs::write(&file, "[engine]\nroot = 'tk-nuke'\nplugin_path = 'startup'\n").unwrap();

    let config = Config::from_file(&file).unwrap();
    assert!(config.engine.root.is_absolute());
    assert!(config.engine.root.ends_with("tk-nuke"));
    assert_eq!(config.engine.startup_path(), config.engine.root.join("startup"));
}

#[test]
fn config_cli_assignments_win() {
    let config = ConfigLoader::new()
        .add_toml_str("[software]\nplatform = 'windows'\nminimum_version = '10.0v1'\n")
        .set_assignment("software.platform=linux")
        .unwrap()
        .set_assignment("software.minimum_version=12.0v1")
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(config.platform(), Platform::Linux);
    assert_eq!(config.software.minimum_version.to_string(), "12.0v1");
}
