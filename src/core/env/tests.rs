// nuke-launcher: Nuke / Hiero engine launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for the environment module.

use super::container::Env;
use super::current_env;
use super::path_list::{PathList, compose};
use super::types::Platform;
use std::collections::BTreeMap;

#[test]
fn test_compose_appends_to_existing() {
    insta::assert_snapshot!(
        compose(Some("/tmp/gizmo_1:/tmp/gizmo_1"), "/repo/plugins/basic", ':'),
        @"/tmp/gizmo_1:/tmp/gizmo_1:/repo/plugins/basic"
    );
}

#[test]
fn test_compose_absent_or_empty() {
    assert_eq!(compose(None, "/repo/plugins/basic", ':'), "/repo/plugins/basic");
    assert_eq!(compose(Some(""), "/repo/plugins/basic", ':'), "/repo/plugins/basic");
}

#[test]
fn test_compose_is_not_idempotent() {
    let once = compose(None, "/p", ':');
    let twice = compose(Some(&once), "/p", ':');
    assert_eq!(twice, "/p:/p");
}

#[test]
fn test_compose_keeps_empty_segments() {
    // No filtering: whatever was there stays byte-for-byte.
    assert_eq!(compose(Some("/a::/b"), "/c", ':'), "/a::/b:/c");
}

#[test]
fn test_compose_windows_separator() {
    insta::assert_snapshot!(
        compose(Some(r"C:\gizmos"), r"D:\repo\plugins\basic", Platform::Windows.path_separator()),
        @r"C:\gizmos;D:\repo\plugins\basic"
    );
}

#[test]
fn test_path_list_parse() {
    let list = PathList::parse(Some("/a:/b:/a"), ':');
    assert_eq!(list.entries(), ["/a", "/b", "/a"]);
    assert_eq!(list.len(), 3);
    assert!(PathList::parse(None, ':').is_empty());
    assert!(PathList::new(';').is_empty());
}

#[test]
fn test_env_basic_operations() {
    let mut env = Env::new();
    env.set("FOO", "bar");

    assert_eq!(env.get("FOO"), Some("bar"));
    assert_eq!(env.get("NOTEXIST"), None);

    env.remove("FOO");
    assert!(env.is_empty());
}

#[cfg(not(windows))]
#[test]
fn test_env_keys_are_case_sensitive() {
    let env: Env = [("http_proxy", "a"), ("HTTP_PROXY", "b"), ("nuke_path", "/other")]
        .into_iter()
        .collect();

    assert_eq!(env.len(), 3);
    assert_eq!(env.get("http_proxy"), Some("a"));
    assert_eq!(env.get("HTTP_PROXY"), Some("b"));
    assert_eq!(env.get("NUKE_PATH"), None);

    let mut env = env;
    env.remove("HTTP_PROXY");
    assert_eq!(env.get("http_proxy"), Some("a"));
}

#[cfg(windows)]
#[test]
fn test_env_keys_ignore_case_on_windows() {
    let env: Env = [("Path", r"C:\Windows")].into_iter().collect();
    assert_eq!(env.get("PATH"), Some(r"C:\Windows"));
}

#[test]
fn test_env_copy_on_write() {
    let mut env1 = Env::new();
    env1.set("KEY1", "value1");

    let mut env2 = env1.clone();
    assert!(env1.shares_data_with(&env2));

    env2.set("KEY2", "value2");
    assert!(!env1.shares_data_with(&env2));
    assert_eq!(env1.get("KEY2"), None);
    assert_eq!(env2.get("KEY1"), Some("value1"));
}

#[test]
fn test_env_overlay() {
    let mut env: Env = [("PATH", "/usr/bin"), ("NUKE_PATH", "/old")].into_iter().collect();
    let mut extra = BTreeMap::new();
    extra.insert("NUKE_PATH".to_string(), "/new".to_string());
    extra.insert("SGTK_ENGINE".to_string(), "tk-nuke".to_string());

    env.overlay(&extra);

    assert_eq!(env.len(), 3);
    assert_eq!(env.get("NUKE_PATH"), Some("/new"));
    assert_eq!(env.get("PATH"), Some("/usr/bin"));
}

#[test]
fn test_env_from_map() {
    let mut map = BTreeMap::new();
    map.insert("KEY1".to_string(), "value1".to_string());
    map.insert("KEY2".to_string(), "value2".to_string());

    let env = Env::from_map(map.clone());

    assert_eq!(env.len(), 2);
    assert_eq!(env.to_map(), map);
}

#[test]
fn test_current_env() {
    let env = current_env();
    assert!(
        env.get("PATH").is_some(),
        "PATH should exist in current environment"
    );
}

#[test]
fn test_platform_parse() {
    assert_eq!("linux".parse::<Platform>().unwrap(), Platform::Linux);
    assert_eq!("Darwin".parse::<Platform>().unwrap(), Platform::MacOs);
    assert_eq!("win32".parse::<Platform>().unwrap(), Platform::Windows);
    assert!("beos".parse::<Platform>().is_err());
}
