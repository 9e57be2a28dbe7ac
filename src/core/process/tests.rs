// nuke-launcher: Nuke / Hiero engine launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::builder::{ProcessBuilder, ProcessFlags};
use crate::core::env::container::Env;
use crate::error::{LauncherError, ProcessError};

#[cfg(not(windows))]
#[tokio::test]
async fn test_process_echo() {
    let output = ProcessBuilder::new("echo")
        .arg("hello")
        .capture_output()
        .run()
        .await
        .expect("echo should succeed");

    assert!(output.success());
    insta::assert_snapshot!(output.stdout().trim(), @"hello");
}

#[cfg(not(windows))]
#[tokio::test]
async fn test_process_exit_code() {
    let output = ProcessBuilder::new("/bin/sh")
        .args(["-c", "exit 42"])
        .flag(ProcessFlags::ALLOW_FAILURE)
        .quiet()
        .run()
        .await
        .expect("process should complete");

    assert_eq!(output.exit_code(), 42);
}

#[cfg(not(windows))]
#[tokio::test]
async fn test_process_non_zero_exit_is_error() {
    let err = ProcessBuilder::new("/bin/sh")
        .args(["-c", "exit 3"])
        .name("failing")
        .quiet()
        .run()
        .await
        .expect_err("exit 3 is not a success code");

    let LauncherError::Process(process_err) = err else {
        panic!("expected a process error");
    };
    assert!(matches!(
        *process_err,
        ProcessError::NonZeroExit { code: 3, .. }
    ));
}

#[cfg(not(windows))]
#[tokio::test]
async fn test_process_env_replaces_parent_env() {
    let mut env = Env::new();
    env.set("NUKE_PATH", "/tmp/gizmo_1:/repo/plugins/basic");

    let output = ProcessBuilder::new("/bin/sh")
        .args(["-c", "echo \"$NUKE_PATH|${HOME:-unset}\""])
        .env(env)
        .capture_output()
        .run()
        .await
        .expect("process should succeed");

    insta::assert_snapshot!(output.stdout().trim(), @"/tmp/gizmo_1:/repo/plugins/basic|unset");
}

#[test]
fn test_which_keeps_explicit_paths() {
    let builder = ProcessBuilder::which("/path/to/nuke").expect("explicit path");
    assert_eq!(builder.program().to_str(), Some("/path/to/nuke"));
}

#[test]
fn test_which_missing_executable() {
    let result = ProcessBuilder::which("definitely-not-a-real-nuke-binary");
    assert!(matches!(
        result,
        Err(ProcessError::ExecutableNotFound { .. })
    ));
}

#[test]
fn test_command_line_quotes_spaces() {
    let builder = ProcessBuilder::new("/usr/local/Nuke10.0v5/Nuke10.0")
        .arg("--studio")
        .arg("/shots/my shot.nk");
    insta::assert_snapshot!(
        builder.command_line(),
        @r#"/usr/local/Nuke10.0v5/Nuke10.0 --studio "/shots/my shot.nk""#
    );
}
