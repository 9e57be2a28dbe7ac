// nuke-launcher: Nuke / Hiero engine launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process execution.
//!
//! ```text
//! run()                    spawn_detached()
//!   |                            |
//!   v                            v
//! build_command()          build_command()
//! args, env, stdio        stdio -> null unless inherited
//!   |                            |
//!   v                            v
//! spawn + wait_with_output  spawn, return pid
//!   |
//!   v
//! validate exit_code (skip if ALLOW_FAILURE)
//!   |
//!   v
//! ProcessOutput { exit_code, stdout, stderr }
//! ```

use crate::error::{LauncherResult, ProcessError};
use std::fmt::Write as _;
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, error, trace};

use super::builder::{ProcessBuilder, ProcessFlags, ProcessOutput, StreamFlags};

impl ProcessBuilder {
    /// Returns the display name for this process.
    fn display_name(&self) -> String {
        self.name_override().map_or_else(
            || {
                self.program().file_stem().map_or_else(
                    || "process".to_string(),
                    |s| s.to_string_lossy().into_owned(),
                )
            },
            String::from,
        )
    }

    /// Returns the full command line as a string (for logging).
    pub(crate) fn command_line(&self) -> String {
        let mut cmd = format!("{}", self.program().display());
        for arg in self.args_slice() {
            if arg.contains(' ') {
                let _ = write!(cmd, " \"{arg}\"");
            } else {
                let _ = write!(cmd, " {arg}");
            }
        }
        cmd
    }

    /// Spawns the process and waits for it to finish.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Spawning the child process fails.
    /// - The process exits with a non-zero code (and `ALLOW_FAILURE` is not set).
    /// - The process is terminated by a signal.
    pub async fn run(self) -> LauncherResult<ProcessOutput> {
        let name = self.display_name();
        let cmd_line = self.command_line();

        debug!(cmd = %cmd_line, "exec");

        let mut command = self.build_command();
        let child = command.spawn().map_err(|source| ProcessError::SpawnFailed {
            command: cmd_line.clone(),
            source,
        })?;
        trace!(process = %name, pid = ?child.id(), "spawned");

        let output = child
            .wait_with_output()
            .await
            .map_err(|source| ProcessError::SpawnFailed {
                command: cmd_line.clone(),
                source,
            })?;

        let Some(exit_code) = output.status.code() else {
            return Err(ProcessError::Terminated { command: name }.into());
        };
        let output = ProcessOutput::new(
            exit_code,
            String::from_utf8_lossy(&output.stdout).into_owned(),
            String::from_utf8_lossy(&output.stderr).into_owned(),
        );

        if exit_code != 0 && !self.process_flags().contains(ProcessFlags::ALLOW_FAILURE) {
            if !output.stderr().is_empty() {
                error!(process = %name, stderr = %output.stderr(), "process error output");
            }
            return Err(ProcessError::NonZeroExit {
                command: name,
                code: exit_code,
            }
            .into());
        }

        trace!(process = %name, exit_code, "completed");
        Ok(output)
    }

    /// Spawns the process without waiting for it.
    ///
    /// Captured streams are not available for detached processes and are
    /// discarded.
    ///
    /// # Errors
    ///
    /// Returns a `ProcessError::SpawnFailed` if the child cannot be started.
    pub fn spawn_detached(self) -> LauncherResult<Option<u32>> {
        let name = self.display_name();
        let cmd_line = self.command_line();
        debug!(cmd = %cmd_line, "exec (detached)");

        let mut command = self.build_command();
        command.kill_on_drop(false);
        if !self.stdout_flags().contains(StreamFlags::INHERIT) {
            command.stdout(Stdio::null());
        }
        if !self.stderr_flags().contains(StreamFlags::INHERIT) {
            command.stderr(Stdio::null());
        }

        let child = command.spawn().map_err(|source| ProcessError::SpawnFailed {
            command: cmd_line,
            source,
        })?;
        let pid = child.id();
        trace!(process = %name, pid = ?pid, "detached");
        Ok(pid)
    }

    fn build_command(&self) -> Command {
        let mut command = Command::new(self.program());
        command.args(self.args_slice());

        if let Some(env) = self.environment() {
            command.env_clear();
            command.envs(env.iter());
        }

        command.stdin(Stdio::null());
        command.stdout(Self::stdio_from_flags(self.stdout_flags()));
        command.stderr(Self::stdio_from_flags(self.stderr_flags()));
        command.kill_on_drop(true);

        command
    }

    fn stdio_from_flags(flags: StreamFlags) -> Stdio {
        if flags.contains(StreamFlags::INHERIT) {
            Stdio::inherit()
        } else if flags.contains(StreamFlags::BIT_BUCKET) {
            Stdio::null()
        } else {
            Stdio::piped()
        }
    }
}
