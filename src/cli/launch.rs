// nuke-launcher: Nuke / Hiero engine launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Launch command arguments.
//!
//! Everything after `--` is passed to the executable untouched, which is
//! where `--hiero` / `--studio` go:
//!
//! ```text
//! nuke-launch launch /usr/local/Nuke10.0v5/Nuke10.0 -- --studio
//! ```

use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// Output format of the `prepare` command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum PrepareFormat {
    /// `KEY=value` lines.
    #[default]
    Env,
    /// The full launch information as JSON.
    Json,
}

/// Arguments for the `prepare` command.
#[derive(Debug, Clone, Args)]
pub struct PrepareArgs {
    /// Executable to launch.
    #[arg(value_name = "EXEC")]
    pub executable: PathBuf,

    /// File the application opens at startup.
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Versions the launcher is limited to, e.g. 10.0v5.
    #[arg(long = "versions", value_name = "VERSION", action = clap::ArgAction::Append)]
    pub versions: Vec<String>,

    /// Output format.
    #[arg(long = "format", value_enum, default_value_t = PrepareFormat::Env)]
    pub format: PrepareFormat,

    /// Arguments passed to the executable.
    #[arg(last = true, value_name = "ARGS")]
    pub args: Vec<String>,
}

/// Arguments for the `launch` command.
#[derive(Debug, Clone, Args)]
pub struct LaunchArgs {
    /// Executable to launch, a path or a name looked up in PATH.
    #[arg(value_name = "EXEC")]
    pub executable: PathBuf,

    /// File the application opens at startup.
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Returns as soon as the application has started.
    #[arg(short = 'D', long)]
    pub detach: bool,

    /// Arguments passed to the executable.
    #[arg(last = true, value_name = "ARGS")]
    pub args: Vec<String>,
}

/// Arguments for the `scan` command.
#[derive(Debug, Clone, Default, Args)]
pub struct ScanArgs {
    /// Only list these versions, e.g. 10.0v5.
    #[arg(long = "versions", value_name = "VERSION", action = clap::ArgAction::Append)]
    pub versions: Vec<String>,
}
