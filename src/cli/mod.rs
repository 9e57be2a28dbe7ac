// nuke-launcher: Nuke / Hiero engine launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for nuke-launcher using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! nuke-launch [global options] <command>
//! version
//! options
//! inis
//! prepare <EXEC> [--file F] [--versions V]... [--format env|json] [-- ARGS...]
//! launch <EXEC> [--file F] [--detach] [-- ARGS...]
//! scan [--versions V]...
//! ```

pub mod global;
pub mod launch;


use crate::cli::global::GlobalOptions;
use crate::cli::launch::{LaunchArgs, PrepareArgs, ScanArgs};
use clap::{Parser, Subcommand};

/// Nuke / Hiero engine launcher
///
/// Prepares the environment of a Nuke, Nuke Studio or Hiero session so the
/// pipeline engine is picked up at startup.
#[derive(Debug, Parser)]
#[command(
    name = "nuke-launch",
    author,
    version,
    about = "Nuke / Hiero engine launcher",
    long_about = "nuke-launcher Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Prepares and starts Nuke sessions with the engine startup path\n\
                  appended to NUKE_PATH, or to HIERO_PLUGIN_PATH when the session\n\
                  is started with --hiero or --studio.",
    after_help = "CONFIGURATION:\n\n\
                  Files given with --ini are loaded first, in order. A file named\n\
                  `nuke-launch.toml` in the current directory is loaded after them\n\
                  if it exists. NUKE_LAUNCH_SECTION__KEY environment variables and\n\
                  command line options override both."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their values.
    Options,

    /// Lists the configuration files used.
    Inis,

    /// Prints the environment a launch would use.
    Prepare(PrepareArgs),

    /// Starts an executable with the engine environment.
    Launch(LaunchArgs),

    /// Lists installed Nuke versions.
    Scan(ScanArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
