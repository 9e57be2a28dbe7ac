// nuke-launcher: Nuke / Hiero engine launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Async process spawning.
//!
//! ```text
//! ProcessBuilder::which("Nuke10.0")
//!   .args() .env() .capture_output()
//!   .run() / .spawn_detached()
//!       --> tokio::process::Command
//!       --> ProcessOutput { exit_code, stdout, stderr } / pid
//! ```

pub mod builder;
mod runner;
#[cfg(test)]
mod tests;
