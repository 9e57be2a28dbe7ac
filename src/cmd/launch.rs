// nuke-launcher: Nuke / Hiero engine launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Prepare and launch commands.
//!
//! ```text
//! prepare: EngineLauncher::prepare_launch --> stdout (env lines | json)
//! launch:  EngineLauncher::prepare_launch
//!            --> snapshot + launch environment
//!            --> ProcessBuilder (which, inherit stdio)
//!            --> run().await | spawn_detached()
//! ```

use anyhow::Context;
use tracing::info;

use crate::cli::launch::{LaunchArgs, PrepareArgs, PrepareFormat};
use crate::config::Config;
use crate::core::process::builder::ProcessBuilder;
use crate::error::Result;
use crate::launcher::{EngineLauncher, LaunchInformation, create_engine_launcher};

/// Renders `info` in the requested output format.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_launch_information(info: &LaunchInformation, format: PrepareFormat) -> Result<String> {
    match format {
        PrepareFormat::Env => Ok(info
            .environment
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join("\n")),
        PrepareFormat::Json => {
            serde_json::to_string_pretty(info).context("failed to serialize launch information")
        }
    }
}

/// Main handler for the prepare command.
///
/// # Errors
///
/// Returns an error if a requested version is invalid or the output cannot
/// be rendered.
pub fn run_prepare_command(args: &PrepareArgs, config: &Config) -> Result<()> {
    let launcher =
        create_engine_launcher(config, &config.engine.name, args.versions.as_slice())?;
    let info = launcher.prepare_launch(
        &args.executable,
        args.args.iter().cloned(),
        args.file.as_deref(),
    );
    println!("{}", render_launch_information(&info, args.format)?);
    Ok(())
}

/// Builds the child process for `info`.
///
/// The child gets the launcher's environment snapshot with the launch
/// environment layered on top; nothing else is inherited.
///
/// # Errors
///
/// Returns an error if the executable cannot be found on `PATH`.
pub fn launch_process(launcher: &EngineLauncher, info: &LaunchInformation) -> Result<ProcessBuilder> {
    let mut env = launcher.environment().clone();
    env.overlay(&info.environment);

    Ok(ProcessBuilder::which(&info.path)?.args(&info.args).env(env))
}

/// Main handler for the launch command.
///
/// # Errors
///
/// Returns an error if the executable cannot be found or started, or if it
/// exits unsuccessfully when not detached.
pub async fn run_launch_command(args: &LaunchArgs, config: &Config) -> Result<()> {
    let launcher = create_engine_launcher::<&str>(config, &config.engine.name, &[])?;
    let info = launcher.prepare_launch(
        &args.executable,
        args.args.iter().cloned(),
        args.file.as_deref(),
    );

    let process = launch_process(&launcher, &info)?.inherit_stdio();

    if args.detach {
        let pid = process
            .spawn_detached()
            .with_context(|| format!("failed to start {}", info.path.display()))?;
        info!(exe = %info.path.display(), pid = ?pid, "started detached");
        if let Some(pid) = pid {
            println!("{pid}");
        }
    } else {
        process
            .run()
            .await
            .with_context(|| format!("{} did not complete", info.path.display()))?;
    }
    Ok(())
}
