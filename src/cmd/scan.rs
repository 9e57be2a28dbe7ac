// nuke-launcher: Nuke / Hiero engine launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Scan command implementation.

use crate::cli::launch::ScanArgs;
use crate::config::Config;
use crate::error::Result;
use crate::launcher::create_engine_launcher;
use crate::launcher::software::SoftwareVersion;

/// Formats discovered software as aligned `name  path  args` lines.
#[must_use]
pub fn format_software(software: &[SoftwareVersion]) -> Vec<String> {
    let names: Vec<_> = software.iter().map(SoftwareVersion::display_name).collect();
    let width = names.iter().map(String::len).max().unwrap_or(0);

    software
        .iter()
        .zip(names)
        .map(|(sw, name)| {
            let line = format!("{name:<width$}  {}", sw.path.display());
            if sw.args.is_empty() {
                line
            } else {
                format!("{line} {}", sw.args.join(" "))
            }
        })
        .collect()
}

/// Main handler for scan command.
///
/// # Errors
///
/// Returns an error if a requested version or a configured template is
/// invalid.
pub fn run_scan_command(args: &ScanArgs, config: &Config) -> Result<()> {
    let launcher =
        create_engine_launcher(config, &config.engine.name, args.versions.as_slice())?;
    let software = launcher.scan_software()?;

    if software.is_empty() {
        println!("No Nuke installations found");
    } else {
        for line in format_software(&software) {
            println!("{line}");
        }
    }
    Ok(())
}
