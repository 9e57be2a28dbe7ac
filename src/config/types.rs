// nuke-launcher: Nuke / Hiero engine launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types.
//!
//! # Config Structure
//!
//! ```text
//! Config: GlobalConfig, EngineConfig, SoftwareConfig
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::core::env::types::Platform;
use crate::launcher::version::NukeVersion;
use crate::logging::{LogFormat, LogLevel};

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log level for console output (0-6).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-6).
    pub file_log_level: LogLevel,
    /// Path to log file; no file logging when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
    /// Log line format.
    pub log_format: LogFormat,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            output_log_level: LogLevel::WARN,
            file_log_level: LogLevel::DEBUG,
            log_file: None,
            log_format: LogFormat::Text,
        }
    }
}

/// Software discovery options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SoftwareConfig {
    /// Platform override; the compile target when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<Platform>,
    /// Executable path templates; the platform defaults when empty.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub templates: Vec<String>,
    /// Oldest version reported by discovery.
    pub minimum_version: NukeVersion,
}

impl Default for SoftwareConfig {
    fn default() -> Self {
        Self {
            platform: None,
            templates: Vec::new(),
            minimum_version: NukeVersion::new(10, 0, 1),
        }
    }
}

impl SoftwareConfig {
    /// The platform to launch on.
    #[must_use]
    pub fn platform(&self) -> Platform {
        self.platform.unwrap_or_else(Platform::current)
    }

    /// Configured templates, or the defaults for `platform`.
    #[must_use]
    pub fn templates(&self, platform: Platform) -> Vec<String> {
        if self.templates.is_empty() {
            default_templates(platform)
                .iter()
                .map(|t| (*t).to_string())
                .collect()
        } else {
            self.templates.clone()
        }
    }
}

/// Default install locations of Nuke per platform.
#[must_use]
pub const fn default_templates(platform: Platform) -> &'static [&'static str] {
    match platform {
        Platform::Linux => &["/usr/local/Nuke{version}/Nuke{major_minor_version}"],
        Platform::MacOs => &["/Applications/Nuke{version}/Nuke{version}.app"],
        Platform::Windows => &[r"C:\Program Files\Nuke{version}\Nuke{major_minor_version}.exe"],
    }
}
