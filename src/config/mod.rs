// nuke-launcher: Nuke / Hiero engine launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. --ini files
//! 3. local nuke-launch.toml (cwd)
//! 4. NUKE_LAUNCH_* env vars
//! 5. CLI overrides (--set, --engine-root, --log-*)
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! NUKE_LAUNCH_ENGINE__ROOT=/repo            → engine.root = "/repo"
//! NUKE_LAUNCH_SOFTWARE__PLATFORM=windows    → software.platform = "windows"
//! NUKE_LAUNCH_GLOBAL__OUTPUT_LOG_LEVEL=4    → global.output_log_level = 4
//! ```

pub mod engine;
pub mod loader;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::core::env::types::Platform;
use crate::error::Result;

use engine::EngineConfig;
use loader::ConfigLoader;
use types::{GlobalConfig, SoftwareConfig};

/// Local configuration file picked up from the working directory.
pub const LOCAL_CONFIG_FILE: &str = "nuke-launch.toml";

/// Prefix of environment variables overriding configuration keys.
pub const ENV_PREFIX: &str = "NUKE_LAUNCH";

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Engine options.
    pub engine: EngineConfig,
    /// Software discovery options.
    pub software: SoftwareConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use nuke_launcher::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file("studio.toml")
    ///     .add_toml_file_optional("nuke-launch.toml")
    ///     .with_env_prefix("NUKE_LAUNCH")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Resolve all paths and validate configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine section is invalid.
    pub fn resolve_and_validate(&mut self) -> Result<()> {
        self.engine.resolve()
    }

    /// The platform launches are prepared for.
    #[must_use]
    pub fn platform(&self) -> Platform {
        self.software.platform()
    }

    /// Format configuration options for display, sorted by key.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();

        options.insert(
            "global.output_log_level".to_string(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".to_string(),
            self.global.file_log_level.as_u8().to_string(),
        );
        if let Some(log_file) = &self.global.log_file {
            options.insert(
                "global.log_file".to_string(),
                log_file.display().to_string(),
            );
        }

        options.insert("engine.name".to_string(), self.engine.name.clone());
        options.insert(
            "engine.root".to_string(),
            self.engine.root.display().to_string(),
        );
        options.insert(
            "engine.plugin_path".to_string(),
            self.engine.startup_path().display().to_string(),
        );
        if let Some(context) = &self.engine.context {
            options.insert("engine.context".to_string(), context.clone());
        }

        let platform = self.platform();
        options.insert("software.platform".to_string(), platform.to_string());
        options.insert(
            "software.minimum_version".to_string(),
            self.software.minimum_version.to_string(),
        );
        options.insert(
            "software.templates".to_string(),
            self.software.templates(platform).join(", "),
        );

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }
}
