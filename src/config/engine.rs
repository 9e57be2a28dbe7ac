// nuke-launcher: Nuke / Hiero engine launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Engine configuration.
//!
//! ```text
//! root/                 (engine checkout, default: cwd)
//!   plugins/
//!     basic/            (startup path, unless plugin_path is set)
//! ```
//!
//! Relative paths are resolved against the current directory, and a
//! relative `plugin_path` against `root`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{ConfigError, Result};

/// Name of the engine served by default.
pub const DEFAULT_ENGINE: &str = "tk-nuke";

/// The engine whose startup plugins are injected into launches.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Engine name, exported as `SGTK_ENGINE`.
    pub name: String,
    /// Engine checkout root.
    pub root: PathBuf,
    /// Startup plugin directory (default: `root/plugins/basic`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plugin_path: Option<PathBuf>,
    /// Serialized pipeline context, exported as `SGTK_CONTEXT`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_ENGINE.to_string(),
            root: PathBuf::from("."),
            plugin_path: None,
            context: None,
        }
    }
}

impl EngineConfig {
    /// Makes `root` and `plugin_path` absolute.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::InvalidValue` if the engine name is empty or a
    /// path cannot be made absolute.
    pub fn resolve(&mut self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                section: "engine".to_string(),
                key: "name".to_string(),
                message: "engine name must not be empty".to_string(),
            }
            .into());
        }

        self.root = std::path::absolute(&self.root).map_err(|e| ConfigError::InvalidValue {
            section: "engine".to_string(),
            key: "root".to_string(),
            message: e.to_string(),
        })?;

        if let Some(plugin_path) = &self.plugin_path
            && plugin_path.is_relative()
        {
            self.plugin_path = Some(self.root.join(plugin_path));
        }

        Ok(())
    }

    /// Directory appended to `NUKE_PATH` / `HIERO_PLUGIN_PATH`.
    #[must_use]
    pub fn startup_path(&self) -> PathBuf {
        self.plugin_path
            .clone()
            .unwrap_or_else(|| self.root.join("plugins").join("basic"))
    }
}
