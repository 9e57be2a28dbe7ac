// nuke-launcher: Nuke / Hiero engine launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Engine launcher.
//!
//! ```text
//! create_engine_launcher(config, "tk-nuke", ["10.0v5"])
//!        |  captures current_env() once
//!        v
//! EngineLauncher --with_environment(env)--> (injected snapshot)
//!        |
//!        +-- prepare_launch(exe, args, file)
//!        |     LaunchMode::from_args
//!        |       "--hiero" / "--studio" --> HIERO_PLUGIN_PATH
//!        |       otherwise              --> NUKE_PATH
//!        |     compose(snapshot[var], startup_path)
//!        |     + SGTK_ENGINE, SGTK_CONTEXT
//!        |     --> LaunchInformation { path, args, environment }
//!        |
//!        +-- scan_software()
//!              templates --> installs --> products
//!              filter: minimum_version, requested versions
//! ```
//!
//! The launcher only reads its snapshot; writing the resulting environment
//! into a child process is the caller's job.

pub mod software;
pub mod version;

#[cfg(test)]
mod tests;

use bon::Builder;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::config::Config;
use crate::core::env::container::Env;
use crate::core::env::current_env;
use crate::core::env::path_list;
use crate::core::env::types::Platform;
use crate::error::LaunchError;

use software::SoftwareVersion;
use version::NukeVersion;

/// Plugin search path of plain Nuke.
pub const NUKE_PATH: &str = "NUKE_PATH";
/// Plugin search path of Hiero and Nuke Studio.
pub const HIERO_PLUGIN_PATH: &str = "HIERO_PLUGIN_PATH";
/// Engine name handed to the application.
pub const ENGINE_VAR: &str = "SGTK_ENGINE";
/// Serialized pipeline context handed to the application.
pub const CONTEXT_VAR: &str = "SGTK_CONTEXT";

/// Which plugin system the launched application reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchMode {
    Nuke,
    Hiero,
}

impl LaunchMode {
    /// Arguments that switch the executable into Hiero mode.
    pub const HIERO_MARKERS: [&'static str; 2] = ["--hiero", "--studio"];

    #[must_use]
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Self {
        if args
            .iter()
            .any(|a| Self::HIERO_MARKERS.contains(&a.as_ref()))
        {
            Self::Hiero
        } else {
            Self::Nuke
        }
    }

    /// The path-list variable receiving the startup path.
    #[must_use]
    pub const fn plugin_path_var(self) -> &'static str {
        match self {
            Self::Nuke => NUKE_PATH,
            Self::Hiero => HIERO_PLUGIN_PATH,
        }
    }
}

/// Inputs of a launch.
#[derive(Debug, Clone, Builder)]
pub struct LaunchRequest {
    #[builder(into)]
    executable: PathBuf,
    #[builder(default)]
    args: Vec<String>,
    #[builder(into)]
    file_to_open: Option<PathBuf>,
}

impl LaunchRequest {
    #[must_use]
    pub fn executable(&self) -> &Path {
        &self.executable
    }

    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }

    #[must_use]
    pub fn file_to_open(&self) -> Option<&Path> {
        self.file_to_open.as_deref()
    }
}

/// Everything needed to start the application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaunchInformation {
    pub path: PathBuf,
    pub args: Vec<String>,
    /// Variables to set in the child, on top of the parent environment.
    pub environment: BTreeMap<String, String>,
}

/// Prepares launches of one engine.
#[derive(Debug, Clone)]
pub struct EngineLauncher {
    engine_name: String,
    startup_path: PathBuf,
    context: Option<String>,
    platform: Platform,
    versions: Vec<NukeVersion>,
    minimum_version: NukeVersion,
    templates: Vec<String>,
    environment: Env,
}

/// Creates a launcher for `engine_name`, limited to `versions` when non-empty.
///
/// # Errors
///
/// - `LaunchError::UnknownEngine` if `engine_name` is not the configured engine.
/// - `LaunchError::InvalidVersion` if an entry of `versions` does not parse.
pub fn create_engine_launcher<S: AsRef<str>>(
    config: &Config,
    engine_name: &str,
    versions: &[S],
) -> Result<EngineLauncher, LaunchError> {
    if engine_name != config.engine.name {
        return Err(LaunchError::UnknownEngine {
            requested: engine_name.to_string(),
            configured: config.engine.name.clone(),
        });
    }

    let versions = versions
        .iter()
        .map(|v| v.as_ref().parse())
        .collect::<Result<Vec<NukeVersion>, _>>()?;

    let platform = config.platform();
    debug!(engine = engine_name, %platform, ?versions, "created engine launcher");

    Ok(EngineLauncher {
        engine_name: engine_name.to_string(),
        startup_path: config.engine.startup_path(),
        context: config.engine.context.clone(),
        platform,
        versions,
        minimum_version: config.software.minimum_version,
        templates: config.software.templates(platform),
        environment: current_env(),
    })
}

impl EngineLauncher {
    /// Replaces the environment snapshot launches are composed from.
    #[must_use]
    pub fn with_environment(mut self, environment: Env) -> Self {
        self.environment = environment;
        self
    }

    #[must_use]
    pub fn engine_name(&self) -> &str {
        &self.engine_name
    }

    #[must_use]
    pub fn startup_path(&self) -> &Path {
        &self.startup_path
    }

    #[must_use]
    pub const fn platform(&self) -> Platform {
        self.platform
    }

    #[must_use]
    pub fn versions(&self) -> &[NukeVersion] {
        &self.versions
    }

    #[must_use]
    pub const fn environment(&self) -> &Env {
        &self.environment
    }

    /// Computes the launch of `exec_path` with `args`, opening `file_to_open`.
    #[must_use]
    pub fn prepare_launch<I, S>(
        &self,
        exec_path: impl AsRef<Path>,
        args: I,
        file_to_open: Option<&Path>,
    ) -> LaunchInformation
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let request = LaunchRequest::builder()
            .executable(exec_path.as_ref())
            .args(args.into_iter().map(Into::into).collect())
            .maybe_file_to_open(file_to_open)
            .build();
        self.prepare(&request)
    }

    /// Computes the launch described by `request`.
    #[must_use]
    pub fn prepare(&self, request: &LaunchRequest) -> LaunchInformation {
        let mode = LaunchMode::from_args(request.args());
        let var = mode.plugin_path_var();
        let startup_path = self.startup_path.to_string_lossy();

        let mut environment = BTreeMap::new();
        environment.insert(
            var.to_string(),
            path_list::compose(
                self.environment.get(var),
                &startup_path,
                self.platform.path_separator(),
            ),
        );
        environment.insert(ENGINE_VAR.to_string(), self.engine_name.clone());
        if let Some(context) = &self.context {
            environment.insert(CONTEXT_VAR.to_string(), context.clone());
        }

        let mut args = request.args().to_vec();
        if let Some(file) = request.file_to_open() {
            args.push(file.to_string_lossy().into_owned());
        }

        info!(
            exe = %request.executable().display(),
            ?mode,
            var,
            "prepared launch"
        );

        LaunchInformation {
            path: request.executable().to_path_buf(),
            args,
            environment,
        }
    }

    /// Finds installed software this launcher can start.
    ///
    /// # Errors
    ///
    /// Returns a `LaunchError::InvalidTemplate` for malformed templates.
    pub fn scan_software(&self) -> Result<Vec<SoftwareVersion>, LaunchError> {
        let mut found = Vec::new();
        for template in &self.templates {
            for (path, version) in software::scan_template(template, self.platform)? {
                if version < self.minimum_version {
                    debug!(%version, minimum = %self.minimum_version, "skipping unsupported version");
                    continue;
                }
                if !self.versions.is_empty() && !self.versions.contains(&version) {
                    debug!(%version, "skipping version not requested");
                    continue;
                }
                found.extend(software::expand_products(&path, version));
            }
        }
        found.sort_by(|a, b| {
            a.version
                .cmp(&b.version)
                .then_with(|| a.product.cmp(&b.product))
                .then_with(|| a.path.cmp(&b.path))
        });
        found.dedup();
        Ok(found)
    }
}
