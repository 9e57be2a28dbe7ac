// nuke-launcher: Nuke / Hiero engine launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!          LauncherError (16 bytes)
//!                  |
//!      +-----------+-----------+
//!      |           |           |
//!      v           v           v
//!    Config      Launch     Process
//!     Box         Box         Box
//!
//! Sub-errors (unboxed internally):
//!   Config  ReadError, ParseError, InvalidValue
//!   Launch  UnknownEngine, InvalidVersion, InvalidTemplate
//!   Process ExecutableNotFound, SpawnFailed, NonZeroExit
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`LauncherError`].
pub type LauncherResult<T> = std::result::Result<T, LauncherError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at two words on the stack.
#[derive(Debug, Error)]
pub enum LauncherError {
    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Launcher error (engine or version resolution).
    #[error("launch error: {0}")]
    Launch(#[from] Box<LaunchError>),

    /// Process execution error.
    #[error("process error: {0}")]
    Process(#[from] Box<ProcessError>),
}

macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for LauncherError {
                fn from(err: $error) -> Self {
                    LauncherError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ConfigError => Config,
    LaunchError => Launch,
    ProcessError => Process,
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

// --- Launch Errors ---

/// Engine launcher errors.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// The requested engine is not the one this launcher serves.
    #[error("no launcher for engine '{requested}' (configured engine is '{configured}')")]
    UnknownEngine {
        requested: String,
        configured: String,
    },

    /// A version string could not be parsed.
    #[error("invalid version '{0}' (expected e.g. '10.0v5')")]
    InvalidVersion(String),

    /// An executable template could not be turned into a matcher.
    #[error("invalid executable template '{template}': {message}")]
    InvalidTemplate { template: String, message: String },
}

// --- Process Errors ---

/// Process execution errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Executable not found in PATH.
    #[error("executable not found: '{name}' (not in PATH)")]
    ExecutableNotFound { name: String },

    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Process exited with a status outside the success set.
    #[error("process '{command}' exited with code {code}")]
    NonZeroExit { command: String, code: i32 },

    /// Process was terminated by a signal.
    #[error("process '{command}' was terminated without an exit code")]
    Terminated { command: String },
}
