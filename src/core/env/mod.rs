// nuke-launcher: Nuke / Hiero engine launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment variable management.
//!
//! # Architecture
//!
//! ```text
//! Env (copy-on-write BTreeMap<String, String>)
//! Sources: current_env(), Env::from_map(), Env::new()
//! Ops: set/get/remove/overlay
//!
//! path_list::compose(existing, new, sep) --> "existing<sep>new"
//! ```
//!
//! - **Snapshot**: the process environment is read once, never written
//! - **Keys**: case-insensitive on Windows only; `nuke_path` and `NUKE_PATH`
//!   are distinct variables on Linux and macOS
//! - **Platform**: picks the path-list separator

pub mod container;
pub mod path_list;
pub mod types;

#[cfg(test)]
mod tests;

/// Captures the current process environment.
///
/// Variables whose name or value is not valid UTF-8 are skipped.
#[must_use]
pub fn current_env() -> container::Env {
    std::env::vars_os()
        .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
        .collect()
}
