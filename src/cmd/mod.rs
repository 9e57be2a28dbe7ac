// nuke-launcher: Nuke / Hiero engine launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   config (options, inis), launch (prepare, launch), scan
//! ```

pub mod config;
pub mod launch;
pub mod scan;
