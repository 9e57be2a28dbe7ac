// nuke-launcher: Nuke / Hiero engine launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Path-list variables (`NUKE_PATH`, `HIERO_PLUGIN_PATH`, ...).
//!
//! ```text
//! "/a:/a"  + "/p"  -->  "/a:/a:/p"
//! None     + "/p"  -->  "/p"
//! ""       + "/p"  -->  "/p"
//! ```
//!
//! Entries are never deduplicated or filtered: existing repeats survive and
//! appending the same path twice stores it twice.

use std::fmt;

/// An ordered list of filesystem paths stored in a single variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathList {
    entries: Vec<String>,
    separator: char,
}

impl PathList {
    #[must_use]
    pub const fn new(separator: char) -> Self {
        Self {
            entries: Vec::new(),
            separator,
        }
    }

    /// Splits a variable value into its entries.
    ///
    /// An absent or empty value yields an empty list.
    #[must_use]
    pub fn parse(value: Option<&str>, separator: char) -> Self {
        let entries = match value {
            Some(v) if !v.is_empty() => v.split(separator).map(str::to_owned).collect(),
            _ => Vec::new(),
        };
        Self { entries, separator }
    }

    /// Appends an entry after all existing ones.
    pub fn push(&mut self, path: impl Into<String>) -> &mut Self {
        self.entries.push(path.into());
        self
    }

    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub const fn separator(&self) -> char {
        self.separator
    }
}

impl fmt::Display for PathList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", self.separator)?;
            }
            f.write_str(entry)?;
        }
        Ok(())
    }
}

/// Appends `new_path` to an existing path-list value.
#[must_use]
pub fn compose(existing: Option<&str>, new_path: &str, separator: char) -> String {
    let mut list = PathList::parse(existing, separator);
    list.push(new_path);
    list.to_string()
}
