// nuke-launcher: Nuke / Hiero engine launcher
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Discovery of installed Nuke versions.
//!
//! ```text
//! "/usr/local/Nuke{version}/Nuke{major_minor_version}"
//!    |        |                 |
//!    literal  read_dir + regex  read_dir + regex
//!             (10.0v5)          (10.0, must agree with 10.0v5)
//!                                  |
//!                                  v
//!              (path, NukeVersion) x Product::ALL
//!                                  |
//!                                  v
//!                          SoftwareVersion
//! ```

use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use tracing::{debug, trace};

use crate::core::env::types::Platform;
use crate::error::LaunchError;

use super::version::NukeVersion;

const VERSION_TOKEN: &str = "{version}";
const MAJOR_MINOR_TOKEN: &str = "{major_minor_version}";

/// An application flavour started from the Nuke executable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Product {
    Nuke,
    NukeX,
    NukeAssist,
    NukeStudio,
    Hiero,
}

impl Product {
    pub const ALL: [Self; 5] = [
        Self::Nuke,
        Self::NukeX,
        Self::NukeAssist,
        Self::NukeStudio,
        Self::Hiero,
    ];

    /// Command-line flag selecting this product, if any.
    #[must_use]
    pub const fn marker(self) -> Option<&'static str> {
        match self {
            Self::Nuke => None,
            Self::NukeX => Some("--nukex"),
            Self::NukeAssist => Some("--nukeassist"),
            Self::NukeStudio => Some("--studio"),
            Self::Hiero => Some("--hiero"),
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Nuke => "Nuke",
            Self::NukeX => "NukeX",
            Self::NukeAssist => "NukeAssist",
            Self::NukeStudio => "Nuke Studio",
            Self::Hiero => "Hiero",
        };
        f.write_str(name)
    }
}

/// A launchable product found on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SoftwareVersion {
    pub product: Product,
    #[serde(serialize_with = "serialize_display")]
    pub version: NukeVersion,
    pub path: PathBuf,
    pub args: Vec<String>,
}

impl SoftwareVersion {
    #[must_use]
    pub fn new(product: Product, version: NukeVersion, path: PathBuf) -> Self {
        Self {
            product,
            version,
            path,
            args: product.marker().map(str::to_owned).into_iter().collect(),
        }
    }

    /// Name shown to users, e.g. `Nuke Studio 10.0v5`.
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {}", self.product, self.version)
    }
}

fn serialize_display<S: serde::Serializer>(
    value: &NukeVersion,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

/// A partially matched template path.
#[derive(Debug, Clone)]
struct Candidate {
    path: PathBuf,
    version: Option<NukeVersion>,
}

/// One path component of a template, compiled.
enum Segment {
    Literal(String),
    Pattern(Regex),
}

fn compile_segment(component: &str, template: &str) -> Result<Segment, LaunchError> {
    if !component.contains(VERSION_TOKEN) && !component.contains(MAJOR_MINOR_TOKEN) {
        return Ok(Segment::Literal(component.to_string()));
    }

    let mut pattern = String::from("^");
    let mut rest = component;
    let mut seen_version = false;
    let mut seen_major_minor = false;
    while !rest.is_empty() {
        let next = [VERSION_TOKEN, MAJOR_MINOR_TOKEN]
            .iter()
            .filter_map(|token| rest.find(token).map(|at| (at, *token)))
            .min_by_key(|(at, _)| *at);
        let Some((at, token)) = next else {
            pattern.push_str(&regex::escape(rest));
            break;
        };
        pattern.push_str(&regex::escape(&rest[..at]));
        if token == VERSION_TOKEN {
            pattern.push_str(if seen_version {
                r"\d+\.\d+v\d+"
            } else {
                r"(?P<version>\d+\.\d+v\d+)"
            });
            seen_version = true;
        } else {
            pattern.push_str(if seen_major_minor {
                r"\d+\.\d+"
            } else {
                r"(?P<major_minor>\d+\.\d+)"
            });
            seen_major_minor = true;
        }
        rest = &rest[at + token.len()..];
    }
    pattern.push('$');

    Regex::new(&pattern)
        .map(Segment::Pattern)
        .map_err(|e| LaunchError::InvalidTemplate {
            template: template.to_string(),
            message: e.to_string(),
        })
}

/// Extends `candidate` with the directory entry `name` if it matches,
/// keeping versions captured by earlier segments consistent.
fn match_entry(regex: &Regex, name: &str, candidate: &Candidate) -> Option<Candidate> {
    let captures = regex.captures(name)?;

    let version = match captures.name("version") {
        Some(m) => {
            let parsed: NukeVersion = m.as_str().parse().ok()?;
            if candidate.version.is_some_and(|known| known != parsed) {
                return None;
            }
            Some(parsed)
        }
        None => candidate.version,
    };

    if let (Some(mm), Some(v)) = (captures.name("major_minor"), version)
        && mm.as_str() != v.major_minor()
    {
        return None;
    }

    Some(Candidate {
        path: candidate.path.join(name),
        version,
    })
}

/// Splits `template` into the directory scanning starts from and the path
/// components below it.
///
/// A leading drive (`C:`) on Windows becomes the drive root `C:\`, so
/// scanning never depends on the current directory of that drive.
pub(super) fn split_template(template: &str, platform: Platform) -> (PathBuf, Vec<&str>) {
    let separators: &[char] = match platform {
        Platform::Windows => &['\\', '/'],
        Platform::Linux | Platform::MacOs => &['/'],
    };
    let mut components: Vec<&str> = template
        .split(separators)
        .filter(|c| !c.is_empty())
        .collect();

    let is_drive = |c: &str| {
        let bytes = c.as_bytes();
        bytes.len() == 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
    };

    let root = match components.first().copied() {
        Some(drive) if platform == Platform::Windows && is_drive(drive) => {
            let root = PathBuf::from(format!("{drive}\\"));
            components.remove(0);
            root
        }
        _ if template.starts_with(separators) => PathBuf::from(std::path::MAIN_SEPARATOR_STR),
        _ => PathBuf::new(),
    };
    (root, components)
}

/// Finds every executable matching `template`.
///
/// Missing directories simply yield no matches.
///
/// # Errors
///
/// Returns a `LaunchError::InvalidTemplate` if the template lacks a
/// `{version}` token or cannot be compiled.
pub fn scan_template(
    template: &str,
    platform: Platform,
) -> Result<Vec<(PathBuf, NukeVersion)>, LaunchError> {
    if !template.contains(VERSION_TOKEN) {
        return Err(LaunchError::InvalidTemplate {
            template: template.to_string(),
            message: format!("missing {VERSION_TOKEN} token"),
        });
    }

    let (root, components) = split_template(template, platform);
    let segments = components
        .into_iter()
        .map(|c| compile_segment(c, template))
        .collect::<Result<Vec<_>, _>>()?;

    let mut candidates = vec![Candidate {
        path: root,
        version: None,
    }];

    for segment in &segments {
        candidates = match segment {
            Segment::Literal(name) => candidates
                .into_iter()
                .map(|mut c| {
                    c.path.push(name);
                    c
                })
                .collect(),
            Segment::Pattern(regex) => {
                let mut next = Vec::new();
                for candidate in candidates {
                    let Ok(entries) = std::fs::read_dir(&candidate.path) else {
                        trace!(path = %candidate.path.display(), "not a readable directory");
                        continue;
                    };
                    for entry in entries.flatten() {
                        let name = entry.file_name();
                        let Some(name) = name.to_str() else {
                            continue;
                        };
                        next.extend(match_entry(regex, name, &candidate));
                    }
                }
                next
            }
        };
        if candidates.is_empty() {
            break;
        }
    }

    let mut found: Vec<_> = candidates
        .into_iter()
        .filter(|c| c.path.exists())
        .filter_map(|c| Some((c.path, c.version?)))
        .collect();
    found.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
    debug!(template, count = found.len(), "scanned template");
    Ok(found)
}

/// Expands one executable into every product it can start.
#[must_use]
pub fn expand_products(path: &std::path::Path, version: NukeVersion) -> Vec<SoftwareVersion> {
    Product::ALL
        .iter()
        .map(|product| SoftwareVersion::new(*product, version, path.to_path_buf()))
        .collect()
}
