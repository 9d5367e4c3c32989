//! Host tool version parsing and dependency constraint computation.
//!
//! The generated project pins the host scaffolding tool to the version range
//! it was generated against: a floor of the host's `major.minor` and a
//! ceiling of the next major release. Pre-release hosts get pre-release
//! markers on both bounds so the range stays installable.

use regex::Regex;

use crate::constants::{HOST_TOOL, HOST_TOOL_VERSION};
use crate::error::{Error, Result};

/// Parsed host tool version. Covers the `major.minor[.patch][{a|b|rc}N]`
/// grammar the host actually publishes.
#[derive(Debug, Clone, PartialEq)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    /// Pre-release marker, e.g. `("a", 2)` for `4.0a2`
    pub pre: Option<(String, u64)>,
}

impl Version {
    pub fn is_prerelease(&self) -> bool {
        self.pre.is_some()
    }
}

/// Parses a host version string.
///
/// # Errors
/// * `Error::InvalidVersion` if the string does not match the grammar
pub fn parse(version: &str) -> Result<Version> {
    let re = Regex::new(r"^(\d+)\.(\d+)(?:\.(\d+))?(?:(a|b|rc)(\d+))?$")
        .map_err(|e| Error::ConfigError(e.to_string()))?;

    let captures = re
        .captures(version.trim())
        .ok_or_else(|| Error::InvalidVersion { version: version.to_string() })?;

    let number = |i: usize| -> u64 {
        captures.get(i).map_or(0, |m| m.as_str().parse().unwrap_or(0))
    };

    Ok(Version {
        major: number(1),
        minor: number(2),
        patch: number(3),
        pre: captures
            .get(4)
            .map(|kind| (kind.as_str().to_string(), number(5))),
    })
}

/// Computes the `>=floor,<ceiling` constraint for the given host version.
///
/// Release hosts: `4.1.0` -> `>=4.1,<5.0`.
/// Pre-release hosts widen the floor to the first alpha of the same minor
/// and mark the ceiling too: `4.0a2` -> `>=4.0a0,<5.0a0`.
pub fn requirement_bounds(version: &Version) -> String {
    let next_major = version.major + 1;
    if version.is_prerelease() {
        format!(">={}.{}a0,<{}.0a0", version.major, version.minor, next_major)
    } else {
        format!(">={}.{},<{}.0", version.major, version.minor, next_major)
    }
}

/// The install-time dependency declaration for the host tool, computed from
/// the version this crate was built against.
pub fn host_requirement() -> Result<String> {
    requirement_for(HOST_TOOL_VERSION)
}

/// The install-time dependency declaration for an arbitrary host version.
pub fn requirement_for(version: &str) -> Result<String> {
    let parsed = parse(version)?;
    Ok(format!("{}{}", HOST_TOOL, requirement_bounds(&parsed)))
}
