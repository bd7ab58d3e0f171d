//! Semantic versions of generated projects.
//!
//! forgeplate accepts exactly one version grammar:
//! `MAJOR.MINOR.PATCH` optionally followed by `-SNAPSHOT` (used by JVM
//! templates). Anything else, such as `1.2`, `1.2.3.4`, `v1.2.3` or
//! `1.2.3-BETA`, is rejected.
//!
//! Versions are ordered by `(major, minor, patch)` only; use [`compare`]
//! for ordering. `==` compares the full value, snapshot flag included.
//!
//! # Example
//!
//! ```
//! use forgeplate::version::{check_bump_direction, check_bump_range, parse_version};
//!
//! let current = parse_version("1.2.3").unwrap();
//! let new = parse_version("1.3.0").unwrap();
//! check_bump_direction(&current, &new, false).unwrap();
//! assert!(check_bump_range(&current, &new));
//! ```

pub mod bump;

pub use bump::{assess_bump, check_bump_direction, check_bump_range, BumpAssessment};

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{ForgeError, Result};

/// Suffix marking a snapshot version.
pub const SNAPSHOT_SUFFIX: &str = "-SNAPSHOT";

static VERSION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)\.([0-9]+)\.([0-9]+)(-SNAPSHOT)?$").unwrap());

/// A parsed `MAJOR.MINOR.PATCH[-SNAPSHOT]` version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub snapshot: bool,
}

impl Version {
    /// Create a release (non-snapshot) version.
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            snapshot: false,
        }
    }

    /// The same version with the snapshot flag set.
    pub fn as_snapshot(self) -> Self {
        Self {
            snapshot: true,
            ..self
        }
    }

    /// The same version without the snapshot suffix.
    pub fn release(self) -> Self {
        Self {
            snapshot: false,
            ..self
        }
    }

    /// Ordering key.
    pub fn triple(&self) -> (u64, u64, u64) {
        (self.major, self.minor, self.patch)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if self.snapshot {
            f.write_str(SNAPSHOT_SUFFIX)?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = ForgeError;

    fn from_str(s: &str) -> Result<Self> {
        parse_version(s)
    }
}

impl TryFrom<String> for Version {
    type Error = ForgeError;

    fn try_from(value: String) -> Result<Self> {
        parse_version(&value)
    }
}

impl From<Version> for String {
    fn from(version: Version) -> Self {
        version.to_string()
    }
}

/// Parse a version string.
///
/// Fails with [`ForgeError::InvalidVersionFormat`] unless the whole text
/// matches `MAJOR.MINOR.PATCH[-SNAPSHOT]` and every component fits in a `u64`.
pub fn parse_version(text: &str) -> Result<Version> {
    let invalid = || ForgeError::InvalidVersionFormat {
        version: text.to_string(),
    };

    let caps = VERSION_PATTERN.captures(text).ok_or_else(invalid)?;
    let component = |i: usize| -> Result<u64> { caps[i].parse::<u64>().map_err(|_| invalid()) };

    Ok(Version {
        major: component(1)?,
        minor: component(2)?,
        patch: component(3)?,
        snapshot: caps.get(4).is_some(),
    })
}

/// Order two versions by `(major, minor, patch)`, ignoring the snapshot flag.
pub fn compare(v1: &Version, v2: &Version) -> Ordering {
    v1.triple().cmp(&v2.triple())
}
