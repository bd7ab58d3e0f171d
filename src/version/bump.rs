//! Validation of version bumps.
//!
//! Two independent checks:
//!
//! - [`check_bump_direction`] enforces monotonicity and fails with a
//!   distinguishable error kind.
//! - [`check_bump_range`] never fails; it only tells the caller whether the
//!   jump looks reasonable or needs explicit confirmation.

use std::cmp::Ordering;

use super::{compare, parse_version, Version};
use crate::error::{ForgeError, Result};

/// Check that `new` moves in the requested direction from `current`.
///
/// - identical versions fail with [`ForgeError::NoOpVersion`], whatever
///   `downgrade` says
/// - without `downgrade`, `new` must order strictly above `current`,
///   otherwise [`ForgeError::DowngradeNotAllowed`]
/// - with `downgrade`, `new` must order strictly below `current`,
///   otherwise [`ForgeError::UpgradeNotAllowed`]
pub fn check_bump_direction(current: &Version, new: &Version, downgrade: bool) -> Result<()> {
    if current == new {
        return Err(ForgeError::NoOpVersion {
            version: new.to_string(),
        });
    }

    let ordering = compare(new, current);
    if !downgrade && ordering != Ordering::Greater {
        return Err(ForgeError::DowngradeNotAllowed {
            current: current.to_string(),
            new: new.to_string(),
        });
    }
    if downgrade && ordering != Ordering::Less {
        return Err(ForgeError::UpgradeNotAllowed {
            current: current.to_string(),
            new: new.to_string(),
        });
    }

    Ok(())
}

/// Whether moving from `current` to `new` is a reasonable single-step bump.
///
/// Snapshot suffixes are ignored. The jump is not reasonable when the major
/// version grows by more than one, when the minor version grows by more than
/// one under an unchanged major, when the patch version grows by more than one
/// under unchanged major and minor, or when a component drops while every
/// higher-order component stays the same.
pub fn check_bump_range(current: &Version, new: &Version) -> bool {
    let (cur_major, cur_minor, cur_patch) = current.triple();
    let (new_major, new_minor, new_patch) = new.triple();

    if new_major > cur_major.saturating_add(1) {
        return false;
    }
    if new_major == cur_major && new_minor > cur_minor.saturating_add(1) {
        return false;
    }
    if new_major == cur_major && new_minor == cur_minor && new_patch > cur_patch.saturating_add(1)
    {
        return false;
    }
    if compare(new, current) == Ordering::Less {
        return false;
    }

    true
}

/// Outcome of validating a requested bump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BumpAssessment {
    /// The parsed target version.
    pub new: Version,
    /// `false` when the jump should be confirmed by the user first.
    pub reasonable: bool,
}

/// Parse `new_version` and validate it against `current`.
///
/// The range check only applies to upward bumps; an explicit downgrade is
/// always considered intentional.
pub fn assess_bump(current: &Version, new_version: &str, downgrade: bool) -> Result<BumpAssessment> {
    let new = parse_version(new_version)?;
    check_bump_direction(current, &new, downgrade)?;

    let reasonable = downgrade || check_bump_range(current, &new);
    if !reasonable {
        tracing::debug!("Bump from {} to {} is not a single step", current, new);
    }

    Ok(BumpAssessment { new, reasonable })
}
