//! Package version metadata

use crate::error::{Result, ScaffoldError};
use semver::Version;

/// Parse the version compiled into the binary, tolerating a leading 'v'
pub fn package_version(raw: &str) -> Result<Version> {
    let cleaned = raw.trim().strip_prefix('v').unwrap_or(raw.trim());
    Version::parse(cleaned).map_err(|source| ScaffoldError::VersionMetadataUnreadable {
        version: raw.to_string(),
        source,
    })
}
