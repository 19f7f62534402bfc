//! Vendor version lookup.
//!
//! The version comes from a packaged `application.properties` resource
//! (`application.version` key). It is read once and cached. Reading is an
//! explicit fallible operation ([`packaged_version`]); [`vendor_version`]
//! is the lenient accessor that reports [`UNKNOWN_VERSION`] instead.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use tracing::warn;

/// Property key holding the version string.
pub const VERSION_KEY: &str = "application.version";

/// Marker reported when the version cannot be determined.
pub const UNKNOWN_VERSION: &str = "-1";

/// Placeholder in the packaged properties standing for the crate version.
pub const CRATE_VERSION_PLACEHOLDER: &str = "${CARGO_PKG_VERSION}";

const PACKAGED_PROPERTIES: &str = include_str!("../resources/application.properties");

static PACKAGED_VERSION: OnceLock<Result<String, VersionError>> = OnceLock::new();
static VENDOR_VERSION: OnceLock<String> = OnceLock::new();

/// Error type for version lookup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VersionError {
    #[error("Version unavailable: {0}")]
    Unavailable(String),
}

/// Parse `key=value` / `key: value` lines, skipping blanks and `#`/`!` comments.
pub fn parse_properties(text: &str) -> HashMap<String, String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('!'))
        .map(|line| match line.find(['=', ':']) {
            Some(idx) => (line[..idx].trim(), line[idx + 1..].trim()),
            None => (line, ""),
        })
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Read the version from properties text.
pub fn read_version(properties: &str) -> Result<String, VersionError> {
    parse_properties(properties)
        .remove(VERSION_KEY)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| VersionError::Unavailable(format!("'{}' is not set", VERSION_KEY)))
}

/// Read the version from a properties file on disk.
pub fn read_version_file<P: AsRef<Path>>(path: P) -> Result<String, VersionError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .map_err(|e| VersionError::Unavailable(format!("{}: {}", path.display(), e)))?;
    read_version(&content)
}

/// Packaged properties with [`CRATE_VERSION_PLACEHOLDER`] filled in.
fn packaged_properties() -> String {
    PACKAGED_PROPERTIES.replace(CRATE_VERSION_PLACEHOLDER, env!("CARGO_PKG_VERSION"))
}

/// The packaged version, read on first use.
pub fn packaged_version() -> Result<&'static str, VersionError> {
    PACKAGED_VERSION
        .get_or_init(|| read_version(&packaged_properties()))
        .as_deref()
        .map_err(Clone::clone)
}

/// Version from `properties`, or [`UNKNOWN_VERSION`] when it is not set.
pub fn version_from(properties: &str) -> String {
    read_version(properties).unwrap_or_else(|e| {
        warn!(error = %e, "reporting vendor version as {}", UNKNOWN_VERSION);
        UNKNOWN_VERSION.to_string()
    })
}

/// The packaged version, or [`UNKNOWN_VERSION`] when it is unavailable.
///
/// Resolved once; a missing version is logged on the first call only.
pub fn vendor_version() -> &'static str {
    VENDOR_VERSION.get_or_init(|| version_from(&packaged_properties()))
}
