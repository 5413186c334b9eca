//! Installed package records.

use std::fmt;

use crate::manifest::canonical_key;
use crate::version::Version;

/// One installed package, as recorded by a site directory's metadata entry.
#[derive(Debug, Clone)]
pub struct InstalledPackage {
    /// Name as recorded in the metadata entry.
    pub name: String,
    /// Canonical lookup key derived from `name`.
    pub key: String,
    /// Installed version.
    pub version: Version,
}

impl InstalledPackage {
    /// Build a package record from a metadata directory name such as
    /// `zipp-3.16.2.dist-info` or `flask-1.1.3.egg-info`.
    ///
    /// Returns `None` for entries that are not package metadata.
    pub fn from_metadata_entry(entry_name: &str) -> Option<Self> {
        let stem = entry_name
            .strip_suffix(".dist-info")
            .or_else(|| entry_name.strip_suffix(".egg-info"))?;
        let (name, version) = stem.rsplit_once('-')?;
        if name.is_empty() || version.is_empty() {
            return None;
        }
        Some(InstalledPackage {
            name: name.to_string(),
            key: canonical_key(name),
            version: Version::parse(version),
        })
    }
}

impl fmt::Display for InstalledPackage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.name, self.version)
    }
}
