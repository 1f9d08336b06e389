//! Operations over collections of release versions

use crate::domain::ReleaseVersion;
use crate::error::Result;
use std::collections::HashSet;

/// Source of every known release version string
pub trait VersionCatalog {
    fn versions(&self) -> Result<Vec<String>>;
}

/// Catalog backed by a fixed list, e.g. the `[catalog]` config section
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    versions: Vec<String>,
}

impl StaticCatalog {
    pub fn new(versions: Vec<String>) -> Self {
        StaticCatalog { versions }
    }
}

impl VersionCatalog for StaticCatalog {
    fn versions(&self) -> Result<Vec<String>> {
        Ok(self.versions.clone())
    }
}

/// Parse every string, failing on the first malformed entry
pub fn parse_all<S: AsRef<str>>(texts: &[S]) -> Result<Vec<ReleaseVersion>> {
    texts
        .iter()
        .map(|text| ReleaseVersion::parse(text.as_ref()))
        .collect()
}

/// Latest `count` versions, keeping only the newest one per minor series
///
/// Example: `["1.0.0", "1.1.0", "1.1.1", "1.2.3"]` with a count of 3
/// yields `["1.2.3", "1.1.1", "1.0.0"]`.
pub fn latest_of(versions: &[ReleaseVersion], count: usize) -> Vec<ReleaseVersion> {
    let mut sorted = versions.to_vec();
    sorted.sort_by(|a, b| b.cmp(a));

    let mut seen = HashSet::new();
    sorted
        .into_iter()
        .filter(|version| seen.insert((version.major, version.minor)))
        .take(count)
        .collect()
}

/// Next patch of each of the three most recent minor series
///
/// Series older than the three most recent are skipped.
pub fn next_security_versions<S: AsRef<str>>(all_versions: &[S]) -> Result<Vec<ReleaseVersion>> {
    let parsed = parse_all(all_versions)?;
    let targets: Vec<ReleaseVersion> = latest_of(&parsed, 3)
        .iter()
        .map(|version| version.next_patch())
        .collect::<Result<_>>()?;

    tracing::debug!(
        known = parsed.len(),
        targets = ?targets.iter().map(ToString::to_string).collect::<Vec<_>>(),
        "computed next security versions"
    );

    Ok(targets)
}

/// Same as [`next_security_versions`], reading the known versions from a catalog
pub fn next_security_versions_from<C: VersionCatalog>(catalog: &C) -> Result<Vec<ReleaseVersion>> {
    next_security_versions(&catalog.versions()?)
}
