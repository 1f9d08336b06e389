use crate::error::{ReleaseToolsError, Result};
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::LazyLock;

static VERSION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(0|[1-9]\d*)\.(0|[1-9]\d*)\.(0|[1-9]\d*)(?:-rc([1-9]\d*))?(-ee)?$")
        .expect("version pattern is a valid regex")
});

/// A release version such as `11.4.1`, `11.4.0-rc3` or `11.4.0-ee`.
///
/// Equality, hashing and ordering only consider the parsed components.
/// The `security` flag comes from the process context and never from the
/// version string, so two versions differing only in that flag compare equal.
#[derive(Debug, Clone, Copy)]
pub struct ReleaseVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    rc: Option<u32>,
    enterprise: bool,
    security: bool,
}

impl ReleaseVersion {
    /// Create a final CE version from its components
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        ReleaseVersion {
            major,
            minor,
            patch,
            rc: None,
            enterprise: false,
            security: false,
        }
    }

    /// Parse a version string of the form `MAJOR.MINOR.PATCH[-rcN][-ee]`
    pub fn parse(text: &str) -> Result<Self> {
        let captures = VERSION_PATTERN.captures(text).ok_or_else(|| {
            ReleaseToolsError::malformed_version(format!(
                "'{}' - expected MAJOR.MINOR.PATCH[-rcN][-ee]",
                text
            ))
        })?;

        let component = |index: usize, name: &str| -> Result<u32> {
            captures[index].parse::<u32>().map_err(|_| {
                ReleaseToolsError::malformed_version(format!(
                    "'{}' - {} component out of range",
                    text, name
                ))
            })
        };

        let rc = match captures.get(4) {
            Some(m) => Some(m.as_str().parse::<u32>().map_err(|_| {
                ReleaseToolsError::malformed_version(format!(
                    "'{}' - rc component out of range",
                    text
                ))
            })?),
            None => None,
        };

        Ok(ReleaseVersion {
            major: component(1, "major")?,
            minor: component(2, "minor")?,
            patch: component(3, "patch")?,
            rc,
            enterprise: captures.get(5).is_some(),
            security: false,
        })
    }

    /// Mark this version as release candidate `n`
    ///
    /// Returns `MalformedVersion` for `n == 0`; rc numbers start at 1.
    pub fn with_rc(self, n: u32) -> Result<Self> {
        if n == 0 {
            return Err(ReleaseToolsError::malformed_version(format!(
                "'{}-rc0' - rc numbers start at 1",
                self.to_patch()
            )));
        }
        Ok(ReleaseVersion { rc: Some(n), ..self })
    }

    pub fn with_enterprise(self) -> Self {
        ReleaseVersion {
            enterprise: true,
            ..self
        }
    }

    /// Flag this version as part of a security release
    pub fn with_security(self, security: bool) -> Self {
        ReleaseVersion { security, ..self }
    }

    pub fn rc(&self) -> Option<u32> {
        self.rc
    }

    pub fn is_rc(&self) -> bool {
        self.rc.is_some()
    }

    pub fn is_ee(&self) -> bool {
        self.enterprise
    }

    pub fn is_security(&self) -> bool {
        self.security
    }

    /// First release of a minor series: `X.Y.0` without an rc marker
    pub fn is_monthly(&self) -> bool {
        self.patch == 0 && self.rc.is_none()
    }

    /// Name of the branch receiving backports for this minor series
    pub fn stable_branch(&self) -> String {
        let mut branch = format!("{}-{}-stable", self.major, self.minor);
        if self.enterprise {
            branch.push_str("-ee");
        }
        branch
    }

    /// Git tag for this version, e.g. `v11.4.0-rc3-ee`
    pub fn tag(&self) -> String {
        let mut tag = format!("v{}", self.to_patch());
        if let Some(rc) = self.rc {
            tag.push_str(&format!("-rc{}", rc));
        }
        if self.enterprise {
            tag.push_str("-ee");
        }
        tag
    }

    /// `MAJOR.MINOR`, used to name per-series labels
    pub fn to_minor(&self) -> String {
        format!("{}.{}", self.major, self.minor)
    }

    /// `MAJOR.MINOR.PATCH` without rc or edition markers
    pub fn to_patch(&self) -> String {
        format!("{}.{}.{}", self.major, self.minor, self.patch)
    }

    pub fn to_ce(&self) -> Self {
        ReleaseVersion {
            enterprise: false,
            ..*self
        }
    }

    pub fn to_ee(&self) -> Self {
        self.with_enterprise()
    }

    /// The final release this version is a candidate for
    pub fn without_rc(&self) -> Self {
        ReleaseVersion { rc: None, ..*self }
    }

    pub fn next_patch(&self) -> Result<Self> {
        Ok(ReleaseVersion {
            patch: self.bump(self.patch, "patch")?,
            rc: None,
            ..*self
        })
    }

    pub fn next_minor(&self) -> Result<Self> {
        Ok(ReleaseVersion {
            minor: self.bump(self.minor, "minor")?,
            patch: 0,
            rc: None,
            ..*self
        })
    }

    pub fn next_major(&self) -> Result<Self> {
        Ok(ReleaseVersion {
            major: self.bump(self.major, "major")?,
            minor: 0,
            patch: 0,
            rc: None,
            ..*self
        })
    }

    fn bump(&self, component: u32, name: &str) -> Result<u32> {
        component.checked_add(1).ok_or_else(|| {
            ReleaseToolsError::malformed_version(format!(
                "'{}' - {} component cannot be incremented",
                self, name
            ))
        })
    }

    fn identity(&self) -> (u32, u32, u32, RcRank, bool) {
        (
            self.major,
            self.minor,
            self.patch,
            RcRank(self.rc),
            self.enterprise,
        )
    }
}

/// Orders rc'd versions before the final release of the same patch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct RcRank(Option<u32>);

impl Ord for RcRank {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.0, other.0) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(a), Some(b)) => a.cmp(&b),
        }
    }
}

impl PartialOrd for RcRank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for ReleaseVersion {
    fn eq(&self, other: &Self) -> bool {
        self.identity() == other.identity()
    }
}

impl Eq for ReleaseVersion {}

impl Hash for ReleaseVersion {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity().hash(state);
    }
}

impl Ord for ReleaseVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.identity().cmp(&other.identity())
    }
}

impl PartialOrd for ReleaseVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for ReleaseVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(rc) = self.rc {
            write!(f, "-rc{}", rc)?;
        }
        if self.enterprise {
            write!(f, "-ee")?;
        }
        Ok(())
    }
}

impl FromStr for ReleaseVersion {
    type Err = ReleaseToolsError;

    fn from_str(s: &str) -> Result<Self> {
        ReleaseVersion::parse(s)
    }
}

impl Serialize for ReleaseVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ReleaseVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        ReleaseVersion::parse(&text).map_err(serde::de::Error::custom)
    }
}
