use crate::domain::ReleaseVersion;

/// Renders the label token used in `/unlabel` quick actions
pub trait LabelPolicy {
    fn label_reference(&self, version: &ReleaseVersion) -> String;
}

/// "Pick into X.Y" label naming (e.g. `~"Pick into 11.4"`)
///
/// The pattern may use `{minor}` (`11.4`), `{major}` and `{version}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickIntoLabel {
    pub pattern: String,
}

pub const DEFAULT_PICK_INTO_PATTERN: &str = "Pick into {minor}";

impl PickIntoLabel {
    pub fn new(pattern: impl Into<String>) -> Self {
        PickIntoLabel {
            pattern: pattern.into(),
        }
    }

    /// Plain label name without the `~"..."` reference syntax
    pub fn name(&self, version: &ReleaseVersion) -> String {
        self.pattern
            .replace("{minor}", &version.to_minor())
            .replace("{major}", &version.major.to_string())
            .replace("{version}", &version.to_string())
    }
}

impl Default for PickIntoLabel {
    fn default() -> Self {
        PickIntoLabel::new(DEFAULT_PICK_INTO_PATTERN)
    }
}

impl LabelPolicy for PickIntoLabel {
    fn label_reference(&self, version: &ReleaseVersion) -> String {
        format!("~\"{}\"", self.name(version))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_reference() {
        let version = ReleaseVersion::parse("11.4.1").unwrap();
        assert_eq!(
            PickIntoLabel::default().label_reference(&version),
            "~\"Pick into 11.4\""
        );
    }

    #[test]
    fn test_custom_pattern() {
        let label = PickIntoLabel::new("backport::{major}/{version}");
        let version = ReleaseVersion::parse("12.0.3-ee").unwrap();
        assert_eq!(label.name(&version), "backport::12/12.0.3-ee");
    }

    #[test]
    fn test_rc_uses_minor_series() {
        let version = ReleaseVersion::parse("11.5.0-rc2").unwrap();
        assert_eq!(PickIntoLabel::default().name(&version), "Pick into 11.5");
    }
}
