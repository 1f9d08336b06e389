use std::fmt;

/// Reasons a notification is intentionally not posted.
/// These are silent no-ops, not failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Suppression {
    /// Monthly releases get no pick summaries
    MonthlyRelease { version: String },
    /// Release candidates get no blog-post summary
    ReleaseCandidate { version: String },
    /// Neither picked nor unpicked merge requests were given
    EmptyBatch,
    /// No merge request was picked
    NothingPicked,
}

impl fmt::Display for Suppression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Suppression::MonthlyRelease { version } => {
                write!(f, "'{}' is a monthly release", version)
            }
            Suppression::ReleaseCandidate { version } => {
                write!(f, "'{}' is a release candidate", version)
            }
            Suppression::EmptyBatch => write!(f, "no merge requests were processed"),
            Suppression::NothingPicked => write!(f, "no merge requests were picked"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_version() {
        let reason = Suppression::MonthlyRelease {
            version: "11.4.0".to_string(),
        };
        assert_eq!(reason.to_string(), "'11.4.0' is a monthly release");

        let reason = Suppression::ReleaseCandidate {
            version: "11.4.0-rc2".to_string(),
        };
        assert!(reason.to_string().contains("11.4.0-rc2"));
    }

    #[test]
    fn test_display_batches() {
        assert!(Suppression::EmptyBatch.to_string().contains("no merge requests"));
        assert!(Suppression::NothingPicked.to_string().contains("picked"));
    }
}
