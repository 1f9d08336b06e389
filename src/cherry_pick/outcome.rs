use crate::client::Location;
use crate::error::{ReleaseToolsError, Result};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Anything that can be cherry-picked and commented on
pub trait PickSubject {
    /// Username of the author, if known
    fn author_username(&self) -> Option<&str>;
    fn title(&self) -> &str;
    fn url(&self) -> &str;
    /// Where comments about this subject are posted
    fn location(&self) -> Location;
}

/// A merged merge request, as handed over by the API collaborator
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MergeRequest {
    pub project: String,
    pub iid: u64,
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub author: Option<String>,
}

impl PickSubject for MergeRequest {
    fn author_username(&self) -> Option<&str> {
        self.author
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn url(&self) -> &str {
        &self.url
    }

    fn location(&self) -> Location {
        Location::merge_request(self.project.clone(), self.iid)
    }
}

/// Classification of one cherry-pick attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PickStatus {
    /// Picked cleanly into the stable branch
    Success,
    /// Not eligible for an automatic pick
    Denied,
    /// Attempted but could not be applied, e.g. a merge conflict
    Failure,
}

impl FromStr for PickStatus {
    type Err = ReleaseToolsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "success" => Ok(PickStatus::Success),
            "denied" => Ok(PickStatus::Denied),
            "failure" => Ok(PickStatus::Failure),
            _ => Err(ReleaseToolsError::invalid_status(format!(
                "'{}' - expected one of success, denied, failure",
                s
            ))),
        }
    }
}

impl fmt::Display for PickStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PickStatus::Success => write!(f, "success"),
            PickStatus::Denied => write!(f, "denied"),
            PickStatus::Failure => write!(f, "failure"),
        }
    }
}

/// Terminal result of picking one subject into a stable branch
///
/// The status is fixed at construction. A detail is only kept for
/// [PickStatus::Denied]; for any other status it is dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickOutcome<S = MergeRequest> {
    subject: S,
    status: PickStatus,
    detail: Option<String>,
}

impl<S: PickSubject> PickOutcome<S> {
    pub fn new(subject: S, status: PickStatus) -> Self {
        PickOutcome {
            subject,
            status,
            detail: None,
        }
    }

    pub fn success(subject: S) -> Self {
        Self::new(subject, PickStatus::Success)
    }

    pub fn failure(subject: S) -> Self {
        Self::new(subject, PickStatus::Failure)
    }

    /// A denied pick, optionally explaining why
    pub fn denied(subject: S, reason: Option<String>) -> Self {
        Self::with_detail(subject, PickStatus::Denied, reason)
    }

    /// Build an outcome with an optional detail; non-denied details are ignored
    pub fn with_detail(subject: S, status: PickStatus, detail: Option<String>) -> Self {
        let detail = match (status, detail) {
            (PickStatus::Denied, detail) => detail.filter(|d| !d.trim().is_empty()),
            (_, Some(ignored)) => {
                tracing::debug!(
                    status = %status,
                    detail = %ignored,
                    "ignoring detail on non-denied pick outcome"
                );
                None
            }
            (_, None) => None,
        };

        PickOutcome {
            subject,
            status,
            detail,
        }
    }

    /// Build an outcome from a textual status such as `"denied"`
    pub fn from_status_str(subject: S, status: &str, detail: Option<String>) -> Result<Self> {
        let status = status.parse::<PickStatus>()?;
        Ok(Self::with_detail(subject, status, detail))
    }

    pub fn subject(&self) -> &S {
        &self.subject
    }

    pub fn status(&self) -> PickStatus {
        self.status
    }

    /// Reason a pick was denied
    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    pub fn is_success(&self) -> bool {
        self.status == PickStatus::Success
    }

    pub fn is_denied(&self) -> bool {
        self.status == PickStatus::Denied
    }

    pub fn is_failure(&self) -> bool {
        self.status == PickStatus::Failure
    }

    pub fn title(&self) -> &str {
        self.subject.title()
    }

    pub fn url(&self) -> &str {
        self.subject.url()
    }

    /// `[title](url)`
    pub fn to_markdown(&self) -> String {
        format!("[{}]({})", self.title(), self.url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn merge_request() -> MergeRequest {
        MergeRequest {
            project: "gitlab-org/gitlab-ce".to_string(),
            iid: 3,
            title: "Fix X".to_string(),
            url: "https://x/1".to_string(),
            author: Some("liz.lemon".to_string()),
        }
    }

    #[test]
    fn test_status_parse() {
        assert_eq!("success".parse::<PickStatus>().unwrap(), PickStatus::Success);
        assert_eq!("Denied".parse::<PickStatus>().unwrap(), PickStatus::Denied);
        assert_eq!("FAILURE".parse::<PickStatus>().unwrap(), PickStatus::Failure);
    }

    #[test]
    fn test_status_parse_invalid() {
        let err = "conflict".parse::<PickStatus>().unwrap_err();
        assert!(matches!(err, ReleaseToolsError::InvalidStatus(_)));
        assert!(err.to_string().contains("conflict"));
    }

    #[test]
    fn test_status_display() {
        assert_eq!(PickStatus::Denied.to_string(), "denied");
    }

    #[test]
    fn test_projections() {
        let outcome = PickOutcome::success(merge_request());
        assert_eq!(outcome.title(), "Fix X");
        assert_eq!(outcome.url(), "https://x/1");
        assert_eq!(outcome.to_markdown(), "[Fix X](https://x/1)");
        assert!(outcome.is_success());
        assert!(!outcome.is_failure());
    }

    #[test]
    fn test_denied_keeps_detail() {
        let outcome = PickOutcome::denied(merge_request(), Some("needs P1 label".to_string()));
        assert!(outcome.is_denied());
        assert_eq!(outcome.detail(), Some("needs P1 label"));
    }

    #[test]
    fn test_blank_detail_is_absent() {
        let outcome = PickOutcome::denied(merge_request(), Some("  ".to_string()));
        assert_eq!(outcome.detail(), None);
    }

    #[test]
    fn test_detail_ignored_for_other_statuses() {
        let outcome = PickOutcome::with_detail(
            merge_request(),
            PickStatus::Failure,
            Some("conflict in Gemfile.lock".to_string()),
        );
        assert!(outcome.is_failure());
        assert_eq!(outcome.detail(), None);
    }

    #[test]
    fn test_from_status_str() {
        let outcome =
            PickOutcome::from_status_str(merge_request(), "denied", Some("why".to_string()))
                .unwrap();
        assert_eq!(outcome.status(), PickStatus::Denied);
        assert!(PickOutcome::from_status_str(merge_request(), "picked", None).is_err());
    }

    #[test]
    fn test_blank_author_is_unknown() {
        let mut mr = merge_request();
        mr.author = Some(String::new());
        assert_eq!(mr.author_username(), None);
        mr.author = Some("   ".to_string());
        assert_eq!(mr.author_username(), None);
    }

    #[test]
    fn test_author_is_trimmed() {
        let mut mr = merge_request();
        mr.author = Some(" liz ".to_string());
        assert_eq!(mr.author_username(), Some("liz"));
    }

    #[test]
    fn test_subject_location() {
        assert_eq!(
            merge_request().location(),
            Location::merge_request("gitlab-org/gitlab-ce", 3)
        );
    }
}
