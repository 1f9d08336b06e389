use crate::client::Location;
use serde::Deserialize;

/// Issue tracking the progress of one release
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReleaseIssue {
    pub project: String,
    pub iid: u64,
    pub url: String,
    #[serde(default)]
    pub description: String,
}

impl ReleaseIssue {
    pub fn location(&self) -> Location {
        Location::issue(self.project.clone(), self.iid)
    }
}

/// Merge request collecting the picks for a stable branch
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PreparationMergeRequest {
    pub project: String,
    pub iid: u64,
    pub url: String,
    /// Markdown describing the branch picks land in, e.g. `[11-4-stable-prepare-rc2](https://...)`
    pub pick_destination: String,
    pub release_issue: ReleaseIssue,
}

impl PreparationMergeRequest {
    pub fn location(&self) -> Location {
        Location::merge_request(self.project.clone(), self.iid)
    }
}
