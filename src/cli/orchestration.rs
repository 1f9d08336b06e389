//! Cherry-pick notification workflow
//!
//! Runs the comments for a whole batch of pick outcomes: one comment per
//! outcome, then the preparation merge request summary, then the blog-post
//! summary. Posting is sequential; the first transport error stops the run.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;

use crate::cherry_pick::{
    CommentNotifier, Delivery, MergeRequest, PickOutcome, PickSubject, PreparationMergeRequest,
};
use crate::client::CommentClient;
use crate::config::{Config, ReleaseStatus};
use crate::domain::ReleaseVersion;
use crate::suppression::Suppression;

/// One outcome as written in a batch file
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct OutcomeEntry {
    pub status: String,
    #[serde(default)]
    pub detail: Option<String>,
    pub merge_request: MergeRequest,
}

/// A batch of pick outcomes for one release, loaded from TOML
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PickBatch {
    pub version: ReleaseVersion,
    pub target: PreparationMergeRequest,
    #[serde(default)]
    pub outcomes: Vec<OutcomeEntry>,
}

impl PickBatch {
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Invalid pick batch")
    }

    pub fn load(path: &str) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read pick batch '{}'", path))?;
        Self::from_toml(&text)
    }

    /// Validate every status, failing on the first unknown one
    pub fn outcomes(&self) -> Result<Vec<PickOutcome>> {
        self.outcomes
            .iter()
            .map(|entry| {
                PickOutcome::from_status_str(
                    entry.merge_request.clone(),
                    &entry.status,
                    entry.detail.clone(),
                )
                .with_context(|| format!("Outcome for {}", entry.merge_request.url))
            })
            .collect()
    }
}

/// Counts of what a notification run did
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PickReport {
    pub picked: usize,
    pub unpicked: usize,
    pub posted: usize,
    pub suppressed: Vec<Suppression>,
}

impl PickReport {
    fn record(&mut self, delivery: Delivery) {
        match delivery {
            Delivery::Posted { .. } => self.posted += 1,
            Delivery::Suppressed(reason) => self.suppressed.push(reason),
        }
    }
}

/// Post every comment for a batch of outcomes
///
/// Outcomes are commented on in order. Successful picks form the picked
/// list; denied and failed ones form the unpicked list.
pub fn run_pick_notifications<C, S>(
    notifier: &CommentNotifier<C>,
    outcomes: Vec<PickOutcome<S>>,
) -> crate::error::Result<PickReport>
where
    C: CommentClient,
    S: PickSubject,
{
    let _span = tracing::info_span!("pick_notifications", version = %notifier.version()).entered();
    let mut report = PickReport::default();

    for outcome in &outcomes {
        report.record(notifier.comment(outcome)?);
    }

    let (picked, unpicked): (Vec<_>, Vec<_>) =
        outcomes.into_iter().partition(|outcome| outcome.is_success());
    report.picked = picked.len();
    report.unpicked = unpicked.len();

    report.record(notifier.summary(&picked, &unpicked)?);
    report.record(notifier.blog_post_summary(&picked)?);

    tracing::info!(
        picked = report.picked,
        unpicked = report.unpicked,
        posted = report.posted,
        suppressed = report.suppressed.len(),
        "finished pick notifications"
    );

    Ok(report)
}

/// Build a notifier for a batch, applying config and process status
pub fn build_notifier<C: CommentClient>(
    batch: &PickBatch,
    config: &Config,
    status: ReleaseStatus,
    client: C,
) -> CommentNotifier<C> {
    let version = batch.version.with_security(status.security_release);
    CommentNotifier::new(version, batch.target.clone(), client)
        .with_label_policy(config.labels.pick_into_label())
        .with_docs_url(config.docs.release_process_url.clone())
}

/// Load a batch file and run its notifications through `client`
pub fn run_notify_workflow<C: CommentClient>(
    batch_path: &str,
    config: &Config,
    status: ReleaseStatus,
    client: C,
) -> Result<PickReport> {
    let batch = PickBatch::load(batch_path)?;
    let outcomes = batch.outcomes()?;
    let notifier = build_notifier(&batch, config, status, client);

    run_pick_notifications(&notifier, outcomes)
        .with_context(|| format!("Notifications for {} stopped", batch.version))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::RecordingClient;

    const BATCH: &str = r#"
version = "11.4.1"

[target]
project = "gitlab-org/gitlab-ce"
iid = 1
url = "https://example.com/prep"
pick_destination = "[11-4-stable-patch-1](https://example.com/prep)"

[target.release_issue]
project = "gitlab-org/release/tasks"
iid = 4
url = "https://example.com/issue"

[[outcomes]]
status = "success"
merge_request = { project = "gitlab-org/gitlab-ce", iid = 10, title = "Fix X", url = "https://x/10", author = "liz.lemon" }

[[outcomes]]
status = "denied"
detail = "needs P1 label"
merge_request = { project = "gitlab-org/gitlab-ce", iid = 11, title = "Fix Y", url = "https://x/11" }
"#;

    #[test]
    fn test_batch_from_toml() {
        let batch = PickBatch::from_toml(BATCH).unwrap();
        assert_eq!(batch.version.to_string(), "11.4.1");
        assert_eq!(batch.target.release_issue.iid, 4);
        assert_eq!(batch.outcomes.len(), 2);
        assert_eq!(batch.outcomes[1].merge_request.author, None);
    }

    #[test]
    fn test_batch_rejects_malformed_version() {
        let text = BATCH.replace("\"11.4.1\"", "\"11.4\"");
        assert!(PickBatch::from_toml(&text).is_err());
    }

    #[test]
    fn test_batch_rejects_unknown_status() {
        let text = BATCH.replace("\"denied\"", "\"conflicted\"");
        let batch = PickBatch::from_toml(&text).unwrap();
        let err = batch.outcomes().unwrap_err();
        assert!(format!("{:#}", err).contains("conflicted"));
    }

    #[test]
    fn test_run_pick_notifications() {
        let batch = PickBatch::from_toml(BATCH).unwrap();
        let client = RecordingClient::new();
        let notifier = build_notifier(&batch, &Config::default(), ReleaseStatus::default(), &client);

        let report = run_pick_notifications(&notifier, batch.outcomes().unwrap()).unwrap();

        assert_eq!(report.picked, 1);
        assert_eq!(report.unpicked, 1);
        // two per-outcome comments, the summary and the blog-post summary
        assert_eq!(report.posted, 4);
        assert!(report.suppressed.is_empty());
        assert_eq!(client.posted().len(), 4);
    }

    #[test]
    fn test_run_pick_notifications_monthly() {
        let text = BATCH.replace("\"11.4.1\"", "\"11.4.0\"");
        let batch = PickBatch::from_toml(&text).unwrap();
        let client = RecordingClient::new();
        let notifier = build_notifier(&batch, &Config::default(), ReleaseStatus::default(), &client);

        let report = run_pick_notifications(&notifier, batch.outcomes().unwrap()).unwrap();

        assert_eq!(report.posted, 2);
        assert_eq!(report.suppressed.len(), 2);
    }

    #[test]
    fn test_run_stops_on_transport_error() {
        let batch = PickBatch::from_toml(BATCH).unwrap();
        let client = RecordingClient::failing("timeout");
        let notifier = build_notifier(&batch, &Config::default(), ReleaseStatus::default(), &client);

        assert!(run_pick_notifications(&notifier, batch.outcomes().unwrap()).is_err());
    }

    #[test]
    fn test_build_notifier_applies_status() {
        let batch = PickBatch::from_toml(BATCH).unwrap();
        let status = ReleaseStatus {
            security_release: true,
            dry_run: false,
        };
        let notifier = build_notifier(&batch, &Config::default(), status, RecordingClient::new());
        assert!(notifier.version().is_security());
    }
}
