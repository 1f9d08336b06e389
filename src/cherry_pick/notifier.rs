//! Comment composition for cherry-pick outcomes.
//!
//! [CommentNotifier] renders the comment for each pick outcome and the
//! batch summaries for a release, decides whether each one is posted at all,
//! and hands accepted bodies to a [CommentClient] exactly once.

use crate::cherry_pick::{PickOutcome, PickStatus, PickSubject, PreparationMergeRequest};
use crate::client::{CommentClient, Location};
use crate::domain::{LabelPolicy, PickIntoLabel, ReleaseVersion};
use crate::error::Result;
use crate::suppression::Suppression;

pub const DEFAULT_DOCS_URL: &str =
    "https://about.gitlab.com/handbook/engineering/releases/#gitlabcom-releases-2";

/// What happened to one notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    Posted { location: Location },
    Suppressed(Suppression),
}

impl Delivery {
    pub fn is_posted(&self) -> bool {
        matches!(self, Delivery::Posted { .. })
    }
}

/// Posts pick outcomes for one release version
pub struct CommentNotifier<C: CommentClient> {
    version: ReleaseVersion,
    target: PreparationMergeRequest,
    client: C,
    label_policy: Box<dyn LabelPolicy + Send + Sync>,
    docs_url: String,
}

impl<C: CommentClient> CommentNotifier<C> {
    pub fn new(version: ReleaseVersion, target: PreparationMergeRequest, client: C) -> Self {
        CommentNotifier {
            version,
            target,
            client,
            label_policy: Box::new(PickIntoLabel::default()),
            docs_url: DEFAULT_DOCS_URL.to_string(),
        }
    }

    /// Replace the label naming used in `/unlabel` quick actions
    pub fn with_label_policy(mut self, policy: impl LabelPolicy + Send + Sync + 'static) -> Self {
        self.label_policy = Box::new(policy);
        self
    }

    /// Replace the release process link used in denied comments
    pub fn with_docs_url(mut self, url: impl Into<String>) -> Self {
        self.docs_url = url.into();
        self
    }

    pub fn version(&self) -> &ReleaseVersion {
        &self.version
    }

    pub fn target(&self) -> &PreparationMergeRequest {
        &self.target
    }

    /// Comment on the picked subject itself
    pub fn comment<S: PickSubject>(&self, outcome: &PickOutcome<S>) -> Result<Delivery> {
        let body = match outcome.status() {
            PickStatus::Success => self.success_body(),
            PickStatus::Denied => self.denied_body(outcome),
            PickStatus::Failure => self.failure_body(outcome),
        };

        self.post(outcome.subject().location(), &body)
    }

    /// Summary of a batch, posted to the preparation merge request
    ///
    /// # Arguments
    /// * `picked` - Successful outcomes
    /// * `unpicked` - Denied and failed outcomes
    pub fn summary<S: PickSubject>(
        &self,
        picked: &[PickOutcome<S>],
        unpicked: &[PickOutcome<S>],
    ) -> Result<Delivery> {
        if self.version.is_monthly() {
            return Ok(self.suppress(Suppression::MonthlyRelease {
                version: self.version.to_string(),
            }));
        }
        if picked.is_empty() && unpicked.is_empty() {
            return Ok(self.suppress(Suppression::EmptyBatch));
        }

        let mut sections = Vec::new();

        if !picked.is_empty() {
            sections.push(format!(
                "Successfully picked the following merge requests:\n\n{}\n",
                markdown_list(picked.iter().map(|p| p.url()))
            ));
        }

        if !unpicked.is_empty() {
            sections.push(format!(
                "Failed to pick the following merge requests:\n\n{}\n",
                markdown_list(unpicked.iter().map(|p| p.url()))
            ));
        }

        self.post(self.target.location(), &sections.join("\n"))
    }

    /// List of picked merge requests for the release blog post, posted to
    /// the release issue
    pub fn blog_post_summary<S: PickSubject>(&self, picked: &[PickOutcome<S>]) -> Result<Delivery> {
        if self.version.is_monthly() {
            return Ok(self.suppress(Suppression::MonthlyRelease {
                version: self.version.to_string(),
            }));
        }
        if self.version.is_rc() {
            return Ok(self.suppress(Suppression::ReleaseCandidate {
                version: self.version.to_string(),
            }));
        }
        if picked.is_empty() {
            return Ok(self.suppress(Suppression::NothingPicked));
        }

        let body = format!(
            "The following merge requests were picked into {}:\n\n```\n{}\n```\n",
            self.target.pick_destination,
            markdown_list(picked.iter().map(|p| p.to_markdown()))
        );

        self.post(self.target.release_issue.location(), &body)
    }

    fn success_body(&self) -> String {
        format!(
            "Automatically picked into {}, will merge into\n\
             `{}` ready for `{}`.\n\
             \n\
             /unlabel {}\n",
            self.target.pick_destination,
            self.version.stable_branch(),
            self.version,
            self.label_reference()
        )
    }

    fn denied_body<S: PickSubject>(&self, outcome: &PickOutcome<S>) -> String {
        let reason = match outcome.detail() {
            Some(detail) => format!(":\n\n* {}\n\n", detail),
            None => ". ".to_string(),
        };

        format!(
            "{}This merge request could not automatically be picked into\n\
             `{}` for `{}`{}This requires manual intervention.\n\
             \n\
             Please refer to\n\
             [the release process documentation]({})\n\
             \n\
             /unlabel {}\n",
            mention(outcome.subject()),
            self.version.stable_branch(),
            self.version,
            reason,
            self.docs_url,
            self.label_reference()
        )
    }

    fn failure_body<S: PickSubject>(&self, outcome: &PickOutcome<S>) -> String {
        let label = self.label_reference();
        let destination = &self.target.pick_destination;

        format!(
            "{}This merge request could not automatically be picked into\n\
             `{}` for `{}` and will need manual\n\
             intervention. You can either:\n\
             \n\
             * Create a new MR targeting the source branch of {},\n  \
             and assign to release managers, or\n\
             * Solve the conflicts against {}, and reassign\n  \
             the {} label to this merge request.\n\
             \n\
             /unlabel {}\n",
            mention(outcome.subject()),
            self.version.stable_branch(),
            self.version,
            destination,
            destination,
            label,
            label
        )
    }

    fn label_reference(&self) -> String {
        self.label_policy.label_reference(&self.version)
    }

    fn post(&self, location: Location, body: &str) -> Result<Delivery> {
        self.client.post_comment(&location, body)?;
        tracing::info!(
            version = %self.version,
            location = %location,
            "posted cherry-pick comment"
        );
        Ok(Delivery::Posted { location })
    }

    fn suppress(&self, reason: Suppression) -> Delivery {
        tracing::info!(version = %self.version, reason = %reason, "skipped cherry-pick comment");
        Delivery::Suppressed(reason)
    }
}

/// `@username ` or nothing when the author is unknown
fn mention<S: PickSubject>(subject: &S) -> String {
    match subject.author_username() {
        Some(username) => format!("@{} ", username),
        None => String::new(),
    }
}

fn markdown_list<I, T>(items: I) -> String
where
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    items
        .into_iter()
        .map(|item| format!("* {}", item.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}
