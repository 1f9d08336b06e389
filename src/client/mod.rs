//! Comment transport abstraction layer
//!
//! The notifier never talks to an API directly. It renders message bodies and
//! hands each one to a [CommentClient], which owns transport, authentication
//! and retries.
//!
//! # Implementations
//!
//! - [recording::RecordingClient]: keeps posted comments in memory
//! - [console::ConsoleClient]: dry-run transport printing each body to stdout
//!
//! Real API clients live outside this crate and only need to implement
//! [CommentClient].

pub mod console;
pub mod recording;

pub use console::ConsoleClient;
pub use recording::{PostedComment, RecordingClient};

use crate::error::Result;
use std::fmt;

/// Where a comment is posted
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Location {
    /// A merge request, addressed by project path and internal id
    MergeRequest { project: String, iid: u64 },
    /// An issue, addressed by project path and internal id
    Issue { project: String, iid: u64 },
}

impl Location {
    pub fn merge_request(project: impl Into<String>, iid: u64) -> Self {
        Location::MergeRequest {
            project: project.into(),
            iid,
        }
    }

    pub fn issue(project: impl Into<String>, iid: u64) -> Self {
        Location::Issue {
            project: project.into(),
            iid,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::MergeRequest { project, iid } => write!(f, "{}!{}", project, iid),
            Location::Issue { project, iid } => write!(f, "{}#{}", project, iid),
        }
    }
}

/// Capability to post a comment somewhere
///
/// ## Thread Safety
///
/// All implementors must be `Send + Sync` so one client can be shared by
/// several notifiers.
///
/// ## Error Handling
///
/// Transport failures are reported as
/// [crate::error::ReleaseToolsError::Transport] and are never retried by
/// callers in this crate.
pub trait CommentClient: Send + Sync {
    /// Post `body` as a new comment at `location`
    ///
    /// # Arguments
    /// * `location` - The merge request or issue receiving the comment
    /// * `body` - Markdown body, including any quick actions
    ///
    /// # Returns
    /// * `Ok(())` - The comment was accepted
    /// * `Err` - If the transport rejected or failed to deliver it
    fn post_comment(&self, location: &Location, body: &str) -> Result<()>;
}

impl<C: CommentClient + ?Sized> CommentClient for &C {
    fn post_comment(&self, location: &Location, body: &str) -> Result<()> {
        (**self).post_comment(location, body)
    }
}
