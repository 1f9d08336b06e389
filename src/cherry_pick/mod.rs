//! Cherry-pick outcomes and the comments reporting them

pub mod notifier;
pub mod outcome;
pub mod target;

pub use notifier::{CommentNotifier, Delivery};
pub use outcome::{MergeRequest, PickOutcome, PickStatus, PickSubject};
pub use target::{PreparationMergeRequest, ReleaseIssue};
