use crate::client::{CommentClient, Location};
use crate::error::{ReleaseToolsError, Result};
use std::sync::Mutex;

/// A comment accepted by a [RecordingClient]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostedComment {
    pub location: Location,
    pub body: String,
}

/// In-memory client recording every comment instead of sending it
pub struct RecordingClient {
    posted: Mutex<Vec<PostedComment>>,
    failure: Option<String>,
}

impl RecordingClient {
    /// Create a client that accepts every comment
    pub fn new() -> Self {
        RecordingClient {
            posted: Mutex::new(Vec::new()),
            failure: None,
        }
    }

    /// Create a client whose every post fails with a transport error
    pub fn failing(message: impl Into<String>) -> Self {
        RecordingClient {
            posted: Mutex::new(Vec::new()),
            failure: Some(message.into()),
        }
    }

    /// Comments accepted so far, oldest first
    pub fn posted(&self) -> Vec<PostedComment> {
        match self.posted.lock() {
            Ok(posted) => posted.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Comments accepted at one location, oldest first
    pub fn posted_to(&self, location: &Location) -> Vec<PostedComment> {
        self.posted()
            .into_iter()
            .filter(|comment| &comment.location == location)
            .collect()
    }
}

impl Default for RecordingClient {
    fn default() -> Self {
        Self::new()
    }
}

impl CommentClient for RecordingClient {
    fn post_comment(&self, location: &Location, body: &str) -> Result<()> {
        if let Some(message) = &self.failure {
            return Err(ReleaseToolsError::transport(format!(
                "{} (posting to {})",
                message, location
            )));
        }

        let mut posted = self
            .posted
            .lock()
            .map_err(|_| ReleaseToolsError::transport("recording client lock poisoned"))?;
        posted.push(PostedComment {
            location: location.clone(),
            body: body.to_string(),
        });
        Ok(())
    }
}
