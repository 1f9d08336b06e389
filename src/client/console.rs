use crate::client::{CommentClient, Location};
use crate::error::Result;
use crate::ui;

/// Dry-run transport: prints each comment instead of posting it
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleClient;

impl ConsoleClient {
    pub fn new() -> Self {
        ConsoleClient
    }
}

impl CommentClient for ConsoleClient {
    fn post_comment(&self, location: &Location, body: &str) -> Result<()> {
        tracing::info!(location = %location, bytes = body.len(), "dry run: printing comment");
        ui::display_comment(location, body);
        Ok(())
    }
}
