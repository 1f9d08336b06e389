pub mod cherry_pick;
pub mod cli;
pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod suppression;
pub mod ui;

pub use error::{ReleaseToolsError, Result};
