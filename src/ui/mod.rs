//! User interface module - terminal output for the CLI and dry runs.

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_comment, display_error, display_report, display_security_versions, display_status,
    display_success, display_suppression, display_version_facts,
};
