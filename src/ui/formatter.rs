//! Pure formatting functions for UI output.
//!
//! This module contains all display/formatting logic. Functions here either
//! build strings or print them, nothing else.

use console::style;

use crate::cli::orchestration::PickReport;
use crate::client::Location;
use crate::domain::ReleaseVersion;
use crate::error::Result;
use crate::suppression::Suppression;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display why a notification was skipped.
pub fn display_suppression(reason: &Suppression) {
    println!("{} skipped: {}", style("⚠").yellow(), reason);
}

/// Display a comment body as it would be posted.
///
/// # Arguments
/// * `location` - Where the comment would be posted
/// * `body` - The markdown body
pub fn display_comment(location: &Location, body: &str) {
    println!("\n{}", style(format!("Comment on {}:", location)).bold());
    for line in body.lines() {
        println!("  {}", line);
    }
}

/// Every derived fact about a version, in display order.
///
/// Fails when a next version cannot be derived because a component is at
/// its maximum.
pub fn version_facts(version: &ReleaseVersion) -> Result<Vec<(&'static str, String)>> {
    Ok(vec![
        ("Version", version.to_string()),
        ("Tag", version.tag()),
        ("Stable branch", version.stable_branch()),
        ("Monthly", version.is_monthly().to_string()),
        ("Release candidate", version.is_rc().to_string()),
        ("Security", version.is_security().to_string()),
        ("Next patch", version.next_patch()?.to_string()),
        ("Next minor", version.next_minor()?.to_string()),
        ("Next major", version.next_major()?.to_string()),
    ])
}

/// Display the derived facts of a version as an aligned table.
pub fn display_version_facts(version: &ReleaseVersion) -> Result<()> {
    let facts = version_facts(version)?;
    println!("{}", style(format!("Release {}", version)).bold());
    for (name, value) in facts {
        println!("  {:<18} {}", format!("{}:", name), style(value).cyan());
    }
    Ok(())
}

/// Display upcoming security versions, newest series first.
pub fn display_security_versions(versions: &[ReleaseVersion]) {
    if versions.is_empty() {
        display_status("No known versions to derive security releases from");
        return;
    }

    println!("{}", style("Next security versions:").bold());
    for version in versions {
        println!("  - {}", style(version).green());
    }
}

/// Display the outcome of a notification run.
pub fn display_report(report: &PickReport) {
    display_success(&format!(
        "{} picked, {} not picked, {} comment(s) posted",
        report.picked, report.unpicked, report.posted
    ));
    for reason in &report.suppressed {
        display_suppression(reason);
    }
}
