use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use release_tools::cli::orchestration::run_notify_workflow;
use release_tools::client::ConsoleClient;
use release_tools::config::{self, Config, ReleaseStatus};
use release_tools::domain::versions::{next_security_versions, next_security_versions_from};
use release_tools::domain::ReleaseVersion;
use release_tools::ui;

#[derive(Parser)]
#[command(
    name = "release-tools",
    version,
    about = "Derive release identifiers and report cherry-pick outcomes"
)]
struct Args {
    #[arg(short, long, global = true, help = "Custom configuration file path")]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the tag, stable branch and next versions for a release
    Info {
        version: String,

        #[arg(long, help = "Treat the version as part of a security release")]
        security: bool,
    },

    /// Propose the next security patch versions
    SecurityVersions {
        #[arg(help = "Known versions; defaults to the [catalog] config section")]
        versions: Vec<String>,
    },

    /// Post the comments for a batch of cherry-pick outcomes
    Notify {
        #[arg(short, long, help = "TOML file describing the version, target and outcomes")]
        batch: String,

        #[arg(long, help = "Print comments instead of posting them")]
        dry_run: bool,
    },
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_env("RELEASE_TOOLS_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_logging();

    if let Err(e) = run(Args::parse()) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = config::load_config(args.config.as_deref())?;
    let status = ReleaseStatus::resolve(&config.status);

    match args.command {
        Command::Info { version, security } => {
            let version = ReleaseVersion::parse(&version)?
                .with_security(security || status.security_release);
            ui::display_version_facts(&version)?;
        }
        Command::SecurityVersions { versions } => {
            let next = if versions.is_empty() {
                next_security_versions_from(&config.catalog.to_catalog())?
            } else {
                next_security_versions(&versions)?
            };
            ui::display_security_versions(&next);
        }
        Command::Notify { batch, dry_run } => notify(&batch, &config, status, dry_run)?,
    }

    Ok(())
}

fn notify(batch: &str, config: &Config, status: ReleaseStatus, dry_run: bool) -> Result<()> {
    if !(dry_run || status.dry_run) {
        anyhow::bail!(
            "No comment transport is configured for live posting; re-run with --dry-run or TEST=true"
        );
    }

    ui::display_status("Dry run: comments are printed, not posted");
    let report = run_notify_workflow(batch, config, status, ConsoleClient::new())?;
    ui::display_report(&report);
    Ok(())
}
