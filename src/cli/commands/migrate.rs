//! Implementation of the migration run.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;

use crate::adapters::plugins::github_issues::GitHubClient;
use crate::adapters::plugins::youtrack::load_issue_records;
use crate::cli::types::Cli;
use crate::domain::models::{Config, MigrationReport, MigrationTarget};
use crate::domain::ports::Clock;
use crate::services::MigrationService;

/// Printed once, before the first request.
pub const RATE_LIMIT_NOTICE: &str =
    "Due to the API rate limiting, don't create any issues on any projects on GitHub until I'm done!";

/// Run a whole migration.
///
/// The token policy is checked before the input file is read or any client
/// is built.
pub async fn execute(cli: Cli, config: &Config, clock: Arc<dyn Clock>) -> Result<MigrationReport> {
    cli.token.ensure_fine_grained()?;

    let records = load_issue_records(&cli.input_file)?;
    let target = MigrationTarget {
        owner: cli.owner,
        repo: cli.repo,
        label: cli.label,
        milestone: cli.milestone,
    };

    let client = GitHubClient::new(cli.token, &config.github, &config.throttle, Arc::clone(&clock))?;
    let service = MigrationService::new(
        Arc::new(client),
        clock,
        Duration::from_secs(config.migration.cooldown_secs),
    );

    println!("{RATE_LIMIT_NOTICE}");
    Ok(service.run(&records, &target).await)
}
