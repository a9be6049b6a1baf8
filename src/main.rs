//! yt2gh CLI entry point.

use std::sync::Arc;

use anyhow::Result;

use yt2gh::cli::{commands::migrate, prepare};
use yt2gh::infrastructure::clock::SystemClock;
use yt2gh::infrastructure::logging::LoggerImpl;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(err) = run().await {
        yt2gh::cli::handle_error(err);
    }
}

async fn run() -> Result<()> {
    let (cli, config) = prepare(std::env::args_os())?;
    let _logger = LoggerImpl::init(&config.logging)?;

    let report = migrate::execute(cli, &config, Arc::new(SystemClock)).await?;
    println!("Migration finished: {report}");
    if report.failed() > 0 {
        println!("Failed issues: {}", report.failed_ids().join(", "));
    }
    Ok(())
}
