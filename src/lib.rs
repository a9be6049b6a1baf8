//! yt2gh - YouTrack to GitHub Issues migration
//!
//! Reads a YouTrack CSV export and creates one GitHub issue per row, in file
//! order, pausing whenever GitHub's rate-limit headers say the quota is
//! nearly spent.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): issue records, errors, and the ports
//!   (`IssueDispatcher`, `Clock`) the rest of the crate plugs into
//! - **Adapter Layer** (`adapters`): YouTrack CSV decoding and the
//!   rate-limit-aware GitHub client
//! - **Service Layer** (`services`): the batch driver
//! - **Infrastructure Layer** (`infrastructure`): configuration, logging,
//!   credentials, clocks
//! - **CLI Layer** (`cli`): argument parsing and exit codes
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use yt2gh::cli::{commands::migrate, parse_args};
//! use yt2gh::infrastructure::clock::SystemClock;
//! use yt2gh::ConfigLoader;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     let cli = parse_args(["yt2gh", "github_pat_x", "octocat", "hello", "issues.csv", "youtrack", "1"])?;
//!     let config = ConfigLoader::load(None)?;
//!     let report = migrate::execute(cli, &config, Arc::new(SystemClock)).await?;
//!     println!("{report}");
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use adapters::plugins::github_issues::GitHubClient;
pub use adapters::plugins::youtrack::load_issue_records;
pub use domain::models::{Config, IssueRecord, MigrationReport, MigrationTarget};
pub use domain::ports::{Clock, IssueDispatcher};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::MigrationService;
