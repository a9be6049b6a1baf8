//! Domain models
//!
//! Plain data carried through a migration run.

pub mod config;
pub mod issue_record;
pub mod migration;

pub use config::{
    Config, GitHubConfig, LogConfig, LogFormat, MigrationConfig, RotationPolicy, ThrottleConfig,
};
pub use issue_record::IssueRecord;
pub use migration::{MigrationReport, MigrationTarget, RecordOutcome};
