//! CLI type definitions
//!
//! This module contains the clap structure that defines the CLI interface.

use clap::Parser;
use std::path::PathBuf;

use crate::infrastructure::credentials::GitHubToken;

#[derive(Parser, Debug)]
#[command(name = "yt2gh")]
#[command(about = "Migrate a YouTrack CSV export into GitHub Issues", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Fine-grained GitHub token (classic `ghp_` tokens are refused)
    pub token: GitHubToken,

    /// Repository owner; also assigned to every created issue
    pub owner: String,

    /// Repository name
    pub repo: String,

    /// YouTrack CSV export
    pub input_file: PathBuf,

    /// Label applied to every created issue
    pub label: String,

    /// Milestone number applied to every created issue
    #[arg(allow_negative_numbers = true)]
    pub milestone: i64,

    /// Configuration file (defaults to .yt2gh/config.yaml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,
}
