//! GitHub Issues API request models.
//!
//! These structs map to the GitHub REST API v3 JSON payloads.

use serde::{Deserialize, Serialize};

use crate::domain::models::{IssueRecord, MigrationTarget};

/// Request body for creating a new GitHub issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitHubCreateIssueRequest {
    /// Issue title, taken from the YouTrack summary.
    pub title: String,
    /// Issue body, taken from the YouTrack description.
    pub body: String,
    /// Always the repository owner.
    pub assignees: Vec<String>,
    /// Milestone number within the repository.
    pub milestone: i64,
    /// Always the single migration label.
    pub labels: Vec<String>,
}

impl GitHubCreateIssueRequest {
    /// Map a YouTrack record onto the fixed migration target.
    pub fn from_record(record: &IssueRecord, target: &MigrationTarget) -> Self {
        Self {
            title: record.summary.clone(),
            body: record.description.clone(),
            assignees: vec![target.owner.clone()],
            milestone: target.milestone,
            labels: vec![target.label.clone()],
        }
    }
}
