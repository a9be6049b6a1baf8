//! Per-run migration target and the report produced by a batch run.

use std::fmt;

/// Where every migrated issue goes.
///
/// The owner doubles as the single assignee of each created issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationTarget {
    pub owner: String,
    pub repo: String,
    /// Label applied to every created issue.
    pub label: String,
    /// GitHub milestone number applied to every created issue.
    pub milestone: i64,
}

/// Outcome of a single record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordOutcome {
    Created,
    Failed(String),
}

/// Result of a whole batch run, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MigrationReport {
    /// `(issue_id, outcome)` for every record attempted.
    pub outcomes: Vec<(String, RecordOutcome)>,
}

impl MigrationReport {
    pub fn record(&mut self, issue_id: &str, outcome: RecordOutcome) {
        self.outcomes.push((issue_id.to_string(), outcome));
    }

    pub fn attempted(&self) -> usize {
        self.outcomes.len()
    }

    pub fn created(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, o)| *o == RecordOutcome::Created)
            .count()
    }

    pub fn failed(&self) -> usize {
        self.attempted() - self.created()
    }

    /// Identifiers of the records that could not be created.
    pub fn failed_ids(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter(|(_, o)| matches!(o, RecordOutcome::Failed(_)))
            .map(|(id, _)| id.as_str())
            .collect()
    }
}

impl fmt::Display for MigrationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} attempted, {} created, {} failed",
            self.attempted(),
            self.created(),
            self.failed()
        )
    }
}
