//! Batch driver for a migration run.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::models::{IssueRecord, MigrationReport, MigrationTarget, RecordOutcome};
use crate::domain::ports::{Clock, IssueDispatcher};

/// Feeds decoded records to an [`IssueDispatcher`] one at a time.
///
/// Records are dispatched strictly in order. A failed record is logged and
/// skipped; it never stops the run. A fixed cooldown separates consecutive
/// dispatches, on top of any rate-limit wait the dispatcher already took.
pub struct MigrationService {
    dispatcher: Arc<dyn IssueDispatcher>,
    clock: Arc<dyn Clock>,
    cooldown: Duration,
}

impl MigrationService {
    pub fn new(
        dispatcher: Arc<dyn IssueDispatcher>,
        clock: Arc<dyn Clock>,
        cooldown: Duration,
    ) -> Self {
        Self {
            dispatcher,
            clock,
            cooldown,
        }
    }

    /// Dispatch every record and report the outcome of each.
    pub async fn run(&self, records: &[IssueRecord], target: &MigrationTarget) -> MigrationReport {
        let mut report = MigrationReport::default();
        tracing::info!(
            count = records.len(),
            owner = %target.owner,
            repo = %target.repo,
            "starting migration"
        );

        for (index, record) in records.iter().enumerate() {
            if index > 0 {
                self.clock.sleep(self.cooldown).await;
            }

            match self.dispatcher.create_issue(record, target).await {
                Ok(()) => {
                    tracing::info!(issue_id = %record.issue_id, "Issue {} created", record.issue_id);
                    report.record(&record.issue_id, RecordOutcome::Created);
                }
                Err(err) => {
                    tracing::error!(
                        issue_id = %record.issue_id,
                        error = %err,
                        "Unable to add issue {}: {err}",
                        record.issue_id
                    );
                    report.record(&record.issue_id, RecordOutcome::Failed(err.to_string()));
                }
            }
        }

        tracing::info!(
            attempted = report.attempted(),
            created = report.created(),
            failed = report.failed(),
            "migration finished"
        );
        report
    }
}
