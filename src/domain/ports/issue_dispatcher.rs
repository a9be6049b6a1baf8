use async_trait::async_trait;

use crate::domain::errors::DispatchResult;
use crate::domain::models::{IssueRecord, MigrationTarget};

/// Port for creating one issue in the destination tracker.
///
/// Implementations own the credential and any rate-limit handling; a call
/// returns only once the issue is created or has definitively failed.
///
/// # Examples
///
/// ```no_run
/// use yt2gh::domain::models::{IssueRecord, MigrationTarget};
/// use yt2gh::domain::ports::IssueDispatcher;
///
/// async fn example(dispatcher: &dyn IssueDispatcher, target: &MigrationTarget) {
///     let record = IssueRecord::new("PRJ-1", "Crash on start", "Steps to reproduce...");
///     if let Err(err) = dispatcher.create_issue(&record, target).await {
///         eprintln!("Unable to add issue {}: {err}", record.issue_id);
///     }
/// }
/// ```
#[async_trait]
pub trait IssueDispatcher: Send + Sync {
    /// Create `record` as a new issue in `target`.
    async fn create_issue(&self, record: &IssueRecord, target: &MigrationTarget)
        -> DispatchResult<()>;
}
