use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Port for wall-clock time and sleeping.
///
/// Rate-limit resets are absolute instants, so throttling compares against
/// the wall clock rather than a monotonic one.
#[async_trait]
pub trait Clock: Send + Sync {
    /// Current wall-clock time.
    fn now(&self) -> DateTime<Utc>;

    /// Suspend the caller for `duration`.
    async fn sleep(&self, duration: Duration);
}
