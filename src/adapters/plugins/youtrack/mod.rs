//! YouTrack CSV export adapter.
//!
//! Decodes the issue export produced by YouTrack's "Export to CSV" into
//! [`IssueRecord`](crate::domain::models::IssueRecord)s, in file order.

pub mod ingestion;

pub use ingestion::{load_issue_records, parse_issue_records, sanitize_header};
