//! A single row of a YouTrack issue export.

use serde::Deserialize;

/// One issue exported from YouTrack.
///
/// Every field is kept as the raw text of its CSV cell. Header names are
/// matched after the header row has been stripped of quote characters.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IssueRecord {
    /// YouTrack readable id, e.g. `PRJ-42`.
    #[serde(rename = "Issue Id")]
    pub issue_id: String,
    #[serde(rename = "Project")]
    pub project: String,
    #[serde(rename = "Tags")]
    pub tags: String,
    /// Becomes the GitHub issue title.
    #[serde(rename = "Summary")]
    pub summary: String,
    #[serde(rename = "Reporter")]
    pub reporter: String,
    #[serde(rename = "Created")]
    pub created: String,
    #[serde(rename = "Updated")]
    pub updated: String,
    #[serde(rename = "Resolved")]
    pub resolved: String,
    #[serde(rename = "Priority")]
    pub priority: String,
    #[serde(rename = "Motivation")]
    pub motivation: String,
    #[serde(rename = "State")]
    pub state: String,
    #[serde(rename = "Area")]
    pub area: String,
    /// Becomes the GitHub issue body.
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Votes")]
    pub votes: String,
}

impl IssueRecord {
    /// Build a record with only the fields the migration reads; the rest are empty.
    pub fn new(
        issue_id: impl Into<String>,
        summary: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            issue_id: issue_id.into(),
            project: String::new(),
            tags: String::new(),
            summary: summary.into(),
            reporter: String::new(),
            created: String::new(),
            updated: String::new(),
            resolved: String::new(),
            priority: String::new(),
            motivation: String::new(),
            state: String::new(),
            area: String::new(),
            description: description.into(),
            votes: String::new(),
        }
    }
}
