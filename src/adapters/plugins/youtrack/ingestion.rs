//! YouTrack export decoding.
//!
//! YouTrack quotes every header token (`"Issue Id","Project",...`). The CSV
//! decoder matches header names literally, so the header row is stripped of
//! quote characters first. Data rows are left untouched; their quoting is
//! ordinary CSV quoting and is handled by the decoder.

use std::path::Path;

use crate::domain::errors::DecodeError;
use crate::domain::models::IssueRecord;

/// Remove every `"` from the first line, passing the remaining lines through.
///
/// Applying this twice gives the same result as applying it once.
pub fn sanitize_header(raw: &str) -> String {
    match raw.split_once('\n') {
        Some((header, rest)) => {
            let mut out = String::with_capacity(raw.len());
            out.push_str(&header.replace('"', ""));
            out.push('\n');
            out.push_str(rest);
            out
        }
        None => raw.replace('"', ""),
    }
}

/// Read and decode a YouTrack CSV export.
pub fn load_issue_records(path: impl AsRef<Path>) -> Result<Vec<IssueRecord>, DecodeError> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|source| DecodeError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let records = parse_issue_records(path, &raw)?;
    tracing::debug!(
        path = %path.display(),
        count = records.len(),
        "decoded YouTrack export"
    );
    Ok(records)
}

/// Decode an export already held in memory. `path` is used for error messages only.
pub fn parse_issue_records(path: &Path, raw: &str) -> Result<Vec<IssueRecord>, DecodeError> {
    let header = raw.lines().next().unwrap_or_default();
    if header.trim().is_empty() {
        return Err(DecodeError::EmptyInput {
            path: path.to_path_buf(),
        });
    }

    let sanitized = sanitize_header(raw);
    csv::ReaderBuilder::new()
        .from_reader(sanitized.as_bytes())
        .deserialize::<IssueRecord>()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|source| DecodeError::Csv {
            path: path.to_path_buf(),
            source,
        })
}
