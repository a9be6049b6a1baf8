//! Domain errors for the yt2gh migration.
//!
//! Fatal errors (`ArgumentError`, `TokenPolicyError`, `DecodeError`) stop the
//! whole run before any issue is created. `DispatchError` is scoped to a
//! single record; the batch driver logs it and moves on.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Invalid command-line invocation.
#[derive(Debug, Error)]
pub enum ArgumentError {
    /// Wrong number of positional arguments. Reported as usage, not a failure.
    #[error("Wrong number of arguments\n{usage}")]
    WrongArity { usage: String },

    #[error("Invalid milestone id '{value}': {reason}")]
    InvalidMilestone { value: String, reason: String },

    /// Help, version, or any other clap outcome that clap itself should render.
    #[error(transparent)]
    Clap(#[from] clap::Error),
}

/// The supplied credential is not allowed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenPolicyError {
    #[error(
        "Classic GitHub personal access tokens are disallowed\n\
         Please create a fine-grained token at https://github.com/settings/personal-access-tokens/new"
    )]
    LegacyToken,
}

/// The YouTrack export could not be turned into issue records.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} has no header row", path.display())]
    EmptyInput { path: PathBuf },

    #[error("Malformed CSV in {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Failure to create a single issue.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("Failed to serialize issue request: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("GitHub request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Response is missing the {0} header")]
    MissingRateLimitHeader(&'static str),

    #[error("Response header {header} has unparseable value '{value}'")]
    MalformedRateLimitHeader { header: &'static str, value: String },

    #[error("Rate limit reset timestamp {0} is out of range")]
    InvalidResetTimestamp(i64),

    #[error("ETA until rate limit reset at {reset} is less than or equal to 0")]
    NonPositiveEta { reset: DateTime<Utc> },

    #[error("Unable to create issue: status code: {0}")]
    UnexpectedStatus(u16),
}

pub type DispatchResult<T> = Result<T, DispatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unexpected_status_carries_code() {
        let err = DispatchError::UnexpectedStatus(422);
        assert_eq!(err.to_string(), "Unable to create issue: status code: 422");
    }

    #[test]
    fn test_legacy_token_message_points_to_fine_grained_tokens() {
        let msg = TokenPolicyError::LegacyToken.to_string();
        assert!(msg.contains("personal-access-tokens/new"));
    }

    #[test]
    fn test_decode_error_names_the_file() {
        let err = DecodeError::EmptyInput {
            path: PathBuf::from("issues.csv"),
        };
        assert!(err.to_string().contains("issues.csv"));
    }
}
