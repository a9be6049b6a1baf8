//! GitHub rate-limit headers.
//!
//! Every REST response carries `X-Ratelimit-Remaining` (requests left in the
//! current window) and `X-Ratelimit-Reset` (unix seconds at which the window
//! resets). Both are required; a response without them is not trusted.

use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::header::HeaderMap;
use reqwest::StatusCode;

use crate::domain::errors::{DispatchError, DispatchResult};

pub const REMAINING_HEADER: &str = "x-ratelimit-remaining";
pub const RESET_HEADER: &str = "x-ratelimit-reset";

/// Rate-limit window as reported by a single response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitState {
    /// Requests left in the current window.
    pub remaining: i64,
    /// When the window resets.
    pub reset: DateTime<Utc>,
}

impl RateLimitState {
    /// Read both rate-limit headers.
    pub fn from_headers(headers: &HeaderMap) -> DispatchResult<Self> {
        let remaining = parse_header(headers, REMAINING_HEADER)?;
        let reset_secs = parse_header(headers, RESET_HEADER)?;
        let reset = DateTime::from_timestamp(reset_secs, 0)
            .ok_or(DispatchError::InvalidResetTimestamp(reset_secs))?;
        Ok(Self { remaining, reset })
    }

    /// Whether the caller must wait for the reset before sending again.
    ///
    /// True when fewer than `threshold` requests remain, or when GitHub
    /// answered 403 (secondary rate limits surface as 403).
    pub fn is_throttled(&self, status: StatusCode, threshold: i64) -> bool {
        self.remaining < threshold || status == StatusCode::FORBIDDEN
    }

    /// Whole seconds from `now` until the reset.
    ///
    /// `now` is truncated to the second, matching the header's resolution.
    /// A reset at or before `now` has no meaningful ETA and is an error.
    pub fn eta(&self, now: DateTime<Utc>) -> DispatchResult<Duration> {
        let secs = self.reset.timestamp() - now.timestamp();
        match u64::try_from(secs) {
            Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
            _ => Err(DispatchError::NonPositiveEta { reset: self.reset }),
        }
    }
}

fn parse_header(headers: &HeaderMap, name: &'static str) -> DispatchResult<i64> {
    let value = headers
        .get(name)
        .ok_or(DispatchError::MissingRateLimitHeader(name))?;
    let text = value
        .to_str()
        .map_err(|_| DispatchError::MalformedRateLimitHeader {
            header: name,
            value: String::from_utf8_lossy(value.as_bytes()).into_owned(),
        })?;
    text.trim()
        .parse::<i64>()
        .map_err(|_| DispatchError::MalformedRateLimitHeader {
            header: name,
            value: text.to_string(),
        })
}
