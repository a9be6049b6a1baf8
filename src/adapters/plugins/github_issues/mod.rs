//! GitHub Issues native adapter.
//!
//! Creates one issue per migrated record, pacing itself by the rate-limit
//! headers GitHub returns on every response.

pub mod client;
pub mod models;
pub mod rate_limit;

pub use client::GitHubClient;
pub use rate_limit::RateLimitState;
