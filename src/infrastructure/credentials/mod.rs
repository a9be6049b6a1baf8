//! Credentials management infrastructure
//!
//! The GitHub token is wrapped so it cannot leak through `Debug` output or
//! structured log fields, and so the legacy-token policy is checked in one place.

use std::fmt;

use crate::domain::errors::TokenPolicyError;

/// Prefix of classic (broadly scoped) GitHub personal access tokens.
pub const LEGACY_TOKEN_PREFIX: &str = "ghp_";

/// A GitHub API token.
#[derive(Clone, PartialEq, Eq)]
pub struct GitHubToken(String);

impl GitHubToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// True for classic personal access tokens.
    pub fn is_legacy(&self) -> bool {
        self.0.starts_with(LEGACY_TOKEN_PREFIX)
    }

    /// Reject classic tokens; fine-grained tokens and anything else pass.
    pub fn ensure_fine_grained(&self) -> Result<(), TokenPolicyError> {
        if self.is_legacy() {
            return Err(TokenPolicyError::LegacyToken);
        }
        Ok(())
    }

    /// The raw token, for building the `Authorization` header.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl From<String> for GitHubToken {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl fmt::Debug for GitHubToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("GitHubToken([REDACTED])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_token_is_rejected() {
        let token = GitHubToken::new("ghp_abcdef0123456789");
        assert!(token.is_legacy());
        assert_eq!(
            token.ensure_fine_grained(),
            Err(TokenPolicyError::LegacyToken)
        );
    }

    #[test]
    fn test_fine_grained_token_is_accepted() {
        let token = GitHubToken::new("github_pat_11ABCDEF");
        assert!(!token.is_legacy());
        assert!(token.ensure_fine_grained().is_ok());
    }

    #[test]
    fn test_prefix_must_be_at_start() {
        assert!(!GitHubToken::new("xghp_abc").is_legacy());
        assert!(!GitHubToken::new("GHP_abc").is_legacy());
    }

    #[test]
    fn test_debug_does_not_print_token() {
        let token = GitHubToken::new("github_pat_secret_value");
        let debug = format!("{token:?}");
        assert!(!debug.contains("secret_value"));
        assert!(debug.contains("REDACTED"));
    }
}
