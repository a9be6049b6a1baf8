//! Native adapter plugins.
//!
//! Each sub-module corresponds to an external system: `youtrack` is the
//! source of the migration, `github_issues` the destination.

pub mod github_issues;
pub mod youtrack;
