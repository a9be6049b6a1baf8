//! Port trait definitions (Hexagonal Architecture)
//!
//! - IssueDispatcher: creates one issue in the destination tracker
//! - Clock: wall-clock time and sleeping, swappable in tests

pub mod clock;
pub mod issue_dispatcher;

pub use clock::Clock;
pub use issue_dispatcher::IssueDispatcher;
