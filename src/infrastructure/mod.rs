//! Infrastructure layer module
//!
//! - Clock implementations (system and manual)
//! - Configuration management
//! - Logging infrastructure
//! - Credentials management
//!
//! Infrastructure implementations satisfy the port traits defined in the domain layer.

pub mod clock;
pub mod config;
pub mod credentials;
pub mod logging;
