//! Domain layer for yt2gh
//!
//! This module contains the migration's models, error types and the ports
//! that infrastructure adapters implement.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::{ArgumentError, DecodeError, DispatchError, DispatchResult, TokenPolicyError};
