//! Service layer: coordinates the domain ports into a migration run.

pub mod migration_service;

pub use migration_service::MigrationService;
