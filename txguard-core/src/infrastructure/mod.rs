// txguard-core/src/infrastructure/mod.rs

pub mod config;
pub mod error;
pub mod ingest;

pub use error::InfrastructureError;
