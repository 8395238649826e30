// txguard-core/src/lib.rs

#![allow(missing_docs)]
// Memory safety
#![deny(unsafe_code)]
// Robustness
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![warn(clippy::perf)]

// --- HEXAGONAL MODULES ---

// 1. Domain
// Row model, rules, registry, report. Depends on nothing else in the crate.
pub mod domain;

// 2. Infrastructure (Adapters)
// CSV ingestion, YAML/env configuration.
pub mod infrastructure;

// 3. Application (Use Cases)
// Engine orchestration and upload -> report service.
pub mod application;

// --- GLOBAL ERROR HANDLING ---
pub mod error;

// --- RE-EXPORTS (FACADE) ---
pub use application::{Upload, ValidationEngine, validate_path, validate_upload};
pub use domain::{RowRecord, RuleRegistry, Severity, ValidationError, ValidationReport};
pub use error::TxGuardError;
