// txguard-core/src/application/mod.rs

pub mod engine;
pub mod report;

// --- RE-EXPORTS (FACADE PATTERN) ---
// Lets the binary do `use txguard_core::application::{ValidationEngine, validate_upload};`
pub use engine::ValidationEngine;
pub use report::{Upload, validate_path, validate_upload};
