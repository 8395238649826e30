// txguard-core/src/infrastructure/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum InfrastructureError {
    // --- FILESYSTEM (IO) ---
    #[error("File System Error: {0}")]
    #[diagnostic(
        code(txguard::infra::io),
        help("Check file permissions or path validity.")
    )]
    Io(#[from] std::io::Error),

    // --- CSV ---
    #[error("CSV Parsing Error: {0}")]
    #[diagnostic(
        code(txguard::infra::csv),
        help("The payload must be a header line followed by comma-separated rows.")
    )]
    Csv(#[from] csv::Error),

    // --- CONFIG / YAML ---
    #[error("YAML Parsing Error: {0}")]
    #[diagnostic(
        code(txguard::infra::yaml),
        help("Check your YAML syntax (indentation, types).")
    )]
    YamlError(#[from] serde_yaml::Error),

    #[error("Configuration Error: {0}")]
    #[diagnostic(code(txguard::infra::config))]
    ConfigError(String),

    #[error("Invalid settings: {0}")]
    #[diagnostic(code(txguard::infra::settings))]
    InvalidSettings(#[from] validator::ValidationErrors),
}
