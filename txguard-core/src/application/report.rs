// txguard-core/src/application/report.rs
//
// USE CASE: uploaded file -> admission checks -> rows -> engine -> report.

use std::fs;
use std::path::Path;
use tracing::{info, instrument, warn};

use crate::application::engine::ValidationEngine;
use crate::domain::error::DomainError;
use crate::domain::report::ValidationReport;
use crate::domain::severity::Severity;
use crate::error::TxGuardError;
use crate::infrastructure::config::Settings;
use crate::infrastructure::ingest::parse_rows;

/// A file as received from a caller, before any check.
#[derive(Debug, Clone)]
pub struct Upload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl Upload {
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes: bytes.into(),
        }
    }
}

#[instrument(skip_all, fields(file = %upload.file_name, size = upload.bytes.len()))]
pub fn validate_upload(
    upload: &Upload,
    engine: &ValidationEngine,
    settings: &Settings,
) -> Result<ValidationReport, TxGuardError> {
    admit(upload, settings).inspect_err(|e| warn!("⛔ Upload refused: {}", e))?;

    let text = std::str::from_utf8(&upload.bytes).map_err(|_| {
        warn!("⛔ Upload refused: not UTF-8");
        DomainError::NotUtf8
    })?;

    let rows = parse_rows(text)?;
    if rows.is_empty() && !settings.allow_empty {
        warn!("⛔ Upload refused: no data rows");
        return Err(DomainError::EmptyDataset.into());
    }

    let errors = engine.validate(&rows);
    let report = ValidationReport::new(upload.file_name.clone(), rows.len(), errors);

    info!(
        rows = report.total_rows(),
        errors = report.count_by_severity(Severity::Error),
        warnings = report.count_by_severity(Severity::Warning),
        valid = report.is_valid(),
        "✅ Validation report ready"
    );
    Ok(report)
}

/// Reads `path` from disk and validates it under its file name.
pub fn validate_path(
    path: &Path,
    engine: &ValidationEngine,
    settings: &Settings,
) -> Result<ValidationReport, TxGuardError> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let bytes = fs::read(path)?;

    validate_upload(&Upload::new(file_name, bytes), engine, settings)
}

fn admit(upload: &Upload, settings: &Settings) -> Result<(), DomainError> {
    if !upload.file_name.ends_with(".csv") {
        return Err(DomainError::UnsupportedFileType {
            file_name: upload.file_name.clone(),
        });
    }
    if upload.bytes.len() > settings.max_upload_bytes {
        return Err(DomainError::PayloadTooLarge {
            size: upload.bytes.len(),
            limit: settings.max_upload_bytes,
        });
    }
    Ok(())
}
