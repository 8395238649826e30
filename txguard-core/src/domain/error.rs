// txguard-core/src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

/// Structural refusals: the payload never reaches the rule engine.
#[derive(Error, Debug, Diagnostic)]
pub enum DomainError {
    #[error("Only CSV files are accepted")]
    #[diagnostic(
        code(txguard::domain::file_type),
        help("Rename or export '{file_name}' as a .csv file.")
    )]
    UnsupportedFileType { file_name: String },

    #[error("File must be UTF-8 encoded")]
    #[diagnostic(code(txguard::domain::encoding))]
    NotUtf8,

    #[error("CSV file is empty or has no data rows")]
    #[diagnostic(
        code(txguard::domain::empty),
        help("The file needs a header line followed by at least one data row.")
    )]
    EmptyDataset,

    #[error("File is {size} bytes, above the {limit} byte upload limit")]
    #[diagnostic(
        code(txguard::domain::too_large),
        help("Split the file or raise max_upload_bytes in txguard.yaml.")
    )]
    PayloadTooLarge { size: usize, limit: usize },
}
