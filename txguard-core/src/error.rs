// txguard-core/src/error.rs

use crate::domain::error::DomainError;
use crate::infrastructure::error::InfrastructureError;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum TxGuardError {
    // --- DOMAIN ERRORS (upload refused before any rule ran) ---
    #[error(transparent)]
    #[diagnostic(transparent)]
    Domain(#[from] DomainError),

    // --- INFRASTRUCTURE ERRORS (IO, CSV, config) ---
    #[error(transparent)]
    #[diagnostic(transparent)]
    Infrastructure(#[from] InfrastructureError),
}

impl TxGuardError {
    /// True when the failure comes from the submitted payload rather than
    /// from the service itself. Surfaces map these to "bad request".
    pub fn is_input_error(&self) -> bool {
        match self {
            Self::Domain(_) => true,
            Self::Infrastructure(InfrastructureError::Csv(_)) => true,
            Self::Infrastructure(_) => false,
        }
    }
}

impl From<std::io::Error> for TxGuardError {
    fn from(err: std::io::Error) -> Self {
        TxGuardError::Infrastructure(InfrastructureError::Io(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_errors_are_input_errors() {
        let err = TxGuardError::from(DomainError::EmptyDataset);
        assert!(err.is_input_error());
        assert_eq!(err.to_string(), "CSV file is empty or has no data rows");
    }

    #[test]
    fn test_io_errors_are_not_input_errors() {
        let err = TxGuardError::from(std::io::Error::other("disk on fire"));
        assert!(!err.is_input_error());
    }

    #[test]
    fn test_csv_reader_errors_are_input_errors() {
        let mut strict = csv::ReaderBuilder::new()
            .flexible(false)
            .from_reader("a,b\n1\n".as_bytes());
        let csv_err = strict
            .records()
            .find_map(Result::err)
            .map(InfrastructureError::from);

        let Some(infra) = csv_err else {
            panic!("a record shorter than the header must fail a strict reader");
        };
        assert!(matches!(infra, InfrastructureError::Csv(_)));
        assert!(TxGuardError::from(infra).is_input_error());
    }
}
