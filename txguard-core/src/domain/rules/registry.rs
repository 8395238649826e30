// txguard-core/src/domain/rules/registry.rs

use std::fmt;
use std::sync::{Arc, OnceLock};

use super::{
    AccountNumberFormat, AmountNumeric, CurrencyCodeFormat, DatasetRule,
    DuplicateTransactionCheck, RequiredFields, RowRule, TransactionDateFormat,
};

/// Which list a rule lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    Dataset,
    Row,
}

impl RuleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dataset => "dataset",
            Self::Row => "row",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The fixed, ordered rule set. Order drives report ordering, so both lists
/// are only ever built by [`RuleRegistry::standard`] and never mutated.
pub struct RuleRegistry {
    dataset_rules: Vec<Box<dyn DatasetRule>>,
    row_rules: Vec<Box<dyn RowRule>>,
}

impl RuleRegistry {
    pub fn standard() -> Self {
        Self {
            dataset_rules: vec![Box::new(DuplicateTransactionCheck)],
            row_rules: vec![
                Box::new(RequiredFields),
                Box::new(AccountNumberFormat),
                Box::new(AmountNumeric),
                Box::new(TransactionDateFormat),
                Box::new(CurrencyCodeFormat),
            ],
        }
    }

    /// Process-wide instance, built on first use. Read-only afterwards.
    pub fn shared() -> Arc<RuleRegistry> {
        static REGISTRY: OnceLock<Arc<RuleRegistry>> = OnceLock::new();
        Arc::clone(REGISTRY.get_or_init(|| Arc::new(RuleRegistry::standard())))
    }

    pub fn dataset_rules(&self) -> &[Box<dyn DatasetRule>] {
        &self.dataset_rules
    }

    pub fn row_rules(&self) -> &[Box<dyn RowRule>] {
        &self.row_rules
    }

    /// Every rule name in evaluation order, dataset rules first.
    pub fn describe(&self) -> Vec<(RuleKind, &'static str)> {
        self.dataset_rules
            .iter()
            .map(|r| (RuleKind::Dataset, r.name()))
            .chain(self.row_rules.iter().map(|r| (RuleKind::Row, r.name())))
            .collect()
    }
}

impl fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleRegistry")
            .field(
                "dataset_rules",
                &self.dataset_rules.iter().map(|r| r.name()).collect::<Vec<_>>(),
            )
            .field(
                "row_rules",
                &self.row_rules.iter().map(|r| r.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluation_order() {
        let registry = RuleRegistry::standard();
        let names: Vec<&str> = registry.describe().into_iter().map(|(_, n)| n).collect();

        assert_eq!(
            names,
            vec![
                "duplicate_transaction_check",
                "required_fields",
                "account_number_format",
                "amount_numeric",
                "transaction_date_format",
                "currency_code_format",
            ]
        );
    }

    #[test]
    fn test_kinds() {
        let described = RuleRegistry::standard().describe();
        assert_eq!(described[0].0, RuleKind::Dataset);
        assert!(described[1..].iter().all(|(k, _)| *k == RuleKind::Row));
    }

    #[test]
    fn test_shared_instance_is_reused() {
        let a = RuleRegistry::shared();
        let b = RuleRegistry::shared();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_registry_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RuleRegistry>();
    }
}
