// txguard-core/src/application/engine.rs

use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, instrument, trace};

use crate::domain::record::RowRecord;
use crate::domain::report::ValidationError;
use crate::domain::rules::RuleRegistry;

/// Runs a rule registry over a sequence of rows.
///
/// Output order is fixed: dataset-rule findings first, then per-row findings
/// by ascending row, and within one row by registry order. The engine holds
/// no state between calls.
#[derive(Debug, Clone)]
pub struct ValidationEngine {
    registry: Arc<RuleRegistry>,
}

impl ValidationEngine {
    pub fn new(registry: Arc<RuleRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    #[instrument(skip_all, fields(rows = rows.len()))]
    pub fn validate(&self, rows: &[RowRecord]) -> Vec<ValidationError> {
        let start = Instant::now();
        let mut errors = Vec::new();

        for rule in self.registry.dataset_rules() {
            let found = rule.check(rows);
            trace!(rule = rule.name(), found = found.len(), "dataset rule done");
            errors.extend(found);
        }

        for (idx, row) in rows.iter().enumerate() {
            let position = idx + 1;
            for rule in self.registry.row_rules() {
                errors.extend(rule.check(row, position));
            }
        }

        debug!(errors = errors.len(), "⏱️  Validation finished in {:.2?}", start.elapsed());
        errors
    }
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::new(RuleRegistry::shared())
    }
}
