// txguard-core/src/domain/record.rs

/// One data row, keyed by the header names of the input file.
///
/// Values stay raw strings: no trimming, no coercion. Each rule decides for
/// itself how to read a value. `None` marks a cell the input did not provide
/// (short record).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowRecord {
    fields: Vec<(String, Option<String>)>,
}

/// What a rule sees when it looks up a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    /// The column does not exist in the header.
    Missing,
    /// The column exists but the cell is absent, empty or whitespace only.
    Empty,
    /// Raw, untrimmed cell content.
    Present(&'a str),
}

impl<'a> FieldValue<'a> {
    /// The trimmed value, if there is something to validate.
    pub fn trimmed(&self) -> Option<&'a str> {
        match *self {
            Self::Present(raw) => Some(raw.trim()),
            Self::Missing | Self::Empty => None,
        }
    }
}

impl RowRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: Vec::with_capacity(capacity),
        }
    }

    /// Sets a column. A repeated header name keeps its first position and
    /// takes the latest value.
    pub fn insert(&mut self, column: impl Into<String>, value: Option<String>) {
        let column = column.into();
        match self.fields.iter_mut().find(|(name, _)| *name == column) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((column, value)),
        }
    }

    pub fn get(&self, column: &str) -> FieldValue<'_> {
        match self.fields.iter().find(|(name, _)| name == column) {
            None => FieldValue::Missing,
            Some((_, None)) => FieldValue::Empty,
            Some((_, Some(raw))) if raw.trim().is_empty() => FieldValue::Empty,
            Some((_, Some(raw))) => FieldValue::Present(raw),
        }
    }

    /// Trimmed value, or "" for missing/blank cells.
    pub fn trimmed_or_empty(&self, column: &str) -> &str {
        self.get(column).trimmed().unwrap_or("")
    }

    pub fn contains(&self, column: &str) -> bool {
        self.fields.iter().any(|(name, _)| name == column)
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for RowRecord
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = RowRecord::new();
        for (column, value) in iter {
            record.insert(column, Some(value.into()));
        }
        record
    }
}
