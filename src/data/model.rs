use std::collections::HashMap;

// ---------------------------------------------------------------------------
// Record – one row of the dataset
// ---------------------------------------------------------------------------

/// A single row: an ordered sequence of opaque text fields.
///
/// No type coercion happens anywhere in the crate: fields round-trip as the
/// exact text they were read with.
pub type Record = Vec<String>;

// ---------------------------------------------------------------------------
// Dataset – the tabular container
// ---------------------------------------------------------------------------

/// An in-memory tabular dataset: optional column labels, rows of text
/// fields, and the index of the decision-class field.
///
/// The container is append-only: ingestion adds records, queries never
/// mutate, and individual rows are never updated or removed.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Ordered column labels; empty when the source had no header line.
    pub labels: Vec<String>,
    /// All rows, in file order until a split shuffles a copy.
    pub records: Vec<Record>,
    /// Index of the decision-class field. Negative counts from the end of
    /// each row (`-1` = last field).
    pub class_index: isize,
}

impl Default for Dataset {
    fn default() -> Self {
        Self::new()
    }
}

impl Dataset {
    /// An empty dataset with the class field defaulting to the last column.
    pub fn new() -> Self {
        Dataset {
            labels: Vec::new(),
            records: Vec::new(),
            class_index: -1,
        }
    }

    /// The stored column labels, by reference (no defensive copy).
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Occurrence count per distinct class value, as (value, count) pairs.
    ///
    /// Pair order is unspecified; callers must not rely on it. Faults if the
    /// class index is out of range for any row.
    pub fn class_counts(&self) -> Vec<(String, usize)> {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for row in &self.records {
            let class = &row[resolve_class_index(self.class_index, row.len())];
            *counts.entry(class.clone()).or_insert(0) += 1;
        }
        counts.into_iter().collect()
    }

    /// Clones of all rows whose class field equals `class_value` exactly
    /// (no normalisation), in dataset order. No match is not an error.
    pub fn rows_by_class(&self, class_value: &str) -> Vec<Record> {
        self.records
            .iter()
            .filter(|row| row[resolve_class_index(self.class_index, row.len())] == class_value)
            .cloned()
            .collect()
    }

    /// Print records in `[start, end)` to stdout, one row per line.
    /// `None` means "to the end"; both bounds are clamped to the record
    /// count.
    pub fn print_rows(&self, start: usize, end: Option<usize>) {
        let end = end.unwrap_or(self.records.len()).min(self.records.len());
        let start = start.min(end);
        for row in &self.records[start..end] {
            println!("{row:?}");
        }
    }
}

/// Resolve a possibly-negative class index against a row of `width` fields.
///
/// Faults on out-of-range: a row too narrow for the configured index is a
/// latent defect in the input, not a handled condition.
pub(crate) fn resolve_class_index(index: isize, width: usize) -> usize {
    let resolved = if index >= 0 {
        index
    } else {
        width as isize + index
    };
    assert!(
        resolved >= 0 && (resolved as usize) < width,
        "class index {index} out of range for row with {width} fields"
    );
    resolved as usize
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
