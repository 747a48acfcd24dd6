//! Derive the filter configuration from a record collection: for every
//! designated column, the distinct normalized values with their occurrence
//! counts, in first-seen order.

use crate::value::{normalize, Filterable};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Designates one filterable column and how it is labeled in the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub key: String,
    /// Display name; falls back to the key when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl ColumnSpec {
    pub fn new(key: impl Into<String>) -> Self { Self { key: key.into(), label: None } }

    pub fn labeled(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self { key: key.into(), label: Some(label.into()) }
    }
}

/// One dropdown's worth of filter configuration: the column, its label, and
/// the occurrence count per distinct normalized value. The map preserves
/// insertion order, so its keys are the distinct values in first-seen order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacetDescriptor {
    pub key: String,
    pub label: String,
    pub counts: IndexMap<String, usize>,
}

impl FacetDescriptor {
    /// Distinct normalized values in the order they were first encountered.
    pub fn distinct_values(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(String::as_str)
    }

    /// Occurrence count for one normalized value, zero if never seen.
    pub fn count(&self, value: &str) -> usize { self.counts.get(value).copied().unwrap_or(0) }
}

/// Scan `records` and tally the normalized values of `key`.
///
/// The returned map iterates in first-occurrence order, deliberately NOT
/// sorted: when records arrive ordered by relevance or recency, the dropdown
/// built from this map keeps that feel. Counts sum to `records.len()`.
pub fn aggregate_values<R: Filterable>(records: &[R], key: &str) -> IndexMap<String, usize> {
    let mut counts = IndexMap::new();
    for record in records {
        *counts.entry(normalize(record.value(key))).or_insert(0) += 1;
    }
    counts
}

/// Build the full filter configuration, one descriptor per column, in the
/// given column order. Pure function of its inputs; recompute whenever the
/// records or column list change (caching policy belongs to the caller).
pub fn build_facets<R: Filterable>(records: &[R], columns: &[ColumnSpec]) -> Vec<FacetDescriptor> {
    columns
        .iter()
        .map(|col| FacetDescriptor {
            key: col.key.clone(),
            label: col.label.clone().unwrap_or_else(|| col.key.clone()),
            counts: aggregate_values(records, &col.key),
        })
        .collect()
}
