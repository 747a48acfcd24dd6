//! The active-filter selection: which values the user has picked per column,
//! and the state helpers the UI layer renders badges and reset controls from.

pub mod filter;
pub mod params;

use crate::facet::FacetDescriptor;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Map from column key to the normalized values selected for that column.
/// An absent key or an empty sequence imposes no constraint on that column.
///
/// Every mutation helper returns a new `Selection` rather than mutating in
/// place; consumers built on change detection must replace the object they
/// hold, never alter it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection {
    columns: IndexMap<String, Vec<String>>,
}

impl Selection {
    pub fn new() -> Self { Self::default() }

    /// The canonical "no filters" baseline: one empty entry per facet key.
    /// Used at initialization and on explicit reset.
    pub fn cleared(facets: &[FacetDescriptor]) -> Self {
        Self { columns: facets.iter().map(|f| (f.key.clone(), Vec::new())).collect() }
    }

    /// Selected values for one column; empty when unconstrained.
    pub fn get(&self, key: &str) -> &[String] {
        self.columns.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.columns.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// True iff at least one column has a non-empty selection.
    pub fn is_active(&self) -> bool { self.columns.values().any(|v| !v.is_empty()) }

    /// Total number of selected values across all columns.
    pub fn active_count(&self) -> usize { self.columns.values().map(Vec::len).sum() }

    /// Consuming builder, sets the selection for one column.
    pub fn with(mut self, key: impl Into<String>, values: Vec<String>) -> Self {
        self.columns.insert(key.into(), values);
        self
    }

    /// New selection with `value` added to `key` if absent, removed if present.
    pub fn toggled(&self, key: &str, value: &str) -> Self {
        let mut next = self.clone();
        let values = next.columns.entry(key.to_string()).or_default();
        match values.iter().position(|v| v == value) {
            Some(idx) => {
                values.remove(idx);
            }
            None => values.push(value.to_string()),
        }
        next
    }

    /// New selection with one column's selection emptied.
    pub fn with_column_cleared(&self, key: &str) -> Self {
        let mut next = self.clone();
        if let Some(values) = next.columns.get_mut(key) {
            values.clear();
        }
        next
    }

    pub(crate) fn insert(&mut self, key: String, values: Vec<String>) {
        self.columns.insert(key, values);
    }
}
