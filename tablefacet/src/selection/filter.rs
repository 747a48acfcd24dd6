//! Filter records against the active selection. Within one column any
//! selected value may match (OR); across columns every active constraint must
//! hold (AND). The filter is stable: surviving records keep their relative
//! order.

use super::Selection;
use crate::value::{normalize, Filterable};

/// True when the record satisfies every column constraint in the selection.
///
/// A selection key that exists on no record compares the sentinel against the
/// selected values, which excludes the record unless the sentinel itself was
/// selected. Consistent, not an error.
pub fn matches<R: Filterable>(record: &R, selection: &Selection) -> bool {
    for (key, selected) in selection.iter() {
        if selected.is_empty() {
            continue;
        }
        let value = normalize(record.value(key));
        if !selected.iter().any(|s| *s == value) {
            return false;
        }
    }
    true
}

/// Reduce `records` to the subset matching `selection`. When nothing is
/// selected the input comes back unchanged, without touching any record.
pub fn apply_filters<R: Filterable>(mut records: Vec<R>, selection: &Selection) -> Vec<R> {
    if !selection.is_active() {
        return records;
    }
    records.retain(|record| matches(record, selection));
    records
}

/// Outcome of checking one record against the selection, for consumers that
/// want to see skipped records rather than lose them.
#[derive(Debug, PartialEq)]
pub enum FilterResult<R> {
    Pass(R),
    Skip(R),
}

/// Iterator adapter that tags each record with its filter outcome.
pub struct FilterIterator<I> {
    iter: I,
    selection: Selection,
}

impl<I, R> FilterIterator<I>
where
    I: Iterator<Item = R>,
    R: Filterable,
{
    pub fn new(iter: I, selection: Selection) -> Self { Self { iter, selection } }
}

impl<I, R> Iterator for FilterIterator<I>
where
    I: Iterator<Item = R>,
    R: Filterable,
{
    type Item = FilterResult<R>;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|record| {
            if matches(&record, &self.selection) {
                FilterResult::Pass(record)
            } else {
                FilterResult::Skip(record)
            }
        })
    }
}
