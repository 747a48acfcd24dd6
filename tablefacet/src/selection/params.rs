//! Round-trip the active selection through a URL query string, the only
//! externally persisted representation of filter state.
//!
//! Each column with a non-empty selection becomes one `key=v1,v2` parameter;
//! the joined value is then form-encoded by the serializer, so the separator
//! comma travels as `%2C` and decodes transparently on the way back. A
//! literal comma inside a selected value is indistinguishable from the
//! separator after decoding and will misparse; known limitation.

use super::Selection;
use crate::facet::FacetDescriptor;
use std::collections::HashSet;
use url::form_urlencoded;

/// Serialize the selection to a query string. Columns with empty selections
/// are omitted entirely, not emitted as empty parameters.
pub fn to_query_string(selection: &Selection) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, values) in selection.iter() {
        if values.is_empty() {
            continue;
        }
        serializer.append_pair(key, &values.join(","));
    }
    serializer.finish()
}

/// Parse a raw query string (with or without a leading `?`) back into a
/// selection, validated against the facet configuration.
pub fn from_query_string(query: &str, facets: &[FacetDescriptor]) -> Selection {
    let query = query.strip_prefix('?').unwrap_or(query);
    from_pairs(
        form_urlencoded::parse(query.as_bytes()).map(|(k, v)| (k.into_owned(), v.into_owned())),
        facets,
    )
}

/// Build a selection from already-decoded `(key, value)` pairs.
///
/// Keys not present in the facet configuration are dropped silently; stale or
/// forged URLs must never inject filter state. Values are split on comma,
/// trimmed, and empty pieces discarded.
pub fn from_pairs<I>(pairs: I, facets: &[FacetDescriptor]) -> Selection
where
    I: IntoIterator<Item = (String, String)>,
{
    let valid_keys: HashSet<&str> = facets.iter().map(|f| f.key.as_str()).collect();

    let mut selection = Selection::new();
    for (key, value) in pairs {
        if !valid_keys.contains(key.as_str()) {
            tracing::debug!(key = %key, "dropping unknown filter key from query");
            continue;
        }
        if value.is_empty() {
            continue;
        }
        let values: Vec<String> = value
            .split(',')
            .map(str::trim)
            .filter(|piece| !piece.is_empty())
            .map(String::from)
            .collect();
        selection.insert(key, values);
    }
    selection
}
