//! Faceted filtering for in-memory tabular data.
//!
//! Given a collection of uniform records and a set of designated filterable
//! columns, this crate derives the distinct values and occurrence counts for
//! each column, applies multi-column selections to the record set
//! (OR within a column, AND across columns), and round-trips the active
//! selection through a URL query string. Rendering and event wiring live in
//! the consuming UI layer; everything here is pure computation.

pub mod error;
pub mod facet;
pub mod record;
pub mod selection;
pub mod value;

pub use error::RecordError;
pub use facet::{aggregate_values, build_facets, ColumnSpec, FacetDescriptor};
pub use record::{records_from_json, JsonRecord};
pub use selection::filter::{apply_filters, matches, FilterIterator, FilterResult};
pub use selection::params::{from_pairs, from_query_string, to_query_string};
pub use selection::Selection;
pub use value::{normalize, Filterable, Value, EMPTY_SENTINEL};
