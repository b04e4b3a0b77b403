//! Facet filtering
//!
//! Client-side row filtering by resource type, region and account.
//!
//! - [`facets`] - facet dimensions and their distinct values
//! - [`state`] - immutable filter selections and the messages that replace them
//! - [`predicate`] - per-row visibility, all set facets combined with AND

pub mod facets;
pub mod predicate;
pub mod state;

pub use facets::{extract_facet_values, Facet, FacetValues};
pub use predicate::{passes_filter, visible};
pub use state::{FilterMsg, FilterState};
