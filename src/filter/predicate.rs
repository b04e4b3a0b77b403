//! Row Filter Predicate

use super::facets::Facet;
use super::state::FilterState;
use crate::model::Resource;

/// Evaluation order of the facets
const EVAL_ORDER: [Facet; 3] = [Facet::Region, Facet::Account, Facet::Type];

/// True when every set facet equals the row's value. Stops at the first mismatch.
pub fn passes_filter(row: &Resource, filter: &FilterState) -> bool {
    for facet in EVAL_ORDER {
        if let Some(selected) = filter.get(facet) {
            if facet.value_of(row) != selected {
                return false;
            }
        }
    }
    true
}

/// Indices of the rows that pass, in input order
pub fn visible(rows: &[Resource], filter: &FilterState) -> Vec<usize> {
    rows.iter()
        .enumerate()
        .filter(|(_, row)| passes_filter(row, filter))
        .map(|(idx, _)| idx)
        .collect()
}
