//! Filter State
//!
//! Selections are replaced, never mutated in place: controls dispatch a
//! [`FilterMsg`] and receive a new [`FilterState`].

use super::facets::Facet;

/// Current selection per facet; `None` means the facet does not constrain
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    resource_type: Option<String>,
    region: Option<String>,
    account: Option<String>,
}

/// State replacement requested by a selector control
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterMsg {
    Select(Facet, String),
    Clear(Facet),
    ClearAll,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, facet: Facet) -> Option<&str> {
        match facet {
            Facet::Type => self.resource_type.as_deref(),
            Facet::Region => self.region.as_deref(),
            Facet::Account => self.account.as_deref(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }

    pub fn active_count(&self) -> usize {
        Facet::ALL
            .iter()
            .filter(|f| self.get(**f).is_some())
            .count()
    }

    /// Return the state that results from `msg`
    pub fn apply(&self, msg: FilterMsg) -> FilterState {
        match msg {
            FilterMsg::Select(facet, value) => self.with(facet, Some(value)),
            FilterMsg::Clear(facet) => self.with(facet, None),
            FilterMsg::ClearAll => FilterState::default(),
        }
    }

    /// Builder form of `apply(Select(..))`
    pub fn select(self, facet: Facet, value: &str) -> FilterState {
        self.apply(FilterMsg::Select(facet, value.to_string()))
    }

    fn with(&self, facet: Facet, selection: Option<String>) -> FilterState {
        let mut next = self.clone();
        match facet {
            Facet::Type => next.resource_type = selection,
            Facet::Region => next.region = selection,
            Facet::Account => next.account = selection,
        }
        next
    }
}
