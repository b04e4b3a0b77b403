//! Property-based tests using proptest
//!
//! These tests verify the facet predicate, facet value derivation and tag
//! rendering using randomized resource collections.

use cloudpile::filter::{extract_facet_values, passes_filter, visible, Facet, FilterState};
use cloudpile::grid::{tag_badges, GridState};
use cloudpile::model::{Resource, Tag};
use proptest::prelude::*;

/// Small value pools so random filters actually hit rows
fn arb_resource() -> impl Strategy<Value = Resource> {
    (
        "i-[0-9a-f]{8}",
        prop_oneof![Just("EC2"), Just("RDS"), Just("Lambda"), Just("S3")],
        prop_oneof![Just("us-east-1"), Just("us-west-2"), Just("eu-west-1")],
        prop_oneof![Just("111"), Just("222"), Just("333")],
        prop_oneof![Just("prod"), Just("dev"), Just("")],
        prop::collection::vec(arb_tag(), 0..6),
    )
        .prop_map(|(id, resource_type, region, account, account_alias, tags)| Resource {
            id,
            resource_type: resource_type.to_string(),
            region: region.to_string(),
            account: account.to_string(),
            account_alias: account_alias.to_string(),
            tags,
            ..Default::default()
        })
}

fn arb_tag() -> impl Strategy<Value = Tag> {
    (prop_oneof![Just("env"), Just("team"), Just("Name")], "[a-z0-9]{0,8}")
        .prop_map(|(key, value)| Tag::new(key, &value))
}

fn arb_resource_list() -> impl Strategy<Value = Vec<Resource>> {
    prop::collection::vec(arb_resource(), 0..60)
}

/// IDs mixing numbers, NaN and text that starts with digits
fn arb_mixed_ids() -> impl Strategy<Value = Vec<Resource>> {
    let id = prop_oneof![
        Just("9"),
        Just("10"),
        Just("1a"),
        Just("NaN"),
        Just("2"),
        Just("b"),
        Just("100"),
        Just("1e1"),
        Just("x9"),
        Just("B"),
    ];
    prop::collection::vec(id, 20..220).prop_map(|ids| {
        ids.into_iter()
            .map(|id| Resource {
                id: id.to_string(),
                ..Default::default()
            })
            .collect()
    })
}

/// Any facet may be unset, set to a pooled value, or set to a value no row has
fn arb_filter_state() -> impl Strategy<Value = FilterState> {
    (
        prop::option::of(prop_oneof![
            Just("EC2"),
            Just("RDS"),
            Just("Lambda"),
            Just("S3"),
            Just("Batch")
        ]),
        prop::option::of(prop_oneof![
            Just("us-east-1"),
            Just("us-west-2"),
            Just("eu-west-1"),
            Just("ap-south-1")
        ]),
        prop::option::of(prop_oneof![
            Just("prod (111)"),
            Just("dev (222)"),
            Just(" (333)"),
            Just("111")
        ]),
    )
        .prop_map(|(resource_type, region, account)| {
            let mut state = FilterState::new();
            if let Some(v) = resource_type {
                state = state.select(Facet::Type, v);
            }
            if let Some(v) = region {
                state = state.select(Facet::Region, v);
            }
            if let Some(v) = account {
                state = state.select(Facet::Account, v);
            }
            state
        })
}

fn matches_all(resource: &Resource, state: &FilterState) -> bool {
    Facet::ALL.iter().all(|facet| match state.get(*facet) {
        Some(selected) => facet.value_of(resource) == selected,
        None => true,
    })
}

proptest! {
    /// Visible rows are exactly the rows passing every set facet, in order
    #[test]
    fn visible_is_conjunction_of_facets(
        resources in arb_resource_list(),
        state in arb_filter_state()
    ) {
        let expected: Vec<usize> = resources
            .iter()
            .enumerate()
            .filter(|(_, r)| matches_all(r, &state))
            .map(|(i, _)| i)
            .collect();
        prop_assert_eq!(visible(&resources, &state), expected);
    }

    /// An empty filter state shows everything
    #[test]
    fn empty_state_shows_all(resources in arb_resource_list()) {
        let shown = visible(&resources, &FilterState::new());
        prop_assert_eq!(shown, (0..resources.len()).collect::<Vec<_>>());
    }

    /// Filtering the already-visible rows again changes nothing
    #[test]
    fn refiltering_is_idempotent(
        resources in arb_resource_list(),
        state in arb_filter_state()
    ) {
        let once: Vec<Resource> = visible(&resources, &state)
            .into_iter()
            .map(|i| resources[i].clone())
            .collect();
        let twice = visible(&once, &state);
        prop_assert_eq!(twice.len(), once.len());
    }

    /// Facet values are distinct, sorted and independent of input order
    #[test]
    fn facet_values_are_distinct(resources in arb_resource_list()) {
        let mut reversed = resources.clone();
        reversed.reverse();

        for facet in Facet::ALL {
            let values = extract_facet_values(&resources, facet);
            let mut deduped = values.clone();
            deduped.dedup();
            prop_assert_eq!(&values, &deduped);
            prop_assert!(values.windows(2).all(|w| w[0] < w[1]));
            prop_assert_eq!(&values, &extract_facet_values(&reversed, facet));
            for r in &resources {
                prop_assert!(values.iter().any(|v| *v == facet.value_of(r)));
            }
        }
    }

    /// Every offered account choice matches exactly the rows it was derived from
    #[test]
    fn account_choice_matches_composite(resources in arb_resource_list()) {
        for choice in extract_facet_values(&resources, Facet::Account) {
            let state = FilterState::new().select(Facet::Account, &choice);
            for r in &resources {
                prop_assert_eq!(passes_filter(r, &state), r.account_label() == choice);
            }
        }
    }

    /// N tag pairs render as N badges, duplicates included
    #[test]
    fn tag_badge_cardinality(resource in arb_resource()) {
        let badges = tag_badges(&resource);
        prop_assert_eq!(badges.len(), resource.tags.len());
        for (badge, tag) in badges.iter().zip(&resource.tags) {
            prop_assert_eq!(badge, &format!("{}={}", tag.key, tag.value));
        }
    }

    /// Sorting a mixed column keeps every row, numbers first, in both directions
    #[test]
    fn sort_mixed_column_is_ordered(resources in arb_mixed_ids()) {
        let mut grid = GridState::new();
        for _ in 0..2 {
            grid.sort_by_column(0);
            grid.refresh(&resources, &FilterState::new());
            let ascending = grid.sort().map(|s| s.ascending).unwrap_or(true);

            let mut rows = grid.rows().to_vec();
            rows.sort_unstable();
            prop_assert_eq!(rows, (0..resources.len()).collect::<Vec<_>>());

            let numeric: Vec<bool> = grid
                .rows()
                .iter()
                .map(|&i| resources[i].id.parse::<f64>().is_ok())
                .collect();
            let switches = numeric.windows(2).filter(|w| w[0] != w[1]).count();
            prop_assert!(switches <= 1);
            if switches == 1 {
                prop_assert_eq!(numeric[0], ascending);
            }
        }
    }
}
