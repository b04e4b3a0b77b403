//! Facet Extractor

use crate::model::Resource;
use std::borrow::Cow;
use std::collections::BTreeSet;

/// One independently selectable filter dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Facet {
    Type,
    Region,
    Account,
}

impl Facet {
    /// Display order of the selector controls
    pub const ALL: [Facet; 3] = [Facet::Type, Facet::Region, Facet::Account];

    pub fn label(self) -> &'static str {
        match self {
            Facet::Type => "Type",
            Facet::Region => "Region",
            Facet::Account => "Account",
        }
    }

    /// Value a row carries for this facet. Account uses the composite label,
    /// which is also what selections store and the predicate compares.
    pub fn value_of(self, resource: &Resource) -> Cow<'_, str> {
        match self {
            Facet::Type => Cow::Borrowed(&resource.resource_type),
            Facet::Region => Cow::Borrowed(&resource.region),
            Facet::Account => Cow::Owned(resource.account_label()),
        }
    }
}

/// Distinct values of `facet` across `resources`, each once, sorted
pub fn extract_facet_values(resources: &[Resource], facet: Facet) -> Vec<String> {
    resources
        .iter()
        .map(|r| facet.value_of(r).into_owned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Distinct values for every facet of the current collection
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FacetValues {
    pub types: Vec<String>,
    pub regions: Vec<String>,
    pub accounts: Vec<String>,
}

impl FacetValues {
    pub fn from_resources(resources: &[Resource]) -> Self {
        Self {
            types: extract_facet_values(resources, Facet::Type),
            regions: extract_facet_values(resources, Facet::Region),
            accounts: extract_facet_values(resources, Facet::Account),
        }
    }

    pub fn get(&self, facet: Facet) -> &[String] {
        match facet {
            Facet::Type => &self.types,
            Facet::Region => &self.regions,
            Facet::Account => &self.accounts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resource(resource_type: &str, region: &str, account: &str, alias: &str) -> Resource {
        Resource {
            resource_type: resource_type.to_string(),
            region: region.to_string(),
            account: account.to_string(),
            account_alias: alias.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_distinct_values_once() {
        let resources = vec![
            resource("EC2", "us-east-1", "111", "prod"),
            resource("RDS", "us-east-1", "111", "prod"),
            resource("EC2", "eu-west-1", "222", "dev"),
        ];

        assert_eq!(
            extract_facet_values(&resources, Facet::Type),
            vec!["EC2", "RDS"]
        );
        assert_eq!(
            extract_facet_values(&resources, Facet::Region),
            vec!["eu-west-1", "us-east-1"]
        );
    }

    #[test]
    fn test_account_facet_uses_composite_label() {
        let resources = vec![
            resource("EC2", "us-east-1", "111", "prod"),
            resource("EC2", "us-east-1", "222", "dev"),
        ];
        assert_eq!(
            extract_facet_values(&resources, Facet::Account),
            vec!["dev (222)", "prod (111)"]
        );
    }

    #[test]
    fn test_same_alias_different_accounts_stay_distinct() {
        let resources = vec![
            resource("EC2", "us-east-1", "111", "shared"),
            resource("EC2", "us-east-1", "333", "shared"),
        ];
        assert_eq!(
            extract_facet_values(&resources, Facet::Account).len(),
            2
        );
    }

    #[test]
    fn test_empty_collection() {
        let values = FacetValues::from_resources(&[]);
        assert!(values.get(Facet::Type).is_empty());
        assert!(values.get(Facet::Account).is_empty());
    }
}
