//! Inventory Model
//!
//! Wire types for the resource collection served by `/api/list`.

use serde::{Deserialize, Deserializer, Serialize};

/// A single key/value tag attached to a resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    #[serde(alias = "Key", default)]
    pub key: String,
    #[serde(alias = "Value", default)]
    pub value: String,
}

impl Tag {
    pub fn new(key: &str, value: &str) -> Self {
        Self {
            key: key.to_string(),
            value: value.to_string(),
        }
    }

    /// Badge label shown in the grid and detail view
    pub fn badge(&self) -> String {
        format!("{}={}", self.key, self.value)
    }
}

/// One cloud inventory item
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Resource {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub arn: String,
    #[serde(rename = "type", default)]
    pub resource_type: String,
    /// Ordered, duplicate keys allowed
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub account: String,
    #[serde(rename = "accountAlias", default)]
    pub account_alias: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub ip: String,
    #[serde(default)]
    pub private_dns_name: String,
}

impl Resource {
    /// Composite account label, `"{accountAlias} ({account})"`
    pub fn account_label(&self) -> String {
        format!("{} ({})", self.account_alias, self.account)
    }
}

/// The backend encodes an empty tag slice as `null`
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Tag>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Tag>>::deserialize(deserializer)?.unwrap_or_default())
}
