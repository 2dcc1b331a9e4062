//! Wire shape of the declarative zone configuration.

use crate::error::Error;
use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ZoneConfig {
    #[serde(default)]
    pub domains: BTreeMap<String, DomainSpec>,
}

impl ZoneConfig {
    pub fn from_json(raw: &str) -> Result<Self, Error> {
        serde_json::from_str(raw).map_err(Error::from)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DomainSpec {
    pub provider: String,
    #[serde(default)]
    pub records: Vec<RecordSpec>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecordSpec {
    #[serde(rename = "type")]
    pub record_type: String,
    pub name: String,
    pub target: String,
    #[serde(default, deserialize_with = "bool_or_none")]
    pub proxied: Option<bool>,
}

// Only a JSON boolean toggles the proxy; any other value reads as unset.
fn bool_or_none<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_bool())
}
