use serde::{Deserialize, Serialize};

/// A country, with its default currency instrument.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Country {
    pub id: i64,
    pub title: String,
    pub currency: i64,
    pub domain: Option<String>,
}
