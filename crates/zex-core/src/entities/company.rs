use serde::{Deserialize, Serialize};

/// A bank or payment provider accounts can belong to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: i64,
    pub changed: i64,
    pub title: String,
    pub full_title: Option<String>,
    pub www: Option<String>,
    pub country: Option<i64>,
}
