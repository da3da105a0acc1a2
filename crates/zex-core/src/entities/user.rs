use serde::{Deserialize, Serialize};

/// A ZenMoney user. `parent` links family members to the primary account
/// holder.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub changed: i64,
    pub login: Option<String>,
    pub currency: i64,
    pub parent: Option<i64>,
}
