use serde::{Deserialize, Serialize};

/// A payee the user has transacted with.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Merchant {
    pub id: String,
    pub changed: i64,
    pub user: i64,
    pub title: String,
}
