use serde::{Deserialize, Serialize};

/// A monthly budget row for one tag. Budgets have no id of their own;
/// (user, tag, date) identifies a row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub changed: i64,
    pub user: i64,
    pub tag: Option<String>,
    pub date: String,
    pub income: f64,
    pub income_lock: bool,
    pub outcome: f64,
    pub outcome_lock: bool,
}
