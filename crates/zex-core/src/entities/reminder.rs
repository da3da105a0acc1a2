use serde::{Deserialize, Serialize};

/// A recurring planned operation (salary, subscription, loan payment).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    pub id: String,
    pub changed: i64,
    pub user: i64,
    pub income_instrument: i64,
    pub income_account: String,
    pub income: f64,
    pub outcome_instrument: i64,
    pub outcome_account: String,
    pub outcome: f64,
    pub tag: Option<Vec<String>>,
    pub merchant: Option<String>,
    pub payee: Option<String>,
    pub comment: Option<String>,
    pub interval: Option<String>,
    pub step: Option<i64>,
    pub points: Option<Vec<i64>>,
    pub start_date: String,
    pub end_date: Option<String>,
    pub notify: bool,
}
