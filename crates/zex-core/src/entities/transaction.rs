use serde::{Deserialize, Serialize};

/// A single money movement. Income, outcome and transfer are all encoded
/// in one record: a transfer has both income and outcome sides set. The
/// `op_*` fields carry the original amounts for cross-currency operations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub changed: i64,
    pub created: i64,
    pub user: i64,
    pub deleted: bool,
    pub hold: Option<bool>,
    pub income_instrument: i64,
    pub income_account: String,
    pub income: f64,
    pub outcome_instrument: i64,
    pub outcome_account: String,
    pub outcome: f64,
    pub tag: Option<Vec<String>>,
    pub merchant: Option<String>,
    pub payee: Option<String>,
    pub original_payee: Option<String>,
    pub comment: Option<String>,
    pub date: String,
    pub mcc: Option<i64>,
    pub reminder_marker: Option<String>,
    pub op_income: Option<f64>,
    pub op_income_instrument: Option<i64>,
    pub op_outcome: Option<f64>,
    pub op_outcome_instrument: Option<i64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}
