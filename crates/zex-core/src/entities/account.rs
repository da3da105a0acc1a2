use serde::{Deserialize, Serialize};

/// A money account: bank account, card, cash, deposit, loan or debt.
///
/// Deposit/loan accounts carry the capitalization and payoff fields; they
/// are null for everything else.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub changed: i64,
    pub user: i64,
    pub role: Option<i64>,
    pub instrument: Option<i64>,
    pub company: Option<i64>,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    #[serde(rename = "syncID")]
    pub sync_id: Option<Vec<String>>,
    pub balance: Option<f64>,
    pub start_balance: Option<f64>,
    pub credit_limit: Option<f64>,
    pub in_balance: bool,
    pub savings: Option<bool>,
    pub enable_correction: bool,
    #[serde(rename = "enableSMS")]
    pub enable_sms: bool,
    pub archive: bool,
    pub capitalization: Option<bool>,
    pub percent: Option<f64>,
    pub start_date: Option<String>,
    pub end_date_offset: Option<i64>,
    pub end_date_offset_interval: Option<String>,
    pub payoff_step: Option<i64>,
    pub payoff_interval: Option<String>,
}
