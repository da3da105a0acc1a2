use serde::{Deserialize, Serialize};

/// One concrete occurrence of a [`Reminder`](super::Reminder) on the
/// calendar, with its planned/processed/deleted state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReminderMarker {
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
    pub date: String,
    pub reminder: String,
    pub state: String,
    pub notify: bool,
}
