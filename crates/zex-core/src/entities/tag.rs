use serde::{Deserialize, Serialize};

/// A user-defined spending category. Tags form a two-level tree via
/// `parent`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub id: String,
    pub changed: i64,
    pub user: i64,
    pub title: String,
    pub parent: Option<String>,
    pub icon: Option<String>,
    pub picture: Option<String>,
    pub color: Option<i64>,
    pub show_income: bool,
    pub show_outcome: bool,
    pub budget_income: bool,
    pub budget_outcome: bool,
    pub required: Option<bool>,
}
