use serde::{Deserialize, Serialize};

/// A currency or other financial instrument, with its exchange rate
/// against the base currency.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Instrument {
    pub id: i64,
    pub changed: i64,
    pub title: String,
    pub short_title: String,
    pub symbol: String,
    pub rate: f64,
}
