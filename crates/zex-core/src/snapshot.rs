//! One full-sync result from the ZenMoney diff endpoint.

use serde::{Deserialize, Serialize};

use crate::entities::{
    Account, Budget, Company, Country, Instrument, Merchant, Reminder, ReminderMarker, Tag,
    Transaction, User,
};

/// A complete financial-data snapshot: eleven entity collections fetched in
/// one diff call with `serverTimestamp = 0`.
///
/// The diff response omits collections with no records, so every collection
/// defaults to empty. A snapshot is owned by exactly one replication run and
/// dropped when the run ends — there is no caching or diffing against a
/// previous snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(default)]
    pub server_timestamp: i64,
    #[serde(default, rename = "instrument")]
    pub instruments: Vec<Instrument>,
    #[serde(default, rename = "country")]
    pub countries: Vec<Country>,
    #[serde(default, rename = "company")]
    pub companies: Vec<Company>,
    #[serde(default, rename = "user")]
    pub users: Vec<User>,
    #[serde(default, rename = "account")]
    pub accounts: Vec<Account>,
    #[serde(default, rename = "tag")]
    pub tags: Vec<Tag>,
    #[serde(default, rename = "merchant")]
    pub merchants: Vec<Merchant>,
    #[serde(default, rename = "budget")]
    pub budgets: Vec<Budget>,
    #[serde(default, rename = "reminder")]
    pub reminders: Vec<Reminder>,
    #[serde(default, rename = "reminderMarker")]
    pub reminder_markers: Vec<ReminderMarker>,
    #[serde(default, rename = "transaction")]
    pub transactions: Vec<Transaction>,
}

impl Snapshot {
    /// Total record count across all eleven collections.
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.instruments.len()
            + self.countries.len()
            + self.companies.len()
            + self.users.len()
            + self.accounts.len()
            + self.tags.len()
            + self.merchants.len()
            + self.budgets.len()
            + self.reminders.len()
            + self.reminder_markers.len()
            + self.transactions.len()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const FIXTURE: &str = r#"{
        "serverTimestamp": 1722945600,
        "instrument": [
            {
                "id": 2,
                "changed": 1722340800,
                "title": "US Dollar",
                "shortTitle": "USD",
                "symbol": "$",
                "rate": 1.0
            },
            {
                "id": 3,
                "changed": 1722340800,
                "title": "Euro",
                "shortTitle": "EUR",
                "symbol": "€",
                "rate": 1.09
            }
        ],
        "country": [
            {"id": 1, "title": "United States", "currency": 2, "domain": "us"},
            {"id": 2, "title": "Nowhere", "currency": 2, "domain": null}
        ],
        "user": [
            {"id": 101, "changed": 1722340800, "login": "alice", "currency": 2, "parent": null}
        ],
        "account": [
            {
                "id": "f6f9ab47-9db8-4c07-9a00-000000000001",
                "changed": 1722340800,
                "user": 101,
                "role": null,
                "instrument": 2,
                "company": null,
                "type": "ccard",
                "title": "Main card",
                "syncID": ["4321"],
                "balance": 1500.25,
                "startBalance": 0.0,
                "creditLimit": 0.0,
                "inBalance": true,
                "savings": false,
                "enableCorrection": true,
                "enableSMS": false,
                "archive": false,
                "capitalization": null,
                "percent": null,
                "startDate": null,
                "endDateOffset": null,
                "endDateOffsetInterval": null,
                "payoffStep": null,
                "payoffInterval": null
            }
        ],
        "transaction": [
            {
                "id": "0a1b2c3d-0000-0000-0000-00000000abcd",
                "changed": 1722427200,
                "created": 1722427200,
                "user": 101,
                "deleted": false,
                "hold": false,
                "incomeInstrument": 2,
                "incomeAccount": "f6f9ab47-9db8-4c07-9a00-000000000001",
                "income": 0.0,
                "outcomeInstrument": 2,
                "outcomeAccount": "f6f9ab47-9db8-4c07-9a00-000000000001",
                "outcome": 12.5,
                "tag": ["11111111-0000-0000-0000-000000000001"],
                "merchant": null,
                "payee": "Corner Store",
                "originalPayee": "CORNER STORE 42",
                "comment": null,
                "date": "2024-07-31",
                "mcc": 5411,
                "reminderMarker": null,
                "opIncome": null,
                "opIncomeInstrument": null,
                "opOutcome": null,
                "opOutcomeInstrument": null,
                "latitude": null,
                "longitude": null
            }
        ]
    }"#;

    #[test]
    fn parse_diff_response() {
        let snapshot: Snapshot = serde_json::from_str(FIXTURE).unwrap();

        assert_eq!(snapshot.server_timestamp, 1_722_945_600);
        assert_eq!(snapshot.instruments.len(), 2);
        assert_eq!(snapshot.instruments[0].short_title, "USD");
        assert_eq!(snapshot.countries[1].domain, None);
        assert_eq!(snapshot.users[0].login.as_deref(), Some("alice"));
        assert_eq!(snapshot.transactions[0].mcc, Some(5411));
    }

    #[test]
    fn absent_collections_default_to_empty() {
        let snapshot: Snapshot = serde_json::from_str(FIXTURE).unwrap();

        assert!(snapshot.companies.is_empty());
        assert!(snapshot.tags.is_empty());
        assert!(snapshot.merchants.is_empty());
        assert!(snapshot.budgets.is_empty());
        assert!(snapshot.reminders.is_empty());
        assert!(snapshot.reminder_markers.is_empty());
    }

    #[test]
    fn account_wire_renames() {
        let snapshot: Snapshot = serde_json::from_str(FIXTURE).unwrap();
        let account = &snapshot.accounts[0];

        assert_eq!(account.kind, "ccard");
        assert_eq!(account.sync_id.as_deref(), Some(&["4321".to_string()][..]));
        assert!(!account.enable_sms);
    }

    #[test]
    fn record_count_sums_all_collections() {
        let snapshot: Snapshot = serde_json::from_str(FIXTURE).unwrap();
        assert_eq!(snapshot.record_count(), 2 + 2 + 1 + 1 + 1);

        assert_eq!(Snapshot::default().record_count(), 0);
    }

    #[test]
    fn empty_object_parses_to_default() {
        let snapshot: Snapshot = serde_json::from_str("{}").unwrap();
        assert_eq!(snapshot, Snapshot::default());
    }
}
