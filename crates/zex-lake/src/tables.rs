//! Table specs: destination table name, column order, and row extraction
//! for each of the eleven entity kinds.
//!
//! The loader binds rows positionally, so `COLUMNS` is the contract with the
//! DDL in `schema.rs`: same names, same order, bit-exact. Multi-valued wire
//! fields (tag lists, sync ids, reminder points) are stored as JSON text.

use duckdb::types::Value;
use serde::Serialize;
use zex_core::{
    Account, Budget, Company, Country, Instrument, Merchant, Reminder, ReminderMarker, Tag,
    Transaction, User,
};

/// Static mapping of one entity kind onto its destination table.
pub trait TableRecord {
    /// Destination table name.
    const TABLE: &'static str;

    /// Ordered column list of the destination table.
    const COLUMNS: &'static [&'static str];

    /// One value per column, in `COLUMNS` order.
    fn row(&self) -> Vec<Value>;
}

/// Null-preserving conversion for optional scalar fields.
fn opt<T: Into<Value>>(value: Option<T>) -> Value {
    value.map_or(Value::Null, Into::into)
}

/// JSON-encode a multi-valued field into a text column value.
fn json<T: Serialize>(value: Option<&T>) -> Value {
    value.map_or(Value::Null, |v| {
        serde_json::to_string(v).map_or(Value::Null, Value::Text)
    })
}

impl TableRecord for Instrument {
    const TABLE: &'static str = "instrument";
    const COLUMNS: &'static [&'static str] =
        &["id", "changed", "title", "short_title", "symbol", "rate"];

    fn row(&self) -> Vec<Value> {
        vec![
            self.id.into(),
            self.changed.into(),
            self.title.clone().into(),
            self.short_title.clone().into(),
            self.symbol.clone().into(),
            self.rate.into(),
        ]
    }
}

impl TableRecord for Country {
    const TABLE: &'static str = "country";
    const COLUMNS: &'static [&'static str] = &["id", "title", "currency", "domain"];

    fn row(&self) -> Vec<Value> {
        vec![
            self.id.into(),
            self.title.clone().into(),
            self.currency.into(),
            opt(self.domain.clone()),
        ]
    }
}

impl TableRecord for Company {
    const TABLE: &'static str = "company";
    const COLUMNS: &'static [&'static str] =
        &["id", "changed", "title", "full_title", "www", "country"];

    fn row(&self) -> Vec<Value> {
        vec![
            self.id.into(),
            self.changed.into(),
            self.title.clone().into(),
            opt(self.full_title.clone()),
            opt(self.www.clone()),
            opt(self.country),
        ]
    }
}

impl TableRecord for User {
    const TABLE: &'static str = "user";
    const COLUMNS: &'static [&'static str] = &["id", "changed", "login", "currency", "parent"];

    fn row(&self) -> Vec<Value> {
        vec![
            self.id.into(),
            self.changed.into(),
            opt(self.login.clone()),
            self.currency.into(),
            opt(self.parent),
        ]
    }
}

impl TableRecord for Account {
    const TABLE: &'static str = "account";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "changed",
        "user",
        "role",
        "instrument",
        "company",
        "type",
        "title",
        "sync_id",
        "balance",
        "start_balance",
        "credit_limit",
        "in_balance",
        "savings",
        "enable_correction",
        "enable_sms",
        "archive",
        "capitalization",
        "percent",
        "start_date",
        "end_date_offset",
        "end_date_offset_interval",
        "payoff_step",
        "payoff_interval",
    ];

    fn row(&self) -> Vec<Value> {
        vec![
            self.id.clone().into(),
            self.changed.into(),
            self.user.into(),
            opt(self.role),
            opt(self.instrument),
            opt(self.company),
            self.kind.clone().into(),
            self.title.clone().into(),
            json(self.sync_id.as_ref()),
            opt(self.balance),
            opt(self.start_balance),
            opt(self.credit_limit),
            self.in_balance.into(),
            opt(self.savings),
            self.enable_correction.into(),
            self.enable_sms.into(),
            self.archive.into(),
            opt(self.capitalization),
            opt(self.percent),
            opt(self.start_date.clone()),
            opt(self.end_date_offset),
            opt(self.end_date_offset_interval.clone()),
            opt(self.payoff_step),
            opt(self.payoff_interval.clone()),
        ]
    }
}

impl TableRecord for Tag {
    const TABLE: &'static str = "tag";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "changed",
        "user",
        "title",
        "parent",
        "icon",
        "picture",
        "color",
        "show_income",
        "show_outcome",
        "budget_income",
        "budget_outcome",
        "required",
    ];

    fn row(&self) -> Vec<Value> {
        vec![
            self.id.clone().into(),
            self.changed.into(),
            self.user.into(),
            self.title.clone().into(),
            opt(self.parent.clone()),
            opt(self.icon.clone()),
            opt(self.picture.clone()),
            opt(self.color),
            self.show_income.into(),
            self.show_outcome.into(),
            self.budget_income.into(),
            self.budget_outcome.into(),
            opt(self.required),
        ]
    }
}

impl TableRecord for Merchant {
    const TABLE: &'static str = "merchant";
    const COLUMNS: &'static [&'static str] = &["id", "changed", "user", "title"];

    fn row(&self) -> Vec<Value> {
        vec![
            self.id.clone().into(),
            self.changed.into(),
            self.user.into(),
            self.title.clone().into(),
        ]
    }
}

impl TableRecord for Budget {
    const TABLE: &'static str = "budget";
    const COLUMNS: &'static [&'static str] = &[
        "changed",
        "user",
        "tag",
        "date",
        "income",
        "income_lock",
        "outcome",
        "outcome_lock",
    ];

    fn row(&self) -> Vec<Value> {
        vec![
            self.changed.into(),
            self.user.into(),
            opt(self.tag.clone()),
            self.date.clone().into(),
            self.income.into(),
            self.income_lock.into(),
            self.outcome.into(),
            self.outcome_lock.into(),
        ]
    }
}

impl TableRecord for Reminder {
    const TABLE: &'static str = "reminder";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "changed",
        "user",
        "income_instrument",
        "income_account",
        "income",
        "outcome_instrument",
        "outcome_account",
        "outcome",
        "tag",
        "merchant",
        "payee",
        "comment",
        "interval",
        "step",
        "points",
        "start_date",
        "end_date",
        "notify",
    ];

    fn row(&self) -> Vec<Value> {
        vec![
            self.id.clone().into(),
            self.changed.into(),
            self.user.into(),
            self.income_instrument.into(),
            self.income_account.clone().into(),
            self.income.into(),
            self.outcome_instrument.into(),
            self.outcome_account.clone().into(),
            self.outcome.into(),
            json(self.tag.as_ref()),
            opt(self.merchant.clone()),
            opt(self.payee.clone()),
            opt(self.comment.clone()),
            opt(self.interval.clone()),
            opt(self.step),
            json(self.points.as_ref()),
            self.start_date.clone().into(),
            opt(self.end_date.clone()),
            self.notify.into(),
        ]
    }
}

impl TableRecord for ReminderMarker {
    const TABLE: &'static str = "reminder_marker";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "changed",
        "user",
        "income_instrument",
        "income_account",
        "income",
        "outcome_instrument",
        "outcome_account",
        "outcome",
        "tag",
        "merchant",
        "payee",
        "comment",
        "date",
        "reminder",
        "state",
        "notify",
    ];

    fn row(&self) -> Vec<Value> {
        vec![
            self.id.clone().into(),
            self.changed.into(),
            self.user.into(),
            self.income_instrument.into(),
            self.income_account.clone().into(),
            self.income.into(),
            self.outcome_instrument.into(),
            self.outcome_account.clone().into(),
            self.outcome.into(),
            json(self.tag.as_ref()),
            opt(self.merchant.clone()),
            opt(self.payee.clone()),
            opt(self.comment.clone()),
            self.date.clone().into(),
            self.reminder.clone().into(),
            self.state.clone().into(),
            self.notify.into(),
        ]
    }
}

impl TableRecord for Transaction {
    const TABLE: &'static str = "transaction";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "changed",
        "created",
        "user",
        "deleted",
        "hold",
        "income_instrument",
        "income_account",
        "income",
        "outcome_instrument",
        "outcome_account",
        "outcome",
        "tag",
        "merchant",
        "payee",
        "original_payee",
        "comment",
        "date",
        "mcc",
        "reminder_marker",
        "op_income",
        "op_income_instrument",
        "op_outcome",
        "op_outcome_instrument",
        "latitude",
        "longitude",
    ];

    fn row(&self) -> Vec<Value> {
        vec![
            self.id.clone().into(),
            self.changed.into(),
            self.created.into(),
            self.user.into(),
            self.deleted.into(),
            opt(self.hold),
            self.income_instrument.into(),
            self.income_account.clone().into(),
            self.income.into(),
            self.outcome_instrument.into(),
            self.outcome_account.clone().into(),
            self.outcome.into(),
            json(self.tag.as_ref()),
            opt(self.merchant.clone()),
            opt(self.payee.clone()),
            opt(self.original_payee.clone()),
            opt(self.comment.clone()),
            self.date.clone().into(),
            opt(self.mcc),
            opt(self.reminder_marker.clone()),
            opt(self.op_income),
            opt(self.op_income_instrument),
            opt(self.op_outcome),
            opt(self.op_outcome_instrument),
            opt(self.latitude),
            opt(self.longitude),
        ]
    }
}
