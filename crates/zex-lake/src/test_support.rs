//! Sample records and snapshots for loader and replication tests.

use zex_core::{
    Account, Budget, Company, Country, Instrument, Merchant, Reminder, ReminderMarker, Snapshot,
    Tag, Transaction, User,
};

const CHANGED: i64 = 1_722_340_800;

pub fn instrument(id: i64) -> Instrument {
    Instrument {
        id,
        changed: CHANGED,
        title: format!("Currency {id}"),
        short_title: format!("C{id}"),
        symbol: "$".to_string(),
        rate: 1.0 + id as f64 / 100.0,
    }
}

pub fn country(id: i64) -> Country {
    Country {
        id,
        title: format!("Country {id}"),
        currency: 2,
        domain: None,
    }
}

pub fn company(id: i64) -> Company {
    Company {
        id,
        changed: CHANGED,
        title: format!("Bank {id}"),
        full_title: Some(format!("Bank {id} Ltd.")),
        www: None,
        country: Some(1),
    }
}

pub fn user(id: i64) -> User {
    User {
        id,
        changed: CHANGED,
        login: Some(format!("user{id}")),
        currency: 2,
        parent: None,
    }
}

pub fn account(id: &str) -> Account {
    Account {
        id: id.to_string(),
        changed: CHANGED,
        user: 101,
        role: None,
        instrument: Some(2),
        company: Some(1),
        kind: "ccard".to_string(),
        title: format!("Account {id}"),
        sync_id: Some(vec!["4321".to_string()]),
        balance: Some(1500.25),
        start_balance: Some(0.0),
        credit_limit: Some(0.0),
        in_balance: true,
        savings: Some(false),
        enable_correction: true,
        enable_sms: false,
        archive: false,
        capitalization: None,
        percent: None,
        start_date: None,
        end_date_offset: None,
        end_date_offset_interval: None,
        payoff_step: None,
        payoff_interval: None,
    }
}

pub fn tag(id: &str) -> Tag {
    Tag {
        id: id.to_string(),
        changed: CHANGED,
        user: 101,
        title: format!("Tag {id}"),
        parent: None,
        icon: None,
        picture: None,
        color: Some(0x00FF_7700),
        show_income: true,
        show_outcome: true,
        budget_income: false,
        budget_outcome: true,
        required: None,
    }
}

pub fn merchant(id: &str) -> Merchant {
    Merchant {
        id: id.to_string(),
        changed: CHANGED,
        user: 101,
        title: format!("Merchant {id}"),
    }
}

pub fn budget(date: &str) -> Budget {
    Budget {
        changed: CHANGED,
        user: 101,
        tag: Some("tag-1".to_string()),
        date: date.to_string(),
        income: 0.0,
        income_lock: false,
        outcome: 500.0,
        outcome_lock: true,
    }
}

pub fn reminder(id: &str) -> Reminder {
    Reminder {
        id: id.to_string(),
        changed: CHANGED,
        user: 101,
        income_instrument: 2,
        income_account: "acc-1".to_string(),
        income: 1000.0,
        outcome_instrument: 2,
        outcome_account: "acc-1".to_string(),
        outcome: 0.0,
        tag: None,
        merchant: None,
        payee: Some("Employer".to_string()),
        comment: None,
        interval: Some("month".to_string()),
        step: Some(1),
        points: Some(vec![0]),
        start_date: "2024-01-01".to_string(),
        end_date: None,
        notify: true,
    }
}

pub fn reminder_marker(id: &str) -> ReminderMarker {
    ReminderMarker {
        id: id.to_string(),
        changed: CHANGED,
        user: 101,
        income_instrument: 2,
        income_account: "acc-1".to_string(),
        income: 1000.0,
        outcome_instrument: 2,
        outcome_account: "acc-1".to_string(),
        outcome: 0.0,
        tag: None,
        merchant: None,
        payee: Some("Employer".to_string()),
        comment: None,
        date: "2024-08-01".to_string(),
        reminder: "rem-1".to_string(),
        state: "planned".to_string(),
        notify: true,
    }
}

pub fn transaction(id: &str) -> Transaction {
    Transaction {
        id: id.to_string(),
        changed: CHANGED,
        created: CHANGED,
        user: 101,
        deleted: false,
        hold: Some(false),
        income_instrument: 2,
        income_account: "acc-1".to_string(),
        income: 0.0,
        outcome_instrument: 2,
        outcome_account: "acc-1".to_string(),
        outcome: 12.5,
        tag: Some(vec!["tag-1".to_string()]),
        merchant: None,
        payee: Some("Corner Store".to_string()),
        original_payee: None,
        comment: None,
        date: "2024-07-31".to_string(),
        mcc: Some(5411),
        reminder_marker: None,
        op_income: None,
        op_income_instrument: None,
        op_outcome: None,
        op_outcome_instrument: None,
        latitude: None,
        longitude: None,
    }
}

/// A snapshot with one record of every kind, ids suffixed by `seed`.
pub fn full_snapshot(seed: &str) -> Snapshot {
    Snapshot {
        server_timestamp: CHANGED,
        instruments: vec![instrument(2)],
        countries: vec![country(1)],
        companies: vec![company(1)],
        users: vec![user(101)],
        accounts: vec![account(&format!("acc-{seed}"))],
        tags: vec![tag(&format!("tag-{seed}"))],
        merchants: vec![merchant(&format!("mer-{seed}"))],
        budgets: vec![budget("2024-07-01")],
        reminders: vec![reminder(&format!("rem-{seed}"))],
        reminder_markers: vec![reminder_marker(&format!("rmk-{seed}"))],
        transactions: vec![transaction(&format!("trn-{seed}"))],
    }
}
