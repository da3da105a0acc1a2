//! DuckDB table DDL for the destination store.
//!
//! Column order here is the contract: the loader appends positionally, so
//! every `CREATE TABLE` must list columns in exactly the order declared by
//! the matching [`TableRecord::COLUMNS`](crate::TableRecord::COLUMNS).
//! `user` and `transaction` are reserved words in the SQL dialect and stay
//! quoted in DDL and statements built from table names.

/// Currencies and their rates.
pub const CREATE_INSTRUMENT: &str = "
CREATE TABLE IF NOT EXISTS instrument (
    id BIGINT NOT NULL,
    changed BIGINT NOT NULL,
    title TEXT,
    short_title TEXT,
    symbol TEXT,
    rate DOUBLE,
    PRIMARY KEY (id)
);
";

pub const CREATE_COUNTRY: &str = "
CREATE TABLE IF NOT EXISTS country (
    id BIGINT NOT NULL,
    title TEXT,
    currency BIGINT,
    domain TEXT,
    PRIMARY KEY (id)
);
";

pub const CREATE_COMPANY: &str = "
CREATE TABLE IF NOT EXISTS company (
    id BIGINT NOT NULL,
    changed BIGINT NOT NULL,
    title TEXT,
    full_title TEXT,
    www TEXT,
    country BIGINT,
    PRIMARY KEY (id)
);
";

pub const CREATE_USER: &str = "
CREATE TABLE IF NOT EXISTS \"user\" (
    id BIGINT NOT NULL,
    changed BIGINT NOT NULL,
    login TEXT,
    currency BIGINT,
    parent BIGINT,
    PRIMARY KEY (id)
);
";

pub const CREATE_ACCOUNT: &str = "
CREATE TABLE IF NOT EXISTS account (
    id TEXT NOT NULL,
    changed BIGINT NOT NULL,
    \"user\" BIGINT NOT NULL,
    role BIGINT,
    instrument BIGINT,
    company BIGINT,
    type TEXT,
    title TEXT,
    sync_id TEXT,
    balance DOUBLE,
    start_balance DOUBLE,
    credit_limit DOUBLE,
    in_balance BOOLEAN,
    savings BOOLEAN,
    enable_correction BOOLEAN,
    enable_sms BOOLEAN,
    archive BOOLEAN,
    capitalization BOOLEAN,
    percent DOUBLE,
    start_date TEXT,
    end_date_offset BIGINT,
    end_date_offset_interval TEXT,
    payoff_step BIGINT,
    payoff_interval TEXT,
    PRIMARY KEY (id)
);
";

pub const CREATE_TAG: &str = "
CREATE TABLE IF NOT EXISTS tag (
    id TEXT NOT NULL,
    changed BIGINT NOT NULL,
    \"user\" BIGINT NOT NULL,
    title TEXT,
    parent TEXT,
    icon TEXT,
    picture TEXT,
    color BIGINT,
    show_income BOOLEAN,
    show_outcome BOOLEAN,
    budget_income BOOLEAN,
    budget_outcome BOOLEAN,
    required BOOLEAN,
    PRIMARY KEY (id)
);
";

pub const CREATE_MERCHANT: &str = "
CREATE TABLE IF NOT EXISTS merchant (
    id TEXT NOT NULL,
    changed BIGINT NOT NULL,
    \"user\" BIGINT NOT NULL,
    title TEXT,
    PRIMARY KEY (id)
);
";

/// Budgets have no id; (user, tag, date) identifies a row upstream.
pub const CREATE_BUDGET: &str = "
CREATE TABLE IF NOT EXISTS budget (
    changed BIGINT NOT NULL,
    \"user\" BIGINT NOT NULL,
    tag TEXT,
    date TEXT,
    income DOUBLE,
    income_lock BOOLEAN,
    outcome DOUBLE,
    outcome_lock BOOLEAN
);
";

pub const CREATE_REMINDER: &str = "
CREATE TABLE IF NOT EXISTS reminder (
    id TEXT NOT NULL,
    changed BIGINT NOT NULL,
    \"user\" BIGINT NOT NULL,
    income_instrument BIGINT,
    income_account TEXT,
    income DOUBLE,
    outcome_instrument BIGINT,
    outcome_account TEXT,
    outcome DOUBLE,
    tag TEXT,
    merchant TEXT,
    payee TEXT,
    comment TEXT,
    interval TEXT,
    step BIGINT,
    points TEXT,
    start_date TEXT,
    end_date TEXT,
    notify BOOLEAN,
    PRIMARY KEY (id)
);
";

pub const CREATE_REMINDER_MARKER: &str = "
CREATE TABLE IF NOT EXISTS reminder_marker (
    id TEXT NOT NULL,
    changed BIGINT NOT NULL,
    \"user\" BIGINT NOT NULL,
    income_instrument BIGINT,
    income_account TEXT,
    income DOUBLE,
    outcome_instrument BIGINT,
    outcome_account TEXT,
    outcome DOUBLE,
    tag TEXT,
    merchant TEXT,
    payee TEXT,
    comment TEXT,
    date TEXT,
    reminder TEXT,
    state TEXT,
    notify BOOLEAN,
    PRIMARY KEY (id)
);
";

pub const CREATE_TRANSACTION: &str = "
CREATE TABLE IF NOT EXISTS \"transaction\" (
    id TEXT NOT NULL,
    changed BIGINT NOT NULL,
    created BIGINT NOT NULL,
    \"user\" BIGINT NOT NULL,
    deleted BOOLEAN,
    hold BOOLEAN,
    income_instrument BIGINT,
    income_account TEXT,
    income DOUBLE,
    outcome_instrument BIGINT,
    outcome_account TEXT,
    outcome DOUBLE,
    tag TEXT,
    merchant TEXT,
    payee TEXT,
    original_payee TEXT,
    comment TEXT,
    date TEXT,
    mcc BIGINT,
    reminder_marker TEXT,
    op_income DOUBLE,
    op_income_instrument BIGINT,
    op_outcome DOUBLE,
    op_outcome_instrument BIGINT,
    latitude DOUBLE,
    longitude DOUBLE,
    PRIMARY KEY (id)
);
";

/// All table DDL in creation order.
pub const CREATE_TABLES: &[&str] = &[
    CREATE_INSTRUMENT,
    CREATE_COUNTRY,
    CREATE_COMPANY,
    CREATE_USER,
    CREATE_ACCOUNT,
    CREATE_TAG,
    CREATE_MERCHANT,
    CREATE_BUDGET,
    CREATE_REMINDER,
    CREATE_REMINDER_MARKER,
    CREATE_TRANSACTION,
];
