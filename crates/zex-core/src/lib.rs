//! # zex-core
//!
//! Snapshot model for zenexport.
//!
//! This crate provides the typed representation of one ZenMoney full-sync
//! result: eleven entity collections plus the server timestamp of the sync.
//! The structs mirror the ZenMoney v8 diff wire format (camelCase JSON,
//! unix-seconds timestamps, `YYYY-MM-DD` date strings) and carry no
//! storage concerns — column mapping lives in `zex-lake`.

pub mod entities;
pub mod snapshot;

pub use entities::{
    Account, Budget, Company, Country, Instrument, Merchant, Reminder, ReminderMarker, Tag,
    Transaction, User,
};
pub use snapshot::Snapshot;
