//! Entity structs for the eleven ZenMoney collections.
//!
//! Each entity maps to one destination table in the DuckDB store (see
//! `zex-lake`). Field names are Rust snake_case; serde renames restore the
//! camelCase wire names. Nullable wire fields are `Option<T>`.

mod account;
mod budget;
mod company;
mod country;
mod instrument;
mod merchant;
mod reminder;
mod reminder_marker;
mod tag;
mod transaction;
mod user;

pub use account::Account;
pub use budget::Budget;
pub use company::Company;
pub use country::Country;
pub use instrument::Instrument;
pub use merchant::Merchant;
pub use reminder::Reminder;
pub use reminder_marker::ReminderMarker;
pub use tag::Tag;
pub use transaction::Transaction;
pub use user::User;
