//! monoreport-core: data model and lookup tables for bank statement reports

pub mod account;
pub mod category;
pub mod currency;
pub mod error;
pub mod mcc;
pub mod money;
pub mod time;
pub mod transaction;

pub use account::{Account, AccountType, AccountTypeFilter};
pub use category::Category;
pub use currency::{Currency, currency_from_iso4217};
pub use error::{ReportError, Result};
pub use mcc::mcc_label;
pub use transaction::Transaction;
