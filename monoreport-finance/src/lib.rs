//! monoreport-finance: category rules, account selection and report rendering

pub mod account_selector;
pub mod category_rules;
pub mod report;

pub use account_selector::{DEFAULT_SETTLEMENT_CURRENCY, select_account, select_account_in};
pub use category_rules::{CategoryRules, DEFAULT_RULES, Rule, TextMatch, classify};
pub use report::{ReportMode, ReportOptions, ReportRow, RowOrder, build_rows, write_report};
