//! Render classified transactions as a CSV record stream or a text report.

use std::fmt;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use monoreport_core::money::{format_exact, format_fixed};
use monoreport_core::time::{format_rfc3339, format_short};
use monoreport_core::{
    Account, Category, ReportError, Transaction, currency_from_iso4217, mcc_label,
};

use crate::category_rules::CategoryRules;

/// Extension (without the dot) that selects delimited output
pub const DELIMITED_EXTENSION: &str = "csv";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportMode {
    /// Headerless CSV, one record per transaction
    Delimited,
    /// Multi-line human-readable blocks
    Narrative,
}

impl ReportMode {
    /// `.csv` (exact, case-sensitive) selects delimited output; anything else
    /// is narrative.
    pub fn for_output(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(DELIMITED_EXTENSION) => ReportMode::Delimited,
            _ => ReportMode::Narrative,
        }
    }
}

/// Row order relative to the provider's (newest-first) order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowOrder {
    /// As fetched
    Native,
    /// Reversed, i.e. oldest first
    Reversed,
}

impl RowOrder {
    /// Narrative reports read oldest first; CSV keeps the fetched order.
    pub fn default_for(mode: ReportMode) -> Self {
        match mode {
            ReportMode::Delimited => RowOrder::Native,
            ReportMode::Narrative => RowOrder::Reversed,
        }
    }
}

impl FromStr for RowOrder {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "native" => Ok(RowOrder::Native),
            "reversed" => Ok(RowOrder::Reversed),
            other => Err(ReportError::InvalidArgument(format!(
                "unknown row order '{other}' (expected native or reversed)"
            ))),
        }
    }
}

impl fmt::Display for RowOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowOrder::Native => f.write_str("native"),
            RowOrder::Reversed => f.write_str("reversed"),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ReportOptions {
    pub mode: ReportMode,
    /// `None` uses [`RowOrder::default_for`] the mode
    pub order: Option<RowOrder>,
    pub timezone: Tz,
}

impl ReportOptions {
    pub fn new(mode: ReportMode, timezone: Tz) -> Self {
        Self {
            mode,
            order: None,
            timezone,
        }
    }

    pub fn order(&self) -> RowOrder {
        self.order.unwrap_or_else(|| RowOrder::default_for(self.mode))
    }
}

/// A transaction ready to print.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    /// 1-based position in output order
    pub number: usize,
    pub id: String,
    pub time: DateTime<Utc>,
    pub description: String,
    pub mcc: u16,
    pub amount: i64,
    pub balance: i64,
    pub currency: String,
    pub category: Category,
}

impl ReportRow {
    pub fn amount_exact(&self) -> String {
        format_exact(self.amount)
    }

    pub fn amount_fixed(&self) -> String {
        format_fixed(self.amount)
    }

    pub fn balance_fixed(&self) -> String {
        format_fixed(self.balance)
    }
}

/// Classify `txns` and arrange them in `order`, numbering from 1.
pub fn build_rows(
    txns: &[Transaction],
    currency: &str,
    order: RowOrder,
    rules: &CategoryRules<'_>,
) -> Vec<ReportRow> {
    let mut ordered: Vec<&Transaction> = txns.iter().collect();
    if order == RowOrder::Reversed {
        ordered.reverse();
    }

    ordered
        .into_iter()
        .enumerate()
        .map(|(i, tx)| ReportRow {
            number: i + 1,
            id: tx.id.clone(),
            time: tx.time,
            description: tx.description.clone(),
            mcc: tx.mcc,
            amount: tx.amount,
            balance: tx.balance,
            currency: currency.to_string(),
            category: rules.classify_transaction(tx),
        })
        .collect()
}

/// Columns: date, description, amount, currency, category. No header.
pub fn write_delimited<W: Write>(out: W, rows: &[ReportRow], tz: Tz) -> Result<(), ReportError> {
    let mut wtr = csv::WriterBuilder::new().has_headers(false).from_writer(out);
    for row in rows {
        wtr.write_record([
            format_short(row.time, tz).as_str(),
            row.description.as_str(),
            row.amount_exact().as_str(),
            row.currency.as_str(),
            row.category.label(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_narrative<W: Write>(
    mut out: W,
    rows: &[ReportRow],
    tz: Tz,
) -> Result<(), ReportError> {
    for row in rows {
        writeln!(out, "Number: {}", row.number)?;
        writeln!(out, "ID: {}", row.id)?;
        writeln!(out, "Amount: {} {}", row.amount_fixed(), row.currency)?;
        writeln!(out, "Description: {}", row.description)?;
        writeln!(out, "Date: {}", format_rfc3339(row.time, tz))?;
        writeln!(out, "MCC: {} ({})", row.mcc, mcc_label(row.mcc))?;
        writeln!(out, "Category: {}", row.category)?;
        writeln!(out, "Balance: {} {}", row.balance_fixed(), row.currency)?;
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}

/// Classify and render `txns` of `account`. Returns the number of rows written.
pub fn write_report<W: Write>(
    out: W,
    txns: &[Transaction],
    account: &Account,
    options: &ReportOptions,
    rules: &CategoryRules<'_>,
) -> Result<usize, ReportError> {
    let currency = currency_from_iso4217(account.currency_code)?;
    let rows = build_rows(txns, currency.code, options.order(), rules);

    match options.mode {
        ReportMode::Delimited => write_delimited(out, &rows, options.timezone)?,
        ReportMode::Narrative => write_narrative(out, &rows, options.timezone)?,
    }

    Ok(rows.len())
}
