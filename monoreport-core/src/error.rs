//! Error kinds surfaced by the report pipeline.
//!
//! Every variant is fatal for a run; nothing here is retried.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    /// No account matched the requested type and settlement currency
    #[error("no {filter} account settled in {currency} found")]
    AccountNotFound { filter: String, currency: String },

    /// The banking provider call failed
    #[error("upstream fetch failed: {0}")]
    UpstreamFetch(String),

    /// ISO 4217 numeric code missing from the currency table
    #[error("unknown ISO 4217 currency code: {0}")]
    UnknownCurrency(u16),

    /// Output file could not be created or written
    #[error("output error: {0}")]
    OutputIo(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// Malformed flag or config value
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, ReportError>;
