//! Statement transactions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One statement line. Amounts are signed minor units of the account currency:
/// negative = spend, positive = income.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: String,
    pub time: DateTime<Utc>,
    pub description: String,
    /// Merchant category code
    pub mcc: u16,
    pub amount: i64,
    /// Account balance after this transaction
    pub balance: i64,
}

impl Transaction {
    pub fn new(
        id: impl Into<String>,
        time: DateTime<Utc>,
        description: impl Into<String>,
        mcc: u16,
        amount: i64,
        balance: i64,
    ) -> Self {
        Self {
            id: id.into(),
            time,
            description: description.into(),
            mcc,
            amount,
            balance,
        }
    }
}
