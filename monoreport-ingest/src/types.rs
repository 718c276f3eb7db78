//! Wire format of the Monobank personal API.

use chrono::{DateTime, Utc};
use monoreport_core::{Account, AccountType, Transaction};
use serde::{Deserialize, Serialize};

/// `GET /personal/client-info`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientInfo {
    pub client_id: String,
    pub name: String,
    #[serde(default)]
    pub accounts: Vec<AccountInfo>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountInfo {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub currency_code: u16,
}

impl From<AccountInfo> for Account {
    fn from(a: AccountInfo) -> Self {
        Account {
            id: a.id,
            kind: AccountType::from_name(&a.kind),
            currency_code: a.currency_code,
        }
    }
}

/// One element of `GET /personal/statement/{account}/{from}/{to}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatementItem {
    pub id: String,
    /// Unix seconds
    pub time: i64,
    #[serde(default)]
    pub description: String,
    pub mcc: u16,
    pub amount: i64,
    pub balance: i64,
}

impl StatementItem {
    pub fn into_transaction(self) -> anyhow::Result<Transaction> {
        let time = DateTime::<Utc>::from_timestamp(self.time, 0)
            .ok_or_else(|| anyhow::anyhow!("statement item {} has invalid time {}", self.id, self.time))?;
        Ok(Transaction {
            id: self.id,
            time,
            description: self.description,
            mcc: self.mcc,
            amount: self.amount,
            balance: self.balance,
        })
    }
}

/// Error body returned with non-2xx statuses
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    pub error_description: String,
}
