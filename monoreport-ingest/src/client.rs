//! Async client for the Monobank personal API.
//!
//! One request per call; no retries or rate limiting. The provider allows a
//! statement window of at most 31 days + 1 hour.

use std::time::Duration;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use monoreport_core::{Account, ReportError, Transaction};
use reqwest::StatusCode;
use reqwest::header::{HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::types::{ApiError, ClientInfo, StatementItem};

pub const DEFAULT_BASE_URL: &str = "https://api.monobank.ua";
const TOKEN_HEADER: &str = "x-token";

#[derive(Debug, Clone)]
pub struct MonoClient {
    http: reqwest::Client,
    base_url: String,
}

impl MonoClient {
    pub fn new(token: &str, base_url: &str, timeout: Duration) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            TOKEN_HEADER,
            HeaderValue::from_str(token).context("API token is not a valid header value")?,
        );

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .context("build http client")?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Accounts of the token owner, in provider order.
    pub async fn accounts(&self) -> Result<Vec<Account>> {
        Ok(self
            .client_info()
            .await?
            .accounts
            .into_iter()
            .map(Account::from)
            .collect())
    }

    pub async fn client_info(&self) -> Result<ClientInfo> {
        self.get(&format!("{}/personal/client-info", self.base_url))
            .await
    }

    /// Transactions of `account_id` within `[from, to]`, newest first.
    pub async fn statement(
        &self,
        account_id: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Transaction>> {
        let url = statement_url(&self.base_url, account_id, from, to);
        let items: Vec<StatementItem> = self.get(&url).await?;
        items
            .into_iter()
            .map(StatementItem::into_transaction)
            .collect()
    }

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!(%url, "GET");
        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| ReportError::UpstreamFetch(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ReportError::UpstreamFetch(describe_failure(status, &body)).into());
        }

        let body = resp
            .text()
            .await
            .map_err(|e| ReportError::UpstreamFetch(e.to_string()))?;
        serde_json::from_str(&body)
            .map_err(|e| ReportError::UpstreamFetch(format!("malformed response: {e}")).into())
    }
}

pub fn statement_url(
    base_url: &str,
    account_id: &str,
    from: DateTime<Utc>,
    to: DateTime<Utc>,
) -> String {
    format!(
        "{}/personal/statement/{}/{}/{}",
        base_url.trim_end_matches('/'),
        account_id,
        from.timestamp(),
        to.timestamp()
    )
}

/// Prefer the provider's `errorDescription` over the raw body.
fn describe_failure(status: StatusCode, body: &str) -> String {
    match serde_json::from_str::<ApiError>(body) {
        Ok(err) => format!("{status}: {}", err.error_description),
        Err(_) if body.trim().is_empty() => status.to_string(),
        Err(_) => format!("{status}: {}", body.trim()),
    }
}
