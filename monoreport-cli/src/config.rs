use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::state;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiSection,
    pub report: ReportSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiSection {
    pub base_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportSection {
    /// IANA zone timestamps are rendered in
    pub timezone: String,
    /// Alphabetic code the selected account must settle in
    pub settlement_currency: String,
}

impl Default for ApiSection {
    fn default() -> Self {
        Self {
            base_url: monoreport_ingest::DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

impl Default for ReportSection {
    fn default() -> Self {
        Self {
            timezone: "Europe/Kyiv".to_string(),
            settlement_currency: monoreport_finance::DEFAULT_SETTLEMENT_CURRENCY.to_string(),
        }
    }
}

/// `~/.monoreport/config.toml`, or defaults when it doesn't exist.
pub fn load_config() -> Result<Config> {
    let p = state::config_path()?;
    if !p.exists() {
        return Ok(Config::default());
    }
    load_config_from(&p)
}

pub fn load_config_from(path: &Path) -> Result<Config> {
    let s = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    parse_config(&s).with_context(|| format!("parse {}", path.display()))
}

pub fn parse_config(s: &str) -> Result<Config> {
    Ok(toml::from_str(s)?)
}
