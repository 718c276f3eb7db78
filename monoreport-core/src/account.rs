//! Bank accounts as reported by the provider.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ReportError;

/// Card/account product line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountType {
    #[serde(rename = "black")]
    Black,
    #[serde(rename = "white")]
    White,
    #[serde(rename = "platinum")]
    Platinum,
    #[serde(rename = "iron")]
    Iron,
    #[serde(rename = "fop")]
    Fop,
    #[serde(rename = "yellow")]
    Yellow,
    #[serde(rename = "eAid")]
    EAid,
    /// Any product name this build does not know about
    #[serde(rename = "other")]
    Other(String),
}

impl AccountType {
    /// Product names that make up the premium tier.
    pub const PREMIUM_TIER: [AccountType; 3] =
        [AccountType::Black, AccountType::Platinum, AccountType::Iron];

    /// Map a provider type name. Unknown names are kept as `Other`.
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "black" => AccountType::Black,
            "white" => AccountType::White,
            "platinum" => AccountType::Platinum,
            "iron" => AccountType::Iron,
            "fop" => AccountType::Fop,
            "yellow" => AccountType::Yellow,
            "eaid" => AccountType::EAid,
            _ => AccountType::Other(name.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            AccountType::Black => "black",
            AccountType::White => "white",
            AccountType::Platinum => "platinum",
            AccountType::Iron => "iron",
            AccountType::Fop => "fop",
            AccountType::Yellow => "yellow",
            AccountType::EAid => "eAid",
            AccountType::Other(name) => name,
        }
    }

    pub fn is_premium(&self) -> bool {
        Self::PREMIUM_TIER.contains(self)
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which accounts the selector may pick.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AccountTypeFilter {
    /// Exactly this product
    Exact(AccountType),
    /// Any member of [`AccountType::PREMIUM_TIER`]
    #[default]
    PremiumTier,
}

impl AccountTypeFilter {
    pub fn matches(&self, kind: &AccountType) -> bool {
        match self {
            AccountTypeFilter::Exact(wanted) => wanted == kind,
            AccountTypeFilter::PremiumTier => kind.is_premium(),
        }
    }
}

impl FromStr for AccountTypeFilter {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ReportError::InvalidArgument(
                "account type must not be empty".to_string(),
            ));
        }
        if s.eq_ignore_ascii_case("premium") {
            return Ok(AccountTypeFilter::PremiumTier);
        }
        match AccountType::from_name(s) {
            AccountType::Other(name) => Err(ReportError::InvalidArgument(format!(
                "unknown account type '{name}' (expected black, white, platinum, iron, fop, yellow, eAid or premium)"
            ))),
            kind => Ok(AccountTypeFilter::Exact(kind)),
        }
    }
}

impl fmt::Display for AccountTypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountTypeFilter::Exact(kind) => write!(f, "{kind}"),
            AccountTypeFilter::PremiumTier => f.write_str("premium"),
        }
    }
}

/// A single account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Account {
    pub id: String,
    pub kind: AccountType,
    /// ISO 4217 numeric code
    pub currency_code: u16,
}

impl Account {
    pub fn new(id: impl Into<String>, kind: AccountType, currency_code: u16) -> Self {
        Self {
            id: id.into(),
            kind,
            currency_code,
        }
    }
}
