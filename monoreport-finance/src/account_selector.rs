//! Pick the account a report is generated for.

use monoreport_core::{Account, AccountTypeFilter, ReportError, currency_from_iso4217};
use tracing::debug;

/// Settlement currency the report is built for
pub const DEFAULT_SETTLEMENT_CURRENCY: &str = "UAH";

/// First account (in list order) that passes `wanted` and settles in UAH.
pub fn select_account<'a>(
    accounts: &'a [Account],
    wanted: &AccountTypeFilter,
) -> Result<&'a Account, ReportError> {
    select_account_in(accounts, wanted, DEFAULT_SETTLEMENT_CURRENCY)
}

/// Like [`select_account`] with an explicit alphabetic currency code.
///
/// Accounts whose numeric currency code is missing from the ISO 4217 table are
/// skipped rather than treated as errors.
pub fn select_account_in<'a>(
    accounts: &'a [Account],
    wanted: &AccountTypeFilter,
    currency: &str,
) -> Result<&'a Account, ReportError> {
    accounts
        .iter()
        .filter(|acc| wanted.matches(&acc.kind))
        .find(|acc| match currency_from_iso4217(acc.currency_code) {
            Ok(ccy) => ccy.code.eq_ignore_ascii_case(currency),
            Err(err) => {
                debug!(account = %acc.id, %err, "skipping account");
                false
            }
        })
        .ok_or_else(|| ReportError::AccountNotFound {
            filter: wanted.to_string(),
            currency: currency.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use monoreport_core::AccountType;

    const UAH: u16 = 980;
    const USD: u16 = 840;

    fn accounts() -> Vec<Account> {
        vec![
            Account::new("black-usd", AccountType::Black, USD),
            Account::new("black-uah", AccountType::Black, UAH),
            Account::new("white-uah", AccountType::White, UAH),
        ]
    }

    #[test]
    fn test_first_matching_type_and_currency() {
        let accs = accounts();
        let got = select_account(&accs, &AccountTypeFilter::Exact(AccountType::Black)).unwrap();
        assert_eq!(got.id, "black-uah");
    }

    #[test]
    fn test_exact_filter_ignores_other_types() {
        let accs = accounts();
        let got = select_account(&accs, &AccountTypeFilter::Exact(AccountType::White)).unwrap();
        assert_eq!(got.id, "white-uah");
    }

    #[test]
    fn test_list_order_breaks_ties() {
        let accs = vec![
            Account::new("iron-uah", AccountType::Iron, UAH),
            Account::new("black-uah", AccountType::Black, UAH),
        ];
        let got = select_account(&accs, &AccountTypeFilter::PremiumTier).unwrap();
        assert_eq!(got.id, "iron-uah");
    }

    #[test]
    fn test_unresolvable_currency_is_skipped() {
        let accs = vec![
            Account::new("weird", AccountType::Black, 1),
            Account::new("black-uah", AccountType::Black, UAH),
        ];
        let got = select_account(&accs, &AccountTypeFilter::Exact(AccountType::Black)).unwrap();
        assert_eq!(got.id, "black-uah");
    }

    #[test]
    fn test_not_found() {
        let accs = accounts();
        let err = select_account(&accs, &AccountTypeFilter::Exact(AccountType::Platinum))
            .unwrap_err();
        match err {
            ReportError::AccountNotFound { filter, currency } => {
                assert_eq!(filter, "platinum");
                assert_eq!(currency, "UAH");
            }
            other => panic!("unexpected error: {other}"),
        }

        assert!(select_account(&[], &AccountTypeFilter::PremiumTier).is_err());
    }

    #[test]
    fn test_explicit_currency() {
        let accs = accounts();
        let got = select_account_in(&accs, &AccountTypeFilter::Exact(AccountType::Black), "usd")
            .unwrap();
        assert_eq!(got.id, "black-usd");
    }
}
