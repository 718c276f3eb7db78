//! ISO 4217 numeric → alphabetic currency table.

use crate::error::{ReportError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Currency {
    /// Alphabetic code, e.g. "UAH"
    pub code: &'static str,
    pub numeric: u16,
}

const fn ccy(code: &'static str, numeric: u16) -> Currency {
    Currency { code, numeric }
}

const CURRENCIES: &[Currency] = &[
    ccy("UAH", 980),
    ccy("USD", 840),
    ccy("EUR", 978),
    ccy("GBP", 826),
    ccy("PLN", 985),
    ccy("CHF", 756),
    ccy("CZK", 203),
    ccy("HUF", 348),
    ccy("RON", 946),
    ccy("MDL", 498),
    ccy("GEL", 981),
    ccy("TRY", 949),
    ccy("SEK", 752),
    ccy("NOK", 578),
    ccy("DKK", 208),
    ccy("CAD", 124),
    ccy("AUD", 36),
    ccy("JPY", 392),
    ccy("CNY", 156),
    ccy("ILS", 376),
    ccy("AED", 784),
    ccy("KZT", 398),
    ccy("BGN", 975),
];

/// Resolve a numeric ISO 4217 code.
pub fn currency_from_iso4217(numeric: u16) -> Result<&'static Currency> {
    CURRENCIES
        .iter()
        .find(|c| c.numeric == numeric)
        .ok_or(ReportError::UnknownCurrency(numeric))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_codes() {
        assert_eq!(currency_from_iso4217(980).unwrap().code, "UAH");
        assert_eq!(currency_from_iso4217(840).unwrap().code, "USD");
        assert_eq!(currency_from_iso4217(978).unwrap().code, "EUR");
        assert_eq!(currency_from_iso4217(392).unwrap().code, "JPY");
    }

    #[test]
    fn test_unknown_code_is_error() {
        let err = currency_from_iso4217(1).unwrap_err();
        assert!(matches!(err, ReportError::UnknownCurrency(1)));
    }

    #[test]
    fn test_numeric_codes_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for c in CURRENCIES {
            assert!(seen.insert(c.numeric), "duplicate numeric code {}", c.numeric);
        }
    }
}
