//! Minor-unit amounts → decimal display values.
//!
//! All arithmetic goes through `rust_decimal`, never `f64`.

use rust_decimal::Decimal;

/// Minor units per major unit is 10^2 for every currency we report in.
pub const MINOR_UNIT_SCALE: u32 = 2;

pub fn minor_to_decimal(minor: i64) -> Decimal {
    Decimal::new(minor, MINOR_UNIT_SCALE)
}

/// Always two decimal places: `1200` → `"12.00"`.
pub fn format_fixed(minor: i64) -> String {
    format!("{:.2}", minor_to_decimal(minor))
}

/// Shortest exact form without trailing zeros: `1200` → `"12"`, `1250` → `"12.5"`.
pub fn format_exact(minor: i64) -> String {
    minor_to_decimal(minor).normalize().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rescale_both_forms() {
        assert_eq!(format_fixed(12345), "123.45");
        assert_eq!(format_exact(12345), "123.45");
    }

    #[test]
    fn test_fixed_pads_zeros() {
        assert_eq!(format_fixed(1200), "12.00");
        assert_eq!(format_fixed(5), "0.05");
        assert_eq!(format_fixed(0), "0.00");
        assert_eq!(format_fixed(-45050), "-450.50");
    }

    #[test]
    fn test_exact_trims_zeros() {
        assert_eq!(format_exact(1200), "12");
        assert_eq!(format_exact(-45050), "-450.5");
        assert_eq!(format_exact(0), "0");
    }

    #[test]
    fn test_no_float_drift() {
        // 0.1 + 0.2 style sums stay exact
        let sum = minor_to_decimal(10) + minor_to_decimal(20);
        assert_eq!(sum.to_string(), "0.30");
    }
}
