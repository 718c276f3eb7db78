//! Human-readable merchant category code names, for display only.

pub const UNKNOWN_MCC: &str = "UNKNOWN";

const MCC_LABELS: &[(u16, &str)] = &[
    (2741, "MISCELLANEOUS PUBLISHING AND PRINTING"),
    (4121, "TAXICABS OR LIMOUSINES"),
    (4812, "TELECOMMUNICATIONS EQUIPMENT INCLUDING TELEPHONE SALES"),
    (4814, "TELECOMMUNICATIONS SERV INCL LOCA/LONG DIST CREDIT & FAX"),
    (4829, "MONEY ORDERS -- WIRE TRANSFER"),
    (5399, "MISCELLANEOUS GENERAL MERCHANDISE STORES"),
    (5411, "GROCERY STORES OR SUPERMARKETS"),
    (5533, "AUTOMOTIVE PARTS AND ACCESSORIES STORES"),
    (5541, "GAS/SERVICE STATIONS WITH/WITHOUT ANCILLARY SERVICES"),
    (5651, "FAMILY CLOTHING STORES"),
    (5699, "MISCELLANEOUS APPAREL AND ACCESSORY SHOPS"),
    (5732, "ELECTRONICS STORES"),
    (5812, "RESTAURANTS OR EATING PLACES"),
    (5814, "FAST FOOD RESTAURANTS"),
    (5912, "PHARMACIES OR DRUG STORES"),
    (5941, "SPORTING GOODS STORES"),
    (5946, "CAMERA AND/OR PHOTOGRAPHIC SUPPLY STORES"),
    (5995, "PET SHOPS, PET FOOD AND SUPPLIES"),
    (7399, "BUSINESS SERVICES (NEC)"),
    (7538, "AUTOMOTIVE SERVICE SHOPS"),
    (7841, "VIDEO TAPE RENTAL STORES"),
];

/// English name of a merchant category code, or [`UNKNOWN_MCC`].
pub fn mcc_label(mcc: u16) -> &'static str {
    MCC_LABELS
        .iter()
        .find(|(code, _)| *code == mcc)
        .map(|(_, label)| *label)
        .unwrap_or(UNKNOWN_MCC)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_labels() {
        assert_eq!(mcc_label(5812), "RESTAURANTS OR EATING PLACES");
        assert_eq!(mcc_label(4829), "MONEY ORDERS -- WIRE TRANSFER");
        assert_eq!(mcc_label(7841), "VIDEO TAPE RENTAL STORES");
    }

    #[test]
    fn test_unknown_label() {
        assert_eq!(mcc_label(9999), UNKNOWN_MCC);
        assert_eq!(mcc_label(0), "UNKNOWN");
    }
}
