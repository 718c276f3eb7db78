use chrono::{TimeZone, Utc};
use monoreport_core::{Account, AccountType, AccountTypeFilter, Transaction};
use monoreport_finance::report::{ReportMode, ReportOptions, RowOrder, write_report};
use monoreport_finance::{CategoryRules, select_account};
use std::fs;
use std::io::BufWriter;

const UAH: u16 = 980;
const USD: u16 = 840;

fn accounts() -> Vec<Account> {
    vec![
        Account::new("black-usd", AccountType::Black, USD),
        Account::new("black-uah", AccountType::Black, UAH),
        Account::new("white-uah", AccountType::White, UAH),
    ]
}

/// Statement as the provider returns it: newest first.
fn statement() -> Vec<Transaction> {
    let at = |d, h| Utc.with_ymd_and_hms(2026, 2, d, h, 0, 0).unwrap();
    vec![
        Transaction::new("T3", at(3, 18), "переказ мамі", 4829, -100000, 250000),
        Transaction::new("T2", at(2, 9), "Coffee House", 5812, -12345, 350000),
        Transaction::new("T1", at(1, 12), "Burger Place", 5812, -20000, 362345),
    ]
}

fn render(mode: ReportMode, order: Option<RowOrder>) -> String {
    let accs = accounts();
    let account = select_account(&accs, &AccountTypeFilter::Exact(AccountType::Black)).unwrap();
    assert_eq!(account.id, "black-uah");

    let mut opts = ReportOptions::new(mode, chrono_tz::UTC);
    opts.order = order;

    let mut buf = Vec::new();
    let n = write_report(&mut buf, &statement(), account, &opts, &CategoryRules::default()).unwrap();
    assert_eq!(n, 3);
    String::from_utf8(buf).unwrap()
}

#[test]
fn test_delimited_end_to_end() {
    let out = render(ReportMode::Delimited, None);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(
        lines,
        vec![
            "03/02/2026 18:00,переказ мамі,-1000,UAH,Mom/Father",
            "02/02/2026 09:00,Coffee House,-123.45,UAH,Coffee",
            "01/02/2026 12:00,Burger Place,-200,UAH,Restaurants",
        ]
    );
}

#[test]
fn test_narrative_numbers_oldest_first() {
    let out = render(ReportMode::Narrative, None);
    let numbered: Vec<(String, String)> = out
        .split("\n\n")
        .filter(|block| !block.trim().is_empty())
        .map(|block| {
            let mut lines = block.lines();
            let number = lines.next().unwrap().to_string();
            let id = lines.next().unwrap().to_string();
            (number, id)
        })
        .collect();

    assert_eq!(
        numbered,
        vec![
            ("Number: 1".to_string(), "ID: T1".to_string()),
            ("Number: 2".to_string(), "ID: T2".to_string()),
            ("Number: 3".to_string(), "ID: T3".to_string()),
        ]
    );
    assert!(out.contains("Amount: -123.45 UAH"));
    assert!(out.contains("Balance: 3500.00 UAH"));
}

/// The CSV keeps the provider's newest-first order while the narrative report
/// reverses it. This asymmetry is carried over from the tool's observed
/// behaviour and is still awaiting a product decision; pass an explicit
/// `RowOrder` to get the same order from both.
#[test]
fn test_delimited_does_not_reverse_order() {
    let out = render(ReportMode::Delimited, None);
    let ids: Vec<&str> = out
        .lines()
        .map(|l| l.split(',').nth(1).unwrap())
        .collect();
    assert_eq!(ids, vec!["переказ мамі", "Coffee House", "Burger Place"]);

    let reversed = render(ReportMode::Delimited, Some(RowOrder::Reversed));
    assert!(reversed.starts_with("01/02/2026 12:00,Burger Place"));

    let native = render(ReportMode::Narrative, Some(RowOrder::Native));
    assert!(native.starts_with("Number: 1\nID: T3\n"));
}

#[test]
fn test_rescaled_amount_matches_in_both_modes() {
    let csv = render(ReportMode::Delimited, None);
    let text = render(ReportMode::Narrative, None);
    assert!(csv.contains(",-123.45,"));
    assert!(text.contains("Amount: -123.45 UAH"));
}

#[test]
fn test_delimited_into_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("result.csv");
    assert_eq!(ReportMode::for_output(&path), ReportMode::Delimited);

    let accs = accounts();
    let account = select_account(&accs, &AccountTypeFilter::PremiumTier).unwrap();
    let opts = ReportOptions::new(ReportMode::Delimited, chrono_tz::Europe::Kyiv);
    {
        let file = fs::File::create(&path).unwrap();
        write_report(BufWriter::new(file), &statement(), account, &opts, &CategoryRules::default())
            .unwrap();
    }

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(&path)
        .unwrap();
    let records: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
    assert_eq!(records.len(), 3);
    assert_eq!(&records[0][0], "03/02/2026 20:00");
    assert_eq!(&records[1][2], "-123.45");
    assert_eq!(&records[2][4], "Restaurants");
}
