#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn make_txn(amount: Decimal) -> Transaction {
    Transaction::new(date(2024, 1, 15), "Test".into(), amount)
}

// ── Transaction ───────────────────────────────────────────────

#[test]
fn test_transaction_period() {
    assert_eq!(make_txn(dec!(1)).period().to_string(), "2024-January");
}

// ── PeriodKey ─────────────────────────────────────────────────

#[test]
fn test_period_key_format() {
    assert_eq!(
        PeriodKey::from_date(date(2023, 3, 5)).to_string(),
        "2023-March"
    );
    assert_eq!(
        PeriodKey::from_date(date(1999, 12, 31)).to_string(),
        "1999-December"
    );
}

#[test]
fn test_period_key_year_unpadded() {
    assert_eq!(PeriodKey::from_date(date(987, 7, 1)).to_string(), "987-July");
}

#[test]
fn test_period_key_all_month_names() {
    let names: Vec<String> = (1..=12)
        .map(|m| PeriodKey::from_date(date(2024, m, 1)).month_name().to_string())
        .collect();
    assert_eq!(
        names,
        vec![
            "January",
            "February",
            "March",
            "April",
            "May",
            "June",
            "July",
            "August",
            "September",
            "October",
            "November",
            "December"
        ]
    );
}

#[test]
fn test_period_key_same_month_same_key() {
    let a = PeriodKey::from_date(date(2023, 3, 1));
    let b = PeriodKey::from_date(date(2023, 3, 31));
    assert_eq!(a, b);
    assert_eq!(a, PeriodKey::from_date(date(2023, 3, 1)));
}

#[test]
fn test_period_key_different_months_differ() {
    let march = PeriodKey::from_date(date(2023, 3, 31));
    let april = PeriodKey::from_date(date(2023, 4, 1));
    let next_march = PeriodKey::from_date(date(2024, 3, 1));
    assert_ne!(march, april);
    assert_ne!(march, next_march);
}

#[test]
fn test_period_key_orders_chronologically() {
    let mut keys = vec![
        PeriodKey::from_date(date(2024, 1, 1)),
        PeriodKey::from_date(date(2023, 12, 1)),
        PeriodKey::from_date(date(2023, 2, 1)),
    ];
    keys.sort();
    let rendered: Vec<String> = keys.iter().map(|k| k.to_string()).collect();
    assert_eq!(
        rendered,
        vec!["2023-February", "2023-December", "2024-January"]
    );
}

#[test]
fn test_period_key_parse() {
    let key: PeriodKey = "2023-March".parse().unwrap();
    assert_eq!(key, PeriodKey::from_date(date(2023, 3, 9)));
    assert_eq!(key.to_string(), "2023-March");
}

#[test]
fn test_period_key_parse_rejects_bad_input() {
    assert!("2023-Mar".parse::<PeriodKey>().is_err());
    assert!("2023-march".parse::<PeriodKey>().is_err());
    assert!("March-2023".parse::<PeriodKey>().is_err());
    assert!("2023".parse::<PeriodKey>().is_err());
    assert!("-March".parse::<PeriodKey>().is_err());
    assert!("total".parse::<PeriodKey>().is_err());
}

// ── Aggregates ────────────────────────────────────────────────

#[test]
fn test_period_aggregate_total_counts_only_expenses() {
    let mut agg = PeriodAggregate::default();
    agg.record("Rent", dec!(-1000));
    agg.record("Salary", dec!(3000));
    agg.record("Refund", dec!(25.50));
    assert_eq!(agg.total, dec!(-1000));
    assert_eq!(agg.by_description["Salary"], dec!(3000));
    assert_eq!(agg.net(), dec!(2025.50));
}

#[test]
fn test_period_aggregate_total_uses_individual_transactions() {
    // Net for "Shop" is positive, but the -40 purchase still counts as spending.
    let mut agg = PeriodAggregate::default();
    agg.record("Shop", dec!(-40));
    agg.record("Shop", dec!(100));
    assert_eq!(agg.by_description["Shop"], dec!(60));
    assert_eq!(agg.total, dec!(-40));
}

#[test]
fn test_description_aggregate_totals() {
    let march = PeriodKey::from_date(date(2023, 3, 1));
    let april = PeriodKey::from_date(date(2023, 4, 1));
    let mut agg = DescriptionAggregate::default();
    agg.record(march, dec!(-10));
    agg.record(march, dec!(4));
    agg.record(april, dec!(-2.5));
    assert_eq!(agg.by_period[&march], dec!(-6));
    assert_eq!(agg.by_period[&april], dec!(-2.5));
    assert_eq!(agg.total, dec!(-8.5));
}
