//! Property-based tests for ledger summaries.
//!
//! - Balance law: saldo = Σ income − Σ expense
//! - Period totals equal overall totals over the entries inside the period

use chrono::{Duration, NaiveDate, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::entry::{Entry, EntryType};
use super::summary::Summary;
use crate::period::DateResolver;

/// Strategy to generate non-negative amounts (0.00 to 10,000,000.00).
fn amount() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate entry types.
fn entry_type() -> impl Strategy<Value = EntryType> {
    prop_oneof![Just(EntryType::Income), Just(EntryType::Expense)]
}

/// Strategy to generate entries spread over 2025.
fn entry() -> impl Strategy<Value = Entry> {
    (amount(), entry_type(), 0i64..365, 0i64..86_399).prop_map(|(amount, entry_type, day, secs)| {
        let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap() + Duration::days(day);
        let now = Utc::now();
        Entry {
            id: day,
            created_at: now,
            updated_at: now,
            deleted_at: None,
            name: String::new(),
            purpose: String::new(),
            category: String::new(),
            amount,
            entry_type,
            date_string: date.to_string(),
            parsed_date: DateResolver::local_midnight(date) + Duration::seconds(secs),
        }
    })
}

proptest! {
    /// Property: balance equals Σ income − Σ expense.
    #[test]
    fn test_balance_law(entries in prop::collection::vec(entry(), 0..50)) {
        let summary = Summary::from_entries(&entries);

        let income: Decimal = entries
            .iter()
            .filter(|e| e.entry_type == EntryType::Income)
            .map(|e| e.amount)
            .sum();
        let expense: Decimal = entries
            .iter()
            .filter(|e| e.entry_type == EntryType::Expense)
            .map(|e| e.amount)
            .sum();

        prop_assert_eq!(summary.total_income, income);
        prop_assert_eq!(summary.total_expense, expense);
        prop_assert_eq!(summary.balance, income - expense);
    }

    /// Property: monthly totals partition the yearly totals.
    #[test]
    fn test_months_partition_year(entries in prop::collection::vec(entry(), 0..50)) {
        let in_year: Vec<&Entry> = {
            let year = DateResolver::year_range("2025").unwrap();
            entries.iter().filter(|e| year.range.contains(e.parsed_date)).collect()
        };
        let yearly = Summary::from_entries(in_year.iter().copied());

        let mut income = Decimal::ZERO;
        let mut expense = Decimal::ZERO;
        for month in 1..=12 {
            let period = DateResolver::month_range(&format!("2025-{month:02}")).unwrap();
            let monthly = Summary::from_entries(
                entries.iter().filter(|e| period.range.contains(e.parsed_date)),
            );
            income += monthly.total_income;
            expense += monthly.total_expense;
        }

        prop_assert_eq!(yearly, Summary::new(income, expense));
    }
}
