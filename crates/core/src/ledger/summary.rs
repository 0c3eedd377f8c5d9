//! Income/expense totals and balance.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use super::entry::{Entry, EntryType};
use crate::period::Period;

/// Totals over a set of entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Σ amount of income entries.
    #[serde(rename = "total_pemasukan", with = "rust_decimal::serde::float")]
    pub total_income: Decimal,
    /// Σ amount of expense entries.
    #[serde(rename = "total_pengeluaran", with = "rust_decimal::serde::float")]
    pub total_expense: Decimal,
    /// `total_income - total_expense`.
    #[serde(rename = "saldo", with = "rust_decimal::serde::float")]
    pub balance: Decimal,
}

impl Summary {
    /// Builds a summary, deriving the balance.
    #[must_use]
    pub fn new(total_income: Decimal, total_expense: Decimal) -> Self {
        Self {
            total_income,
            total_expense,
            balance: total_income - total_expense,
        }
    }

    /// Summarizes entries already loaded in memory.
    #[must_use]
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = &'a Entry>) -> Self {
        let (income, expense) = entries.into_iter().fold(
            (Decimal::ZERO, Decimal::ZERO),
            |(income, expense), entry| match entry.entry_type {
                EntryType::Income => (income + entry.amount, expense),
                EntryType::Expense => (income, expense + entry.amount),
            },
        );
        Self::new(income, expense)
    }
}

/// Totals restricted to a calendar period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeriodSummary {
    /// Totals within the period.
    #[serde(flatten)]
    pub summary: Summary,
    /// `YYYY-MM` or `YYYY`.
    #[serde(rename = "periode")]
    pub label: String,
    /// First day of the period.
    pub start: NaiveDate,
    /// First day after the period.
    pub end: NaiveDate,
}

impl PeriodSummary {
    /// Attaches the resolved period to its totals.
    #[must_use]
    pub fn new(summary: Summary, period: Period) -> Self {
        Self {
            summary,
            label: period.label,
            start: period.first_day,
            end: period.end_day,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::period::DateResolver;
    use rust_decimal_macros::dec;

    #[test]
    fn test_balance_is_income_minus_expense() {
        let summary = Summary::new(dec!(5000000), dec!(200000));
        assert_eq!(summary.balance, dec!(4800000));

        let summary = Summary::new(Decimal::ZERO, dec!(10.50));
        assert_eq!(summary.balance, dec!(-10.50));
    }

    #[test]
    fn test_empty_summary_is_zero() {
        let summary = Summary::from_entries(std::iter::empty::<&Entry>());
        assert_eq!(summary, Summary::new(Decimal::ZERO, Decimal::ZERO));
    }

    #[test]
    fn test_period_summary_wire_shape() {
        let period = DateResolver::month_range("2025-07").unwrap();
        let summary = PeriodSummary::new(Summary::new(dec!(5000000), dec!(200000)), period);

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["periode"], "2025-07");
        assert_eq!(json["start"], "2025-07-01");
        assert_eq!(json["end"], "2025-08-01");
        assert_eq!(
            json["saldo"].to_string().parse::<Decimal>().unwrap(),
            dec!(4800000)
        );
        assert_eq!(
            json["total_pengeluaran"].to_string().parse::<Decimal>().unwrap(),
            dec!(200000)
        );
    }
}
