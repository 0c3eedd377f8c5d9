//! Property-based tests for period resolution.

use chrono::{Datelike, NaiveDate};
use proptest::prelude::*;

use super::resolver::DateResolver;

proptest! {
    /// A month period starts on the 1st and ends on the 1st of the next month.
    #[test]
    fn test_month_range_bounds(year in 1970i32..2100, month in 1u32..=12) {
        let period = DateResolver::month_range(&format!("{year:04}-{month:02}")).unwrap();

        prop_assert_eq!(period.first_day, NaiveDate::from_ymd_opt(year, month, 1).unwrap());
        prop_assert_eq!(period.end_day.day(), 1);
        prop_assert!(period.range.start < period.range.end);

        let expected_next = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
        prop_assert_eq!((period.end_day.year(), period.end_day.month()), expected_next);
    }

    /// Every day of a month falls inside that month's range, and no other month's.
    #[test]
    fn test_days_belong_to_their_month(year in 1970i32..2100, ordinal in 1u32..=365) {
        let day = NaiveDate::from_yo_opt(year, ordinal).unwrap();
        let period = DateResolver::month_of(day);
        let midnight = DateResolver::local_midnight(day);

        prop_assert!(period.range.contains(midnight));

        let next = DateResolver::month_of(period.end_day);
        prop_assert!(!next.range.contains(midnight));
    }

    /// A single-day filter covers the whole calendar day.
    #[test]
    fn test_day_range_covers_day(year in 1970i32..2100, ordinal in 1u32..=365, secs in 0i64..86_399) {
        let day = NaiveDate::from_yo_opt(year, ordinal).unwrap();
        let range = DateResolver::day_range(day, day);
        let instant = DateResolver::local_midnight(day) + chrono::Duration::seconds(secs);
        let next_midnight = DateResolver::local_midnight(day.succ_opt().unwrap());

        prop_assume!(instant < next_midnight);
        prop_assert!(range.contains(instant));
    }
}
