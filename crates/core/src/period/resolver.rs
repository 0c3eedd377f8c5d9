//! Resolution of day, month and year inputs into instant ranges.

use chrono::{DateTime, Datelike, Days, Local, LocalResult, NaiveDate, NaiveTime, TimeZone, Utc};

use super::error::PeriodError;

/// `chrono` format of a display date (`YYYY-MM-DD`).
pub const DAY_FORMAT: &str = "%Y-%m-%d";

/// Half-open instant range `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    /// Inclusive lower bound.
    pub start: DateTime<Utc>,
    /// Exclusive upper bound.
    pub end: DateTime<Utc>,
}

impl DateRange {
    /// Returns true if `instant` lies inside the range.
    #[must_use]
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant < self.end
    }
}

/// A resolved calendar period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Period {
    /// `YYYY-MM` for a month, `YYYY` for a year.
    pub label: String,
    /// First calendar day of the period.
    pub first_day: NaiveDate,
    /// First calendar day after the period.
    pub end_day: NaiveDate,
    /// Local-midnight instants of `first_day` and `end_day`.
    pub range: DateRange,
}

impl Period {
    fn new(label: String, first_day: NaiveDate, end_day: NaiveDate) -> Self {
        Self {
            label,
            first_day,
            end_day,
            range: DateRange {
                start: DateResolver::local_midnight(first_day),
                end: DateResolver::local_midnight(end_day),
            },
        }
    }
}

/// Period selector of the monthly summary. `month` takes precedence over `year`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PeriodQuery {
    /// `YYYY-MM`.
    pub month: Option<String>,
    /// `YYYY`.
    pub year: Option<String>,
}

/// Parses fixed-format date strings and resolves calendar periods.
pub struct DateResolver;

impl DateResolver {
    /// Parses a strict, zero-padded `YYYY-MM-DD` day.
    pub fn parse_day(s: &str) -> Result<NaiveDate, PeriodError> {
        if !has_shape(s, "dddd-dd-dd") {
            return Err(PeriodError::InvalidDay(s.to_string()));
        }
        NaiveDate::parse_from_str(s, DAY_FORMAT).map_err(|_| PeriodError::InvalidDay(s.to_string()))
    }

    /// Range covering every instant from `start` through the whole `end` day.
    #[must_use]
    pub fn day_range(start: NaiveDate, end: NaiveDate) -> DateRange {
        let after_end = end.checked_add_days(Days::new(1)).unwrap_or(NaiveDate::MAX);
        DateRange {
            start: Self::local_midnight(start),
            end: Self::local_midnight(after_end),
        }
    }

    /// Resolves `YYYY-MM` to the whole calendar month.
    pub fn month_range(s: &str) -> Result<Period, PeriodError> {
        let invalid = || PeriodError::InvalidMonth(s.to_string());
        if !has_shape(s, "dddd-dd") {
            return Err(invalid());
        }
        let year: i32 = s[..4].parse().map_err(|_| invalid())?;
        let month: u32 = s[5..].parse().map_err(|_| invalid())?;
        let first_day = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
        Ok(Self::month_of(first_day))
    }

    /// Resolves `YYYY` to the whole calendar year.
    pub fn year_range(s: &str) -> Result<Period, PeriodError> {
        let invalid = || PeriodError::InvalidYear(s.to_string());
        if !has_shape(s, "dddd") {
            return Err(invalid());
        }
        let year: i32 = s.parse().map_err(|_| invalid())?;
        let first_day = NaiveDate::from_ymd_opt(year, 1, 1).ok_or_else(invalid)?;
        let end_day = NaiveDate::from_ymd_opt(year + 1, 1, 1).ok_or_else(invalid)?;
        Ok(Period::new(format!("{year:04}"), first_day, end_day))
    }

    /// The calendar month containing today's local date.
    #[must_use]
    pub fn current_month_range() -> Period {
        Self::month_of(Local::now().date_naive())
    }

    /// The calendar month containing `day`.
    #[must_use]
    pub fn month_of(day: NaiveDate) -> Period {
        let first_day = day.with_day(1).unwrap_or(day);
        let end_day = first_day
            .checked_add_months(chrono::Months::new(1))
            .unwrap_or(NaiveDate::MAX);
        Period::new(
            format!("{:04}-{:02}", first_day.year(), first_day.month()),
            first_day,
            end_day,
        )
    }

    /// Picks the period for a summary request: month, else year, else the
    /// current month. Empty parameters count as absent.
    pub fn resolve(query: &PeriodQuery) -> Result<Period, PeriodError> {
        let month = query.month.as_deref().filter(|s| !s.is_empty());
        let year = query.year.as_deref().filter(|s| !s.is_empty());

        match (month, year) {
            (Some(month), _) => Self::month_range(month),
            (None, Some(year)) => Self::year_range(year),
            (None, None) => Ok(Self::current_month_range()),
        }
    }

    /// Local midnight at the start of `day`, as a UTC instant.
    #[must_use]
    pub fn local_midnight(day: NaiveDate) -> DateTime<Utc> {
        let naive = day.and_time(NaiveTime::MIN);
        match Local.from_local_datetime(&naive) {
            LocalResult::Single(t) | LocalResult::Ambiguous(t, _) => t.with_timezone(&Utc),
            // Midnight skipped by a DST jump.
            LocalResult::None => naive.and_utc(),
        }
    }
}

/// `d` matches an ASCII digit, every other byte matches itself.
fn has_shape(s: &str, shape: &str) -> bool {
    s.len() == shape.len()
        && s.bytes().zip(shape.bytes()).all(|(c, p)| match p {
            b'd' => c.is_ascii_digit(),
            _ => c == p,
        })
}
