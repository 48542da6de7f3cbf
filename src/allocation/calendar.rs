//! Calendar walking and workday classification.
//!
//! This module enumerates the days of an inclusive period and classifies each
//! one as a workday or a rest day. Saturdays and Sundays are rest days; every
//! other weekday is a workday.

use std::iter::FusedIterator;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// The type of a calendar day.
///
/// # Example
///
/// ```
/// use shift_allocator::allocation::DayType;
///
/// assert!(DayType::Weekday.is_workday());
/// assert!(!DayType::Sunday.is_workday());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    /// Monday through Friday.
    Weekday,
    /// Saturday, a rest day.
    Saturday,
    /// Sunday, a rest day.
    Sunday,
}

impl DayType {
    /// Returns true for days on which shifts are allocated.
    pub fn is_workday(&self) -> bool {
        matches!(self, DayType::Weekday)
    }
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayType::Weekday => write!(f, "Weekday"),
            DayType::Saturday => write!(f, "Saturday"),
            DayType::Sunday => write!(f, "Sunday"),
        }
    }
}

/// Determines the day type for a given date.
///
/// # Example
///
/// ```
/// use shift_allocator::allocation::{get_day_type, DayType};
/// use chrono::NaiveDate;
///
/// // 2025-01-11 is a Saturday
/// assert_eq!(get_day_type(NaiveDate::from_ymd_opt(2025, 1, 11).unwrap()), DayType::Saturday);
/// // 2025-01-06 is a Monday
/// assert_eq!(get_day_type(NaiveDate::from_ymd_opt(2025, 1, 6).unwrap()), DayType::Weekday);
/// ```
pub fn get_day_type(date: NaiveDate) -> DayType {
    match date.weekday() {
        Weekday::Sat => DayType::Saturday,
        Weekday::Sun => DayType::Sunday,
        _ => DayType::Weekday,
    }
}

/// Returns true if `date` is a workday.
pub fn is_workday(date: NaiveDate) -> bool {
    get_day_type(date).is_workday()
}

/// A lazy iterator over every date in an inclusive period.
///
/// Clone it before advancing, or call [`days_in_period`] again, to walk the
/// same period a second time.
#[derive(Debug, Clone)]
pub struct PeriodDays {
    next: Option<NaiveDate>,
    end: NaiveDate,
}

impl Iterator for PeriodDays {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        let current = self.next?;
        if current > self.end {
            self.next = None;
            return None;
        }
        self.next = current.succ_opt().filter(|next| *next <= self.end);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match self.next {
            Some(next) if next <= self.end => (self.end - next).num_days() as usize + 1,
            _ => 0,
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for PeriodDays {}

impl FusedIterator for PeriodDays {}

/// Enumerates every date in `[start, end]`.
///
/// The sequence is empty when `end < start`.
///
/// # Example
///
/// ```
/// use shift_allocator::allocation::days_in_period;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2025, 1, 30).unwrap();
/// let end = NaiveDate::from_ymd_opt(2025, 2, 2).unwrap();
///
/// let days: Vec<_> = days_in_period(start, end).collect();
/// assert_eq!(days.len(), 4);
/// assert_eq!(days[3], end);
/// assert_eq!(days_in_period(end, start).count(), 0);
/// ```
pub fn days_in_period(start: NaiveDate, end: NaiveDate) -> PeriodDays {
    PeriodDays {
        next: Some(start),
        end,
    }
}

/// Counts the workdays in `[start, end]`.
///
/// Returns 0 when `end < start`.
///
/// # Example
///
/// ```
/// use shift_allocator::allocation::count_workdays;
/// use chrono::NaiveDate;
///
/// // Monday 2025-01-06 through Sunday 2025-01-12
/// let start = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
/// let end = NaiveDate::from_ymd_opt(2025, 1, 12).unwrap();
/// assert_eq!(count_workdays(start, end), 5);
/// ```
pub fn count_workdays(start: NaiveDate, end: NaiveDate) -> usize {
    days_in_period(start, end).filter(|d| is_workday(*d)).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use proptest::prelude::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_weekdays_are_workdays() {
        // 2025-01-06 (Mon) .. 2025-01-10 (Fri)
        for day in 6..=10 {
            let date = NaiveDate::from_ymd_opt(2025, 1, day).unwrap();
            assert_eq!(get_day_type(date), DayType::Weekday, "{date}");
        }
    }

    #[test]
    fn test_weekend_days_are_rest_days() {
        assert_eq!(get_day_type(make_date("2025-01-11")), DayType::Saturday);
        assert_eq!(get_day_type(make_date("2025-01-12")), DayType::Sunday);
        assert!(!is_workday(make_date("2025-01-11")));
        assert!(!is_workday(make_date("2025-01-12")));
    }

    #[test]
    fn test_one_week_monday_to_friday() {
        assert_eq!(
            count_workdays(make_date("2025-01-06"), make_date("2025-01-10")),
            5
        );
    }

    #[test]
    fn test_two_weeks() {
        assert_eq!(
            count_workdays(make_date("2025-01-06"), make_date("2025-01-17")),
            10
        );
    }

    #[test]
    fn test_including_weekend() {
        assert_eq!(
            count_workdays(make_date("2025-01-06"), make_date("2025-01-12")),
            5
        );
    }

    #[test]
    fn test_single_day_period() {
        let monday = make_date("2025-01-06");
        let saturday = make_date("2025-01-11");
        assert_eq!(count_workdays(monday, monday), 1);
        assert_eq!(count_workdays(saturday, saturday), 0);
    }

    #[test]
    fn test_reversed_period_is_empty() {
        let start = make_date("2025-01-17");
        let end = make_date("2025-01-06");
        assert_eq!(days_in_period(start, end).count(), 0);
        assert_eq!(count_workdays(start, end), 0);
    }

    #[test]
    fn test_walk_crosses_month_and_year() {
        let days: Vec<_> =
            days_in_period(make_date("2024-12-30"), make_date("2025-01-02")).collect();
        assert_eq!(
            days,
            vec![
                make_date("2024-12-30"),
                make_date("2024-12-31"),
                make_date("2025-01-01"),
                make_date("2025-01-02"),
            ]
        );
    }

    #[test]
    fn test_size_hint_is_exact() {
        let mut days = days_in_period(make_date("2025-01-06"), make_date("2025-01-12"));
        assert_eq!(days.len(), 7);
        days.next();
        assert_eq!(days.len(), 6);
    }

    #[test]
    fn test_walk_is_restartable_from_a_clone() {
        let days = days_in_period(make_date("2025-01-06"), make_date("2025-01-08"));
        let first: Vec<_> = days.clone().collect();
        let second: Vec<_> = days.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_walk_ends_at_max_date() {
        let days: Vec<_> = days_in_period(NaiveDate::MAX, NaiveDate::MAX).collect();
        assert_eq!(days, vec![NaiveDate::MAX]);
    }

    proptest! {
        #[test]
        fn prop_full_weeks_have_five_workdays_each(offset in 0i64..3650, weeks in 0i64..60) {
            let start = make_date("2020-01-01") + Duration::days(offset);
            let end = start + Duration::days(weeks * 7 - 1);
            prop_assert_eq!(count_workdays(start, end), (5 * weeks) as usize);
        }

        #[test]
        fn prop_day_count_matches_span(offset in 0i64..3650, span in 0i64..400) {
            let start = make_date("2020-01-01") + Duration::days(offset);
            let end = start + Duration::days(span);
            prop_assert_eq!(days_in_period(start, end).count(), span as usize + 1);
        }
    }
}
