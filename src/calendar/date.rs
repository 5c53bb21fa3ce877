use chrono::{Datelike, Local, Month, Months, NaiveDate};
use num_traits::FromPrimitive;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use super::grid::MonthRelation;
use super::parse::{self, ParseError};

pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

pub fn days_of_month(year: i32, month: &Month) -> u32 {
    match month {
        Month::February if is_leap_year(year) => 29,
        Month::February => 28,
        Month::April | Month::June | Month::September | Month::November => 30,
        _ => 31,
    }
}

/// A valid day of the proleptic Gregorian calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Returns `None` for anything that is not a real calendar day, e.g. the
    /// 31st of April or month 13.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(CalendarDate)
    }

    pub fn today() -> Self {
        CalendarDate(Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn reference_month(&self) -> ReferenceMonth {
        ReferenceMonth::from(self.0)
    }

    pub fn naive(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        CalendarDate(date)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}/{:02}/{:02}",
            self.year(),
            self.month(),
            self.day()
        )
    }
}

impl FromStr for CalendarDate {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse::parse(s)
    }
}

/// The month a grid is anchored on.
///
/// Internally this is the first day of the month, so every `ReferenceMonth`
/// is guaranteed to be representable. Stepping past the bounds of the
/// supported date range with `prev`/`next` leaves the month unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReferenceMonth {
    first: NaiveDate,
}

impl ReferenceMonth {
    pub fn new(year: i32, month: Month) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month.number_from_month(), 1)
            .map(|first| ReferenceMonth { first })
    }

    pub fn from_ym(year: i32, month: u32) -> Option<Self> {
        Month::from_u32(month).and_then(|month| Self::new(year, month))
    }

    pub fn today() -> Self {
        CalendarDate::today().reference_month()
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month(&self) -> Month {
        Month::from_u32(self.first.month()).unwrap_or(Month::January)
    }

    pub fn month_number(&self) -> u32 {
        self.first.month()
    }

    /// The preceding month, `None` for the first supported month.
    pub fn checked_prev(&self) -> Option<Self> {
        self.first
            .checked_sub_months(Months::new(1))
            .map(|first| ReferenceMonth { first })
    }

    /// The following month, `None` for the last supported month.
    pub fn checked_next(&self) -> Option<Self> {
        self.first
            .checked_add_months(Months::new(1))
            .map(|first| ReferenceMonth { first })
    }

    pub fn prev(&self) -> Self {
        self.checked_prev().unwrap_or(*self)
    }

    pub fn next(&self) -> Self {
        self.checked_next().unwrap_or(*self)
    }

    /// The month a grid cell of the given section belongs to. `None` if that
    /// month lies outside the supported range.
    pub fn resolve(&self, relation: MonthRelation) -> Option<Self> {
        match relation {
            MonthRelation::Previous => self.checked_prev(),
            MonthRelation::Current => Some(*self),
            MonthRelation::Next => self.checked_next(),
        }
    }

    pub fn num_days(&self) -> u32 {
        days_of_month(self.year(), &self.month())
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    pub fn last_day(&self) -> NaiveDate {
        self.first.with_day(self.num_days()).unwrap_or(self.first)
    }

    pub fn date(&self, day: u32) -> Option<CalendarDate> {
        self.first.with_day(day).map(CalendarDate)
    }

    pub fn contains(&self, date: &CalendarDate) -> bool {
        date.year() == self.year() && date.month() == self.month_number()
    }

    /// Renders the month with a strftime-like pattern. The pattern has to be
    /// checked beforehand, see `config::Config::label_format`.
    pub fn label(&self, format: &str) -> String {
        self.first.format(format).to_string()
    }
}

impl From<NaiveDate> for ReferenceMonth {
    fn from(date: NaiveDate) -> Self {
        ReferenceMonth {
            first: date.with_day(1).unwrap_or(date),
        }
    }
}

impl PartialOrd for ReferenceMonth {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ReferenceMonth {
    fn cmp(&self, other: &Self) -> Ordering {
        self.first.cmp(&other.first)
    }
}

impl fmt::Display for ReferenceMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}/{:02}", self.year(), self.month_number())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_years() {
        assert!(is_leap_year(2024));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
    }

    #[test]
    fn days_of_month_agrees_with_chrono() {
        for year in 1890..2110 {
            for month in 1..=12 {
                let reference = ReferenceMonth::from_ym(year, month).unwrap();
                let last = reference.next().first_day().pred_opt().unwrap();
                assert_eq!(reference.num_days(), last.day(), "{}", reference);
                assert_eq!(reference.last_day(), last);
            }
        }
    }

    #[test]
    fn month_rollover() {
        let january = ReferenceMonth::new(2024, Month::January).unwrap();
        assert_eq!(january.prev(), ReferenceMonth::new(2023, Month::December).unwrap());

        let december = ReferenceMonth::new(2024, Month::December).unwrap();
        assert_eq!(december.next(), ReferenceMonth::new(2025, Month::January).unwrap());

        let march = ReferenceMonth::new(2024, Month::March).unwrap();
        assert_eq!(march.prev().next(), march);
    }

    #[test]
    fn invalid_months_are_rejected() {
        assert!(ReferenceMonth::from_ym(2024, 0).is_none());
        assert!(ReferenceMonth::from_ym(2024, 13).is_none());
    }

    #[test]
    fn navigation_saturates_at_range_bounds() {
        let last = ReferenceMonth::from(NaiveDate::MAX);
        assert_eq!(last.next(), last);

        let first = ReferenceMonth::from(NaiveDate::MIN);
        assert_eq!(first.prev(), first);
    }

    #[test]
    fn no_neighbours_beyond_range_bounds() {
        let last = ReferenceMonth::from(NaiveDate::MAX);
        assert_eq!(last.checked_next(), None);
        assert_eq!(last.resolve(MonthRelation::Next), None);
        assert_eq!(last.resolve(MonthRelation::Current), Some(last));
        assert!(last.resolve(MonthRelation::Previous).is_some());

        let first = ReferenceMonth::from(NaiveDate::MIN);
        assert_eq!(first.checked_prev(), None);
        assert_eq!(first.resolve(MonthRelation::Previous), None);
        assert_eq!(first.checked_next().map(|m| m.prev()), Some(first));
    }

    #[test]
    fn date_display_is_zero_padded() {
        let date = CalendarDate::from_ymd(2024, 3, 5).unwrap();
        assert_eq!(date.to_string(), "2024/03/05");
        assert_eq!(date.reference_month().to_string(), "2024/03");
    }

    #[test]
    fn date_rejects_overflowing_days() {
        assert!(CalendarDate::from_ymd(2024, 4, 31).is_none());
        assert!(CalendarDate::from_ymd(2023, 2, 29).is_none());
        assert!(CalendarDate::from_ymd(2024, 2, 29).is_some());
    }

    #[test]
    fn label_uses_format() {
        let reference = ReferenceMonth::new(2024, Month::February).unwrap();
        assert_eq!(reference.label("%Y/%m"), "2024/02");
        assert_eq!(reference.label("%B %Y"), "February 2024");
    }
}
