use core::fmt;
use core::ops::{Add, AddAssign, Sub, SubAssign};
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::time::{DateRange, Month, WeekDay, Year};
use crate::utils::StrExt;

#[macro_export]
macro_rules! date {
    ($year:literal : $month:literal : $day:literal) => {{
        static_assertions::const_assert!($year >= 1 && $year <= 9999);
        const _YEAR: $crate::time::Year = $crate::time::Year::new($year);
        static_assertions::const_assert!($month >= 1 && $month <= 12);

        const _MONTH: $crate::time::Month = $crate::time::Month::new($month);

        // validate the day
        static_assertions::const_assert!($day != 0);
        static_assertions::const_assert!($day <= _YEAR.number_of_days_in_month(_MONTH));

        $crate::time::Date::new_unchecked(_YEAR, _MONTH, $day)
    }};
}

/// Dates outside of these years are rejected.
pub const MIN_YEAR: usize = 1;
pub const MAX_YEAR: usize = 9999;

/// Days between 0000-03-01 and 1970-01-01 in the proleptic gregorian calendar.
const UNIX_EPOCH_OFFSET: i64 = 719_468;
const DAYS_PER_ERA: i64 = 146_097;

/// Converts a civil date into the number of days since 1970-01-01.
///
/// The algorithm is based on <https://howardhinnant.github.io/date_algorithms.html#days_from_civil>
const fn days_from_civil(year: i64, month: i64, day: i64) -> i64 {
    let year = if month <= 2 { year - 1 } else { year };
    let era = if year >= 0 { year } else { year - 399 } / 400;
    let year_of_era = year - era * 400;
    // march is the first month, so that the leap day is the last day of the year
    let shifted_month = (month + 9) % 12;
    let day_of_year = (153 * shifted_month + 2) / 5 + day - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;

    era * DAYS_PER_ERA + day_of_era - UNIX_EPOCH_OFFSET
}

/// Inverse of [`days_from_civil`].
const fn civil_from_days(days: i64) -> (i64, i64, i64) {
    let days = days + UNIX_EPOCH_OFFSET;
    let era = if days >= 0 { days } else { days - (DAYS_PER_ERA - 1) } / DAYS_PER_ERA;
    let day_of_era = days - era * DAYS_PER_ERA;
    let year_of_era =
        (day_of_era - day_of_era / 1460 + day_of_era / 36524 - day_of_era / 146_096) / 365;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let shifted_month = (5 * day_of_year + 2) / 153;
    let day = day_of_year - (153 * shifted_month + 2) / 5 + 1;
    let month = if shifted_month < 10 {
        shifted_month + 3
    } else {
        shifted_month - 9
    };
    let year = year_of_era + era * 400;

    (if month <= 2 { year + 1 } else { year }, month, day)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(try_from = "String", into = "String")]
pub struct Date {
    year: Year,
    month: Month,
    day: usize,
}

impl Date {
    pub fn new(year: impl Into<Year>, month: Month, day: usize) -> Result<Self, InvalidDate> {
        let year = year.into();
        if !(MIN_YEAR..=MAX_YEAR).contains(&year.as_usize()) {
            return Err(InvalidDate::YearOutOfRange { year });
        }

        if year.number_of_days_in_month(month) < day || day == 0 {
            return Err(InvalidDate::InvalidDay { year, month, day });
        }

        Ok(Self { year, month, day })
    }

    /// Used by the [`date!`] macro, which checks the day at compile time.
    #[doc(hidden)]
    #[must_use]
    pub const fn new_unchecked(year: Year, month: Month, day: usize) -> Self {
        Self { year, month, day }
    }

    /// Returns the date of the first day in the month.
    #[must_use]
    pub const fn first_day(year: Year, month: Month) -> Self {
        Self {
            year,
            month,
            day: 1,
        }
    }

    /// Returns the date of the last day in the month.
    #[must_use]
    pub const fn last_day(year: Year, month: Month) -> Self {
        Self {
            year,
            month,
            day: year.number_of_days_in_month(month),
        }
    }

    #[must_use]
    const fn days_since_epoch(&self) -> i64 {
        days_from_civil(
            self.year.as_usize() as i64,
            self.month.as_usize() as i64,
            self.day as i64,
        )
    }

    #[must_use]
    const fn from_days_since_epoch(days: i64) -> Self {
        let (year, month, day) = civil_from_days(days);

        Self {
            year: Year::new(year as usize),
            month: Month::new(month as usize),
            day: day as usize,
        }
    }
}

impl Date {
    /// Replaces `{year}`, `{month}` and `{day}` in `f` with the zero padded values.
    pub fn formatted(&self, f: &str) -> String {
        f.replace("{year}", &format!("{:04}", self.year()))
            .replace("{month}", &format!("{:02}", self.month()))
            .replace("{day}", &format!("{:02}", self.day()))
    }

    /// The `dd/mm/yyyy` form used in messages shown to employees.
    pub fn to_local_string(&self) -> String {
        self.formatted("{day}/{month}/{year}")
    }

    /// For example `lunes 5 de enero de 2026`.
    pub fn to_long_string(&self) -> String {
        format!(
            "{} {} de {} de {}",
            self.week_day(),
            self.day,
            self.month.name_es(),
            self.year
        )
    }
}

impl Date {
    pub const fn week_day(&self) -> WeekDay {
        // 1970-01-01 was a thursday, which is 3 days after a monday
        WeekDay::from_monday_offset((self.days_since_epoch() + 3).rem_euclid(7) as usize)
    }

    pub const fn year(&self) -> Year {
        self.year
    }

    pub const fn month(&self) -> Month {
        self.month
    }

    pub const fn day(&self) -> usize {
        self.day
    }

    #[must_use]
    pub const fn is_weekend(&self) -> bool {
        self.week_day().is_weekend()
    }

    #[must_use]
    pub const fn add_days(self, days: usize) -> Self {
        Self::from_days_since_epoch(self.days_since_epoch() + days as i64)
    }

    #[must_use]
    pub const fn sub_days(self, days: usize) -> Self {
        Self::from_days_since_epoch(self.days_since_epoch() - days as i64)
    }

    /// The day after `self`.
    #[must_use]
    pub const fn succ(self) -> Self {
        self.add_days(1)
    }

    /// The day before `self`.
    #[must_use]
    pub const fn pred(self) -> Self {
        self.sub_days(1)
    }

    /// Returns the signed number of days that pass between `self` and `other`.
    ///
    /// `self + self.days_until(other) == other` when `self <= other`.
    #[must_use]
    pub const fn days_until(&self, other: Self) -> i64 {
        other.days_since_epoch() - self.days_since_epoch()
    }

    /// Returns the number of full years that have passed between `self` and `other`.
    ///
    /// If `other` is before `self`, no years have passed.
    ///
    /// # Examples
    ///
    /// ```
    /// # use leave_rules::date;
    /// assert_eq!(date!(2022:01:01).years_until(date!(2023:01:01)), 1);
    /// assert_eq!(date!(2022:01:02).years_until(date!(2023:01:01)), 0);
    /// ```
    #[must_use]
    pub const fn years_until(&self, other: Self) -> usize {
        if other.days_since_epoch() < self.days_since_epoch() {
            return 0;
        }

        let mut years = other.year().as_usize() - self.year().as_usize();

        if self.month().as_usize() > other.month().as_usize()
            || (self.month().is_eq(&other.month()) && self.day() > other.day())
        {
            years -= 1;
        }

        years
    }

    /// Every date from `self` up to and including `end`.
    pub fn iter_until(self, end: Self) -> DateRange {
        DateRange::new(self, end)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidDate {
    #[error("\"{input}\" is not valid date. Expected format: \"YYYY-MM-DD\"")]
    ParseDateError { input: String },
    #[error("{year} is outside of the supported years 1 to 9999")]
    YearOutOfRange { year: Year },
    #[error("{day:02} is not a valid day for {year:04}-{month:02}")]
    InvalidDay {
        year: Year,
        month: Month,
        day: usize,
    },
}

impl Add<usize> for Date {
    type Output = Self;

    fn add(self, days: usize) -> Self::Output {
        self.add_days(days)
    }
}

impl Sub<usize> for Date {
    type Output = Self;

    fn sub(self, days: usize) -> Self::Output {
        self.sub_days(days)
    }
}

impl SubAssign<usize> for Date {
    fn sub_assign(&mut self, days: usize) {
        *self = *self - days;
    }
}

impl AddAssign<usize> for Date {
    fn add_assign(&mut self, days: usize) {
        *self = *self + days;
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.year.as_usize(),
            self.month.as_usize(),
            self.day
        )
    }
}

fn parse_or_err(input: &str, whole: &str) -> Result<usize, InvalidDate> {
    input
        .parse::<usize>()
        .map_err(|_| InvalidDate::ParseDateError {
            input: whole.to_string(),
        })
}

impl FromStr for Date {
    type Err = InvalidDate;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        if let [Some(year), Some(month), Some(day)] = string.trim().split_exact::<3>("-") {
            let year = Year::new(parse_or_err(year, string)?);
            let month = Month::try_from(parse_or_err(month, string)?).map_err(|_| {
                InvalidDate::ParseDateError {
                    input: string.to_string(),
                }
            })?;
            let day = parse_or_err(day, string)?;

            Self::new(year, month, day)
        } else {
            Err(InvalidDate::ParseDateError {
                input: string.to_string(),
            })
        }
    }
}

impl TryFrom<String> for Date {
    type Error = <Self as FromStr>::Err;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_str(value.as_str())
    }
}

impl From<Date> for String {
    fn from(date: Date) -> Self {
        date.to_string()
    }
}

impl From<Date> for toml::value::Date {
    fn from(date: Date) -> Self {
        toml::value::Date {
            year: date.year().as_usize() as u16,
            month: date.month() as u8,
            day: date.day() as u8,
        }
    }
}

impl TryFrom<toml::value::Date> for Date {
    type Error = InvalidDate;

    fn try_from(date: toml::value::Date) -> Result<Self, Self::Error> {
        let month =
            Month::try_from(date.month as usize).map_err(|_| InvalidDate::ParseDateError {
                input: date.to_string(),
            })?;

        Self::new(Year::new(date.year as usize), month, date.day as usize)
    }
}
