use std::collections::BTreeSet;

use log::{debug, trace, warn};
use thiserror::Error;

use crate::calendar::{Holiday, HolidaySet};
use crate::provider::HolidayProvider;
use crate::time::{Date, Year};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{field_label} debe ser un día hábil")]
pub struct BusinessDayViolation {
    field_label: String,
    date: Date,
}

impl BusinessDayViolation {
    pub fn field_label(&self) -> &str {
        &self.field_label
    }

    pub fn date(&self) -> Date {
        self.date
    }
}

/// Answers business day questions from holidays that are already loaded.
///
/// A business day is a monday to friday that is not a holiday. Years for
/// which the holidays could not be loaded, or were never requested, are
/// treated as having no holidays at all (see
/// [`BusinessCalendar::unknown_years`]): weekends are still excluded, but
/// a holiday in such a year counts as a working day.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BusinessCalendar {
    holidays: HolidaySet,
    /// `None` if `holidays` are complete for every year.
    loaded: Option<BTreeSet<Year>>,
    degraded: BTreeSet<Year>,
}

impl BusinessCalendar {
    /// A calendar where `holidays` are all holidays of every year.
    #[must_use]
    pub fn new(holidays: HolidaySet) -> Self {
        Self {
            holidays,
            loaded: None,
            degraded: BTreeSet::new(),
        }
    }

    /// A calendar that only knows the holidays of `years`.
    #[must_use]
    pub fn for_years(holidays: HolidaySet, years: impl IntoIterator<Item = Year>) -> Self {
        Self {
            holidays,
            loaded: Some(years.into_iter().collect()),
            degraded: BTreeSet::new(),
        }
    }

    /// A calendar where only weekends are non-working days.
    #[must_use]
    pub fn without_holidays() -> Self {
        Self::default()
    }

    /// Loads the holidays of every year in `years` from the `provider`.
    ///
    /// A failing year is logged and marked as degraded instead of failing
    /// the whole calendar.
    pub fn from_provider<P>(provider: &P, years: impl IntoIterator<Item = Year>) -> Self
    where
        P: HolidayProvider + ?Sized,
    {
        let mut calendar = Self::for_years(HolidaySet::new(), core::iter::empty());

        for year in years {
            match provider.holidays(year) {
                Ok(holidays) => {
                    debug!("loaded {} holidays for {}", holidays.len(), year);
                    calendar.holidays.extend(holidays);
                    calendar.loaded.get_or_insert_with(BTreeSet::new).insert(year);
                }
                Err(error) => {
                    warn!("treating {} as a year without holidays: {}", year, error);
                    calendar.degraded.insert(year);
                }
            }
        }

        calendar
    }

    pub(crate) fn mark_degraded(&mut self, year: Year) {
        if let Some(loaded) = &mut self.loaded {
            loaded.remove(&year);
        }
        self.degraded.insert(year);
    }

    pub fn holidays(&self) -> &HolidaySet {
        &self.holidays
    }

    /// Years whose holidays are unknown, because the provider failed.
    pub fn degraded_years(&self) -> impl Iterator<Item = Year> + '_ {
        self.degraded.iter().copied()
    }

    #[must_use]
    pub fn is_degraded(&self) -> bool {
        !self.degraded.is_empty()
    }

    /// Whether the holidays of `year` are loaded.
    #[must_use]
    pub fn knows_year(&self, year: Year) -> bool {
        !self.degraded.contains(&year)
            && self
                .loaded
                .as_ref()
                .map_or(true, |loaded| loaded.contains(&year))
    }

    /// The degraded years together with every year of `years` whose
    /// holidays were never loaded.
    pub fn unknown_years(&self, years: impl IntoIterator<Item = Year>) -> BTreeSet<Year> {
        let mut unknown = self.degraded.clone();
        unknown.extend(years.into_iter().filter(|year| !self.knows_year(*year)));
        unknown
    }

    #[must_use]
    pub fn holiday_on(&self, date: Date) -> Option<&Holiday> {
        self.holidays.get(date)
    }

    #[must_use]
    pub fn is_business_day(&self, date: Date) -> bool {
        if !self.knows_year(date.year()) {
            debug!("the holidays of {} are unknown, only weekends are excluded", date.year());
        }

        let result = !date.is_weekend() && !self.holidays.contains(date);
        trace!("{} ({}) is business day: {}", date, date.week_day(), result);
        result
    }

    /// Fails with a field error when `date` is on a weekend or holiday.
    pub fn validate_is_business_day(
        &self,
        date: Date,
        field_label: &str,
    ) -> Result<(), BusinessDayViolation> {
        if self.is_business_day(date) {
            return Ok(());
        }

        Err(BusinessDayViolation {
            field_label: field_label.to_string(),
            date,
        })
    }

    /// The first business day strictly after `date`.
    #[must_use]
    pub fn next_business_day_after(&self, date: Date) -> Date {
        // terminates, because there are finitely many holidays
        let mut current = date.succ();
        while !self.is_business_day(current) {
            current += 1;
        }

        current
    }

    /// Number of business days in `start..=end`, zero if `end` is before `start`.
    #[must_use]
    pub fn count_business_days(&self, start: Date, end: Date) -> usize {
        start
            .iter_until(end)
            .filter(|date| self.is_business_day(*date))
            .count()
    }
}

impl From<HolidaySet> for BusinessCalendar {
    fn from(holidays: HolidaySet) -> Self {
        Self::new(holidays)
    }
}

impl FromIterator<Holiday> for BusinessCalendar {
    fn from_iter<T: IntoIterator<Item = Holiday>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
