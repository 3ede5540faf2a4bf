use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::time::{Date, Year};
use crate::utils;

/// Whether a holiday is always on the same date or is moved to a
/// monday/friday by decree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HolidayKind {
    #[serde(alias = "inamovible")]
    Fixed,
    #[serde(alias = "trasladable")]
    Movable,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Holiday {
    #[serde(with = "utils::serde_toml_local_date")]
    date: Date,
    name: String,
    #[serde(default = "default_kind")]
    kind: HolidayKind,
}

const fn default_kind() -> HolidayKind {
    HolidayKind::Fixed
}

impl Holiday {
    #[must_use]
    pub fn new(date: Date, name: impl Into<String>, kind: HolidayKind) -> Self {
        Self {
            date,
            name: name.into(),
            kind,
        }
    }

    #[must_use]
    pub fn fixed(date: Date, name: impl Into<String>) -> Self {
        Self::new(date, name, HolidayKind::Fixed)
    }

    #[must_use]
    pub fn movable(date: Date, name: impl Into<String>) -> Self {
        Self::new(date, name, HolidayKind::Movable)
    }

    pub fn date(&self) -> Date {
        self.date
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> HolidayKind {
        self.kind
    }
}

/// The holidays known for some set of years, keyed by date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidaySet {
    holidays: BTreeMap<Date, Holiday>,
}

impl HolidaySet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the holiday, replacing one that was on the same date.
    pub fn insert(&mut self, holiday: Holiday) -> Option<Holiday> {
        self.holidays.insert(holiday.date(), holiday)
    }

    #[must_use]
    pub fn get(&self, date: Date) -> Option<&Holiday> {
        self.holidays.get(&date)
    }

    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        self.holidays.contains_key(&date)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }

    /// The holidays of `year` in chronological order.
    pub fn in_year(&self, year: Year) -> impl Iterator<Item = &Holiday> + '_ {
        self.holidays
            .range(year.first_day()..=year.last_day())
            .map(|(_, holiday)| holiday)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Holiday> + '_ {
        self.holidays.values()
    }
}

impl Extend<Holiday> for HolidaySet {
    fn extend<T: IntoIterator<Item = Holiday>>(&mut self, iter: T) {
        for holiday in iter {
            self.insert(holiday);
        }
    }
}

impl FromIterator<Holiday> for HolidaySet {
    fn from_iter<T: IntoIterator<Item = Holiday>>(iter: T) -> Self {
        let mut result = Self::new();
        result.extend(iter);
        result
    }
}
