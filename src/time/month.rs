use core::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(try_from = "usize")]
#[serde(into = "usize")]
pub enum Month {
    January = 1,
    February = 2,
    March = 3,
    April = 4,
    May = 5,
    June = 6,
    July = 7,
    August = 8,
    September = 9,
    October = 10,
    November = 11,
    December = 12,
}

const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

impl Month {
    /// # Panics
    ///
    /// If the number is not in `1..=12`.
    pub const fn new(number: usize) -> Self {
        MONTHS[number - 1]
    }

    pub const fn as_usize(&self) -> usize {
        *self as usize
    }

    #[must_use]
    pub(crate) const fn is_eq(&self, other: &Self) -> bool {
        self.as_usize() == other.as_usize()
    }

    /// The lowercase spanish name, as written in a long date.
    #[must_use]
    pub const fn name_es(&self) -> &'static str {
        match self {
            Self::January => "enero",
            Self::February => "febrero",
            Self::March => "marzo",
            Self::April => "abril",
            Self::May => "mayo",
            Self::June => "junio",
            Self::July => "julio",
            Self::August => "agosto",
            Self::September => "septiembre",
            Self::October => "octubre",
            Self::November => "noviembre",
            Self::December => "diciembre",
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_usize().fmt(f)
    }
}

impl From<Month> for usize {
    fn from(month: Month) -> Self {
        month.as_usize()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{0} is not a month, expected a number from 1 to 12")]
pub struct InvalidNumberForMonth(usize);

impl TryFrom<usize> for Month {
    type Error = InvalidNumberForMonth;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            1..=12 => Ok(Self::new(value)),
            _ => Err(InvalidNumberForMonth(value)),
        }
    }
}
