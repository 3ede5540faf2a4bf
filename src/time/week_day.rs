use core::fmt;
use core::ops::Add;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash, Deserialize, Serialize)]
pub enum WeekDay {
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
    Sunday = 7,
}

impl WeekDay {
    pub const fn as_usize(&self) -> usize {
        *self as usize
    }

    #[must_use]
    pub(crate) const fn is_eq(&self, other: &Self) -> bool {
        self.as_usize() == other.as_usize()
    }

    /// Saturdays and sundays.
    #[must_use]
    pub const fn is_weekend(&self) -> bool {
        self.is_eq(&Self::Saturday) || self.is_eq(&Self::Sunday)
    }

    /// Returns the number of days from `self` until the next `other`
    /// (0 if they are the same day).
    #[must_use]
    pub const fn days_until(&self, other: Self) -> usize {
        (other.as_usize() + 7 - self.as_usize()) % 7
    }

    /// Maps the remainder `0..7` to a week day, where `0` is a monday.
    #[must_use]
    pub(crate) const fn from_monday_offset(offset: usize) -> Self {
        match offset % 7 {
            0 => Self::Monday,
            1 => Self::Tuesday,
            2 => Self::Wednesday,
            3 => Self::Thursday,
            4 => Self::Friday,
            5 => Self::Saturday,
            _ => Self::Sunday,
        }
    }

    /// The spanish name, as shown next to dates in request summaries.
    #[must_use]
    pub const fn name_es(&self) -> &'static str {
        match self {
            Self::Monday => "lunes",
            Self::Tuesday => "martes",
            Self::Wednesday => "miércoles",
            Self::Thursday => "jueves",
            Self::Friday => "viernes",
            Self::Saturday => "sábado",
            Self::Sunday => "domingo",
        }
    }
}

impl Add<usize> for WeekDay {
    type Output = Self;

    fn add(self, rhs: usize) -> Self::Output {
        Self::from_monday_offset(self.as_usize() - 1 + rhs % 7)
    }
}

impl fmt::Display for WeekDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name_es())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidWeekDayNumber;

impl TryFrom<usize> for WeekDay {
    type Error = InvalidWeekDayNumber;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            1..=7 => Ok(Self::from_monday_offset(value - 1)),
            _ => Err(InvalidWeekDayNumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn test_add_wraps_around() {
        assert_eq!(WeekDay::Sunday + 1, WeekDay::Monday);
        assert_eq!(WeekDay::Friday + 3, WeekDay::Monday);
        assert_eq!(WeekDay::Monday + 14, WeekDay::Monday);
    }

    #[test]
    fn test_days_until() {
        assert_eq!(WeekDay::Monday.days_until(WeekDay::Monday), 0);
        assert_eq!(WeekDay::Friday.days_until(WeekDay::Monday), 3);
        assert_eq!(WeekDay::Sunday.days_until(WeekDay::Saturday), 6);
    }

    #[test]
    fn test_try_from() {
        assert_eq!(WeekDay::try_from(6), Ok(WeekDay::Saturday));
        assert_eq!(WeekDay::try_from(0), Err(InvalidWeekDayNumber));
        assert_eq!(WeekDay::try_from(8), Err(InvalidWeekDayNumber));
    }
}
