use std::str::FromStr;

use derive_more::Display;
use serde::{de, ser, Deserialize, Serialize};
use thiserror::Error;

#[macro_export]
macro_rules! time_stamp {
    ($hour:literal : $minute:literal) => {{
        static_assertions::const_assert!($hour < 24);
        static_assertions::const_assert!($minute < 60);

        $crate::time::TimeStamp::new_unchecked($hour, $minute)
    }};
}

/// A time of day with minute precision, written as `HH:MM`.
#[derive(Debug, Copy, Clone, Display, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[display("{hour:02}:{minute:02}")]
pub struct TimeStamp {
    hour: u8,
    minute: u8,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvalidTime {
    #[error("Time is not valid: {hour:02}:{minute:02}")]
    OutOfRange { hour: u8, minute: u8 },
    #[error("\"{input}\" is not a valid time. Expected format: \"HH:MM\"")]
    ParseTimeError { input: String },
}

impl TimeStamp {
    pub fn new(hour: u8, minute: u8) -> Result<Self, InvalidTime> {
        if hour > 23 || minute > 59 {
            return Err(InvalidTime::OutOfRange { hour, minute });
        }

        Ok(Self { hour, minute })
    }

    #[doc(hidden)]
    #[must_use]
    pub const fn new_unchecked(hour: u8, minute: u8) -> Self {
        Self { hour, minute }
    }

    #[must_use]
    pub const fn hour(&self) -> u8 {
        self.hour
    }

    #[must_use]
    pub const fn minute(&self) -> u8 {
        self.minute
    }

    // the maximum TimeStamp is 23:59, which would be 23 * 60 + 59 = 1439
    #[must_use]
    pub const fn as_minutes(&self) -> u16 {
        self.hour as u16 * 60 + self.minute as u16
    }

    /// Minutes from `self` until `other`, or `None` if `other` is not after `self`.
    #[must_use]
    pub const fn minutes_until(&self, other: &Self) -> Option<u16> {
        if other.as_minutes() > self.as_minutes() {
            Some(other.as_minutes() - self.as_minutes())
        } else {
            None
        }
    }
}

impl FromStr for TimeStamp {
    type Err = InvalidTime;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let parse_error = || InvalidTime::ParseTimeError {
            input: string.to_string(),
        };

        let (hour, minute) = string.trim().split_once(':').ok_or_else(parse_error)?;

        // the ui sends "HH:MM:SS" for some inputs
        let minute = minute.split_once(':').map_or(minute, |(minute, _)| minute);

        Self::new(
            hour.parse().map_err(|_| parse_error())?,
            minute.parse().map_err(|_| parse_error())?,
        )
    }
}

impl<'de> Deserialize<'de> for TimeStamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        FromStr::from_str(&s).map_err(de::Error::custom)
    }
}

impl Serialize for TimeStamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.serialize_str(self.to_string().as_str())
    }
}
