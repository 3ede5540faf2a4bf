use derive_more::Display;
use log::debug;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calendar::BusinessCalendar;
use crate::time::{Date, TimeStamp};

/// How overtime is compensated, as a surcharge on the hourly wage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Deserialize, Serialize)]
pub enum OvertimeTier {
    /// Worked on a business day.
    #[serde(rename = "weekday_50", alias = "50")]
    #[display("50%")]
    Weekday50,
    /// Worked on a saturday, sunday or holiday.
    #[serde(rename = "weekend_holiday_100", alias = "100")]
    #[display("100%")]
    WeekendHoliday100,
}

impl OvertimeTier {
    #[must_use]
    pub const fn for_business_day(is_business_day: bool) -> Self {
        if is_business_day {
            Self::Weekday50
        } else {
            Self::WeekendHoliday100
        }
    }

    #[must_use]
    pub const fn surcharge_percent(&self) -> u8 {
        match self {
            Self::Weekday50 => 50,
            Self::WeekendHoliday100 => 100,
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OvertimeError {
    #[error("the end time {end} is not after the start time {start}")]
    EndNotAfterStart { start: TimeStamp, end: TimeStamp },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct OvertimeClassification {
    date: Date,
    start_time: TimeStamp,
    end_time: TimeStamp,
    hours: Decimal,
    tier: OvertimeTier,
}

impl OvertimeClassification {
    pub fn date(&self) -> Date {
        self.date
    }

    pub fn start_time(&self) -> TimeStamp {
        self.start_time
    }

    pub fn end_time(&self) -> TimeStamp {
        self.end_time
    }

    /// Elapsed hours, rounded to two decimal places.
    pub fn hours(&self) -> Decimal {
        self.hours
    }

    pub fn tier(&self) -> OvertimeTier {
        self.tier
    }
}

/// Elapsed time from `start` to `end` in decimal hours, rounded to two places.
pub fn elapsed_hours(start: TimeStamp, end: TimeStamp) -> Result<Decimal, OvertimeError> {
    let minutes = start
        .minutes_until(&end)
        .ok_or(OvertimeError::EndNotAfterStart { start, end })?;

    Ok((Decimal::from(minutes) / dec!(60))
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
}

/// Computes the hours and the compensation tier of an overtime request.
///
/// The date itself is not required to be a business day, overtime is
/// often worked on weekends and holidays.
pub fn classify(
    calendar: &BusinessCalendar,
    date: Date,
    start_time: TimeStamp,
    end_time: TimeStamp,
) -> Result<OvertimeClassification, OvertimeError> {
    let hours = elapsed_hours(start_time, end_time)?;
    let tier = OvertimeTier::for_business_day(calendar.is_business_day(date));
    debug!("overtime on {} from {} to {}: {}h at {}", date, start_time, end_time, hours, tier);

    Ok(OvertimeClassification {
        date,
        start_time,
        end_time,
        hours,
        tier,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    use crate::calendar::Holiday;
    use crate::{date, time_stamp};

    #[test]
    fn test_elapsed_hours() {
        assert_eq!(elapsed_hours(time_stamp!(09:00), time_stamp!(11:30)), Ok(dec!(2.50)));
        assert_eq!(elapsed_hours(time_stamp!(18:00), time_stamp!(19:40)), Ok(dec!(1.67)));
        assert_eq!(elapsed_hours(time_stamp!(18:00), time_stamp!(18:01)), Ok(dec!(0.02)));
        assert_eq!(
            elapsed_hours(time_stamp!(11:00), time_stamp!(09:00)),
            Err(OvertimeError::EndNotAfterStart {
                start: time_stamp!(11:00),
                end: time_stamp!(09:00),
            })
        );
    }

    #[test]
    fn test_tier_follows_calendar() {
        let calendar: BusinessCalendar = [Holiday::fixed(date!(2025:07:09), "Día de la Independencia")]
            .into_iter()
            .collect();

        let tier = |date| {
            classify(&calendar, date, time_stamp!(18:00), time_stamp!(20:00))
                .map(|classification| classification.tier())
        };

        assert_eq!(tier(date!(2025:07:08)), Ok(OvertimeTier::Weekday50));
        assert_eq!(tier(date!(2025:07:09)), Ok(OvertimeTier::WeekendHoliday100));
        assert_eq!(tier(date!(2025:07:12)), Ok(OvertimeTier::WeekendHoliday100));
    }

    #[test]
    fn test_tier_serde_aliases() {
        assert_eq!(
            serde_json::from_str::<OvertimeTier>("\"100\"").ok(),
            Some(OvertimeTier::WeekendHoliday100)
        );
        assert_eq!(
            serde_json::to_string(&OvertimeTier::Weekday50).ok(),
            Some("\"weekday_50\"".to_string())
        );
    }
}
