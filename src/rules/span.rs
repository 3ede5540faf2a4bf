use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calendar::BusinessCalendar;
use crate::time::Date;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct RequestedSpan {
    requested_days: usize,
    return_date: Date,
}

impl RequestedSpan {
    #[must_use]
    pub const fn new(requested_days: usize, return_date: Date) -> Self {
        Self {
            requested_days,
            return_date,
        }
    }

    /// Business days between the first and last day of the request.
    pub const fn requested_days(&self) -> usize {
        self.requested_days
    }

    /// The first business day after the request ends.
    pub const fn return_date(&self) -> Date {
        self.return_date
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SpanError {
    #[error("the end date {end} is before the start date {start}")]
    EndBeforeStart { start: Date, end: Date },
}

/// Counts the business days in `start..=end` and finds the day the
/// employee returns to work.
pub fn resolve_requested_span(
    calendar: &BusinessCalendar,
    start: Date,
    end: Date,
) -> Result<RequestedSpan, SpanError> {
    if end < start {
        return Err(SpanError::EndBeforeStart { start, end });
    }

    let span = RequestedSpan::new(
        calendar.count_business_days(start, end),
        calendar.next_business_day_after(end),
    );
    debug!("{} to {}: {:?}", start, end, span);

    Ok(span)
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    use crate::calendar::Holiday;
    use crate::date;

    #[test]
    fn test_single_business_day() {
        let calendar = BusinessCalendar::without_holidays();

        // a friday, the next business day is monday
        assert_eq!(
            resolve_requested_span(&calendar, date!(2025:06:06), date!(2025:06:06)),
            Ok(RequestedSpan::new(1, date!(2025:06:09)))
        );
    }

    #[test]
    fn test_holidays_are_not_counted() {
        let calendar: BusinessCalendar = [
            Holiday::fixed(date!(2025:12:08), "Inmaculada Concepción de María"),
            Holiday::fixed(date!(2025:12:25), "Navidad"),
        ]
        .into_iter()
        .collect();

        // monday 12/01 to sunday 12/14 minus the 8th
        assert_eq!(
            resolve_requested_span(&calendar, date!(2025:12:01), date!(2025:12:14)),
            Ok(RequestedSpan::new(9, date!(2025:12:15)))
        );

        // ends the day before christmas
        assert_eq!(
            resolve_requested_span(&calendar, date!(2025:12:22), date!(2025:12:24)),
            Ok(RequestedSpan::new(3, date!(2025:12:26)))
        );
    }

    #[test]
    fn test_weekend_only() {
        let calendar = BusinessCalendar::without_holidays();

        assert_eq!(
            resolve_requested_span(&calendar, date!(2025:06:07), date!(2025:06:08)),
            Ok(RequestedSpan::new(0, date!(2025:06:09)))
        );
    }

    #[test]
    fn test_end_before_start() {
        assert_eq!(
            resolve_requested_span(
                &BusinessCalendar::without_holidays(),
                date!(2025:06:09),
                date!(2025:06:06)
            ),
            Err(SpanError::EndBeforeStart {
                start: date!(2025:06:09),
                end: date!(2025:06:06),
            })
        );
    }
}
