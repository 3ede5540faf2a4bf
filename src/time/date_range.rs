use core::iter::FusedIterator;

use crate::time::Date;

/// Iterates over every date in `start..=end`.
///
/// Empty when `end` is before `start`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct DateRange {
    next: Option<Date>,
    end: Date,
}

impl DateRange {
    pub fn new(start: Date, end: Date) -> Self {
        Self {
            next: (start <= end).then_some(start),
            end,
        }
    }
}

impl Iterator for DateRange {
    type Item = Date;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = (current < self.end).then(|| current.succ());
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self
            .next
            .map_or(0, |next| next.days_until(self.end) as usize + 1);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for DateRange {}

impl FusedIterator for DateRange {}
