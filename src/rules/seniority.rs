use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::time::Date;

/// Upper bound of full years (inclusive) and the vacation days it earns.
const VACATION_DAYS_BY_SENIORITY: [(usize, usize); 3] = [(5, 14), (10, 21), (20, 28)];
/// Vacation days for more than 20 years of seniority.
const MAXIMUM_VACATION_DAYS: usize = 35;

/// Full years an employee has worked under a contract.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Deserialize, Serialize,
)]
#[serde(transparent)]
#[display("{years} años")]
pub struct Seniority {
    years: usize,
}

impl Seniority {
    #[must_use]
    pub const fn from_years(years: usize) -> Self {
        Self { years }
    }

    /// Full years from `start` until `reference`.
    #[must_use]
    pub const fn between(start: Date, reference: Date) -> Self {
        Self::from_years(start.years_until(reference))
    }

    #[must_use]
    pub const fn years(&self) -> usize {
        self.years
    }

    /// Calendar days of vacation that correspond to this seniority.
    #[must_use]
    pub const fn vacation_days(&self) -> usize {
        let mut i = 0;
        while i < VACATION_DAYS_BY_SENIORITY.len() {
            let (up_to_years, days) = VACATION_DAYS_BY_SENIORITY[i];
            if self.years <= up_to_years {
                return days;
            }

            i += 1;
        }

        MAXIMUM_VACATION_DAYS
    }
}
