use serde::{Deserialize, Serialize};

use crate::calendar::{Holiday, HolidaySet, StatutoryHolidays};
use crate::provider::{HolidayProvider, ProviderError};
use crate::time::Year;

/// The holiday file.
///
/// ```toml
/// statutory = true
///
/// [[holiday]]
/// date = 2025-11-21
/// name = "Feriado puente"
/// kind = "fixed"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Holidays {
    /// Include the national holidays of every year.
    #[serde(default)]
    statutory: bool,
    #[serde(default, rename = "holiday")]
    holidays: Vec<Holiday>,
}

impl Holidays {
    /// Only the national holidays, used when no file is given.
    #[must_use]
    pub fn statutory_only() -> Self {
        Self {
            statutory: true,
            holidays: Vec::new(),
        }
    }

    #[must_use]
    pub fn includes_statutory(&self) -> bool {
        self.statutory
    }

    pub fn listed(&self) -> &[Holiday] {
        &self.holidays
    }
}

impl HolidayProvider for Holidays {
    fn holidays(&self, year: Year) -> Result<Vec<Holiday>, ProviderError> {
        let mut result = HolidaySet::new();

        if self.statutory {
            result.extend(StatutoryHolidays.in_year(year));
        }

        // listed holidays replace a statutory one on the same date
        result.extend(
            self.holidays
                .iter()
                .filter(|holiday| holiday.date().year() == year)
                .cloned(),
        );

        Ok(result.iter().cloned().collect())
    }
}
