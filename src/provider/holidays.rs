use async_trait::async_trait;

use crate::calendar::{Holiday, HolidaySet};
use crate::provider::ProviderError;
use crate::time::Year;

/// Source of the public holidays, read synchronously.
pub trait HolidayProvider {
    fn holidays(&self, year: Year) -> Result<Vec<Holiday>, ProviderError>;
}

/// Source of the public holidays, fetched on demand (e.g. over HTTP).
#[async_trait]
pub trait AsyncHolidayProvider: Send + Sync {
    async fn holidays(&self, year: Year) -> Result<Vec<Holiday>, ProviderError>;
}

/// Holidays that were loaded up front, for example from a holiday file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticHolidays {
    holidays: HolidaySet,
}

impl StaticHolidays {
    pub fn new(holidays: impl IntoIterator<Item = Holiday>) -> Self {
        Self {
            holidays: holidays.into_iter().collect(),
        }
    }
}

impl HolidayProvider for StaticHolidays {
    fn holidays(&self, year: Year) -> Result<Vec<Holiday>, ProviderError> {
        Ok(self.holidays.in_year(year).cloned().collect())
    }
}

#[async_trait]
impl AsyncHolidayProvider for StaticHolidays {
    async fn holidays(&self, year: Year) -> Result<Vec<Holiday>, ProviderError> {
        HolidayProvider::holidays(self, year)
    }
}
