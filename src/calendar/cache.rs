use std::collections::HashMap;

use log::{debug, warn};
use tokio::sync::RwLock;

use crate::calendar::{BusinessCalendar, Holiday, HolidaySet};
use crate::provider::{AsyncHolidayProvider, ProviderError};
use crate::time::{Date, Year};

#[derive(Debug, Clone)]
enum CachedYear {
    Loaded(Vec<Holiday>),
    /// The provider failed, the year is treated as having no holidays
    /// until [`HolidayCache::refresh`] succeeds.
    Degraded,
}

/// Fetches the holidays of a year the first time a date in it is asked
/// about and keeps them for later questions.
///
/// Use [`HolidayCache::snapshot`] to get a [`BusinessCalendar`] for
/// synchronous checks on every keystroke; it may lag behind the provider.
pub struct HolidayCache<P> {
    provider: P,
    years: RwLock<HashMap<Year, CachedYear>>,
}

impl<P> HolidayCache<P>
where
    P: AsyncHolidayProvider,
{
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            years: RwLock::new(HashMap::new()),
        }
    }

    async fn fetch(&self, year: Year) -> Result<(), ProviderError> {
        let result = self.provider.holidays(year).await;

        let (entry, result) = match result {
            Ok(holidays) => {
                debug!("cached {} holidays for {}", holidays.len(), year);
                (CachedYear::Loaded(holidays), Ok(()))
            }
            Err(error) => {
                warn!("treating {} as a year without holidays: {}", year, error);
                (CachedYear::Degraded, Err(error))
            }
        };

        self.years.write().await.insert(year, entry);
        result
    }

    /// Makes sure the year is in the cache, fetching it if necessary.
    ///
    /// Returns the provider error if a fetch was made and failed.
    pub async fn ensure_year(&self, year: Year) -> Result<(), ProviderError> {
        if self.years.read().await.contains_key(&year) {
            return Ok(());
        }

        self.fetch(year).await
    }

    /// Fetches the year again, replacing what was cached.
    pub async fn refresh(&self, year: Year) -> Result<(), ProviderError> {
        self.fetch(year).await
    }

    /// Loads all `years`, collecting the errors for a banner.
    pub async fn load_years(&self, years: impl IntoIterator<Item = Year>) -> Vec<ProviderError> {
        let mut errors = Vec::new();

        for year in years {
            if let Err(error) = self.ensure_year(year).await {
                errors.push(error);
            }
        }

        errors
    }

    pub async fn is_business_day(&self, date: Date) -> bool {
        // a failed fetch is already logged and the year is marked as degraded
        let _ = self.ensure_year(date.year()).await;

        if date.is_weekend() {
            return false;
        }

        match self.years.read().await.get(&date.year()) {
            Some(CachedYear::Loaded(holidays)) => {
                !holidays.iter().any(|holiday| holiday.date() == date)
            }
            Some(CachedYear::Degraded) | None => true,
        }
    }

    /// A synchronous calendar with everything cached so far.
    pub async fn snapshot(&self) -> BusinessCalendar {
        let years = self.years.read().await;

        let mut holidays = HolidaySet::new();
        let mut loaded_years = Vec::new();
        let mut degraded = Vec::new();

        for (year, entry) in years.iter() {
            match entry {
                CachedYear::Loaded(loaded) => {
                    holidays.extend(loaded.iter().cloned());
                    loaded_years.push(*year);
                }
                CachedYear::Degraded => degraded.push(*year),
            }
        }

        let mut calendar = BusinessCalendar::for_years(holidays, loaded_years);
        for year in degraded {
            calendar.mark_degraded(year);
        }

        calendar
    }
}
