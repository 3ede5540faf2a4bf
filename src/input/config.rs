use std::collections::BTreeSet;
use std::fs::File;
use std::path::Path;

use anyhow::Context;
use log::{info, warn};

use crate::calendar::BusinessCalendar;
use crate::input::toml_input;
use crate::provider::{ContractProvider, LocalContracts};
use crate::request::{Request, RequestValidationResult, RequestValidator, ValidationContext};
use crate::rules::{Contract, VacationRecord};
use crate::time::{Date, Year};
use crate::utils;

/// The calendar and the request that were read from the input files.
#[derive(Debug, Clone)]
pub struct Config {
    calendar: BusinessCalendar,
    request: Option<Request>,
    context: ValidationContext,
    contracts: LocalContracts,
    banners: Vec<String>,
}

pub struct ConfigBuilder {
    holidays: toml_input::Holidays,
    request: Option<toml_input::RequestFile>,
    today: Option<Date>,
    default_today: Option<Date>,
    years: BTreeSet<Year>,
}

impl ConfigBuilder {
    fn new(holidays: toml_input::Holidays, request: Option<toml_input::RequestFile>) -> Self {
        Self {
            holidays,
            request,
            today: None,
            default_today: None,
            years: BTreeSet::new(),
        }
    }

    /// The current date, overrides the one of the request file.
    pub fn today(&mut self, today: Date) -> &mut Self {
        self.today = Some(today);
        self
    }

    /// The current date if neither [`Self::today`] nor the request file set one.
    pub fn default_today(&mut self, today: Date) -> &mut Self {
        self.default_today = Some(today);
        self
    }

    /// Loads the holidays of `year` as well.
    pub fn year(&mut self, year: Year) -> &mut Self {
        self.years.insert(year);
        self
    }

    /// Loads the holidays of every year a span from `start` to `end` can
    /// touch, including the year of its return date.
    pub fn span(&mut self, start: Date, end: Date) -> &mut Self {
        self.years.extend(start.year().through(end.year().next()));
        self
    }

    fn requested_years(&self, today: Date) -> BTreeSet<Year> {
        let mut years = self.years.clone();
        years.insert(today.year());

        if let Some(file) = &self.request {
            let request_years = file.request().years();
            years.extend(request_years.iter().copied());
            // the return date can be in the next year
            years.extend(request_years.last().map(Year::next));

            if let Request::Vacation(vacation) = file.request() {
                years.extend(vacation.period.map(|period| period.next()));
                years.extend(vacation.period);
            }
        }

        years
    }

    pub fn build(self) -> anyhow::Result<Config> {
        let today = self
            .today
            .or_else(|| self.request.as_ref().and_then(|file| file.context().today()))
            .or(self.default_today)
            .ok_or_else(|| anyhow::anyhow!("the current date is unknown"))?;

        let years = self.requested_years(today);
        let calendar = BusinessCalendar::from_provider(&self.holidays, years);
        info!(
            "loaded {} holidays ({} degraded years)",
            calendar.holidays().len(),
            calendar.degraded_years().count()
        );

        let mut banners = Vec::new();

        let Some(file) = self.request else {
            return Ok(Config {
                contracts: LocalContracts::new(
                    None::<Contract>,
                    Vec::<VacationRecord>::new(),
                    calendar.clone(),
                ),
                calendar,
                request: None,
                context: ValidationContext::new(today),
                banners,
            });
        };

        let contracts = LocalContracts::new(
            file.contract().cloned(),
            file.history().iter().cloned(),
            calendar.clone(),
        );

        let mut context = ValidationContext::new(today).editing(file.context().editing());

        // without a known employee every record in the file is offered
        match file.contract().and_then(|contract| contract.employee()) {
            Some(employee) => context.load_health_records(file.health_records(), employee)?,
            None => context = context.with_health_records(file.health_records().iter().cloned()),
        }

        if let (Request::Vacation(vacation), Some(contract)) = (file.request(), file.contract()) {
            if let Some(period) = vacation.period {
                match contracts.vacation_usage(contract.id(), period) {
                    Ok(entitlement) => context = context.with_entitlement(entitlement),
                    Err(error) => {
                        warn!("validating without the vacation usage: {}", error);
                        banners.push(error.banner());
                    }
                }
            }
        }

        Ok(Config {
            calendar,
            request: Some(file.request().clone()),
            context,
            contracts,
            banners,
        })
    }
}

impl Config {
    pub fn from_toml(
        holidays: Option<toml_input::Holidays>,
        request: Option<toml_input::RequestFile>,
    ) -> ConfigBuilder {
        ConfigBuilder::new(
            holidays.unwrap_or_else(toml_input::Holidays::statutory_only),
            request,
        )
    }

    pub fn try_from_toml_files(
        holidays: Option<impl AsRef<Path>>,
        request: Option<impl AsRef<Path>>,
    ) -> anyhow::Result<ConfigBuilder> {
        let holidays = holidays
            .map(|path| -> anyhow::Result<toml_input::Holidays> {
                let path = path.as_ref();
                utils::toml_from_reader(File::open(path)?)
                    .with_context(|| format!("failed to parse `{}`", path.display()))
            })
            .transpose()?;

        let request = request
            .map(|path| -> anyhow::Result<toml_input::RequestFile> {
                let path = path.as_ref();
                utils::toml_from_reader(File::open(path)?)
                    .with_context(|| format!("failed to parse `{}`", path.display()))
            })
            .transpose()?;

        Ok(Self::from_toml(holidays, request))
    }

    pub fn calendar(&self) -> &BusinessCalendar {
        &self.calendar
    }

    pub fn request(&self) -> Option<&Request> {
        self.request.as_ref()
    }

    pub fn context(&self) -> &ValidationContext {
        &self.context
    }

    pub fn contracts(&self) -> &LocalContracts {
        &self.contracts
    }

    /// Messages about data that could not be loaded.
    pub fn banners(&self) -> &[String] {
        &self.banners
    }

    pub fn validator(&self) -> RequestValidator<'_> {
        RequestValidator::new(&self.calendar)
    }

    /// Validates the request as if it was submitted.
    pub fn validate(&self) -> Option<RequestValidationResult> {
        let request = self.request()?;
        Some(self.validator().submit(request, &self.context))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    use crate::date;
    use crate::request::Field;
    use crate::rules::VacationEntitlement;

    fn request_file(source: &str) -> toml_input::RequestFile {
        toml::from_str(source).unwrap()
    }

    #[test]
    fn test_today_is_required() {
        assert!(Config::from_toml(None, None).build().is_err());

        let mut builder = Config::from_toml(None, None);
        builder.default_today(date!(2025:05:02));
        let config = builder.build().unwrap();

        assert!(config.request().is_none());
        assert!(config.calendar().holiday_on(date!(2025:05:01)).is_some());
    }

    #[test]
    fn test_today_precedence() {
        let file = || {
            request_file(
                r#"
                [request]
                type = "renuncia"

                [context]
                today = "2025-03-07"
                "#,
            )
        };

        let mut builder = Config::from_toml(None, Some(file()));
        builder.default_today(date!(2026:01:01));
        assert_eq!(builder.build().unwrap().context().today(), date!(2025:03:07));

        let mut builder = Config::from_toml(None, Some(file()));
        builder.today(date!(2025:04:01)).default_today(date!(2026:01:01));
        assert_eq!(builder.build().unwrap().context().today(), date!(2025:04:01));
    }

    #[test]
    fn test_vacation_usage_from_history() {
        let file = request_file(
            r#"
            [request]
            type = "vacacion"
            period = 2025
            start_date = "2025-06-02"
            end_date = "2025-06-06"

            [context]
            today = "2025-05-15"

            [contract]
            id = 1
            start_date = 2022-03-01

            [[history]]
            contract = 1
            period = 2025
            requested_days = 10
            status = "aprobada"
            "#,
        );

        let config = Config::from_toml(None, Some(file)).build().unwrap();
        assert_eq!(
            config.context().entitlement(),
            Some(VacationEntitlement::new(14, 10))
        );

        let result = config.validate().unwrap();
        assert!(!result.is_valid());
        assert_eq!(
            result.error(Field::EndDate),
            Some("Los días solicitados (5) superan los disponibles (4)")
        );
    }

    #[test]
    fn test_health_records_of_other_employees() {
        let file = request_file(
            r#"
            [request]
            type = "licencia"
            legal_reason = "enfermedad_inculpable"
            start_date = "2025-03-10"
            end_date = "2025-03-11"

            [context]
            today = "2025-03-07"

            [contract]
            id = 2
            employee = 5
            start_date = 2019-08-01

            [[health_record]]
            id = 1
            employee = 6
            kind = "enfermedad"
            date = "2025-03-09"
            "#,
        );

        let config = Config::from_toml(None, Some(file)).build().unwrap();

        // the only record belongs to another employee
        assert!(config.context().health_records().is_empty());
        let result = config.validate().unwrap();
        assert!(result.is_valid());
        assert_eq!(result.warnings().len(), 1);
        assert_eq!(config.banners(), &[] as &[String]);
    }
}
