use std::collections::BTreeMap;

use log::{debug, trace, warn};
use serde::Serialize;

use crate::calendar::{BusinessCalendar, BusinessDayViolation};
use crate::request::{
    Field, FieldError, FieldWarning, Request, ValidationContext, Verifier,
};
use crate::rules::{self, OvertimeClassification, RequestedSpan, ResignationNotice};
use crate::time::{Date, Year};

impl Verifier for Request {
    type Error = FieldError;
    type Errors = Vec<FieldError>;

    fn verify(
        &self,
        calendar: &BusinessCalendar,
        context: &ValidationContext,
    ) -> Result<(), Self::Errors> {
        match self {
            Self::Leave(fields) => fields.verify(calendar, context),
            Self::Vacation(fields) => fields.verify(calendar, context),
            Self::Overtime(fields) => fields.verify(calendar, context),
            Self::Resignation(fields) => fields.verify(calendar, context),
        }
    }

    fn warnings(
        &self,
        calendar: &BusinessCalendar,
        context: &ValidationContext,
    ) -> Vec<FieldWarning> {
        match self {
            Self::Leave(fields) => fields.warnings(calendar, context),
            Self::Vacation(fields) => fields.warnings(calendar, context),
            Self::Overtime(fields) => fields.warnings(calendar, context),
            Self::Resignation(fields) => fields.warnings(calendar, context),
        }
    }
}

/// Values that are computed from the fields and shown read-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Derived {
    Span(RequestedSpan),
    Overtime(OvertimeClassification),
    Notice(ResignationNotice),
}

impl Request {
    /// Pre-populates the read-only values, `None` while the fields they
    /// depend on are missing or invalid.
    #[must_use]
    pub fn derive(&self, calendar: &BusinessCalendar, context: &ValidationContext) -> Option<Derived> {
        match self {
            Self::Leave(fields) => {
                rules::resolve_requested_span(calendar, fields.start_date?, fields.end_date?)
                    .ok()
                    .map(Derived::Span)
            }
            Self::Vacation(fields) => {
                rules::resolve_requested_span(calendar, fields.start_date?, fields.end_date?)
                    .ok()
                    .map(Derived::Span)
            }
            Self::Overtime(fields) => {
                rules::classify(calendar, fields.date?, fields.start_time?, fields.end_time?)
                    .ok()
                    .map(Derived::Overtime)
            }
            Self::Resignation(fields) => {
                let notice = rules::compute_notice(fields.notification_date_or(context.today()));

                Some(Derived::Notice(match fields.notice_honored {
                    Some(honored) => notice.with_notice_honored(honored),
                    None => notice,
                }))
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RequestValidationResult {
    valid: bool,
    field_errors: BTreeMap<Field, String>,
    warnings: BTreeMap<Field, String>,
    /// Shown above the form when the holidays could not be loaded.
    #[serde(skip_serializing_if = "Option::is_none")]
    banner: Option<String>,
}

impl RequestValidationResult {
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.valid
    }

    #[must_use]
    pub fn field_errors(&self) -> &BTreeMap<Field, String> {
        &self.field_errors
    }

    #[must_use]
    pub fn error(&self, field: Field) -> Option<&str> {
        self.field_errors.get(&field).map(String::as_str)
    }

    #[must_use]
    pub fn warnings(&self) -> &BTreeMap<Field, String> {
        &self.warnings
    }

    #[must_use]
    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }
}

fn degraded_banner(years: &[Year]) -> String {
    let years = years
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "No se pudieron obtener los feriados de {years}. \
         Sólo se excluyen los fines de semana."
    )
}

/// Validates a request while it is being filled in.
///
/// Business day errors are found when a date field is edited and are
/// kept until that same field is checked again, a later validation of
/// the whole form reports them together with its own errors.
#[derive(Debug, Clone)]
pub struct RequestValidator<'a> {
    calendar: &'a BusinessCalendar,
    business_day_errors: BTreeMap<Field, BusinessDayViolation>,
}

impl<'a> RequestValidator<'a> {
    #[must_use]
    pub fn new(calendar: &'a BusinessCalendar) -> Self {
        Self {
            calendar,
            business_day_errors: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn calendar(&self) -> &'a BusinessCalendar {
        self.calendar
    }

    /// Checks a single date field after it has been edited.
    ///
    /// Fields that accept any day and cleared fields drop their previous
    /// error.
    pub fn check_business_day(
        &mut self,
        field: Field,
        date: Option<Date>,
    ) -> Result<(), BusinessDayViolation> {
        let result = match date {
            Some(date) if field.requires_business_day() => self
                .calendar
                .validate_is_business_day(date, &field.to_string()),
            _ => Ok(()),
        };

        match &result {
            Ok(()) => {
                self.business_day_errors.remove(&field);
            }
            Err(violation) => {
                trace!("{}: {}", field, violation);
                self.business_day_errors.insert(field, violation.clone());
            }
        }

        result
    }

    /// Checks every date field of the `request`.
    pub fn check_business_days(&mut self, request: &Request) {
        for (field, date) in request.date_fields() {
            // the error is kept in the validator
            let _ = self.check_business_day(field, date);
        }
    }

    pub fn business_day_errors(&self) -> impl Iterator<Item = (Field, &BusinessDayViolation)> + '_ {
        self.business_day_errors
            .iter()
            .map(|(field, violation)| (*field, violation))
    }

    /// Forgets every business day error, for example when the type of
    /// request changes.
    pub fn clear(&mut self) {
        self.business_day_errors.clear();
    }

    /// Validates the fields of `request` and merges the result with the
    /// business day errors found so far.
    ///
    /// Never fails, calling it again with the same arguments gives the
    /// same result.
    #[must_use]
    pub fn validate(&self, request: &Request, context: &ValidationContext) -> RequestValidationResult {
        let mut field_errors = BTreeMap::new();

        if let Err(errors) = request.verify(self.calendar, context) {
            for error in errors {
                // only the first error of a field is shown
                field_errors
                    .entry(error.field())
                    .or_insert_with(|| error.to_string());
            }
        }

        for (field, violation) in &self.business_day_errors {
            field_errors
                .entry(*field)
                .or_insert_with(|| violation.to_string());
        }

        let mut warnings = BTreeMap::new();
        for warning in request.warnings(self.calendar, context) {
            warnings
                .entry(warning.field())
                .or_insert_with(|| warning.to_string());
        }

        let degraded = self
            .calendar
            .unknown_years(request.years())
            .into_iter()
            .collect::<Vec<_>>();
        let banner = if degraded.is_empty() {
            None
        } else {
            warn!("validating without the holidays of {:?}", degraded);
            Some(degraded_banner(&degraded))
        };

        let result = RequestValidationResult {
            valid: field_errors.is_empty(),
            field_errors,
            warnings,
            banner,
        };
        debug!("{} request: {:?}", request.request_type(), result);

        result
    }

    /// Checks the date fields and validates the whole request, as done
    /// when the form is submitted.
    pub fn submit(&mut self, request: &Request, context: &ValidationContext) -> RequestValidationResult {
        self.check_business_days(request);
        self.validate(request, context)
    }
}
