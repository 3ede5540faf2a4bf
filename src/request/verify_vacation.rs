use log::{debug, warn};

use crate::calendar::BusinessCalendar;
use crate::request::verifier::Errors;
use crate::request::{
    Field, FieldError, FieldWarning, ValidationContext, VacationFields, Verifier,
};
use crate::rules::{self, VacationPeriodWindow};

impl Verifier for VacationFields {
    type Error = FieldError;
    type Errors = Vec<FieldError>;

    fn verify(
        &self,
        calendar: &BusinessCalendar,
        context: &ValidationContext,
    ) -> Result<(), Self::Errors> {
        let mut errors = Errors::default();

        let period = errors.require(Field::Period, self.period);
        let start = errors.require(Field::StartDate, self.start_date);
        let end = errors.require(Field::EndDate, self.end_date);

        if let Some(start) = start {
            if !context.is_editing() && start < context.today() {
                errors.push(FieldError::InPast {
                    field: Field::StartDate,
                });
            }
        }

        let ordered = errors.check_order(start, end);

        if let Some(window) = period.map(VacationPeriodWindow::new) {
            for (field, date) in [(Field::StartDate, start), (Field::EndDate, end)] {
                if date.map_or(false, |date| !window.contains(date)) {
                    errors.push(FieldError::OutsidePeriod {
                        field,
                        first: window.first_day(),
                        last: window.last_day(),
                    });
                }
            }
        }

        if let (true, Some(start), Some(end), Some(entitlement)) =
            (ordered, start, end, context.entitlement())
        {
            // the order was checked above, resolving can not fail
            if let Ok(span) = rules::resolve_requested_span(calendar, start, end) {
                debug!(
                    "requesting {} of {} available days",
                    span.requested_days(),
                    entitlement.days_available()
                );

                if !entitlement.covers(span.requested_days()) {
                    errors.push(FieldError::ExceedsAvailable {
                        field: Field::EndDate,
                        requested: span.requested_days(),
                        available: entitlement.days_available(),
                    });
                }
            }
        }

        errors.check_length(Field::Description, self.description.as_deref());

        errors.finish()
    }

    fn warnings(&self, calendar: &BusinessCalendar, context: &ValidationContext) -> Vec<FieldWarning> {
        if context.entitlement().is_some() {
            return Vec::new();
        }

        let (Some(start), Some(end)) = (self.start_date, self.end_date) else {
            return Vec::new();
        };

        match rules::resolve_requested_span(calendar, start, end) {
            Ok(span) => {
                warn!(
                    "the vacation balance is unknown, {} days were not checked",
                    span.requested_days()
                );

                vec![FieldWarning::UnknownBalance {
                    field: Field::EndDate,
                    requested: span.requested_days(),
                }]
            }
            Err(_) => Vec::new(),
        }
    }
}
