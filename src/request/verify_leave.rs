use log::debug;

use crate::calendar::BusinessCalendar;
use crate::request::verifier::Errors;
use crate::request::{
    Field, FieldError, FieldWarning, LeaveFields, ValidationContext, Verifier,
};

impl Verifier for LeaveFields {
    type Error = FieldError;
    type Errors = Vec<FieldError>;

    fn verify(
        &self,
        _calendar: &BusinessCalendar,
        context: &ValidationContext,
    ) -> Result<(), Self::Errors> {
        let mut errors = Errors::default();

        let reason = errors.require(Field::LegalReason, self.legal_reason);
        let start = errors.require(Field::StartDate, self.start_date);
        let end = errors.require(Field::EndDate, self.end_date);
        errors.check_order(start, end);
        errors.check_length(Field::Description, self.description.as_deref());

        // without any record to choose from, only a warning is shown
        if let Some(reason) = reason.filter(|reason| reason.requires_health_record()) {
            if !context.health_records().is_empty() {
                match self.health_record {
                    None => errors.push(FieldError::MissingHealthRecord {
                        field: Field::HealthRecord,
                        reason,
                    }),
                    Some(id) if context.health_record(id).is_none() => {
                        errors.push(FieldError::UnknownHealthRecord {
                            field: Field::HealthRecord,
                            id,
                        });
                    }
                    Some(_) => {}
                }
            }
        }

        errors.finish()
    }

    fn warnings(
        &self,
        _calendar: &BusinessCalendar,
        context: &ValidationContext,
    ) -> Vec<FieldWarning> {
        let Some(reason) = self.legal_reason else {
            return Vec::new();
        };

        let mut warnings = Vec::new();

        if reason.requires_health_record() && context.health_records().is_empty() {
            warnings.push(FieldWarning::NoHealthRecords {
                field: Field::HealthRecord,
                reason,
            });
        }

        if let (Some(allowed), Some(start), Some(end)) =
            (reason.statutory_days(), self.start_date, self.end_date)
        {
            let requested = start.days_until(end) + 1;
            debug!("{} from {} to {}: {} of {} days", reason, start, end, requested, allowed);

            if requested > allowed as i64 {
                warnings.push(FieldWarning::ExceedsStatutoryDays {
                    field: Field::EndDate,
                    reason,
                    allowed,
                    requested: requested as usize,
                });
            }
        }

        warnings
    }
}
