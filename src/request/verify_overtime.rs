use crate::calendar::BusinessCalendar;
use crate::request::verifier::Errors;
use crate::request::{Field, FieldError, OvertimeFields, ValidationContext, Verifier};
use crate::rules::OvertimeTier;

impl Verifier for OvertimeFields {
    type Error = FieldError;
    type Errors = Vec<FieldError>;

    fn verify(
        &self,
        calendar: &BusinessCalendar,
        context: &ValidationContext,
    ) -> Result<(), Self::Errors> {
        let mut errors = Errors::default();

        let date = errors.require(Field::Date, self.date);
        let start = errors.require(Field::StartTime, self.start_time);
        let end = errors.require(Field::EndTime, self.end_time);

        if date.map_or(false, |date| date > context.today()) {
            errors.push(FieldError::InFuture { field: Field::Date });
        }

        if let (Some(start), Some(end)) = (start, end) {
            if end <= start {
                errors.push(FieldError::NotAfter {
                    field: Field::EndTime,
                    other: Field::StartTime,
                });
            }
        }

        // the tier is filled in from the date, a different one was edited by hand
        match (date, self.tier) {
            (Some(date), Some(tier)) => {
                let expected = OvertimeTier::for_business_day(calendar.is_business_day(date));
                if tier != expected {
                    errors.push(FieldError::TierMismatch {
                        field: Field::Tier,
                        expected,
                    });
                }
            }
            (None, None) => errors.push(FieldError::Required { field: Field::Tier }),
            _ => {}
        }

        errors.check_length(Field::Reason, self.reason.as_deref());

        errors.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    use crate::calendar::Holiday;
    use crate::{date, time_stamp};

    fn overtime() -> OvertimeFields {
        OvertimeFields {
            date: Some(date!(2025:06:07)),
            start_time: Some(time_stamp!(09:00)),
            end_time: Some(time_stamp!(11:30)),
            tier: None,
            reason: Some("Cierre de mes".to_string()),
        }
    }

    #[test]
    fn test_weekend_overtime_is_accepted() {
        let calendar = BusinessCalendar::without_holidays();
        let context = ValidationContext::new(date!(2025:06:09));

        // saturday, the date is not required to be a business day
        assert_eq!(overtime().verify(&calendar, &context), Ok(()));
    }

    #[test]
    fn test_date_in_future() {
        let calendar = BusinessCalendar::without_holidays();
        let context = ValidationContext::new(date!(2025:06:06));

        assert_eq!(
            overtime().verify(&calendar, &context),
            Err(vec![FieldError::InFuture { field: Field::Date }])
        );
    }

    #[test]
    fn test_end_not_after_start() {
        let calendar = BusinessCalendar::without_holidays();
        let context = ValidationContext::new(date!(2025:06:09));
        let fields = OvertimeFields {
            end_time: Some(time_stamp!(09:00)),
            ..overtime()
        };

        assert_eq!(
            fields.verify(&calendar, &context),
            Err(vec![FieldError::NotAfter {
                field: Field::EndTime,
                other: Field::StartTime,
            }])
        );
    }

    #[test]
    fn test_tier_follows_the_date() {
        let calendar = BusinessCalendar::from_iter([Holiday::fixed(date!(2025:06:20), "Día de la Bandera")]);
        let context = ValidationContext::new(date!(2025:06:30));

        let fields = OvertimeFields {
            date: Some(date!(2025:06:20)),
            tier: Some(OvertimeTier::Weekday50),
            ..overtime()
        };
        assert_eq!(
            fields.verify(&calendar, &context),
            Err(vec![FieldError::TierMismatch {
                field: Field::Tier,
                expected: OvertimeTier::WeekendHoliday100,
            }])
        );

        let fields = OvertimeFields {
            date: Some(date!(2025:06:19)),
            ..fields
        };
        assert_eq!(fields.verify(&calendar, &context), Ok(()));
    }

    #[test]
    fn test_missing_everything() {
        let calendar = BusinessCalendar::without_holidays();
        let context = ValidationContext::new(date!(2025:06:09));

        assert_eq!(
            OvertimeFields::default().verify(&calendar, &context),
            Err(vec![
                FieldError::Required { field: Field::Date },
                FieldError::Required {
                    field: Field::StartTime
                },
                FieldError::Required {
                    field: Field::EndTime
                },
                FieldError::Required { field: Field::Tier },
            ])
        );
    }
}
