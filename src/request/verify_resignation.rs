use crate::calendar::BusinessCalendar;
use crate::request::verifier::Errors;
use crate::request::{Field, FieldError, ResignationFields, ValidationContext, Verifier};

impl Verifier for ResignationFields {
    type Error = FieldError;
    type Errors = Vec<FieldError>;

    /// The notification date is never missing, it falls back to today.
    fn verify(
        &self,
        _calendar: &BusinessCalendar,
        _context: &ValidationContext,
    ) -> Result<(), Self::Errors> {
        let mut errors = Errors::default();

        errors.check_length(Field::Reason, self.reason.as_deref());

        errors.finish()
    }
}
