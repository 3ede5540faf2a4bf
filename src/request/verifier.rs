use std::fmt;
use std::fmt::Debug;

use crate::calendar::BusinessCalendar;
use crate::request::{Field, FieldError, FieldWarning, ValidationContext, MAX_TEXT_LENGTH};
use crate::time::Date;
use crate::utils::StrExt;

/// Structural checks of one kind of request.
pub trait Verifier {
    type Error: fmt::Display + Debug + Sync + Send + 'static;
    type Errors: IntoIterator<Item = Self::Error>;

    fn verify(
        &self,
        calendar: &BusinessCalendar,
        context: &ValidationContext,
    ) -> Result<(), Self::Errors>;

    fn warnings(
        &self,
        _calendar: &BusinessCalendar,
        _context: &ValidationContext,
    ) -> Vec<FieldWarning> {
        Vec::new()
    }
}

/// Collects the errors of a single verification pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Errors(Vec<FieldError>);

impl Errors {
    pub fn push(&mut self, error: FieldError) {
        self.0.push(error);
    }

    /// Records a missing value and passes a present one through.
    pub fn require<T>(&mut self, field: Field, value: Option<T>) -> Option<T> {
        if value.is_none() {
            self.push(FieldError::Required { field });
        }

        value
    }

    pub fn check_length(&mut self, field: Field, text: Option<&str>) {
        if text.map_or(false, |text| text.char_len() > MAX_TEXT_LENGTH) {
            self.push(FieldError::TooLong {
                field,
                max: MAX_TEXT_LENGTH,
            });
        }
    }

    /// The end date must not be before the start date.
    pub fn check_order(&mut self, start: Option<Date>, end: Option<Date>) -> bool {
        match (start, end) {
            (Some(start), Some(end)) if end < start => {
                self.push(FieldError::Before {
                    field: Field::EndDate,
                    other: Field::StartDate,
                });
                false
            }
            (Some(_), Some(_)) => true,
            _ => false,
        }
    }

    pub fn finish(self) -> Result<(), Vec<FieldError>> {
        if !self.0.is_empty() {
            return Err(self.0);
        }

        Ok(())
    }
}
