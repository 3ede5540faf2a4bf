//! Rules for leave, vacation, overtime and resignation requests under the
//! argentinian labor law.
//!
//! The [`calendar`] decides which days are business days, [`rules`] holds
//! the calculations and [`request`] validates a request while it is being
//! filled in.

mod utils;

pub mod calendar;
pub mod input;
pub mod provider;
pub mod request;
pub mod rules;
pub mod time;

use log::info;

use crate::calendar::BusinessCalendar;
use crate::request::{Derived, Request, RequestValidationResult, RequestValidator, ValidationContext};

/// Validates a request as it is submitted and computes its read-only values.
pub fn check_request(
    calendar: &BusinessCalendar,
    request: &Request,
    context: &ValidationContext,
) -> (RequestValidationResult, Option<Derived>) {
    let result = RequestValidator::new(calendar).submit(request, context);
    let derived = request.derive(calendar, context);

    info!(
        "{} request is {}",
        request.request_type(),
        if result.is_valid() { "valid" } else { "invalid" }
    );

    (result, derived)
}
