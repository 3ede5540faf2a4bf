//! Validation of the request form, one profile per kind of request.

mod context;
mod field;
mod fields;
mod legal_reason;
mod validator;
mod verifier;
mod verify_leave;
mod verify_overtime;
mod verify_resignation;
mod verify_vacation;

pub use context::*;
pub use field::*;
pub use fields::*;
pub use legal_reason::*;
pub use validator::*;
pub use verifier::Verifier;
