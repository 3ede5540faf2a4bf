//! The calculations behind a request: vacation days, requested spans,
//! overtime tiers and resignation notice.

mod entitlement;
mod notice;
mod overtime;
mod seniority;
mod span;

pub use entitlement::*;
pub use notice::*;
pub use overtime::*;
pub use seniority::*;
pub use span::*;
