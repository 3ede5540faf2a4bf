//! Which days count as working days.

mod business_calendar;
mod cache;
mod holiday;
mod statutory;

pub use business_calendar::*;
pub use cache::*;
pub use holiday::*;
pub use statutory::*;
