mod month;
pub use month::*;
mod date;
pub use date::*;
mod date_range;
pub use date_range::*;
mod week_day;
pub use week_day::*;
mod year;
pub use year::*;
mod time_stamp;
pub use time_stamp::*;
