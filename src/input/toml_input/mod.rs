mod holidays;
mod request_file;

pub use holidays::*;
pub use request_file::*;
