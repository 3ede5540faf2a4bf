//! Reading holidays and requests from TOML files.

mod config;

pub mod toml_input;

pub use config::*;
