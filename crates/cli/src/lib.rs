//! `pizzeria` command line: environment configuration, stdin token source and
//! line-delimited JSON reporting.

pub mod config;
pub mod report;

pub use config::{Config, ConfigError};
pub use report::{run, write_result};
