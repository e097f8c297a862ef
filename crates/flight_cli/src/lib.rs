//! # flight_cli: Command-Line Driver
//!
//! Operational entry point for the flight schedule engine. The `flight`
//! binary reads JSON insertion orders, runs every line through
//! [`flight_schedule::planner::LinePlanner`] and prints the entries a
//! traffic system would book.
//!
//! # Commands
//!
//! - `flight plan --input <file>` - Plan every line of an order
//! - `flight time <TEXT>` - Show how an air-time string is normalised
//! - `flight days <TEXT>` - Show how a weekday descriptor is resolved
//! - `flight ros <LANGUAGE>` - Print a run-of-schedule block
//! - `flight check` - Print the effective configuration

pub mod commands;
pub mod config;
pub mod error;
pub mod input;

pub use error::{CliError, Result};
