//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod check;
pub mod days;
pub mod plan;
pub mod ros;
pub mod time;
