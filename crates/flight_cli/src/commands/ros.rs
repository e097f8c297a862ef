//! ROS command implementation
//!
//! Prints run-of-schedule blocks.

use flight_schedule::ros::{ros_block, Language};
use tracing::info;

use crate::{CliError, Result};

/// Run the ros command
pub fn run(language: &str) -> Result<()> {
    info!("Looking up ROS block for '{}'", language);
    println!("{}", describe(language)?);
    Ok(())
}

/// Describe the block for `language`, or every block for `all`
pub fn describe(language: &str) -> Result<String> {
    if language.eq_ignore_ascii_case("all") {
        let rows: Vec<String> = Language::ALL.iter().map(|l| row(*l)).collect();
        return Ok(rows.join("\n"));
    }

    let language: Language = language
        .parse()
        .map_err(|e| CliError::InvalidArgument(format!("{}", e)))?;
    Ok(row(language))
}

fn row(language: Language) -> String {
    let block = ros_block(language);
    format!(
        "{:<12} {:<6} {:<10} ({})",
        language.name(),
        block.pattern().code(),
        block.time,
        block.range()
    )
}
