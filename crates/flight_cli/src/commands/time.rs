//! Time command implementation
//!
//! Shows how an air-time string is normalised.

use flight_schedule::time_range::{parse_time_range, ParseConfidence};
use tracing::info;

use crate::Result;

/// Run the time command
pub fn run(text: &str) -> Result<()> {
    info!("Parsing time range '{}'", text);
    println!("{}", describe(text));
    Ok(())
}

/// Describe the parsed form of `text`
pub fn describe(text: &str) -> String {
    let parsed = parse_time_range(text);
    let confidence = match parsed.confidence {
        ParseConfidence::Parsed => "parsed",
        ParseConfidence::Fallback => "fallback (confirm with the order)",
    };
    format!(
        "input:      {}\nrange:      {}\nmeridiem:   {}\nconfidence: {}",
        text,
        parsed.range,
        parsed.range.to_meridiem_string(),
        confidence
    )
}
