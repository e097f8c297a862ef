//! Days command implementation
//!
//! Shows how a weekday descriptor is resolved.

use flight_schedule::day_pattern::resolve_day_pattern;
use tracing::info;

use crate::Result;

/// Run the days command
pub fn run(text: &str) -> Result<()> {
    info!("Resolving day pattern '{}'", text);
    println!("{}", describe(text));
    Ok(())
}

/// Describe the resolved form of `text`
pub fn describe(text: &str) -> String {
    let resolved = resolve_day_pattern(text);
    format!(
        "input:       {}\npattern:     {}\nweekdays:    {}\nactive days: {}\nrecognized:  {}",
        text,
        resolved.pattern,
        resolved.weekdays(),
        resolved.active_days(),
        if resolved.recognized {
            "yes"
        } else {
            "no (defaulted to M-Su)"
        }
    )
}
