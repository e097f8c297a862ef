//! Plan command implementation
//!
//! Normalises and consolidates every line of an order file.

use flight_schedule::planner::{LinePlan, LinePlanner};
use serde::Serialize;
use std::path::Path;
use tracing::{info, warn};

use crate::config::FlightConfig;
use crate::input::OrderInput;
use crate::{CliError, Result};

/// Planned order as written by `--format json`.
#[derive(Debug, Serialize)]
pub struct PlanReport<'a> {
    /// Number of lines planned.
    pub line_count: usize,
    /// Number of entries across all lines.
    pub entry_count: usize,
    /// Per-line plans, in file order.
    pub lines: &'a [LinePlan],
}

/// Run the plan command
pub fn run(input: &str, format: &str, config: &FlightConfig) -> Result<()> {
    info!("Starting planning...");
    info!("  Order: {}", input);
    info!("  Output format: {}", format);
    info!("  Adjacency: {:?}", config.consolidation.adjacency);

    let order = OrderInput::load(Path::new(input))?;
    let plans = plan_order(&order, config);

    let output = render(&plans, format)?;
    println!("{}", output);

    info!("Planning complete");
    Ok(())
}

/// Plan every line of an order
pub fn plan_order(order: &OrderInput, config: &FlightConfig) -> Vec<LinePlan> {
    let planner = LinePlanner::new(config.consolidation);
    let plans = planner.plan_all(&order.to_raw_lines());

    for (number, plan) in plans.iter().enumerate() {
        for warning in &plan.warnings {
            warn!(line = number + 1, "{}", warning);
        }
    }
    plans
}

/// Render plans in the requested format
pub fn render(plans: &[LinePlan], format: &str) -> Result<String> {
    match format {
        "json" => render_json(plans),
        "table" => Ok(render_table(plans)),
        other => Err(CliError::InvalidArgument(format!(
            "Unknown format: {}. Supported: json, table",
            other
        ))),
    }
}

/// Render plans as pretty-printed JSON
pub fn render_json(plans: &[LinePlan]) -> Result<String> {
    let report = PlanReport {
        line_count: plans.len(),
        entry_count: plans.iter().map(|p| p.entries.len()).sum(),
        lines: plans,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

/// Render plans as a text table, one row per entry
pub fn render_table(plans: &[LinePlan]) -> String {
    let mut out = String::new();
    out.push_str("┌──────┬───────┬─────────────┬────────────┬────────────┬─────┬─────┬───────┬──────────┬─────────────┐\n");
    out.push_str("│ Line │ Days  │ Time        │ Start      │ End        │ SPW │ Cap │ Total │ Rate     │ Length      │\n");
    out.push_str("├──────┼───────┼─────────────┼────────────┼────────────┼─────┼─────┼───────┼──────────┼─────────────┤\n");

    for (number, plan) in plans.iter().enumerate() {
        if plan.entries.is_empty() {
            out.push_str(&format!(
                "│ {:>4} │ {:<5} │ {:<11} │ {:<10} │ {:<10} │ {:>3} │ {:>3} │ {:>5} │ {:>8} │ {:<11} │\n",
                number + 1,
                plan.line.pattern.code(),
                plan.line.range.to_string(),
                "(none)",
                "",
                "",
                "",
                0,
                "",
                "",
            ));
        }
        for entry in &plan.entries {
            out.push_str(&format!(
                "│ {:>4} │ {:<5} │ {:<11} │ {:<10} │ {:<10} │ {:>3} │ {:>3} │ {:>5} │ {:>8.2} │ {:<11} │\n",
                number + 1,
                entry.pattern.code(),
                format!("{}-{}", entry.start_time, entry.end_time),
                entry.start_date.to_us_string(),
                entry.end_date.to_us_string(),
                entry.spots_per_week,
                entry.daily_cap,
                entry.total_spots,
                entry.rate,
                entry.duration_timecode(),
            ));
        }
    }

    out.push_str("└──────┴───────┴─────────────┴────────────┴────────────┴─────┴─────┴───────┴──────────┴─────────────┘\n");

    let warnings: Vec<String> = plans
        .iter()
        .enumerate()
        .flat_map(|(number, plan)| {
            plan.warnings
                .iter()
                .map(move |w| format!("  line {}: {}", number + 1, w))
        })
        .collect();
    if !warnings.is_empty() {
        out.push_str("Warnings:\n");
        for warning in warnings {
            out.push_str(&warning);
            out.push('\n');
        }
    }
    out
}
