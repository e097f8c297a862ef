//! Check command implementation
//!
//! Prints the effective configuration after file and environment overrides.

use tracing::info;

use crate::config::FlightConfig;
use crate::Result;

/// Run the check command
pub fn run(config: &FlightConfig, config_path: &str) -> Result<()> {
    info!("Checking configuration...");
    println!("{}", describe(config, config_path)?);
    info!("Configuration check complete");
    Ok(())
}

/// Describe the effective configuration
pub fn describe(config: &FlightConfig, config_path: &str) -> Result<String> {
    config.validate()?;
    let source = if std::path::Path::new(config_path).exists() {
        config_path.to_string()
    } else {
        format!("{} (not found, using defaults)", config_path)
    };
    Ok(format!(
        "# source: {}\n{}\nstatus: ok",
        source,
        config.to_toml()?.trim_end()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;
    use crate::CliError;

    #[test]
    fn test_describe_defaults() {
        let text = describe(&FlightConfig::default(), "/nonexistent/flight.toml").unwrap();
        assert!(text.contains("not found, using defaults"));
        assert!(text.contains("log_level = \"info\""));
        assert!(text.ends_with("status: ok"));
    }

    #[test]
    fn test_describe_invalid() {
        let config = FlightConfig {
            log_level: "chatty".to_string(),
            ..FlightConfig::default()
        };
        let err = describe(&config, "flight.toml").unwrap_err();
        assert!(matches!(err, CliError::Config(ConfigError::Validation(_))));
    }
}
