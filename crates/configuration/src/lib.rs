use crate::error::ConfigError;
use std::collections::HashSet;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{Config, Server, Store};

/// Loads the application configuration from the `config.toml` file.
///
/// This function is the primary entry point for this crate. It reads the
/// configuration file, deserializes it into our strongly-typed `Config`
/// struct, validates the fund registry, and returns it.
pub fn load_config() -> Result<Config, ConfigError> {
    let builder = config::Config::builder()
        // Tells the builder to look for a file named `config.toml`
        .add_source(config::File::with_name("config.toml"))
        // Environment variables override the file (e.g. APP_SERVER__BIND_ADDR).
        .add_source(config::Environment::with_prefix("APP").separator("__"))
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.try_deserialize::<Config>()?;
    validate(&config)?;

    Ok(config)
}

/// Checks the fund registry: CIKs must be numeric and unique.
///
/// A bad registry entry would otherwise only surface as a 404 at request
/// time; failing at startup is the kinder failure mode.
fn validate(config: &Config) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();
    for fund in &config.funds {
        if fund.cik.is_empty() || !fund.cik.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ConfigError::ValidationError(format!(
                "fund '{}' has a non-numeric CIK '{}'",
                fund.name, fund.cik
            )));
        }
        if !seen.insert(fund.cik.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "CIK '{}' is registered more than once",
                fund.cik
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    const SAMPLE: &str = r#"
        [server]
        bind_addr = "127.0.0.1:3000"

        [store]
        data_dir = "data"

        [[funds]]
        name = "Berkshire Hathaway"
        cik = "1067983"

        [[funds]]
        name = "Bridgewater Associates"
        cik = "1350694"
    "#;

    fn parse(toml: &str) -> Config {
        config::Config::builder()
            .add_source(config::File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn sample_config_parses_and_validates() {
        let config = parse(SAMPLE);
        assert_eq!(config.server.bind_addr.port(), 3000);
        assert_eq!(config.funds.len(), 2);
        assert_eq!(config.funds[0].cik, "1067983");
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn non_numeric_cik_fails_validation() {
        let mut config = parse(SAMPLE);
        config.funds[1].cik = "CIK-1350694".to_string();
        assert!(matches!(
            validate(&config),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn duplicate_cik_fails_validation() {
        let mut config = parse(SAMPLE);
        config.funds[1].cik = config.funds[0].cik.clone();
        assert!(matches!(
            validate(&config),
            Err(ConfigError::ValidationError(_))
        ));
    }
}
