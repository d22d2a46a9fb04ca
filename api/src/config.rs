//! Configuration loading for the API binary
//!
//! Sources, lowest precedence first:
//! 1. Built-in defaults (`AppConfig::default()`)
//! 2. `config/default.toml` and `config/<environment>.toml`, both optional
//! 3. `HS__`-prefixed environment variables, `__` between nesting levels
//!    (`HS__SERVER__PORT=9000`, `HS__JWT__SECRET=...`)

use config::{Config, ConfigError, Environment as EnvSource, File};
use hs_shared::config::{AppConfig, CorsConfig, Environment, LoggingConfig};

/// Prefix of environment variables read into the configuration
pub const ENV_PREFIX: &str = "HS";

/// Load configuration for the environment named by `ENVIRONMENT`
pub fn load() -> Result<AppConfig, ConfigError> {
    load_for(Environment::from_env())
}

/// Load configuration for an explicit environment
pub fn load_for(environment: Environment) -> Result<AppConfig, ConfigError> {
    let defaults = AppConfig {
        environment,
        logging: LoggingConfig::for_environment(environment),
        cors: if environment.is_development() {
            CorsConfig::development()
        } else {
            CorsConfig::default()
        },
        ..AppConfig::default()
    };

    let config = Config::builder()
        .add_source(Config::try_from(&defaults)?)
        .add_source(File::with_name("config/default").required(false))
        .add_source(
            File::with_name(&format!("config/{}", environment.config_file())).required(false),
        )
        .add_source(
            EnvSource::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    config.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_sources() {
        let config = load_for(Environment::Production).unwrap();

        assert!(config.environment.is_production());
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.jwt.issuer, "homestay");
        assert_eq!(config.notification.queue_capacity, 256);
        assert!(!config.cors.allows_any_origin());
        assert_eq!(config.booking.max_nights, 365);
    }

    #[test]
    fn test_development_allows_any_origin() {
        let config = load_for(Environment::Development).unwrap();

        assert!(config.cors.allows_any_origin());
        assert_eq!(config.logging.level, "debug");
    }
}
