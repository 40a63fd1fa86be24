//! Validation utilities.

use std::fmt::Write;

use revbot_config::{Config, DatabaseDriver};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Errors on environment variables:\n{}", errors)]
    EnvVarsError { errors: String },
}

fn validate_env_vars(config: &Config, driver_var: Option<&str>) -> Result<(), ValidationError> {
    #[inline]
    fn _missing(error: &mut String, name: &str) {
        error.push('\n');
        let _ = write!(error, "  - Missing env. var.: {}", name);
    }

    #[inline]
    fn _invalid(error: &mut String, name: &str, value: &str) {
        error.push('\n');
        let _ = write!(error, "  - Invalid env. var.: {} ({})", name, value);
    }

    let mut error = String::new();

    // Check server configuration
    if config.server.bind_ip.is_empty() {
        _missing(&mut error, "BOT_SERVER_BIND_IP");
    }
    if config.server.bind_port == 0 {
        _missing(&mut error, "BOT_SERVER_BIND_PORT");
    }

    // Driver parsing falls back to Postgres, so report typos here
    if let Some(value) = driver_var {
        if value.parse::<DatabaseDriver>().is_err() {
            _invalid(&mut error, "BOT_DATABASE_DRIVER", value);
        }
    }

    // Check PG configuration
    if config.database.driver == DatabaseDriver::Postgres && config.database.pg.url.is_empty() {
        _missing(&mut error, "BOT_DATABASE_PG_URL");
    }

    if config.reviewers_per_pull_request == 0 {
        _invalid(&mut error, "BOT_REVIEWERS_PER_PULL_REQUEST", "0");
    }

    if error.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::EnvVarsError { errors: error })
    }
}

/// Validate configuration.
pub fn validate_configuration(config: &Config) -> Result<(), ValidationError> {
    let driver_var = std::env::var("BOT_DATABASE_DRIVER").ok();
    validate_env_vars(config, driver_var.as_deref())
}
