//! Environment configuration tests
//!
//! These mutate process environment variables, so they run serially.

use metablog::shared::{AppConfig, ConfigError, Environment};
use serial_test::serial;

const KEYS: [&str; 7] = [
    "PORT",
    "DATABASE_URL",
    "ACCESS_TOKEN_SECRET",
    "TOKEN_TTL_DAYS",
    "APP_ENV",
    "NODE_ENV",
    "CORS_ORIGINS",
];

fn clear_env() {
    for key in KEYS {
        std::env::remove_var(key);
    }
}

fn set_env(key: &str, value: &str) {
    std::env::set_var(key, value);
}

#[test]
#[serial]
fn test_from_env_requires_secret() {
    clear_env();

    let result = AppConfig::from_env();

    assert_eq!(result.unwrap_err(), ConfigError::MissingValue("ACCESS_TOKEN_SECRET"));
}

#[test]
#[serial]
fn test_from_env_reads_variables() {
    clear_env();
    set_env("ACCESS_TOKEN_SECRET", "from-env");
    set_env("PORT", "7070");
    set_env("NODE_ENV", "production");

    let config = AppConfig::from_env().unwrap();

    assert_eq!(config.port, 7070);
    assert_eq!(config.token_secret, "from-env");
    assert_eq!(config.environment, Environment::Production);
    assert!(config.database_url.is_none());
    clear_env();
}
