//! Application configuration module
//!
//! `AppConfig` is loaded once at startup from environment variables (after
//! `.env` has been applied) and handed to the server initialization code.
//! Tests build it directly through [`AppConfig::builder`].

use thiserror::Error;

/// Default listen port
pub const DEFAULT_PORT: u16 = 5000;

/// Default identity token validity, in days
pub const DEFAULT_TOKEN_TTL_DAYS: i64 = 365;

/// Deployment environment, which decides the cookie policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    /// Parse an `APP_ENV`/`NODE_ENV` value; anything but `production` is development
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("production") {
            Self::Production
        } else {
            Self::Development
        }
    }

    pub fn is_production(self) -> bool {
        self == Self::Production
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Port the HTTP server listens on
    pub port: u16,
    /// PostgreSQL connection URL; `None` selects the in-memory store
    pub database_url: Option<String>,
    /// HMAC secret used to sign identity tokens
    pub token_secret: String,
    /// Identity token validity, in days
    pub token_ttl_days: i64,
    /// Deployment environment
    pub environment: Environment,
    /// Origins allowed to make credentialed cross-origin requests
    pub cors_origins: Vec<String>,
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Load the configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load the configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Self::builder();

        if let Some(port) = lookup("PORT") {
            let port = port
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidValue { key: "PORT", value: port })?;
            builder = builder.port(port);
        }

        if let Some(url) = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty()) {
            builder = builder.database_url(url);
        }

        if let Some(secret) = lookup("ACCESS_TOKEN_SECRET") {
            builder = builder.token_secret(secret);
        }

        if let Some(days) = lookup("TOKEN_TTL_DAYS") {
            let days = days
                .trim()
                .parse::<i64>()
                .ok()
                .filter(|days| *days > 0)
                .ok_or(ConfigError::InvalidValue { key: "TOKEN_TTL_DAYS", value: days })?;
            builder = builder.token_ttl_days(days);
        }

        if let Some(env) = lookup("APP_ENV").or_else(|| lookup("NODE_ENV")) {
            builder = builder.environment(Environment::parse(&env));
        }

        if let Some(origins) = lookup("CORS_ORIGINS") {
            let origins = origins
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(String::from)
                .collect();
            builder = builder.cors_origins(origins);
        }

        builder.build()
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    port: Option<u16>,
    database_url: Option<String>,
    token_secret: Option<String>,
    token_ttl_days: Option<i64>,
    environment: Environment,
    cors_origins: Vec<String>,
}

impl AppConfigBuilder {
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    pub fn token_secret(mut self, secret: impl Into<String>) -> Self {
        self.token_secret = Some(secret.into());
        self
    }

    pub fn token_ttl_days(mut self, days: i64) -> Self {
        self.token_ttl_days = Some(days);
        self
    }

    pub fn environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    pub fn cors_origins(mut self, origins: Vec<String>) -> Self {
        self.cors_origins = origins;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let token_secret = self
            .token_secret
            .filter(|secret| !secret.trim().is_empty())
            .ok_or(ConfigError::MissingValue("ACCESS_TOKEN_SECRET"))?;

        Ok(AppConfig {
            port: self.port.unwrap_or(DEFAULT_PORT),
            database_url: self.database_url,
            token_secret,
            token_ttl_days: self.token_ttl_days.unwrap_or(DEFAULT_TOKEN_TTL_DAYS),
            environment: self.environment,
            cors_origins: self.cors_origins,
        })
    }
}

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
    #[error("missing value: {0}")]
    MissingValue(&'static str),
}
