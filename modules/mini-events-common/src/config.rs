use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, Context, Result};

/// Deployment environment. Controls introspection, GraphiQL, CORS defaults,
/// log format and whether uncoded errors are masked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Production,
    Test,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Test => "test",
        }
    }

    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl FromStr for Environment {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            "test" => Ok(Self::Test),
            other => Err(anyhow!(
                "unknown environment {other:?} (expected development, production or test)"
            )),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Application configuration loaded from environment variables.
/// Only env-specific values live here; field limits, the endpoint path and
/// seed data come from the TOML `FileConfig`.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: Environment,

    // Server
    pub host: String,
    pub port: u16,

    // Identity
    pub app_name: String,
    pub app_version: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            host: "0.0.0.0".to_string(),
            port: 4000,
            app_name: "Mini Event Manager".to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. `from_env` passes `std::env::var`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let environment = match lookup("APP_ENV").or_else(|| lookup("NODE_ENV")) {
            Some(raw) => raw.parse().context("APP_ENV")?,
            None => defaults.environment,
        };

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("PORT must be a number, got {raw:?}"))?,
            None => defaults.port,
        };

        Ok(Self {
            environment,
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            app_name: lookup("APP_NAME").unwrap_or(defaults.app_name),
            app_version: lookup("APP_VERSION").unwrap_or(defaults.app_version),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn log_summary(&self) {
        tracing::info!("Config loaded:");
        tracing::info!("  APP_ENV: {}", self.environment);
        tracing::info!("  HOST: {}", self.host);
        tracing::info!("  PORT: {}", self.port);
        tracing::info!("  APP: {} {}", self.app_name, self.app_version);
    }
}
