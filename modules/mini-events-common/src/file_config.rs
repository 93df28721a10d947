use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::types::Tag;

/// TOML-backed configuration loaded from disk. Every section is optional;
/// a missing file section falls back to its defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub server: ServerConfig,
    pub limits: Limits,
    pub seed: SeedConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub graphql_path: String,
    /// Empty means: localhost:3000 in development, any origin otherwise.
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            graphql_path: "/graphql".to_string(),
            allowed_origins: Vec::new(),
        }
    }
}

/// Maximum field lengths, counted in characters after trimming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Limits {
    pub max_event_title_length: usize,
    pub max_attendee_name_length: usize,
    pub max_attendee_email_length: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_event_title_length: 100,
            max_attendee_name_length: 100,
            max_attendee_email_length: 255,
        }
    }
}

impl Limits {
    pub fn validate(&self) -> Result<()> {
        check_range("max_event_title_length", self.max_event_title_length, 100)?;
        check_range("max_attendee_name_length", self.max_attendee_name_length, 100)?;
        check_range("max_attendee_email_length", self.max_attendee_email_length, 255)?;
        Ok(())
    }
}

fn check_range(name: &str, value: usize, max: usize) -> Result<()> {
    if value == 0 || value > max {
        bail!("limits.{name} must be between 1 and {max}, got {value}");
    }
    Ok(())
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SeedConfig {
    /// Load the built-in demo events when no explicit events are given.
    pub demo_data: bool,
    pub events: Vec<SeedEvent>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            demo_data: true,
            events: Vec::new(),
        }
    }
}

/// An event loaded at startup. Seeds bypass create-event validation.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeedEvent {
    pub id: String,
    pub title: String,
    pub date: String,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

impl FileConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.server.graphql_path.starts_with('/') {
            bail!(
                "server.graphql_path must start with '/', got {:?}",
                self.server.graphql_path
            );
        }
        self.limits.validate()
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: FileConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }
}

/// Load, parse and validate a TOML config file.
pub fn load_config(path: &Path) -> Result<FileConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    FileConfig::from_toml_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config = FileConfig::from_toml_str("").unwrap();
        assert_eq!(config.server.graphql_path, "/graphql");
        assert_eq!(config.limits, Limits::default());
        assert!(config.seed.demo_data);
        assert!(config.seed.events.is_empty());
    }

    #[test]
    fn parses_full_file() {
        let config = FileConfig::from_toml_str(
            r#"
            [server]
            graphql_path = "/api/graphql"
            allowed_origins = ["https://events.example.com"]

            [limits]
            max_event_title_length = 60

            [seed]
            demo_data = false

            [[seed.events]]
            id = "1"
            title = "Launch"
            date = "2999-01-01T10:00:00Z"
            tags = [{ id = "t1", name = "Public" }]
            "#,
        )
        .unwrap();
        assert_eq!(config.server.graphql_path, "/api/graphql");
        assert_eq!(config.limits.max_event_title_length, 60);
        assert_eq!(config.limits.max_attendee_email_length, 255);
        assert!(!config.seed.demo_data);
        assert_eq!(config.seed.events.len(), 1);
        assert_eq!(config.seed.events[0].tags[0].name, "Public");
    }

    #[test]
    fn rejects_out_of_range_limits() {
        assert!(FileConfig::from_toml_str("[limits]\nmax_event_title_length = 0").is_err());
        assert!(FileConfig::from_toml_str("[limits]\nmax_attendee_email_length = 256").is_err());
    }

    #[test]
    fn rejects_relative_graphql_path() {
        assert!(FileConfig::from_toml_str("[server]\ngraphql_path = \"graphql\"").is_err());
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(FileConfig::from_toml_str("[server]\nport = 1").is_err());
    }
}
