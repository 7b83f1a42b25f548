use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

// Default timeout functions
fn default_db_connect_timeout() -> u64 {
  5
}

fn default_db_acquire_timeout() -> u64 {
  3
}

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
  pub server: ServerConfig,
  pub database: DatabaseConfig,
  #[serde(default)]
  pub seed: SeedConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
  pub host: String,
  pub port: u16,
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
  /// sqlx connection string, e.g. `sqlite://szamlakezelo.db`
  pub url: String,
  pub max_connections: u32,
  #[serde(default = "default_db_connect_timeout")]
  pub connect_timeout_seconds: u64,
  #[serde(default = "default_db_acquire_timeout")]
  pub acquire_timeout_seconds: u64,
}

/// Demo data seeding
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedConfig {
  /// Fill empty tables with sample clients and invoices on startup
  #[serde(default)]
  pub demo_data: bool,
}

impl Config {
  /// Load configuration from files and environment variables
  ///
  /// Configuration is loaded in the following order (later sources override earlier ones):
  /// 1. config/default.toml
  /// 2. config/local.toml (if exists)
  /// 3. config/{RUN_MODE}.toml (if exists, RUN_MODE defaults to `development`)
  /// 4. Environment variables with SZAMLA_ prefix
  ///
  /// # Environment Variables
  ///
  /// Environment variables use the SZAMLA_ prefix and are separated by double underscores:
  /// - `SZAMLA_SERVER__HOST=0.0.0.0`
  /// - `SZAMLA_SERVER__PORT=8080`
  /// - `SZAMLA_DATABASE__URL=sqlite://szamlakezelo.db`
  /// - `SZAMLA_DATABASE__MAX_CONNECTIONS=10`
  /// - `SZAMLA_SEED__DEMO_DATA=false`
  pub fn load() -> Result<Self, ConfigError> {
    let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

    let config = ConfigBuilder::builder()
      .add_source(File::with_name("config/default").required(true))
      .add_source(File::with_name("config/local").required(false))
      .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
      .add_source(
        Environment::with_prefix("SZAMLA")
          .prefix_separator("_")
          .separator("__")
          .try_parsing(true),
      )
      .build()?;

    config.try_deserialize()
  }

  pub fn bind_address(&self) -> (String, u16) {
    (self.server.host.clone(), self.server.port)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_config_structure() {
    let toml = r#"
            [server]
            host = "127.0.0.1"
            port = 3000

            [database]
            url = "sqlite://szamlakezelo.db"
            max_connections = 5

            [seed]
            demo_data = true
        "#;

    let config: Config = toml::from_str(toml).expect("Failed to parse config");

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.database.url, "sqlite://szamlakezelo.db");
    assert_eq!(config.database.max_connections, 5);
    assert_eq!(config.database.connect_timeout_seconds, 5); // default
    assert_eq!(config.database.acquire_timeout_seconds, 3); // default
    assert!(config.seed.demo_data);
    assert_eq!(config.bind_address(), ("127.0.0.1".to_string(), 3000));
  }

  #[test]
  fn test_seed_section_is_optional() {
    let toml = r#"
            [server]
            host = "0.0.0.0"
            port = 8080

            [database]
            url = "sqlite::memory:"
            max_connections = 1
        "#;

    let config: Config = toml::from_str(toml).expect("Failed to parse config");
    assert!(!config.seed.demo_data);
  }
}
