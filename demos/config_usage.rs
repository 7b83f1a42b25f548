//! Prints the configuration the server would start with
//!
//! Run with: cargo run --example config_usage
//!
//! To override configuration with environment variables:
//! ```bash
//! SZAMLA_SERVER__PORT=8080 \
//! SZAMLA_SEED__DEMO_DATA=false \
//! cargo run --example config_usage
//! ```

use szamlakezelo::infrastructure::config::Config;

fn main() {
  match Config::load() {
    Ok(config) => {
      println!("Configuration loaded successfully!");
      println!();
      println!("Server:");
      println!("  Host: {}", config.server.host);
      println!("  Port: {}", config.server.port);
      println!();
      println!("Database:");
      println!("  URL: {}", config.database.url);
      println!("  Max Connections: {}", config.database.max_connections);
      println!(
        "  Connect / Acquire Timeout: {}s / {}s",
        config.database.connect_timeout_seconds, config.database.acquire_timeout_seconds
      );
      println!();
      println!("Seed:");
      println!("  Demo Data: {}", config.seed.demo_data);
    }
    Err(e) => {
      eprintln!("Failed to load configuration: {}", e);
      std::process::exit(1);
    }
  }
}
