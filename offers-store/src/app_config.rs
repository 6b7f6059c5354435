use serde::Deserialize;
use std::collections::HashMap;
use std::env;

use offers_shared::AccountStatus;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub accounts: AccountsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct StoreConfig {
    /// Seed the in-memory store with the demo catalogue on startup
    #[serde(default)]
    pub seed_demo_offers: bool,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AccountsConfig {
    #[serde(default)]
    pub default_status: AccountStatus,
    /// Per-account status, keyed by account id
    #[serde(default)]
    pub overrides: HashMap<String, AccountStatus>,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            // environment file is optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // local overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(env_overrides())
            .build()?;

        s.try_deserialize()
    }
}

/// e.g. `OFFERS__SERVER__PORT=9090`
fn env_overrides() -> config::Environment {
    config::Environment::with_prefix("OFFERS").separator("__")
}
