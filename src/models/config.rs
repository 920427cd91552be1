//! Configuration model loaded from external sources.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Lead backend used when no `backend_url` is configured.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub templates_dir: String,
    /// Base URL of the lead backend, without the `/api/leads` suffix.
    pub backend_url: String,
}

impl ServerConfig {
    /// Loads defaults, then `config/default.yaml`, then `config/{app_env}.yaml`,
    /// then `APP_*` environment variables. Later sources win.
    pub fn load(app_env: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("address", "127.0.0.1")?
            .set_default("port", 8080)?
            .set_default("templates_dir", "templates/**/*")?
            .set_default("backend_url", DEFAULT_BACKEND_URL)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{app_env}")).required(false))
            .add_source(Environment::with_prefix("APP"))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_with_missing_profile() {
        let config = ServerConfig::load("no-such-profile").unwrap();

        assert!(config.port > 0);
        assert!(!config.backend_url.is_empty());
        assert!(!config.templates_dir.is_empty());
    }
}
